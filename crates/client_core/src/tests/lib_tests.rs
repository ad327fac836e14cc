use super::*;
use std::{sync::Arc, time::Duration};

use anyhow::Result;
use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use chrono::NaiveDate;
use serde_json::{json, Value};
use shared::{domain::Platform, error::FALLBACK_FAULT_MESSAGE, protocol::OptimizeRequest};
use tokio::{
    net::TcpListener,
    sync::{mpsc, oneshot, Mutex},
};

#[derive(Clone)]
struct CaptureState {
    tx: Arc<Mutex<Option<oneshot::Sender<Value>>>>,
}

async fn capture_and_reply(
    State(state): State<CaptureState>,
    Json(payload): Json<Value>,
) -> Json<Value> {
    if let Some(tx) = state.tx.lock().await.take() {
        let _ = tx.send(payload);
    }
    Json(json!({
        "success": true,
        "recommendation": "Pause the generic banner",
        "workflow": { "execution": 991, "nodes": ["fetch", "analyze"] }
    }))
}

async fn rate_limited() -> (StatusCode, Json<Value>) {
    (
        StatusCode::TOO_MANY_REQUESTS,
        Json(json!({ "message": "rate limited" })),
    )
}

async fn bad_gateway() -> StatusCode {
    StatusCode::BAD_GATEWAY
}

async fn html_ok() -> &'static str {
    "<html><body>Workflow was started</body></html>"
}

async fn slow_report() -> Json<Value> {
    tokio::time::sleep(Duration::from_millis(300)).await;
    Json(json!({ "success": true, "recommendation": "from a" }))
}

async fn fast_report() -> Json<Value> {
    Json(json!({ "success": true, "recommendation": "from b" }))
}

async fn spawn_server(app: Router) -> Result<String> {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok(format!("http://{addr}"))
}

fn request() -> OptimizeRequest {
    OptimizeRequest::new(
        Platform::Facebook,
        "act_123456789",
        NaiveDate::from_ymd_opt(2024, 5, 1).expect("date"),
        NaiveDate::from_ymd_opt(2024, 5, 31).expect("date"),
    )
}

fn configuration(endpoint: String) -> Configuration {
    Configuration {
        endpoint,
        platform: Platform::Facebook,
        account_id: "act_123456789".to_string(),
        start_date: NaiveDate::from_ymd_opt(2024, 5, 1),
        end_date: NaiveDate::from_ymd_opt(2024, 5, 31),
    }
}

#[tokio::test]
async fn posts_flat_json_payload_and_ignores_unknown_response_fields() {
    let (tx, rx) = oneshot::channel();
    let app = Router::new()
        .route("/webhook/ad-optimizer", post(capture_and_reply))
        .with_state(CaptureState {
            tx: Arc::new(Mutex::new(Some(tx))),
        });
    let base = spawn_server(app).await.expect("spawn server");

    let report = HttpTransport::new()
        .submit(&format!("{base}/webhook/ad-optimizer"), &request())
        .await
        .expect("report");

    let received = rx.await.expect("payload captured");
    assert_eq!(
        received,
        json!({
            "platform": "facebook",
            "accountId": "act_123456789",
            "startDate": "2024-05-01",
            "endDate": "2024-05-31",
        })
    );
    assert!(report.success);
    assert_eq!(
        report.recommendation.as_deref(),
        Some("Pause the generic banner")
    );
}

#[tokio::test]
async fn error_status_surfaces_body_message() {
    let base = spawn_server(Router::new().route("/hook", post(rate_limited)))
        .await
        .expect("spawn server");

    let err = HttpTransport::new()
        .submit(&format!("{base}/hook"), &request())
        .await
        .expect_err("must fail");

    assert_eq!(
        err,
        SubmissionError::Status {
            status: 429,
            body_message: Some("rate limited".to_string()),
        }
    );
    assert_eq!(err.user_message(), "rate limited");
}

#[tokio::test]
async fn error_status_without_body_uses_fallback_message() {
    let base = spawn_server(Router::new().route("/hook", post(bad_gateway)))
        .await
        .expect("spawn server");

    let err = HttpTransport::new()
        .submit(&format!("{base}/hook"), &request())
        .await
        .expect_err("must fail");

    assert_eq!(
        err,
        SubmissionError::Status {
            status: 502,
            body_message: None,
        }
    );
    assert_eq!(err.user_message(), FALLBACK_FAULT_MESSAGE);
}

#[tokio::test]
async fn non_json_success_body_is_a_decode_fault() {
    let base = spawn_server(Router::new().route("/hook", post(html_ok)))
        .await
        .expect("spawn server");

    let err = HttpTransport::new()
        .submit(&format!("{base}/hook"), &request())
        .await
        .expect_err("must fail");

    assert!(matches!(err, SubmissionError::Decode { .. }));
    assert!(err.user_message().starts_with("invalid report payload"));
}

#[tokio::test]
async fn unreachable_endpoint_reports_transport_description() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");

    let err = HttpTransport::new()
        .submit(&format!("http://{addr}/hook"), &request())
        .await
        .expect_err("must fail");

    assert!(matches!(err, SubmissionError::Transport { .. }));
    let message = err.user_message();
    assert!(!message.is_empty());
    assert_ne!(message, FALLBACK_FAULT_MESSAGE);
}

#[tokio::test]
async fn malformed_endpoint_is_refused_before_any_request() {
    let transport = HttpTransport::new();

    for endpoint in [
        "   ",
        "not a url",
        "/webhook/relative",
        "ftp://files.example.com/hook",
    ] {
        let err = transport
            .submit(endpoint, &request())
            .await
            .expect_err("must refuse");
        assert!(
            matches!(err, SubmissionError::InvalidEndpoint { .. }),
            "unexpected error for {endpoint}: {err:?}"
        );
    }
}

#[tokio::test]
async fn later_submission_wins_when_earlier_response_arrives_last() {
    let app = Router::new()
        .route("/slow", post(slow_report))
        .route("/fast", post(fast_report));
    let base = spawn_server(app).await.expect("spawn server");

    let transport = Arc::new(HttpTransport::new());
    let mut controller = SubmissionController::new();
    let a = controller
        .begin(&configuration(format!("{base}/slow")))
        .expect("ticket a");
    let b = controller
        .begin(&configuration(format!("{base}/fast")))
        .expect("ticket b");

    let (tx, mut rx) = mpsc::channel(2);
    for ticket in [a.clone(), b.clone()] {
        let transport = Arc::clone(&transport);
        let tx = tx.clone();
        tokio::spawn(async move {
            let outcome = transport.submit(&ticket.endpoint, &ticket.payload).await;
            let _ = tx.send((ticket.generation, outcome)).await;
        });
    }
    drop(tx);

    let mut resolutions = Vec::new();
    while let Some((generation, outcome)) = rx.recv().await {
        resolutions.push((generation, controller.resolve(generation, outcome)));
    }

    assert_eq!(
        resolutions,
        vec![
            (b.generation, Resolution::Applied),
            (a.generation, Resolution::Stale),
        ]
    );
    assert_eq!(
        controller.report().and_then(|r| r.recommendation.as_deref()),
        Some("from b")
    );
}
