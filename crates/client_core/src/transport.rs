use async_trait::async_trait;
use reqwest::Client;
use shared::{
    error::fault_body_message,
    protocol::{OptimizeRequest, ReportResponse},
};
use tracing::{debug, warn};
use url::Url;

use crate::error::SubmissionError;

/// Performs the single outbound call of a submission.
#[async_trait]
pub trait ReportTransport: Send + Sync {
    async fn submit(
        &self,
        endpoint: &str,
        payload: &OptimizeRequest,
    ) -> Result<ReportResponse, SubmissionError>;
}

/// JSON-over-HTTP transport. No timeout and no retry are applied.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    http: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(http: Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ReportTransport for HttpTransport {
    async fn submit(
        &self,
        endpoint: &str,
        payload: &OptimizeRequest,
    ) -> Result<ReportResponse, SubmissionError> {
        let url = parse_endpoint(endpoint)?;
        debug!(
            endpoint = %url,
            platform = payload.platform().as_str(),
            "transport: posting optimization request"
        );

        let response = self
            .http
            .post(url)
            .json(payload)
            .send()
            .await
            .map_err(|err| SubmissionError::transport(err.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|err| SubmissionError::transport(err.to_string()))?;

        if !status.is_success() {
            warn!(
                status = status.as_u16(),
                body_len = body.len(),
                "transport: endpoint returned error status"
            );
            return Err(SubmissionError::Status {
                status: status.as_u16(),
                body_message: fault_body_message(&body),
            });
        }

        decode_report(&body)
    }
}

/// Rejects anything that is not an absolute `http`/`https` URL before a
/// request is attempted.
pub fn parse_endpoint(endpoint: &str) -> Result<Url, SubmissionError> {
    let url = Url::parse(endpoint.trim()).map_err(|err| SubmissionError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        reason: err.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(SubmissionError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            reason: format!("unsupported scheme '{other}'"),
        }),
    }
}

pub fn decode_report(body: &[u8]) -> Result<ReportResponse, SubmissionError> {
    serde_json::from_slice(body).map_err(|err| SubmissionError::Decode {
        description: err.to_string(),
        body_message: fault_body_message(body),
    })
}
