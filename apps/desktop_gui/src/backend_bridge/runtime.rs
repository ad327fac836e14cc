//! Runtime bridge between UI command queue and backend event intake.

use std::{sync::Arc, thread};

use client_core::{HttpTransport, ReportTransport, SubmissionTicket};
use crossbeam_channel::{Receiver, Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

pub fn launch(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) -> thread::JoinHandle<()> {
    launch_with_transport(cmd_rx, ui_tx, Arc::new(HttpTransport::new()))
}

pub fn launch_with_transport(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    transport: Arc<dyn ReportTransport>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: failed to build runtime: {err}"),
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };
        tracing::info!("backend worker ready");
        let _ = ui_tx.try_send(UiEvent::Info("Backend worker ready".to_string()));

        while let Ok(cmd) = cmd_rx.recv() {
            match cmd {
                BackendCommand::Submit(ticket) => {
                    let transport = Arc::clone(&transport);
                    let ui_tx = ui_tx.clone();
                    runtime.spawn(async move {
                        let event = resolve_ticket(transport.as_ref(), ticket).await;
                        post_to_ui(&ui_tx, event);
                    });
                }
            }
        }

        tracing::info!("backend command channel closed; worker exiting");
    })
}

/// Runs one submission to completion and wraps its outcome for the UI thread.
pub async fn resolve_ticket(transport: &dyn ReportTransport, ticket: SubmissionTicket) -> UiEvent {
    let outcome = transport.submit(&ticket.endpoint, &ticket.payload).await;
    UiEvent::SubmissionResolved {
        generation: ticket.generation,
        outcome,
    }
}

/// Non-blocking hand-off to the UI queue. Returns whether the event was queued.
pub fn post_to_ui(ui_tx: &Sender<UiEvent>, event: UiEvent) -> bool {
    match ui_tx.try_send(event) {
        Ok(()) => true,
        Err(TrySendError::Full(UiEvent::SubmissionResolved { generation, .. })) => {
            tracing::warn!(generation, "ui event queue full; submission outcome dropped");
            false
        }
        Err(TrySendError::Full(_)) => {
            tracing::warn!("ui event queue full; event dropped");
            false
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::warn!("ui event channel closed; event dropped");
            false
        }
    }
}
