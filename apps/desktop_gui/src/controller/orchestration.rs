//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

/// Queues `cmd` for the backend worker. On failure `status` describes why and
/// `false` is returned so the caller can unwind whatever it started.
pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut String,
) -> bool {
    let cmd_name = cmd.name();

    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            true
        }
        Err(TrySendError::Full(_)) => {
            tracing::warn!(command = cmd_name, "ui->backend command queue full");
            *status = "UI command queue is full; please retry".to_string();
            false
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::error!(command = cmd_name, "backend command processor disconnected");
            *status =
                "Backend command processor disconnected (possible startup failure); restart the panel"
                    .to_string();
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use client_core::{Configuration, SubmissionController};
    use crossbeam_channel::bounded;
    use shared::domain::Platform;

    use super::*;

    fn submit_command(controller: &mut SubmissionController) -> BackendCommand {
        let ticket = controller
            .begin(&Configuration {
                endpoint: "https://hooks.example.com/ads".to_string(),
                platform: Platform::Facebook,
                account_id: "act_1".to_string(),
                start_date: NaiveDate::from_ymd_opt(2024, 3, 1),
                end_date: NaiveDate::from_ymd_opt(2024, 3, 2),
            })
            .expect("ticket");
        BackendCommand::Submit(ticket)
    }

    #[test]
    fn queued_command_reaches_worker() {
        let (tx, rx) = bounded(1);
        let mut status = String::new();
        let mut controller = SubmissionController::new();

        assert!(dispatch_backend_command(
            &tx,
            submit_command(&mut controller),
            &mut status
        ));
        assert!(matches!(rx.try_recv(), Ok(BackendCommand::Submit(t)) if t.generation == 1));
        assert!(status.is_empty());
    }

    #[test]
    fn full_queue_reports_retry_status() {
        let (tx, _rx) = bounded(1);
        let mut status = String::new();
        let mut controller = SubmissionController::new();

        assert!(dispatch_backend_command(&tx, submit_command(&mut controller), &mut status));
        assert!(!dispatch_backend_command(&tx, submit_command(&mut controller), &mut status));
        assert_eq!(status, "UI command queue is full; please retry");
    }

    #[test]
    fn disconnected_worker_reports_status() {
        let (tx, rx) = bounded(1);
        drop(rx);
        let mut status = String::new();
        let mut controller = SubmissionController::new();

        assert!(!dispatch_backend_command(&tx, submit_command(&mut controller), &mut status));
        assert!(status.contains("disconnected"));
    }
}
