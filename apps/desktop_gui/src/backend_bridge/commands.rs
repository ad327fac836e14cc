//! Backend commands queued from UI to backend worker.

use client_core::SubmissionTicket;

#[derive(Debug, Clone)]
pub enum BackendCommand {
    /// Post the ticket's payload to its endpoint and report the outcome.
    Submit(SubmissionTicket),
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::Submit(_) => "submit",
        }
    }
}
