use shared::error::select_fault_message;
use thiserror::Error;

/// Fault raised by a single submission attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("invalid endpoint URL '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
    #[error("{description}")]
    Transport { description: String },
    #[error("endpoint responded with HTTP {status}")]
    Status {
        status: u16,
        body_message: Option<String>,
    },
    #[error("invalid report payload: {description}")]
    Decode {
        description: String,
        body_message: Option<String>,
    },
}

impl SubmissionError {
    pub fn transport(description: impl Into<String>) -> Self {
        Self::Transport {
            description: description.into(),
        }
    }

    pub fn body_message(&self) -> Option<&str> {
        match self {
            SubmissionError::Status { body_message, .. }
            | SubmissionError::Decode { body_message, .. } => body_message.as_deref(),
            SubmissionError::InvalidEndpoint { .. } | SubmissionError::Transport { .. } => None,
        }
    }

    /// Low-level description of the fault. A server that answered with an
    /// error status did not fail at the transport level, so it has none.
    pub fn transport_description(&self) -> Option<String> {
        match self {
            SubmissionError::Status { .. } => None,
            SubmissionError::InvalidEndpoint { .. }
            | SubmissionError::Transport { .. }
            | SubmissionError::Decode { .. } => Some(self.to_string()),
        }
    }

    pub fn user_message(&self) -> String {
        select_fault_message(self.body_message(), self.transport_description().as_deref())
    }
}
