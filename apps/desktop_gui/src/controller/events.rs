//! UI/backend events and error modeling for the desktop panel.

use client_core::{Generation, SubmissionError};
use shared::{error::ValidationError, protocol::ReportResponse};

#[derive(Debug)]
pub enum UiEvent {
    Info(String),
    Error(UiError),
    SubmissionResolved {
        generation: Generation,
        outcome: Result<ReportResponse, SubmissionError>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Transport,
    Validation,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    Submission,
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        let message = message.into();
        let message_lower = message.to_ascii_lowercase();
        let category = if message_lower.contains("timeout")
            || message_lower.contains("timed out")
            || message_lower.contains("connection")
            || message_lower.contains("network")
            || message_lower.contains("queue")
            || message_lower.contains("disconnect")
            || message_lower.contains("startup failure")
        {
            UiErrorCategory::Transport
        } else {
            UiErrorCategory::Unknown
        };

        Self {
            category,
            context,
            message,
        }
    }

    pub fn validation(err: &ValidationError) -> Self {
        Self {
            category: UiErrorCategory::Validation,
            context: UiErrorContext::Submission,
            message: format!("Please fill in the {err}"),
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

pub fn category_label(category: UiErrorCategory) -> &'static str {
    match category {
        UiErrorCategory::Transport => "Connection",
        UiErrorCategory::Validation => "Validation",
        UiErrorCategory::Unknown => "Unexpected",
    }
}

#[cfg(test)]
mod tests {
    use shared::domain::RequiredField;

    use super::*;

    #[test]
    fn classifies_queue_disconnect_as_transport() {
        let err = UiError::from_message(
            UiErrorContext::Submission,
            "Backend command processor disconnected (possible startup failure); retry",
        );
        assert_eq!(err.category(), UiErrorCategory::Transport);
        assert_eq!(err.context(), UiErrorContext::Submission);
    }

    #[test]
    fn validation_banner_names_missing_fields() {
        let err = UiError::validation(&ValidationError::MissingFields(vec![
            RequiredField::AccountId,
            RequiredField::EndDate,
        ]));
        assert_eq!(err.category(), UiErrorCategory::Validation);
        assert_eq!(
            err.message(),
            "Please fill in the missing required fields: Account ID, End date"
        );
    }

    #[test]
    fn free_text_is_never_classified_as_validation() {
        let err = UiError::from_message(
            UiErrorContext::Submission,
            "missing required fields: Webhook URL",
        );
        assert_eq!(err.category(), UiErrorCategory::Unknown);
    }

    #[test]
    fn unrecognized_messages_are_unknown() {
        let err = UiError::from_message(UiErrorContext::Submission, "teapot");
        assert_eq!(err.category(), UiErrorCategory::Unknown);
        assert_eq!(category_label(err.category()), "Unexpected");
    }
}
