use serde_json::Value;
use thiserror::Error;

use crate::domain::RequiredField;

/// Shown when a fault carries neither a body message nor a transport description.
pub const FALLBACK_FAULT_MESSAGE: &str = "Failed to optimize ads";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing required fields: {}", join_fields(.0))]
    MissingFields(Vec<RequiredField>),
}

impl ValidationError {
    pub fn missing_fields(&self) -> &[RequiredField] {
        match self {
            ValidationError::MissingFields(fields) => fields,
        }
    }
}

fn join_fields(fields: &[RequiredField]) -> String {
    fields
        .iter()
        .map(|field| field.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Extracts a non-empty top-level `message` string from a fault body.
///
/// Bodies that are not JSON objects, or whose `message` is not a string,
/// yield `None`.
pub fn fault_body_message(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    let message = value.get("message")?.as_str()?;
    if message.trim().is_empty() {
        return None;
    }
    Some(message.to_string())
}

/// Picks the single message surfaced for a fault: body message, then the
/// transport description, then [`FALLBACK_FAULT_MESSAGE`].
pub fn select_fault_message(body_message: Option<&str>, transport: Option<&str>) -> String {
    body_message
        .filter(|text| !text.trim().is_empty())
        .or_else(|| transport.filter(|text| !text.trim().is_empty()))
        .unwrap_or(FALLBACK_FAULT_MESSAGE)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_message_wins_over_transport_description() {
        assert_eq!(
            select_fault_message(Some("rate limited"), Some("connection refused")),
            "rate limited"
        );
        assert_eq!(
            select_fault_message(None, Some("connection refused")),
            "connection refused"
        );
        assert_eq!(select_fault_message(None, None), FALLBACK_FAULT_MESSAGE);
        assert_eq!(select_fault_message(Some(""), Some("")), FALLBACK_FAULT_MESSAGE);
    }

    #[test]
    fn extracts_message_only_from_json_objects_with_string_message() {
        assert_eq!(
            fault_body_message(br#"{"message":"rate limited","code":429}"#),
            Some("rate limited".to_string())
        );
        assert_eq!(fault_body_message(br#"{"message":{"nested":true}}"#), None);
        assert_eq!(fault_body_message(br#"{"message":""}"#), None);
        assert_eq!(fault_body_message(b"<html>Bad Gateway</html>"), None);
        assert_eq!(fault_body_message(b""), None);
    }

    #[test]
    fn validation_error_lists_every_missing_field() {
        let err = ValidationError::MissingFields(vec![
            RequiredField::Endpoint,
            RequiredField::EndDate,
        ]);
        assert_eq!(
            err.to_string(),
            "missing required fields: Webhook URL, End date"
        );
    }
}
