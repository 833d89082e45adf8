//! Error types for agent update payloads

use thiserror::Error;

use super::validator::ValidationError;

/// Errors that can occur while decoding or encoding an update payload
#[derive(Debug, Error)]
pub enum PayloadError {
    /// Body exceeds the configured limit
    #[error("Payload too large: {size} bytes exceeds limit of {limit}")]
    TooLarge { size: usize, limit: usize },

    /// Malformed JSON or a value of the wrong type
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Keys that are not part of the payload (only when unknown keys are denied)
    #[error("Unknown fields: {}", .0.join(", "))]
    UnknownFields(Vec<String>),

    /// Payload decoded but failed validation
    #[error("Validation failed: {}", join_errors(.0))]
    Invalid(Vec<ValidationError>),
}

impl From<Vec<ValidationError>> for PayloadError {
    fn from(errors: Vec<ValidationError>) -> Self {
        PayloadError::Invalid(errors)
    }
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type alias for payload operations
pub type PayloadResult<T> = Result<T, PayloadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_message_lists_every_error() {
        let err = PayloadError::from(vec![
            ValidationError::InvalidValue {
                field: "chatHistoryConf".to_string(),
                reason: "out of range".to_string(),
            },
            ValidationError::InvalidValue {
                field: "sort".to_string(),
                reason: "negative".to_string(),
            },
        ]);

        assert_eq!(
            err.to_string(),
            "Validation failed: Invalid value for chatHistoryConf: out of range; Invalid value for sort: negative"
        );
    }

    #[test]
    fn test_unknown_fields_message() {
        let err = PayloadError::UnknownFields(vec!["id".to_string(), "foo".to_string()]);
        assert_eq!(err.to_string(), "Unknown fields: id, foo");
    }
}
