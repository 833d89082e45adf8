use thiserror::Error;

use crate::agents::domain::{AgentUpdatePayload, ChatHistoryConf};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

pub struct UpdateValidator;

impl UpdateValidator {
    /// Check an update payload, collecting every problem found.
    ///
    /// Only fields that are present are checked; an empty payload is valid.
    /// Plugin bindings are passed through as-is, the update handler owns
    /// whatever rules apply to them.
    pub fn validate(payload: &AgentUpdatePayload) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Some(code) = payload.chat_history_conf {
            if let Err(e) = ChatHistoryConf::try_from(code) {
                errors.push(e);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
