//! JSON boundary for agent update payloads
//!
//! Request bodies come in as raw bytes. The codec enforces the size limit,
//! insists on a JSON object at the top level, optionally rejects keys that
//! are not payload fields and runs the validator before handing the typed
//! payload to the caller.

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::agents::domain::AgentUpdatePayload;
use crate::agents::error::{PayloadError, PayloadResult};
use crate::agents::validator::UpdateValidator;
use crate::config::DecoderSettings;

#[derive(Debug, Clone)]
pub struct PayloadCodec {
    settings: DecoderSettings,
}

impl PayloadCodec {
    pub fn new(settings: DecoderSettings) -> Self {
        Self { settings }
    }

    /// Decode a request body into an update payload
    pub fn decode(&self, body: &[u8]) -> PayloadResult<AgentUpdatePayload> {
        let limit = self.settings.max_payload_bytes;
        if body.len() > limit {
            warn!("Rejected agent update payload: {} bytes exceeds limit of {}", body.len(), limit);
            return Err(PayloadError::TooLarge {
                size: body.len(),
                limit,
            });
        }

        // Parsing into a map first rejects arrays and scalars, which serde
        // would otherwise accept as a positional struct
        let object: Map<String, Value> = serde_json::from_slice(body).map_err(|e| {
            warn!("Rejected agent update payload: {}", e);
            PayloadError::Decode(e)
        })?;

        if self.settings.deny_unknown_fields {
            let unknown: Vec<String> = object
                .keys()
                .filter(|key| !AgentUpdatePayload::FIELDS.contains(&key.as_str()))
                .cloned()
                .collect();
            if !unknown.is_empty() {
                warn!("Rejected agent update payload with unknown fields: {:?}", unknown);
                return Err(PayloadError::UnknownFields(unknown));
            }
        }

        // The typed pass reads the raw body rather than the map, so a key
        // given twice is a duplicate field error instead of last-write-wins
        let payload: AgentUpdatePayload = serde_json::from_slice(body).map_err(|e| {
            warn!("Rejected agent update payload: {}", e);
            PayloadError::Decode(e)
        })?;

        if self.settings.validate {
            UpdateValidator::validate(&payload).map_err(|errors| {
                warn!(
                    "Agent update payload failed validation with {} error(s)",
                    errors.len()
                );
                PayloadError::Invalid(errors)
            })?;
        }

        debug!(fields = ?payload.present_fields(), "Decoded agent update payload");
        Ok(payload)
    }

    pub fn decode_str(&self, body: &str) -> PayloadResult<AgentUpdatePayload> {
        self.decode(body.as_bytes())
    }

    /// Encode a payload; unset fields are left out
    pub fn encode(&self, payload: &AgentUpdatePayload) -> PayloadResult<String> {
        let encoded = if self.settings.pretty {
            serde_json::to_string_pretty(payload)?
        } else {
            serde_json::to_string(payload)?
        };
        Ok(encoded)
    }
}

impl Default for PayloadCodec {
    fn default() -> Self {
        Self::new(DecoderSettings::default())
    }
}
