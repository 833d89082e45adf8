//! Agent update payloads
//!
//! This module provides the partial-update payload for agents and the
//! layers around it:
//! - Decoding request bodies with size limits and unknown-field checks
//! - Validation of the few rules the payload can break (chat history range,
//!   plugin bindings)
//! - JSON Schema generation for API documentation
//!
//! ## Architecture
//!
//! - `domain/` - Payload types (AgentUpdatePayload, FunctionBinding, ChatHistoryConf)
//! - `codec` - JSON decode/encode boundary
//! - `validator` - Payload validation
//! - `schema` - JSON Schema and documented examples

pub mod codec;
pub mod domain;
pub mod error;
pub mod schema;
pub mod validator;

// Re-export commonly used types
pub use codec::PayloadCodec;
pub use domain::*;
pub use error::*;
pub use validator::{UpdateValidator, ValidationError};
