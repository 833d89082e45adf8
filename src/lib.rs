//! # Agent Manager - agent update payloads
//!
//! Agents are configurable conversational assistants: they bind speech
//! recognition, voice activity detection, language, speech synthesis, memory
//! and intent models by identifier, carry plugin functions and prompts, and
//! decide how much chat history to keep. This crate defines the payload used
//! to partially update an agent and the layers that sit around it on the way
//! in from a request body.
//!
//! ## Features
//!
//! - **Partial updates**: every field is optional, absent means unchanged
//! - **Dynamic plugin parameters**: arbitrary JSON values per plugin binding
//! - **Validation**: chat history range and plugin binding checks
//! - **API documentation**: JSON Schema with documented example values
//! - **Configurable decoding**: size limits and unknown-field policy
//!
//! ## Quick Start
//!
//! ```rust
//! use agent_manager::agents::PayloadCodec;
//!
//! let codec = PayloadCodec::default();
//! let update = codec
//!     .decode_str(r#"{"agentName": "Support", "chatHistoryConf": 1}"#)
//!     .unwrap();
//!
//! assert_eq!(update.present_fields(), vec!["agentName", "chatHistoryConf"]);
//! ```
//!
//! ## Architecture
//!
//! - **Agents**: payload types, codec, validator, schema
//! - **Config**: settings loading and validation
//! - **CLI**: command line surface for the binary

pub mod agents;
pub mod cli;
pub mod config;
