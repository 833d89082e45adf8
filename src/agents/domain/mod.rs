//! Domain types for agent updates
//!
//! The update payload, its nested plugin binding and the typed chat history
//! setting.

mod chat_history;
mod update;

pub use chat_history::*;
pub use update::*;

pub(crate) use update::samples;
