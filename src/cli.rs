use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Agent Manager - inspect, validate and document agent update payloads
#[derive(Parser, Debug, Clone)]
#[command(name = "agent-manager", version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, env = "AGENT_MANAGER_CONFIG", default_value = "agent-manager.toml")]
    pub config: PathBuf,

    /// Maximum accepted payload size in bytes
    #[arg(long, env = "AGENT_MANAGER_MAX_PAYLOAD_BYTES")]
    pub max_payload_bytes: Option<usize>,

    /// Reject keys that are not payload fields
    #[arg(long, env = "AGENT_MANAGER_DENY_UNKNOWN_FIELDS", num_args = 0..=1, default_missing_value = "true")]
    pub deny_unknown_fields: Option<bool>,

    /// Run payload validation after decoding
    #[arg(long, env = "AGENT_MANAGER_VALIDATE")]
    pub validate: Option<bool>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "AGENT_MANAGER_LOG_LEVEL")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the JSON Schema of the agent update payload
    Schema,
    /// Print a payload filled with the documented example values
    Example,
    /// Decode and validate a payload ("-" reads stdin)
    Check {
        /// Payload file
        file: PathBuf,
    },
    /// Decode a payload and print it back without unset fields
    Normalize {
        /// Payload file
        file: PathBuf,
    },
}
