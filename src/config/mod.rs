use config::{Config, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub mod validator;

use crate::cli::Cli;

pub const DEFAULT_MAX_PAYLOAD_BYTES: usize = 1024 * 1024;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub decoder: DecoderSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// How request bodies are turned into update payloads
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DecoderSettings {
    /// Bodies larger than this are rejected before parsing
    #[serde(default = "default_max_payload_bytes")]
    pub max_payload_bytes: usize,
    /// Run the payload validator after decoding
    #[serde(default = "default_true")]
    pub validate: bool,
    /// Reject keys that are not payload fields instead of ignoring them
    #[serde(default)]
    pub deny_unknown_fields: bool,
    /// Pretty-print encoded payloads
    #[serde(default = "default_true")]
    pub pretty: bool,
}

impl Default for DecoderSettings {
    fn default() -> Self {
        Self {
            max_payload_bytes: default_max_payload_bytes(),
            validate: true,
            deny_unknown_fields: false,
            pretty: true,
        }
    }
}

fn default_max_payload_bytes() -> usize {
    DEFAULT_MAX_PAYLOAD_BYTES
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl LoggingSettings {
    /// Parsed log level; `None` if the configured name is not a level
    pub fn max_level(&self) -> Option<tracing::Level> {
        self.level.parse().ok()
    }
}

impl Settings {
    /// Create settings from CLI arguments (includes config file and CLI overrides)
    pub fn new_with_cli(cli: &Cli) -> Result<Self, anyhow::Error> {
        let s = Config::builder()
            .set_default("logging.level", default_log_level())?
            .add_source(File::from(cli.config.clone()).required(false))
            .build()?;

        let mut settings: Settings = s.try_deserialize()?;

        // CLI > env vars > config file
        settings.apply_cli_overrides(cli);

        settings.validate()?;
        Ok(settings)
    }

    /// Load `agent-manager.{toml,yaml,json}` from `root`, if present
    pub fn from_root(root: &str) -> Result<Self, anyhow::Error> {
        let config_path = Path::new(root).join("agent-manager");
        let s = Config::builder()
            .set_default("logging.level", default_log_level())?
            .add_source(File::from(config_path).required(false))
            .build()?;

        let settings: Settings = s.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Apply CLI argument overrides to settings
    fn apply_cli_overrides(&mut self, cli: &Cli) {
        if let Some(limit) = cli.max_payload_bytes {
            self.decoder.max_payload_bytes = limit;
        }
        if let Some(deny) = cli.deny_unknown_fields {
            self.decoder.deny_unknown_fields = deny;
        }
        if let Some(validate) = cli.validate {
            self.decoder.validate = validate;
        }
        if let Some(level) = &cli.log_level {
            self.logging.level = level.clone();
        }
    }

    fn validate(&self) -> Result<(), anyhow::Error> {
        validator::ConfigValidator::validate(self).map_err(|errors| {
            let error_messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            anyhow::anyhow!(
                "Configuration validation failed:\n{}",
                error_messages.join("\n")
            )
        })
    }
}
