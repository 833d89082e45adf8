use thiserror::Error;

use crate::config::{DecoderSettings, LoggingSettings, Settings};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

pub struct ConfigValidator;

impl ConfigValidator {
    pub fn validate(settings: &Settings) -> Result<(), Vec<ConfigError>> {
        let mut errors = Vec::new();

        if let Err(e) = Self::validate_decoder(&settings.decoder) {
            errors.extend(e);
        }

        if let Err(e) = Self::validate_logging(&settings.logging) {
            errors.extend(e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_decoder(decoder: &DecoderSettings) -> Result<(), Vec<ConfigError>> {
        let mut errors = Vec::new();

        // "{}" is the smallest payload
        if decoder.max_payload_bytes < 2 {
            errors.push(ConfigError::InvalidValue {
                field: "decoder.max_payload_bytes".to_string(),
                reason: "Limit must allow at least an empty object (2 bytes)".to_string(),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_logging(logging: &LoggingSettings) -> Result<(), Vec<ConfigError>> {
        let mut errors = Vec::new();

        if logging.level.is_empty() {
            errors.push(ConfigError::MissingField("logging.level".to_string()));
        } else if logging.max_level().is_none() {
            errors.push(ConfigError::InvalidValue {
                field: "logging.level".to_string(),
                reason: format!(
                    "'{}' is not one of trace, debug, info, warn, error",
                    logging.level
                ),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        let settings = Settings::default();
        assert!(ConfigValidator::validate(&settings).is_ok());
    }

    #[test]
    fn test_zero_payload_limit() {
        let mut settings = Settings::default();
        settings.decoder.max_payload_bytes = 0;

        let errors = ConfigValidator::validate(&settings).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_bad_log_level() {
        let mut settings = Settings::default();
        settings.logging.level = "loud".to_string();
        settings.decoder.max_payload_bytes = 1;

        let errors = ConfigValidator::validate(&settings).unwrap_err();
        assert_eq!(errors.len(), 2);

        settings.logging.level = String::new();
        settings.decoder.max_payload_bytes = 1024;
        let errors = ConfigValidator::validate(&settings).unwrap_err();
        assert!(matches!(errors[0], ConfigError::MissingField(_)));
    }
}
