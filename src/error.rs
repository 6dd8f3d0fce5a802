//! Typed errors for the library layers
//!
//! Cleaning itself cannot fail. These cover the configuration file and the
//! generation service contract; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Message shown to users whenever the generation service lets us down
pub const GENERATION_FAILED_MESSAGE: &str = "Script generation failed. Please try again.";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine home directory")]
    NoHomeDir,

    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GenerationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("generation service unreachable: {0}")]
    Transport(String),

    #[error("generation quota exceeded: {0}")]
    Quota(String),

    #[error("generation service returned an empty response")]
    EmptyResponse,
}

impl GenerationError {
    /// Text safe to show an end user; details stay in the logs
    pub fn user_message(&self) -> String {
        match self {
            GenerationError::InvalidInput(reason) => reason.clone(),
            _ => GENERATION_FAILED_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_user_message_hides_details() {
        let err = GenerationError::Quota("429 from upstream".to_string());
        assert_eq!(err.user_message(), GENERATION_FAILED_MESSAGE);
        assert!(err.to_string().contains("429"));

        let err = GenerationError::InvalidInput("script is empty".to_string());
        assert_eq!(err.user_message(), "script is empty");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidValue {
            key: "cleaner.mode".to_string(),
            value: "fancy".to_string(),
        };
        assert_eq!(err.to_string(), "invalid value for cleaner.mode: fancy");
    }
}
