//! Configuration file and environment overrides
//!
//! Settings live in `~/.ytcreator/config.toml` unless `YTCREATOR_CONFIG`
//! points somewhere else (or `YTCREATOR_BASE_DIR` moves the whole directory).
//! A missing file means defaults. Environment variables win over the file and
//! command-line flags win over both.

use dirs::home_dir;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::clean::{CleanMode, CleanerConfig, RandomBreaks, DEFAULT_BREAK_SEED};
use crate::error::ConfigError;

/// Typical narration pace used for duration estimates
pub const DEFAULT_WORDS_PER_MINUTE: u32 = 150;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanerSection {
    /// Mode used when `ytc clean` is run without `--mode`
    pub mode: CleanMode,
    /// Whether enhanced mode may add random paragraph breaks
    pub random_breaks: bool,
    /// Seed for random breaks; absent means the built-in seed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for CleanerSection {
    fn default() -> Self {
        Self {
            mode: CleanMode::Basic,
            random_breaks: true,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSection {
    pub words_per_minute: u32,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub cleaner: CleanerSection,
    pub output: OutputSection,
}

impl Config {
    /// Directory holding the config file
    pub fn base_dir() -> Result<PathBuf, ConfigError> {
        if let Ok(custom_dir) = env::var("YTCREATOR_BASE_DIR") {
            return Ok(PathBuf::from(custom_dir));
        }
        Ok(home_dir().ok_or(ConfigError::NoHomeDir)?.join(".ytcreator"))
    }

    pub fn config_path() -> Result<PathBuf, ConfigError> {
        if let Ok(path) = env::var("YTCREATOR_CONFIG") {
            return Ok(PathBuf::from(path));
        }
        Ok(Self::base_dir()?.join("config.toml"))
    }

    /// Load the config file and apply environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path()?;
        let mut config = Self::load_from(&path)?;
        config.apply_overrides(|key| env::var(key).ok())?;
        Ok(config)
    }

    /// Read a config file; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `YTCREATOR_MODE`, `YTCREATOR_SEED` and `YTCREATOR_RANDOM_BREAKS`
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(mode) = lookup("YTCREATOR_MODE") {
            self.cleaner.mode = mode.parse().map_err(|_| ConfigError::InvalidValue {
                key: "YTCREATOR_MODE".to_string(),
                value: mode.clone(),
            })?;
        }

        if let Some(seed) = lookup("YTCREATOR_SEED") {
            let parsed = seed.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "YTCREATOR_SEED".to_string(),
                value: seed.clone(),
            })?;
            self.cleaner.seed = Some(parsed);
        }

        if let Some(flag) = lookup("YTCREATOR_RANDOM_BREAKS") {
            self.cleaner.random_breaks = match flag.to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: "YTCREATOR_RANDOM_BREAKS".to_string(),
                        value: flag,
                    })
                }
            };
        }

        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.output.words_per_minute == 0 {
            return Err(ConfigError::InvalidValue {
                key: "output.words_per_minute".to_string(),
                value: "0".to_string(),
            });
        }
        Ok(())
    }

    pub fn random_breaks(&self) -> RandomBreaks {
        if self.cleaner.random_breaks {
            RandomBreaks::Seeded(self.cleaner.seed.unwrap_or(DEFAULT_BREAK_SEED))
        } else {
            RandomBreaks::Disabled
        }
    }

    pub fn cleaner_config(&self) -> CleanerConfig {
        CleanerConfig {
            mode: self.cleaner.mode,
            random_breaks: self.random_breaks(),
        }
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
