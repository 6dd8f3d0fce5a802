// Shared helpers for command handlers

use anyhow::{bail, Context, Result};
use is_terminal::IsTerminal;
use std::io::{self, Read};
use std::path::Path;

use crate::cli::InputArgs;
use crate::clean::{CleanMode, CleanerConfig, RandomBreaks};
use crate::error_help;
use crate::Config;

/// Read the raw script from the argument, the input file or stdin
pub fn read_input(input: &InputArgs) -> Result<String> {
    if let Some(text) = &input.text {
        return Ok(text.clone());
    }

    if let Some(path) = &input.input {
        if !Path::new(path).exists() {
            bail!("{}", error_help::format_file_not_found(path));
        }
        return std::fs::read_to_string(path).with_context(|| format!("Failed to read '{}'", path));
    }

    if io::stdin().is_terminal() {
        eprintln!("Paste the script, then press Ctrl-D:");
    }
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read script from stdin")?;
    Ok(buffer)
}

/// Merge command-line flags over the loaded configuration
pub fn cleaner_settings(
    config: &Config,
    mode: Option<CleanMode>,
    seed: Option<u64>,
    no_random_breaks: bool,
) -> CleanerConfig {
    let mut settings = config.cleaner_config();
    if let Some(mode) = mode {
        settings.mode = mode;
    }
    if no_random_breaks {
        settings.random_breaks = RandomBreaks::Disabled;
    } else if let Some(seed) = seed {
        settings.random_breaks = RandomBreaks::Seeded(seed);
    }
    settings
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_flags_override_config() {
        let config = Config::default();

        let settings = cleaner_settings(&config, None, None, false);
        assert_eq!(settings, config.cleaner_config());

        let settings = cleaner_settings(&config, Some(CleanMode::Enhanced), Some(5), false);
        assert_eq!(settings.mode, CleanMode::Enhanced);
        assert_eq!(settings.random_breaks, RandomBreaks::Seeded(5));

        let settings = cleaner_settings(&config, None, None, true);
        assert_eq!(settings.random_breaks, RandomBreaks::Disabled);
    }

    #[test]
    fn test_read_input_prefers_text() {
        let input = InputArgs {
            text: Some("Hello".to_string()),
            input: None,
        };
        assert_eq!(read_input(&input).unwrap(), "Hello");
    }

    #[test]
    fn test_read_input_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("draft.md");
        std::fs::write(&path, "## Title\nHello").unwrap();
        let input = InputArgs {
            text: None,
            input: Some(path.to_string_lossy().into_owned()),
        };
        assert_eq!(read_input(&input).unwrap(), "## Title\nHello");

        let missing = InputArgs {
            text: None,
            input: Some(dir.path().join("nope.md").to_string_lossy().into_owned()),
        };
        assert!(read_input(&missing).is_err());
    }
}
