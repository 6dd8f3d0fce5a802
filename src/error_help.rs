//! Error helper module for user-friendly error messages
//!
//! Adds suggestions and next steps to the errors users are most likely to hit.

use colored::*;
use fuzzy_matcher::{skim::SkimMatcherV2, FuzzyMatcher};

use crate::error::ConfigError;

/// Subcommands and aliases offered in typo suggestions
pub const AVAILABLE_COMMANDS: &[&str] = &["clean", "x", "stats", "config"];

/// Closest known command, if it is a convincing match
pub fn suggest_command<'a>(command: &str, available_commands: &[&'a str]) -> Option<&'a str> {
    let matcher = SkimMatcherV2::default();
    available_commands
        .iter()
        .filter_map(|&cmd| matcher.fuzzy_match(cmd, command).map(|score| (cmd, score)))
        .max_by_key(|(_, score)| *score)
        .map(|(cmd, _)| cmd)
}

/// Format a command typo error with suggestions
pub fn format_command_typo(command: &str, available_commands: &[&str]) -> String {
    let mut message = format!("Error: Unknown command '{}'\n\n", command)
        .red()
        .to_string();

    if let Some(suggestion) = suggest_command(command, available_commands) {
        message.push_str(
            &format!("Did you mean '{}'?\n\n", suggestion)
                .yellow()
                .to_string(),
        );
    }

    message.push_str("Available commands:\n");
    for cmd in available_commands {
        message.push_str(&format!("  {}\n", cmd));
    }

    message.push_str(&format!(
        "\nRun '{}' for more information\n",
        "ytc --help".cyan()
    ));

    message
}

/// Format an invalid input file error
pub fn format_file_not_found(path: &str) -> String {
    let mut message = format!("Error: File not found: '{}'\n\n", path)
        .red()
        .to_string();

    message.push_str("Please check:\n");
    message.push_str(&format!("  - Current directory: {}\n", "pwd".cyan()));
    message.push_str(&format!(
        "  - Or pipe the script in: {}\n",
        format!("cat {} | ytc clean", path).cyan()
    ));

    message
}

/// Format a configuration problem with the file to look at
pub fn format_config_error(error: &ConfigError) -> String {
    let mut message = format!("Error: {}\n\n", error).red().to_string();

    match error {
        ConfigError::Parse { path, .. } | ConfigError::Read { path, .. } => {
            message.push_str(&format!("Fix or remove {}\n", path.display()));
            message.push_str("Expected format:\n");
            message.push_str(&"[cleaner]\n".dimmed().to_string());
            message.push_str(&"mode = \"basic\"   # or \"enhanced\"\n".green().to_string());
            message.push_str(&"random_breaks = true\n".green().to_string());
        }
        ConfigError::InvalidValue { .. } => {
            message.push_str(&format!(
                "Inspect the effective settings with '{}'\n",
                "ytc config".cyan()
            ));
        }
        ConfigError::NoHomeDir => {
            message.push_str(&format!(
                "Set {} to choose a config directory\n",
                "YTCREATOR_BASE_DIR".cyan()
            ));
        }
    }

    message
}
