//! Command-line interface definitions and parsing
//!
//! Defines the CLI structure using Clap, including all commands and their
//! associated arguments and options.

use clap::{Parser, Subcommand};

use crate::clean::CleanMode;

#[derive(Parser)]
#[command(name = "ytc")]
#[command(version)]
#[command(about = "YTCreator - turn AI-generated video scripts into voice-over ready text")]
#[command(after_help = "EXAMPLES:
  ytc clean -i draft.md                 # Basic clean to stdout
  ytc clean -i draft.md -m enhanced -c  # Voice-over clean, copied to clipboard
  pbpaste | ytc x -f                    # Clean stdin, write script-basic.txt
  ytc stats -i draft.md --json          # Word count and read time

Run 'ytc COMMAND --help' for more information on a command.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Where the raw script comes from
#[derive(clap::Args, Debug, Clone)]
pub struct InputArgs {
    /// Script text (optional - uses --input or stdin if not provided)
    pub text: Option<String>,
    /// Read the script from a file
    #[arg(short = 'i', long = "input", value_name = "FILE", conflicts_with = "text")]
    pub input: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Clean a script for reading or voice-over
    #[command(alias = "x")]
    Clean {
        #[command(flatten)]
        input: InputArgs,
        /// Cleaning mode (defaults to the configured mode)
        #[arg(short = 'm', long = "mode", value_enum)]
        mode: Option<CleanMode>,
        /// Seed for enhanced-mode random paragraph breaks
        #[arg(long = "seed", value_name = "N", conflicts_with = "no_random_breaks")]
        seed: Option<u64>,
        /// Only insert rule-based paragraph breaks
        #[arg(long = "no-random-breaks")]
        no_random_breaks: bool,
        /// Print script statistics to stderr
        #[arg(long = "stats")]
        stats: bool,
        /// Copy to clipboard
        #[arg(short = 'c')]
        clipboard: bool,
        /// Write to file (script-<mode>.txt if no path provided)
        #[arg(short = 'f', value_name = "PATH", num_args = 0..=1, default_missing_value = "")]
        file: Option<String>,
        /// Quiet mode - suppress status messages
        #[arg(short = 'q')]
        quiet: bool,
    },
    /// Show word count and estimated read time of the cleaned script
    Stats {
        #[command(flatten)]
        input: InputArgs,
        /// Cleaning mode applied before counting
        #[arg(short = 'm', long = "mode", value_enum)]
        mode: Option<CleanMode>,
        /// Output as JSON
        #[arg(long = "json")]
        json: bool,
    },
    /// Show the effective configuration
    Config {
        /// Print only the config file path
        #[arg(long = "path")]
        path: bool,
    },
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Clean { .. } => "clean",
            Commands::Stats { .. } => "stats",
            Commands::Config { .. } => "config",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_clean() {
        let cli = Cli::try_parse_from([
            "ytc", "x", "-i", "draft.md", "-m", "enhanced", "--seed", "3", "-c", "-f",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Clean {
                input,
                mode,
                seed,
                clipboard,
                file,
                ..
            }) => {
                assert_eq!(input.input.as_deref(), Some("draft.md"));
                assert_eq!(mode, Some(CleanMode::Enhanced));
                assert_eq!(seed, Some(3));
                assert!(clipboard);
                assert_eq!(file.as_deref(), Some(""));
            }
            _ => panic!("expected clean command"),
        }
    }

    #[test]
    fn test_seed_conflicts_with_no_random_breaks() {
        assert!(Cli::try_parse_from(["ytc", "clean", "--seed", "1", "--no-random-breaks"]).is_err());
    }

    #[test]
    fn test_text_conflicts_with_input_file() {
        assert!(Cli::try_parse_from(["ytc", "clean", "hello", "-i", "draft.md"]).is_err());
    }
}
