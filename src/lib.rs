//! YTCreator - voice-over ready scripts from AI-generated drafts
//!
//! Scripts that come back from a generative model are full of things nobody
//! should read aloud: timestamps, markdown headings, `Visual:` cues, speaker
//! labels, stray emphasis and mangled quotes. This crate strips them out and,
//! on request, re-flows the remaining speech into natural paragraphs.
//!
//! # Quick Start
//!
//! ```
//! use ytcreator::{clean, CleanMode};
//!
//! let raw = "[0:00] Intro - Visual: Upbeat intro music\n\n\
//!            Hey everyone! Welcome back.\n\n\
//!            **Visual**: Show screenshots\n\n\
//!            (Visual cue: zoom in)\n\n\
//!            Thanks for watching!";
//!
//! assert_eq!(
//!     clean(raw, CleanMode::Basic),
//!     "Hey everyone! Welcome back.\nThanks for watching!"
//! );
//! ```
//!
//! # Modules
//!
//! - [`clean`]: the cleaning pipeline (filter pass and paragraph pass)
//! - [`script`]: raw scripts and the raw/clean display toggle
//! - [`generation`]: contract for the text generation service
//! - [`stats`]: word counts and estimated read time
//! - [`config`]: configuration file and environment overrides

pub mod clean;
pub mod cli;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod error;
pub mod error_help;
pub mod generation;
pub mod io_options;
pub mod logging;
pub mod script;
pub mod stats;

pub use clean::{
    clean, clean_optional, BreakReason, CleanMode, CleanerConfig, FilterReport, RandomBreaks,
    ScriptCleaner, DEFAULT_BREAK_SEED,
};
pub use cli::{Cli, Commands};
pub use clipboard::Clipboard;
pub use config::Config;
pub use error::{ConfigError, GenerationError};
pub use generation::{run_action, ScriptAction, TextGenerator};
pub use io_options::IoOptions;
pub use logging::{init_logging, log_clean_summary, log_command_execution, LogConfig};
pub use script::{Script, ScriptKind, ScriptView};
pub use stats::ScriptStats;
