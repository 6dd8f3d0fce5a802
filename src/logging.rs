//! Structured logging configuration for ytcreator
//!
//! Diagnostics go to stderr so cleaned scripts on stdout stay pipeable:
//! - Environment-based log level configuration
//! - Structured JSON logging for machine consumption
//! - Human-readable console logging for development

use anyhow::Result;
use std::env;
use tracing::{debug, error, info, warn};
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

use crate::clean::{CleanMode, FilterReport};

/// Logging configuration for different environments
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Enable colored output
    pub colored: bool,
    /// Enable source location logging
    pub with_location: bool,
    /// Enable span timing
    pub with_spans: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogFormat {
    /// JSON structured logging
    Json,
    /// Pretty human-readable for development
    Pretty,
    /// Compact single-line format
    Compact,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "error".to_string(),
            format: LogFormat::Pretty,
            colored: is_terminal::IsTerminal::is_terminal(&std::io::stderr()),
            with_location: false,
            with_spans: false,
        }
    }
}

fn flag(value: &str) -> bool {
    value == "1" || value.to_lowercase() == "true"
}

impl LogConfig {
    /// Create logging configuration from environment variables
    pub fn from_env() -> Self {
        let level = env::var("YTCREATOR_LOG_LEVEL")
            .or_else(|_| env::var("LOG_LEVEL"))
            .unwrap_or_else(|_| "error".to_string());

        let format = match env::var("YTCREATOR_LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            Ok("compact") => LogFormat::Compact,
            _ => LogFormat::Pretty,
        };

        let colored = env::var("YTCREATOR_LOG_COLOR")
            .map(|v| flag(&v))
            .unwrap_or_else(|_| is_terminal::IsTerminal::is_terminal(&std::io::stderr()));

        let with_location = env::var("YTCREATOR_LOG_LOCATION")
            .map(|v| flag(&v))
            .unwrap_or(false);

        let with_spans = env::var("YTCREATOR_LOG_SPANS")
            .map(|v| flag(&v))
            .unwrap_or(false);

        Self {
            level,
            format,
            colored,
            with_location,
            with_spans,
        }
    }
}

/// Initialize the global tracing subscriber
pub fn init_logging(config: LogConfig) -> Result<()> {
    let env_filter = EnvFilter::try_new(&config.level)
        .or_else(|_| EnvFilter::try_new("error"))
        .unwrap_or_else(|_| EnvFilter::new("error"));

    let span_events = if config.with_spans {
        FmtSpan::NEW | FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(config.colored)
        .with_span_events(span_events)
        .with_file(config.with_location)
        .with_line_number(config.with_location);

    match config.format {
        LogFormat::Json => subscriber
            .json()
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to initialize JSON logging: {}", e))?,
        LogFormat::Pretty => subscriber
            .pretty()
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to initialize pretty logging: {}", e))?,
        LogFormat::Compact => subscriber
            .compact()
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to initialize compact logging: {}", e))?,
    }

    info!(
        level = %config.level,
        format = ?config.format,
        colored = config.colored,
        "Logging initialized"
    );

    Ok(())
}

/// Log a command execution with timing and context
pub fn log_command_execution<T>(command_name: &str, duration_ms: u64, result: &Result<T>) {
    let span = tracing::info_span!(
        "command_execution",
        command = command_name,
        duration_ms = duration_ms,
        success = result.is_ok()
    );

    let _enter = span.enter();

    match result {
        Ok(_) => info!(
            command = command_name,
            duration_ms = duration_ms,
            "Command completed successfully"
        ),
        Err(e) => error!(
            command = command_name,
            duration_ms = duration_ms,
            error = %e,
            "Command failed"
        ),
    }
}

/// Log what a cleaning run kept and removed
pub fn log_clean_summary(mode: CleanMode, report: &FilterReport, duration_ms: u64) {
    let kept = report.lines.len();
    if kept == 0 && report.dropped > 0 {
        warn!(
            mode = %mode,
            dropped = report.dropped,
            "Every line was removed as production material"
        );
    } else {
        debug!(
            mode = %mode,
            lines_in = report.input_lines(),
            lines_out = kept,
            dropped = report.dropped,
            blank = report.blank,
            duration_ms = duration_ms,
            "Clean summary"
        );
    }
}
