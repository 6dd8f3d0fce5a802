use anyhow::Result;
use std::time::Instant;

use super::common::{cleaner_settings, read_input};
use crate::cli::InputArgs;
use crate::clean::{CleanMode, ScriptCleaner};
use crate::{log_clean_summary, Config, IoOptions, ScriptStats};

/// Options of `ytc clean` that shape the cleaning itself
#[derive(Debug, Clone, Default)]
pub struct CleanOptions {
    pub mode: Option<CleanMode>,
    pub seed: Option<u64>,
    pub no_random_breaks: bool,
    pub stats: bool,
}

/// Handle the clean command - strip production cues and formatting from a script
pub fn handle_clean(
    config: &Config,
    input: &InputArgs,
    options: &CleanOptions,
    io_options: &IoOptions,
    start: Instant,
) -> Result<()> {
    let raw = read_input(input)?;

    let settings = cleaner_settings(config, options.mode, options.seed, options.no_random_breaks);
    let cleaner = ScriptCleaner::new(settings);

    let report = cleaner.filter(&raw);
    let cleaned = cleaner.assemble(&report, settings.mode);
    log_clean_summary(settings.mode, &report, start.elapsed().as_millis() as u64);

    if cleaned.is_empty() && !io_options.quiet {
        eprintln!("Nothing left to read after cleaning");
    }

    io_options.deliver(&cleaned, settings.mode, start)?;

    if options.stats {
        let stats = ScriptStats::with_pace(&cleaned, config.output.words_per_minute);
        eprintln!("{}", stats);
    }

    Ok(())
}
