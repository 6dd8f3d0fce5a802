// Script statistics command

use anyhow::{Context, Result};
use std::time::Instant;

use super::common::{cleaner_settings, read_input};
use crate::cli::InputArgs;
use crate::clean::{CleanMode, ScriptCleaner};
use crate::{Config, ScriptStats};

pub fn handle_stats(
    config: &Config,
    input: &InputArgs,
    mode: Option<CleanMode>,
    json: bool,
    start: Instant,
) -> Result<()> {
    let raw = read_input(input)?;
    // paragraph counts must not depend on the random source
    let cleaner = ScriptCleaner::new(cleaner_settings(config, mode, None, true));
    let cleaned = cleaner.clean(&raw);
    let stats = ScriptStats::with_pace(&cleaned, config.output.words_per_minute);

    if json {
        let out = serde_json::to_string_pretty(&stats).context("Failed to serialize stats")?;
        println!("{}", out);
    } else {
        println!("{}", stats);
        println!("Stats computed ({}ms)", start.elapsed().as_millis());
    }

    Ok(())
}
