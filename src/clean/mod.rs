//! Script cleaning for reading and voice-over
//!
//! Turns a raw AI-generated or transcribed script into plain spoken prose.
//! Cleaning runs in up to two passes:
//!
//! 1. **Filter** ([`ScriptCleaner::filter`]): drops lines that are pure
//!    production material (timestamps, headings, section headers, stage
//!    directions) and rewrites the rest with the ordered rules in [`rules`].
//! 2. **Paragraphs** ([`paragraphs`]): only in [`CleanMode::Enhanced`], puts
//!    blank lines back where a speaker would pause.
//!
//! Cleaning never fails. Garbage in yields as much of the garbage as looks
//! like speech, and empty input yields an empty string.
//!
//! ```
//! use ytcreator::clean::{clean, CleanMode};
//!
//! let raw = "## Intro\n[0:15] - Hello there\n(Visual: logo spin)\nSpeaker 1: we\"re live!";
//! assert_eq!(clean(raw, CleanMode::Basic), "Hello there\nwe're live!");
//! ```

pub mod lexicon;
pub mod paragraphs;
pub mod rules;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Instant;
use tracing::debug;

pub use paragraphs::{BreakReason, RandomBreaks, DEFAULT_BREAK_SEED};

/// How far cleaning goes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CleanMode {
    /// Filter pass only; one spoken line per output line
    #[default]
    Basic,
    /// Filter pass plus paragraph breaks for voice-over pacing
    Enhanced,
}

impl CleanMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CleanMode::Basic => "basic",
            CleanMode::Enhanced => "enhanced",
        }
    }
}

impl fmt::Display for CleanMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CleanMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "basic" => Ok(CleanMode::Basic),
            "enhanced" | "ai" => Ok(CleanMode::Enhanced),
            other => Err(format!(
                "unknown clean mode '{}', expected 'basic' or 'enhanced'",
                other
            )),
        }
    }
}

/// Settings for a [`ScriptCleaner`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanerConfig {
    /// Mode used by [`ScriptCleaner::clean`]
    pub mode: CleanMode,
    /// Random source for enhanced-mode paragraph breaks
    pub random_breaks: RandomBreaks,
}

/// Lines that survived the filter pass, with a tally of what went away
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterReport {
    pub lines: Vec<String>,
    /// Input lines that were blank after trimming
    pub blank: usize,
    /// Non-blank input lines removed as production material
    pub dropped: usize,
}

impl FilterReport {
    pub fn input_lines(&self) -> usize {
        self.lines.len() + self.blank + self.dropped
    }
}

/// Stateless cleaner; cheap to copy and safe to share between threads
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptCleaner {
    config: CleanerConfig,
}

impl ScriptCleaner {
    pub fn new(config: CleanerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CleanerConfig {
        &self.config
    }

    /// Clean with the configured mode
    pub fn clean(&self, raw: &str) -> String {
        self.clean_with_mode(raw, self.config.mode)
    }

    pub fn clean_with_mode(&self, raw: &str, mode: CleanMode) -> String {
        let start = Instant::now();
        let report = self.filter(raw);
        let cleaned = self.assemble(&report, mode);

        debug!(
            mode = %mode,
            lines_in = report.input_lines(),
            lines_out = report.lines.len(),
            dropped = report.dropped,
            duration_us = start.elapsed().as_micros() as u64,
            "Script cleaned"
        );

        cleaned
    }

    /// Turn filtered lines into the final text for `mode`
    pub fn assemble(&self, report: &FilterReport, mode: CleanMode) -> String {
        match mode {
            CleanMode::Basic => report.lines.join("\n"),
            CleanMode::Enhanced => paragraphs::segment(&report.lines, &self.config.random_breaks),
        }
    }

    /// Run the filter pass only, keeping the surviving lines separate
    pub fn filter(&self, raw: &str) -> FilterReport {
        let mut report = FilterReport::default();

        for line in raw.split('\n') {
            let line = line.trim();
            if line.is_empty() {
                report.blank += 1;
                continue;
            }

            if let Some(rule) = rules::dropped_by(line) {
                tracing::trace!(rule, "line dropped");
                report.dropped += 1;
                continue;
            }

            let cleaned = rules::apply_line_rules(line);
            // a second filter run must not find anything left to drop
            let leftover = if cleaned.is_empty() {
                Some("empty")
            } else if rules::is_residual_direction(&cleaned) {
                Some("residual_direction")
            } else {
                rules::dropped_by(&cleaned)
            };

            match leftover {
                Some(rule) => {
                    tracing::trace!(rule, "line dropped after cleaning");
                    report.dropped += 1;
                }
                None => report.lines.push(cleaned),
            }
        }

        report
    }
}

/// Clean `raw` with default settings
pub fn clean(raw: &str, mode: CleanMode) -> String {
    ScriptCleaner::default().clean_with_mode(raw, mode)
}

/// [`clean`] for a script that may not have been produced yet
pub fn clean_optional(raw: Option<&str>, mode: CleanMode) -> String {
    raw.map(|raw| clean(raw, mode)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "[0:00] Intro - Visual: Upbeat intro music\n\nHey everyone! Welcome back.\n\n**Visual**: Show screenshots\n\n(Visual cue: zoom in)\n\nThanks for watching!";

    fn basic(raw: &str) -> String {
        clean(raw, CleanMode::Basic)
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(basic(""), "");
        assert_eq!(clean("", CleanMode::Enhanced), "");
        assert_eq!(clean_optional(None, CleanMode::Basic), "");
        assert_eq!(clean_optional(None, CleanMode::Enhanced), "");
        assert_eq!(basic("   \n\n \t \n"), "");
    }

    #[test]
    fn test_timestamp_prefix() {
        assert_eq!(basic("[0:15] - Hello there"), "Hello there");
    }

    #[test]
    fn test_stage_direction_line_dropped() {
        let raw = "Before\n(Visual cue: Animation shows the process)\nAfter";
        assert_eq!(basic(raw), "Before\nAfter");
    }

    #[test]
    fn test_speaker_label() {
        assert_eq!(
            basic("Speaker 1: This is really interesting stuff."),
            "This is really interesting stuff."
        );
    }

    #[test]
    fn test_headings_dropped() {
        assert_eq!(basic("## How To Make Money\nStart here."), "Start here.");
        assert_eq!(basic("**[0:00-0:15] Intro - Hook**\nStart here."), "Start here.");
    }

    #[test]
    fn test_contraction_repair() {
        assert!(basic("we\"re going").contains("we're going"));
    }

    #[test]
    fn test_end_to_end_sample() {
        assert_eq!(basic(SAMPLE), "Hey everyone! Welcome back.\nThanks for watching!");
    }

    #[test]
    fn test_plain_text_keeps_every_word() {
        let raw = "Most people never start.\n\nThey wait for the perfect moment, and it never comes.\n\nSo today we fix that, one small step at a time.";
        let cleaned = basic(raw);
        let words = |s: &str| s.split_whitespace().map(str::to_string).collect::<Vec<_>>();
        assert_eq!(words(&cleaned), words(raw));
        assert_eq!(
            cleaned,
            "Most people never start.\nThey wait for the perfect moment, and it never comes.\nSo today we fix that, one small step at a time."
        );
    }

    #[test]
    fn test_basic_is_idempotent() {
        let inputs = [
            SAMPLE,
            "Speaker 1: This is really interesting stuff.",
            "- **Host:** We\"re *live* (music plays) [0:30]\n- *(pause)*\n***Big*** news",
            "## Title\n**Narrator:** Visual: nothing\nLook at this (B-roll visual) now.",
            "a lone * star and an open [ bracket\n\\\"escaped\\\" quotes",
            "Visual - Audio: nope\n`code` and __under__ and ~~strike~~",
            "• • • • • • Keep going",
            "Host: Host: Host: Host: Host: Hello",
            "- - - * * * • • • Stacked bullets",
            "Speaker 1: Host: **Narrator:** Guest: Deep labels",
            "*************word*************",
            "_________________word_________________",
        ];
        for raw in inputs {
            let once = basic(raw);
            assert_eq!(basic(&once), once, "input: {raw:?}");
        }
    }

    #[test]
    fn test_repeated_artifacts_fully_removed() {
        assert_eq!(basic("• • • • • • Keep going"), "Keep going");
        assert_eq!(basic("Host: Host: Host: Host: Host: Hello"), "Hello");
        assert_eq!(basic(&format!("{0}word{0}", "*".repeat(13))), "word");
    }

    #[test]
    fn test_spoken_lines_near_keywords_survive() {
        assert_eq!(
            basic("Host: Music - it's everywhere in this city."),
            "Music - it's everywhere in this city."
        );
        assert_eq!(
            basic("Tip: Audio/video sync matters a lot."),
            "Tip: Audio/video sync matters a lot."
        );
        assert_eq!(
            basic("**Sound advice:** always save money."),
            "Sound advice: always save money."
        );
    }

    #[test]
    fn test_italic_stage_direction_dropped_after_unwrap() {
        assert_eq!(basic("Keep going\n*(pause for effect)*\nDone"), "Keep going\nDone");
    }

    #[test]
    fn test_residual_direction_dropped() {
        assert_eq!(basic("**Narrator:** Visual: city skyline\nHello"), "Hello");
        assert_eq!(basic("- Cut to: close up\nHello"), "Hello");
    }

    #[test]
    fn test_crlf_input() {
        assert_eq!(basic("Line one\r\n\r\nLine two\r\n"), "Line one\nLine two");
    }

    #[test]
    fn test_enhanced_breaks_after_question() {
        let raw = "Speaker 1: Ever wondered why nobody talks about this?\nIt comes down to habits.";
        let out = clean(raw, CleanMode::Enhanced);
        assert!(out.contains("Ever wondered why nobody talks about this?\n\n"));
    }

    #[test]
    fn test_enhanced_collapses_paragraph_gaps() {
        let raw = "What is this?\n\n\n\n\nNext, the answer.\n\n\n\nAnd more.";
        let cleaner = ScriptCleaner::new(CleanerConfig {
            mode: CleanMode::Enhanced,
            random_breaks: RandomBreaks::Disabled,
        });
        assert_eq!(cleaner.clean(raw), "What is this?\n\nNext, the answer.\n\nAnd more.");
    }

    #[test]
    fn test_enhanced_is_reproducible_with_seed() {
        let raw = (0..20)
            .map(|i| format!("Point {i} is worth spending a little time on"))
            .collect::<Vec<_>>()
            .join("\n");
        let cleaner = ScriptCleaner::new(CleanerConfig {
            mode: CleanMode::Enhanced,
            random_breaks: RandomBreaks::Seeded(42),
        });
        assert_eq!(cleaner.clean(&raw), cleaner.clean(&raw));
    }

    #[test]
    fn test_filter_report_counts() {
        let report = ScriptCleaner::default().filter(SAMPLE);
        assert_eq!(report.lines.len(), 2);
        assert_eq!(report.dropped, 3);
        assert_eq!(report.blank, 4);
        assert_eq!(report.input_lines(), 9);
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("basic".parse::<CleanMode>(), Ok(CleanMode::Basic));
        assert_eq!(" Enhanced ".parse::<CleanMode>(), Ok(CleanMode::Enhanced));
        assert_eq!("ai".parse::<CleanMode>(), Ok(CleanMode::Enhanced));
        assert!("fancy".parse::<CleanMode>().is_err());
        assert_eq!(CleanMode::Enhanced.to_string(), "enhanced");
    }

    #[test]
    fn test_garbage_never_panics() {
        let garbage = [
            "**",
            "[",
            "(((",
            "]]]]",
            "#######",
            "♪",
            "_",
            "\\",
            "\u{0}\u{1}\u{7f}",
            "[0:00",
            "****Visual****:",
        ];
        for raw in garbage {
            let _ = clean(raw, CleanMode::Basic);
            let _ = clean(raw, CleanMode::Enhanced);
        }
    }
}
