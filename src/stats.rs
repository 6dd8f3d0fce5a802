//! Reading statistics for a cleaned script
//!
//! Counts are taken from the text as given, so run them on cleaned output to
//! get spoken-word figures.

use colored::*;
use serde::Serialize;
use std::fmt;

use crate::config::DEFAULT_WORDS_PER_MINUTE;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScriptStats {
    pub words: usize,
    pub characters: usize,
    pub lines: usize,
    pub paragraphs: usize,
    /// Spoken length at `words_per_minute`
    pub estimated_seconds: u64,
    pub words_per_minute: u32,
}

impl ScriptStats {
    pub fn from_text(text: &str) -> Self {
        Self::with_pace(text, DEFAULT_WORDS_PER_MINUTE)
    }

    pub fn with_pace(text: &str, words_per_minute: u32) -> Self {
        let words = text.split_whitespace().count();
        let lines = text.lines().filter(|l| !l.trim().is_empty()).count();

        let mut paragraphs = 0;
        let mut in_paragraph = false;
        for line in text.lines() {
            let blank = line.trim().is_empty();
            if !blank && !in_paragraph {
                paragraphs += 1;
            }
            in_paragraph = !blank;
        }

        let pace = u64::from(words_per_minute.max(1));
        // round up so a short script never reads as zero seconds
        let estimated_seconds = (words as u64 * 60).div_ceil(pace);

        Self {
            words,
            characters: text.chars().count(),
            lines,
            paragraphs,
            estimated_seconds,
            words_per_minute,
        }
    }
}

/// Format seconds as `m:ss`, or `h:mm:ss` past an hour
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{}:{:02}", minutes, secs)
    }
}

impl fmt::Display for ScriptStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", "Script statistics".bold())?;
        writeln!(f, "  Words:       {}", self.words)?;
        writeln!(f, "  Characters:  {}", self.characters)?;
        writeln!(f, "  Lines:       {}", self.lines)?;
        writeln!(f, "  Paragraphs:  {}", self.paragraphs)?;
        write!(
            f,
            "  Read time:   {} at {} wpm",
            format_duration(self.estimated_seconds).cyan(),
            self.words_per_minute
        )
    }
}
