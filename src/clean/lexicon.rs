//! Word lists consulted by the cleaning rules
//!
//! Everything here is matched case-insensitively. The regexes in
//! [`super::rules`] and [`super::paragraphs`] are built from these lists, so
//! tuning a lexicon never means touching a pattern by hand.

/// Production channels that mark a line or clause as a cue rather than speech
pub const PRODUCTION_KEYWORDS: &[&str] = &["visual", "audio", "music", "sound", "sfx"];

/// Substrings that turn an inline `( ... )` or `[ ... ]` group into a cue
pub const CUE_KEYWORDS: &[&str] = &["visual", "music", "sound", "audio", "animation"];

/// Words that may follow a production keyword inside a bold marker
/// (`**Sound effect:**`, `**Music cue:**`)
pub const CUE_SUFFIXES: &[&str] = &[
    "effect", "effects", "cue", "cues", "note", "notes", "direction", "track", "design", "fx",
    "change", "transition", "only", "in", "out",
];

/// Labels stripped from the start of a spoken line
///
/// `speaker` is always followed by a number (`Speaker 2:`).
pub const SPEAKER_LABELS: &[&str] = &["host", "narrator", "interviewer", "guest"];

/// Directions that may survive the substitutions at the start of a line
pub const STAGE_DIRECTIONS: &[&str] = &[
    "visual", "audio", "show", "display", "cut to", "fade", "zoom", "pan",
];

/// Suffixes repaired when an escaped `"` stands in for an apostrophe
pub const CONTRACTION_SUFFIXES: &[&str] = &["re", "s", "t", "ll", "ve", "d", "m"];

/// Openers that start a new thought in spoken scripts
pub const TRANSITION_WORDS: &[&str] = &[
    "first",
    "next",
    "finally",
    "alright",
    "and",
    "so",
    "now",
    "here's",
    "listen",
    "look",
    "remember",
    "don't forget",
];

/// Openers that shift topic; the trailing comma is part of the marker
pub const TOPIC_SHIFTS: &[&str] = &[
    "bro,",
    "hey,",
    "listen,",
    "now,",
    "here's the thing",
    "the key",
    "the bottom line",
];

/// Smart punctuation folded to ASCII before contraction repair
pub const QUOTE_FOLDS: &[(char, &str)] = &[
    ('\u{2018}', "'"),  // left single quote
    ('\u{2019}', "'"),  // right single quote
    ('\u{201a}', "'"),  // low single quote
    ('\u{2032}', "'"),  // prime
    ('\u{201c}', "\""), // left double quote
    ('\u{201d}', "\""), // right double quote
    ('\u{201e}', "\""), // low double quote
    ('\u{00ab}', "\""), // left guillemet
    ('\u{00bb}', "\""), // right guillemet
];

/// Join a lexicon into a regex alternation, escaping each entry
///
/// Spaces become `\s+` so `cut to` also matches `Cut  to`.
pub fn alternation(words: &[&str]) -> String {
    words
        .iter()
        .map(|w| regex::escape(w).replace(' ', r"\s+"))
        .collect::<Vec<_>>()
        .join("|")
}
