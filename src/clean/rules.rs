//! Ordered line rules for the filter pass
//!
//! Two tables drive the filter: [`DROP_RULES`] decide whether a trimmed line is
//! pure production material and disappears, and [`LINE_RULES`] rewrite the
//! lines that survive. Rules run top to bottom; later rules assume the
//! structural markers handled by earlier ones are already gone.

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

use super::lexicon::{
    alternation, CONTRACTION_SUFFIXES, CUE_KEYWORDS, CUE_SUFFIXES, PRODUCTION_KEYWORDS,
    QUOTE_FOLDS, SPEAKER_LABELS, STAGE_DIRECTIONS,
};

/// `m:ss`, `mm:ss`, `h:mm:ss`, optionally a `start-end` range
const TIMESTAMP: &str =
    r"\d{1,2}:\d{2}(?::\d{2})?(?:\s*[-–—]\s*\d{1,2}:\d{2}(?::\d{2})?)?";

/// `Speaker 1:`, `**Host:**` and friends at the start of a line
fn speaker_prefix() -> String {
    format!(
        r"(?i)^\**\s*(?:speaker\s*\d+|{})\s*\**\s*:",
        alternation(SPEAKER_LABELS)
    )
}

static SPEAKER_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(&speaker_prefix()).unwrap());

/// `Music`, `Sound effect`, `Visual cue`: a channel name as used in a bold marker
fn production_marker() -> String {
    format!(
        r"(?:{})s?(?:\s+(?:{}))?",
        alternation(PRODUCTION_KEYWORDS),
        alternation(CUE_SUFFIXES)
    )
}

/// A pattern that, when it matches a whole trimmed line, removes that line
pub struct DropRule {
    pub name: &'static str,
    pattern: Regex,
    /// Not applied to lines opening with a speaker label
    skips_spoken: bool,
}

impl DropRule {
    fn new(name: &'static str, pattern: &str) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).unwrap(),
            skips_spoken: false,
        }
    }

    fn unless_spoken(mut self) -> Self {
        self.skips_spoken = true;
        self
    }

    pub fn matches(&self, line: &str) -> bool {
        self.pattern.is_match(line)
    }
}

enum Action {
    Replace(Regex, &'static str),
    Map(fn(&str) -> String),
}

/// One substitution step applied to a surviving line
pub struct LineRule {
    pub name: &'static str,
    action: Action,
}

impl LineRule {
    fn replace(name: &'static str, pattern: &str, with: &'static str) -> Self {
        Self {
            name,
            action: Action::Replace(Regex::new(pattern).unwrap(), with),
        }
    }

    fn map(name: &'static str, f: fn(&str) -> String) -> Self {
        Self {
            name,
            action: Action::Map(f),
        }
    }

    pub fn apply<'a>(&self, line: &'a str) -> Cow<'a, str> {
        match &self.action {
            Action::Replace(re, with) => re.replace_all(line, *with),
            Action::Map(f) => {
                let mapped = f(line);
                if mapped == line {
                    Cow::Borrowed(line)
                } else {
                    Cow::Owned(mapped)
                }
            }
        }
    }
}

pub static DROP_RULES: Lazy<Vec<DropRule>> = Lazy::new(|| {
    let production = alternation(PRODUCTION_KEYWORDS);
    let marker = production_marker();
    vec![
        DropRule::new(
            "timestamp_only",
            &format!(r"^(?:\*\*)?\[{TIMESTAMP}\](?:\*\*)?$"),
        ),
        DropRule::new(
            "bold_timestamp_header",
            &format!(r"^\*\*\s*\[{TIMESTAMP}\].*\*\*\s*:?$"),
        ),
        DropRule::new("markdown_heading", r"^#{1,6}(?:\s|$)"),
        DropRule::new(
            "section_header_dash",
            &format!(r"(?i)^\**.*?\s[-–—]\s*\**(?:{production})s?\**\s*:"),
        ),
        // after a separator only another channel or a short cue tail may follow
        DropRule::new(
            "section_header_label",
            &format!(
                r"(?i)^\**\w[\w '&/-]{{0,40}}?\**\s*:\s*\**\s*(?:{production})s?\b\s*\**\s*(?:[:(]|$|[/|&\-–—]\s*\**\s*(?:(?:{production})s?\b\s*\**\s*(?::|$)|(?:[^\s.!?]+\s*){{1,4}}$))"
            ),
        )
        .unless_spoken(),
        DropRule::new(
            "bold_production_marker",
            &format!(r"(?i)^\*\*\s*{marker}\s*(?:\*\*\s*:|:\s*\*\*)"),
        ),
        DropRule::new("lone_parenthetical", r"^\([^()]*\)$"),
        DropRule::new("lone_bracket", r"^\[[^\[\]]*\]$"),
        DropRule::new("music_notes", r"^[♪♫](?:[^♪♫]*[♪♫])?$"),
    ]
});

/// Directions that can only be judged once the substitutions have run
static RESIDUAL_DIRECTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)^(?:{})\s*:", alternation(STAGE_DIRECTIONS))).unwrap()
});

pub static LINE_RULES: Lazy<Vec<LineRule>> = Lazy::new(|| {
    let marker = production_marker();
    let cues = alternation(CUE_KEYWORDS);
    vec![
        LineRule::replace(
            "leading_timestamp",
            &format!(r"^(?:\*\*)?\[{TIMESTAMP}\](?:\*\*)?\s*(?:[-–—:]\s*)?"),
            "",
        ),
        LineRule::replace(
            "inline_timestamp",
            &format!(r"\s*(?:\*\*)?\[{TIMESTAMP}\](?:\*\*)?"),
            "",
        ),
        LineRule::replace(
            "speaker_label",
            &format!(r"{}\s*\**\s*", speaker_prefix()),
            "",
        ),
        LineRule::replace(
            "bold_production_clause",
            &format!(
                r"(?i)\s*\*\*\s*{marker}\s*(?:\*\*\s*:|:\s*\*\*)[^.!?]*[.!?]?"
            ),
            "",
        ),
        LineRule::replace(
            "parenthetical_cue",
            &format!(r"(?i)\s*\([^()]*(?:{cues})[^()]*\)"),
            "",
        ),
        LineRule::replace(
            "bracket_cue",
            &format!(r"(?i)\s*\[[^\[\]]*(?:{cues})[^\[\]]*\]"),
            "",
        ),
        LineRule::replace("bullet", r"^(?:•\s*|[-*]\s+)", ""),
        LineRule::replace("bold", r"\*\*([^*]+?)\*\*", "$1"),
        LineRule::replace("underline", r"__([^_]+?)__", "$1"),
        LineRule::replace("strikethrough", r"~~([^~]+?)~~", "$1"),
        LineRule::replace("inline_code", r"`([^`]+)`", "$1"),
        LineRule::replace("italic_star", r"\*([^*\s](?:[^*]*[^*\s])?)\*", "$1"),
        LineRule::replace(
            "italic_underscore",
            r"(^|[^\w])_([^_\s](?:[^_]*[^_\s])?)_([^\w]|$)",
            "$1$2$3",
        ),
        LineRule::replace("escaped_quote", r#"\\(["'])"#, "$1"),
        LineRule::map("smart_quotes", fold_quotes),
        LineRule::replace(
            "contraction_repair",
            &format!(r#"(?i)(\w)"({})\b"#, alternation(CONTRACTION_SUFFIXES)),
            "$1'$2",
        ),
        LineRule::replace("whitespace", r"\s+", " "),
        LineRule::map("trim", |line| line.trim().to_string()),
    ]
});

/// Name of the first drop rule matching `line`, if any
pub fn dropped_by(line: &str) -> Option<&'static str> {
    let spoken = SPEAKER_PREFIX.is_match(line);
    DROP_RULES
        .iter()
        .find(|rule| !(spoken && rule.skips_spoken) && rule.matches(line))
        .map(|rule| rule.name)
}

/// Whether a cleaned line still opens with a stage direction
pub fn is_residual_direction(line: &str) -> bool {
    RESIDUAL_DIRECTION.is_match(line)
}

/// Run [`LINE_RULES`] over `line` until it stops changing
///
/// No rule lengthens a line, and the length-preserving ones (quote folding,
/// contraction repair, whitespace) never undo each other, so every changing
/// pass makes progress.
pub fn apply_line_rules(line: &str) -> String {
    let mut current = line.to_string();
    for _ in 0..=2 * line.len() {
        let mut next = current.clone();
        for rule in LINE_RULES.iter() {
            let rewritten = match rule.apply(&next) {
                Cow::Owned(s) if s != next => Some(s),
                _ => None,
            };
            if let Some(s) = rewritten {
                tracing::trace!(rule = rule.name, "line rule applied");
                next = s;
            }
        }
        if next == current {
            break;
        }
        current = next;
    }
    current
}

fn fold_quotes(line: &str) -> String {
    let mut folded = String::with_capacity(line.len());
    for c in line.chars() {
        match QUOTE_FOLDS.iter().find(|(from, _)| *from == c) {
            Some((_, to)) => folded.push_str(to),
            None => folded.push(c),
        }
    }
    folded
}
