//! Paragraph re-segmentation for voice-over reading
//!
//! Takes the lines left by the filter pass and puts blank lines back where a
//! speaker would naturally pause. Paragraph breaks are a readability aid, so
//! the rules are heuristics; only the optional random break touches the
//! random source.

use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use regex::Regex;

use super::lexicon::{alternation, TOPIC_SHIFTS, TRANSITION_WORDS};

/// Seed used when enhanced cleaning is asked for without an explicit seed
pub const DEFAULT_BREAK_SEED: u64 = 0x5c41_97ed;

const EXCLAMATION_MIN_CHARS: usize = 50;
const SENTENCE_MIN_CHARS: usize = 80;
const RANDOM_MIN_CHARS: usize = 30;
const RANDOM_EVERY: usize = 3;
const RANDOM_PROBABILITY: f64 = 0.5;

static TRANSITION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)^(?:{})\b", alternation(TRANSITION_WORDS))).unwrap()
});

static TOPIC_SHIFT: Lazy<Regex> = Lazy::new(|| {
    // "bro," already ends on punctuation; the word-ish entries need a boundary
    let entries = TOPIC_SHIFTS
        .iter()
        .map(|entry| {
            let escaped = regex::escape(entry).replace(' ', r"\s+");
            if entry.ends_with(',') {
                escaped
            } else {
                format!(r"{escaped}\b")
            }
        })
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)^(?:{entries})")).unwrap()
});

static EXCESS_BLANK_LINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

/// Source of the occasional random paragraph break
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RandomBreaks {
    /// Never insert random breaks
    Disabled,
    /// Reproducible breaks from a seeded generator
    Seeded(u64),
    /// Fresh breaks on every call
    Entropy,
}

impl Default for RandomBreaks {
    fn default() -> Self {
        RandomBreaks::Seeded(DEFAULT_BREAK_SEED)
    }
}

impl RandomBreaks {
    /// Build the generator for one segmentation run
    pub fn rng(&self) -> Option<StdRng> {
        match self {
            RandomBreaks::Disabled => None,
            RandomBreaks::Seeded(seed) => Some(StdRng::seed_from_u64(*seed)),
            RandomBreaks::Entropy => Some(StdRng::from_entropy()),
        }
    }
}

/// Why a blank line was placed after a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakReason {
    Question,
    Exclamation,
    LongSentence,
    Transition,
    TopicShift,
    Random,
}

/// Decide, for every line, whether a paragraph break follows it
///
/// The last line never gets a break.
pub fn plan_breaks<S, R>(lines: &[S], mut rng: Option<&mut R>) -> Vec<Option<BreakReason>>
where
    S: AsRef<str>,
    R: Rng,
{
    let mut plan = Vec::with_capacity(lines.len());
    let mut previous_break = false;

    for (index, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        let Some(next) = lines.get(index + 1).map(|l| l.as_ref()) else {
            plan.push(None);
            break;
        };
        let chars = line.chars().count();

        let reason = if line.ends_with('?') {
            Some(BreakReason::Question)
        } else if line.ends_with('!') && chars > EXCLAMATION_MIN_CHARS {
            Some(BreakReason::Exclamation)
        } else if chars > SENTENCE_MIN_CHARS && line.ends_with('.') {
            Some(BreakReason::LongSentence)
        } else if TRANSITION.is_match(next) {
            Some(BreakReason::Transition)
        } else if TOPIC_SHIFT.is_match(next) {
            Some(BreakReason::TopicShift)
        } else if index % RANDOM_EVERY == 0 && chars > RANDOM_MIN_CHARS && !previous_break {
            match rng.as_deref_mut() {
                Some(rng) => rng
                    .gen_bool(RANDOM_PROBABILITY)
                    .then_some(BreakReason::Random),
                None => None,
            }
        } else {
            None
        };

        previous_break = reason.is_some();
        plan.push(reason);
    }

    plan
}

/// Join filtered lines, separating paragraphs with a single blank line
pub fn segment<S: AsRef<str>>(lines: &[S], breaks: &RandomBreaks) -> String {
    let mut rng = breaks.rng();
    segment_with(lines, rng.as_mut())
}

/// [`segment`] with a caller-provided random source
pub fn segment_with<S, R>(lines: &[S], rng: Option<&mut R>) -> String
where
    S: AsRef<str>,
    R: Rng,
{
    let plan = plan_breaks(lines, rng);
    let mut out = String::new();

    for (line, reason) in lines.iter().zip(plan) {
        out.push_str(line.as_ref());
        out.push('\n');
        if let Some(reason) = reason {
            tracing::trace!(?reason, "paragraph break");
            out.push('\n');
        }
    }

    EXCESS_BLANK_LINES
        .replace_all(&out, "\n\n")
        .trim()
        .to_string()
}
