//! Scripts as they come back from generation
//!
//! A [`Script`] holds only the raw text. Clean text is derived on demand and
//! never stored, so toggling between raw and clean is a property of the
//! [`ScriptView`], not of the script.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use crate::clean::{CleanMode, ScriptCleaner};

/// Where a script's text came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptKind {
    Transcript,
    StyleAnalysis,
    Generated,
    Refined,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    kind: ScriptKind,
    raw: String,
}

impl Script {
    pub fn new(kind: ScriptKind, raw: impl Into<String>) -> Self {
        Self {
            kind,
            raw: raw.into(),
        }
    }

    pub fn kind(&self) -> ScriptKind {
        self.kind
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn is_empty(&self) -> bool {
        self.raw.trim().is_empty()
    }

    pub fn cleaned(&self, cleaner: &ScriptCleaner, mode: CleanMode) -> String {
        cleaner.clean_with_mode(&self.raw, mode)
    }

    /// Text to show for the current toggle state
    pub fn render<'a>(&'a self, view: &ScriptView, cleaner: &ScriptCleaner) -> Cow<'a, str> {
        if view.show_clean {
            Cow::Owned(self.cleaned(cleaner, view.mode))
        } else {
            Cow::Borrowed(&self.raw)
        }
    }
}

/// Ephemeral display state: raw or clean, and which clean
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptView {
    pub show_clean: bool,
    pub mode: CleanMode,
}

impl ScriptView {
    pub fn clean(mode: CleanMode) -> Self {
        Self {
            show_clean: true,
            mode,
        }
    }

    pub fn toggle(&mut self) {
        self.show_clean = !self.show_clean;
    }
}
