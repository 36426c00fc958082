//! Diagnostic rendering of a knowledge state.
//!
//! ```text
//! A: [R, ,B,K,▲,■, ,★]
//! O: [R, ,B,K, , ,●, ]
//! ```

use serde::{Deserialize, Serialize};

use super::mask::{Knowledge, SubMask};
use crate::quality::Quality;

/// Labels and glyphs used by [`Deduction::explain_with`](super::Deduction::explain_with).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Prefix of the arbiter line.
    pub arbiter_label: String,

    /// Prefix of the opponent line.
    pub opponent_label: String,

    /// One glyph per quality, canonical order.
    pub glyphs: [char; 8],

    /// Shown in place of a ruled-out quality.
    pub blank: char,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            arbiter_label: "A".to_string(),
            opponent_label: "O".to_string(),
            glyphs: Quality::ALL.map(Quality::glyph),
            blank: ' ',
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set both line labels.
    #[must_use]
    pub fn with_labels(mut self, arbiter: impl Into<String>, opponent: impl Into<String>) -> Self {
        self.arbiter_label = arbiter.into();
        self.opponent_label = opponent.into();
        self
    }

    /// Replace the glyph table.
    #[must_use]
    pub fn with_glyphs(mut self, glyphs: [char; 8]) -> Self {
        self.glyphs = glyphs;
        self
    }

    #[must_use]
    pub fn with_blank(mut self, blank: char) -> Self {
        self.blank = blank;
        self
    }

    /// `[g,g,...]` for one sub-mask.
    pub fn render_sub_mask(&self, mask: SubMask) -> String {
        let slots: Vec<String> = Quality::ALL
            .iter()
            .map(|&q| {
                let glyph = if mask.contains(q) {
                    self.glyphs[q.index()]
                } else {
                    self.blank
                };
                glyph.to_string()
            })
            .collect();
        format!("[{}]", slots.join(","))
    }

    /// Arbiter line, newline, opponent line.
    pub fn render(&self, knowledge: Knowledge) -> String {
        format!(
            "{}: {}\n{}: {}",
            self.arbiter_label,
            self.render_sub_mask(knowledge.arbiter),
            self.opponent_label,
            self.render_sub_mask(knowledge.opponent),
        )
    }
}
