//! The deduction engine.
//!
//! A `Deduction` tracks, from one player's point of view, which colors and
//! shapes are still possible for the arbiter ("bag") and for the opponent.
//! Mutators only ever clear bits; to explore a hypothesis, clone first and
//! mutate the clone.
//!
//! ## Example
//!
//! ```
//! use chip_deduction::{Color, Deduction, Shape, Target};
//!
//! let mut deduction = Deduction::new();
//! deduction
//!     .nobody(Color::Green)
//!     .opponent(Shape::Circle, true);
//!
//! let guesses = deduction.enumerate(Target::Opponent);
//! assert_eq!(guesses.len(), 3);
//! assert!(guesses.iter().all(|g| g.shape == Shape::Circle));
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, trace};

use super::guess::{Guess, GuessOption, Target};
use super::mask::Knowledge;
use super::render::RenderConfig;
use crate::error::{DeductionError, Result};
use crate::quality::{Assertion, Basis, Color, Quality, Shape};

/// One player's knowledge about the arbiter's and opponent's chips.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u16", into = "u16")]
pub struct Deduction {
    knowledge: Knowledge,
}

impl Deduction {
    /// Fresh round: nothing ruled out.
    #[must_use]
    pub fn new() -> Self {
        Self::from_raw(Knowledge::BLANK_RAW)
    }

    /// Resume from a raw state previously read with [`Deduction::raw`].
    #[must_use]
    pub fn from_raw(raw: u16) -> Self {
        Self {
            knowledge: Knowledge::from_raw(raw),
        }
    }

    /// Raw 16-bit state: arbiter in the high byte, opponent in the low byte.
    #[must_use]
    pub fn raw(&self) -> u16 {
        self.knowledge.raw()
    }

    #[must_use]
    pub fn knowledge(&self) -> Knowledge {
        self.knowledge
    }

    // =========================================================================
    // Mutators
    // =========================================================================

    /// Nobody has `quality`: rule it out for both the arbiter and the opponent.
    pub fn nobody(&mut self, quality: impl Into<Quality>) -> &mut Self {
        let quality = quality.into();
        let before = self.raw();

        self.knowledge.arbiter.exclude(quality);
        self.knowledge.opponent.exclude(quality);

        trace!(
            %quality,
            before,
            after = self.raw(),
            "nobody has"
        );
        self
    }

    /// The opponent claims to hold `quality`; `believe` is whether we trust it.
    ///
    /// Believed: the arbiter cannot hold `quality`, and within `quality`'s
    /// dimension the opponent can hold nothing else. The opponent's other
    /// dimension is untouched.
    ///
    /// Rejected: only the opponent loses `quality`.
    pub fn opponent(&mut self, quality: impl Into<Quality>, believe: bool) -> &mut Self {
        let quality = quality.into();
        let before = self.raw();

        if believe {
            self.knowledge.arbiter.exclude(quality);
            self.knowledge.opponent.confine(quality);
        } else {
            self.knowledge.opponent.exclude(quality);
        }

        trace!(
            %quality,
            believe,
            before,
            after = self.raw(),
            "opponent has"
        );
        self
    }

    /// Apply an assertion the opponent submitted, with our trust decision.
    ///
    /// A rejected `nobody_has` claim only says "somebody has it", which a
    /// per-quality mask cannot express; the state is left alone.
    pub fn consider(&mut self, assertion: Assertion, believe: bool) -> &mut Self {
        match (assertion.basis, believe) {
            (Basis::NobodyHas, true) => self.nobody(assertion.quality),
            (Basis::NobodyHas, false) => {
                debug!(%assertion, "rejected nobody_has claim carries no mask information");
                self
            }
            (Basis::IHave, believe) => self.opponent(assertion.quality, believe),
        }
    }

    /// Apply the arbiter's hint. The arbiter only ever hints `nobody_has`.
    pub fn hint(&mut self, assertion: Assertion) -> Result<&mut Self> {
        match assertion.basis {
            Basis::NobodyHas => Ok(self.nobody(assertion.quality)),
            found => Err(DeductionError::UnexpectedBasis {
                expected: Basis::NobodyHas,
                found,
            }),
        }
    }

    /// The opponent is known to hold `quality` (the round's extra secret).
    pub fn reveal(&mut self, quality: impl Into<Quality>) -> &mut Self {
        self.opponent(quality, true)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Could `target` still hold `quality`?
    #[must_use]
    pub fn is_possible(&self, target: Target, quality: impl Into<Quality>) -> bool {
        self.knowledge.get(target).contains(quality.into())
    }

    /// Colors `target` could still hold, canonical order.
    #[must_use]
    pub fn colors(&self, target: Target) -> SmallVec<[Color; 4]> {
        self.knowledge.get(target).colors()
    }

    /// Shapes `target` could still hold, canonical order.
    #[must_use]
    pub fn shapes(&self, target: Target) -> SmallVec<[Shape; 4]> {
        self.knowledge.get(target).shapes()
    }

    /// Every (color, shape) pair still consistent for `target`.
    ///
    /// Colors form the outer loop and shapes the inner loop, both in
    /// canonical order. Empty if either dimension has been ruled out entirely.
    #[must_use]
    pub fn enumerate(&self, target: Target) -> SmallVec<[Guess; 16]> {
        let mask = self.knowledge.get(target);
        let shapes = mask.shapes();

        mask.colors()
            .into_iter()
            .flat_map(|color| {
                shapes
                    .iter()
                    .map(move |&shape| Guess::new(target, color, shape))
            })
            .collect()
    }

    /// No consistent guess remains for `target`.
    #[must_use]
    pub fn is_exhausted(&self, target: Target) -> bool {
        let mask = self.knowledge.get(target);
        mask.colors().is_empty() || mask.shapes().is_empty()
    }

    /// Every guess a player could make: bag guesses, opponent guesses, abstain.
    #[must_use]
    pub fn guess_options(&self) -> Vec<GuessOption> {
        Target::ALL
            .into_iter()
            .flat_map(|target| self.enumerate(target))
            .map(GuessOption::Guess)
            .chain(std::iter::once(GuessOption::Abstain))
            .collect()
    }

    /// This state only narrows `earlier`: no bit is set here that is clear there.
    #[must_use]
    pub fn refines(&self, earlier: &Deduction) -> bool {
        self.knowledge.is_subset_of(earlier.knowledge)
    }

    /// Two-line diagnostic rendering with the default glyphs.
    #[must_use]
    pub fn explain(&self) -> String {
        self.explain_with(&RenderConfig::default())
    }

    #[must_use]
    pub fn explain_with(&self, config: &RenderConfig) -> String {
        config.render(self.knowledge)
    }
}

impl Default for Deduction {
    fn default() -> Self {
        Self::new()
    }
}

impl From<u16> for Deduction {
    fn from(raw: u16) -> Self {
        Self::from_raw(raw)
    }
}

impl From<Deduction> for u16 {
    fn from(d: Deduction) -> Self {
        d.raw()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Quality = Quality::Color(Color::Red);
    const GREEN: Quality = Quality::Color(Color::Green);
    const STAR: Quality = Quality::Shape(Shape::Star);
    const CIRCLE: Quality = Quality::Shape(Shape::Circle);

    #[test]
    fn test_new_is_blank() {
        let d = Deduction::new();
        assert_eq!(d.raw(), 0xFFFF);
        assert_eq!(d, Deduction::default());
        assert_eq!(Deduction::from(0x1234u16).raw(), 0x1234);
    }

    #[test]
    fn test_nobody_clears_both_sides() {
        let mut d = Deduction::new();
        d.nobody(RED);
        assert_eq!(d.raw(), 0x7F7F);
        assert!(!d.is_possible(Target::Bag, RED));
        assert!(!d.is_possible(Target::Opponent, RED));
    }

    #[test]
    fn test_nobody_is_idempotent() {
        let mut once = Deduction::new();
        once.nobody(STAR);
        let mut twice = Deduction::new();
        twice.nobody(STAR).nobody(STAR);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_opponent_believed_color() {
        let mut d = Deduction::new();
        d.opponent(RED, true);
        assert_eq!(d.raw(), 0x7F8F);
        assert_eq!(d.colors(Target::Opponent).as_slice(), &[Color::Red]);
        assert_eq!(d.shapes(Target::Opponent).len(), 4);
        assert!(!d.is_possible(Target::Bag, RED));
    }

    #[test]
    fn test_opponent_believed_shape() {
        let mut d = Deduction::new();
        d.opponent(STAR, true);
        assert_eq!(d.raw(), 0xFEF1);
        assert_eq!(d.shapes(Target::Opponent).as_slice(), &[Shape::Star]);
        assert_eq!(d.colors(Target::Opponent).len(), 4);
    }

    #[test]
    fn test_believed_matches_combined_mask() {
        for q in Quality::ALL {
            let mut d = Deduction::new();
            d.nobody(GREEN).opponent(q, true);

            let combined = {
                let arbiter = !q.mask(false) as u16;
                let opponent = q.mask(true) as u16;
                0xBFBF & ((arbiter << 8) | opponent)
            };
            assert_eq!(d.raw(), combined, "quality {q}");
        }
    }

    #[test]
    fn test_opponent_rejected() {
        let mut d = Deduction::new();
        d.opponent(RED, false);
        assert_eq!(d.raw(), 0xFF7F);
    }

    #[test]
    fn test_consider_routes_by_basis() {
        let mut d = Deduction::new();
        d.consider(Assertion::nobody_has(Color::Blue), false);
        assert_eq!(d.raw(), 0xFFFF);

        d.consider(Assertion::nobody_has(Color::Blue), true);
        assert_eq!(d.raw(), 0xDFDF);

        let mut a = Deduction::new();
        a.consider(Assertion::i_have(Shape::Circle), true);
        let mut b = Deduction::new();
        b.opponent(CIRCLE, true);
        assert_eq!(a, b);
    }

    #[test]
    fn test_hint_accepts_only_nobody_has() {
        let mut d = Deduction::new();
        d.hint(Assertion::nobody_has(Shape::Triangle)).unwrap();
        assert_eq!(d.raw(), 0xF7F7);

        let err = d.hint(Assertion::i_have(Shape::Triangle)).unwrap_err();
        assert_eq!(
            err,
            DeductionError::UnexpectedBasis {
                expected: Basis::NobodyHas,
                found: Basis::IHave,
            }
        );
        assert_eq!(d.raw(), 0xF7F7);
    }

    #[test]
    fn test_reveal_equals_believed_claim() {
        let mut a = Deduction::new();
        a.reveal(Color::Black);
        let mut b = Deduction::new();
        b.opponent(Color::Black, true);
        assert_eq!(a, b);
    }

    #[test]
    fn test_enumerate_order() {
        let mut d = Deduction::new();
        d.nobody(Color::Green)
            .nobody(Color::Blue)
            .nobody(Shape::Square)
            .nobody(Shape::Circle);
        let guesses: Vec<String> = d.enumerate(Target::Bag).iter().map(Guess::to_string).collect();
        assert_eq!(
            guesses,
            vec![
                "bag|red|triangle",
                "bag|red|star",
                "bag|black|triangle",
                "bag|black|star",
            ]
        );
    }

    #[test]
    fn test_exhausted() {
        let mut d = Deduction::new();
        assert!(!d.is_exhausted(Target::Opponent));
        for shape in Shape::ALL {
            d.opponent(shape, false);
        }
        assert!(d.is_exhausted(Target::Opponent));
        assert!(d.enumerate(Target::Opponent).is_empty());
        assert!(!d.is_exhausted(Target::Bag));
    }

    #[test]
    fn test_guess_options_end_with_abstain() {
        let d = Deduction::new();
        let options = d.guess_options();
        assert_eq!(options.len(), 33);
        assert_eq!(options.last(), Some(&GuessOption::Abstain));
        assert_eq!(
            options[0],
            GuessOption::Guess(Guess::new(Target::Bag, Color::Red, Shape::Triangle))
        );
        assert_eq!(
            options[16],
            GuessOption::Guess(Guess::new(Target::Opponent, Color::Red, Shape::Triangle))
        );
    }

    #[test]
    fn test_refines() {
        let start = Deduction::new();
        let mut later = start.clone();
        later.nobody(RED);
        assert!(later.refines(&start));
        assert!(!start.refines(&later));
    }

    #[test]
    fn test_explain() {
        let mut d = Deduction::new();
        d.nobody(GREEN).opponent(CIRCLE, true);
        assert_eq!(
            d.explain(),
            "A: [R, ,B,K,▲,■, ,★]\nO: [R, ,B,K, , ,●, ]"
        );
    }

    #[test]
    fn test_serialization_as_raw() {
        let mut d = Deduction::new();
        d.nobody(RED);
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, "32639");
        let back: Deduction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, d);
    }
}
