//! # chip-deduction
//!
//! Knowledge tracking for a two-player hidden-chip guessing game.
//!
//! Each chip has a color and a shape. A neutral arbiter (the "bag") and the
//! opponent each hold one. From a single player's seat, the engine tracks which
//! colors and shapes are still possible for both, narrows that space as hints
//! and claims arrive, and lists the guesses that remain consistent.
//!
//! ## Design Principles
//!
//! 1. **Closed Vocabulary**: Colors, shapes, targets and bases are enums.
//!    Strings are parsed once, at the boundary, into these types.
//!
//! 2. **Monotonic Knowledge**: Engine operations only clear bits. Hypotheses
//!    are explored on clones.
//!
//! 3. **Plain Values**: No global state, no I/O. A `Deduction` is a `u16`
//!    and serializes as one.
//!
//! ## Modules
//!
//! - `quality`: Colors, shapes, qualities, bases and assertions
//! - `deduction`: Knowledge masks, the engine, guesses, rendering
//! - `error`: Boundary parse errors

pub mod deduction;
pub mod error;
pub mod quality;

// Re-export commonly used types
pub use crate::quality::{Assertion, Basis, Color, Quality, QualityKind, Shape};

pub use crate::deduction::{
    Deduction, Guess, GuessOption, Knowledge, RenderConfig, SubMask, Target,
};

pub use crate::error::{DeductionError, Result};
