//! Deduction engine: knowledge masks, guesses and diagnostics.
//!
//! ## Key Types
//!
//! - `SubMask`: eight still-possible bits for one party
//! - `Knowledge`: arbiter and opponent sub-masks, packed as a `u16`
//! - `Deduction`: the engine, mutated by assertions and queried for guesses
//! - `Target`, `Guess`, `GuessOption`: what a player can guess
//! - `RenderConfig`: glyphs used by `Deduction::explain_with`

pub mod engine;
pub mod guess;
pub mod mask;
pub mod render;

pub use engine::Deduction;
pub use guess::{Guess, GuessOption, Target};
pub use mask::{Knowledge, SubMask};
pub use render::RenderConfig;
