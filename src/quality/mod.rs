//! Quality vocabulary: the closed color/shape alphabet and assertions over it.
//!
//! ## Key Types
//!
//! - `Color`, `Shape`: the four values of each dimension
//! - `Quality`: one of the eight symbols, with its sub-mask bit
//! - `Basis`: `nobody_has` or `i_have`
//! - `Assertion`: a basis applied to a quality

pub mod assertion;
pub mod kind;

pub use assertion::{Assertion, Basis};
pub use kind::{Color, Quality, QualityKind, Shape, COLOR_BITS, SHAPE_BITS};
