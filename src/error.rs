//! Errors raised at the text boundary of the engine.
//!
//! The engine itself never fails: qualities and targets are closed enums.
//! Everything here is about turning externally sourced strings (contract
//! fields, saved rounds) into those enums.

use thiserror::Error;

use crate::quality::{Basis, QualityKind};

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, DeductionError>;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DeductionError {
    /// Not one of the eight color/shape names.
    #[error("unknown quality: {0:?}")]
    UnknownQuality(String),
    /// A kind prefix that disagrees with the value, e.g. `color:star`.
    #[error("{value:?} is not a {kind}")]
    QualityKindMismatch { kind: QualityKind, value: String },
    #[error("unknown assertion basis: {0:?}")]
    UnknownBasis(String),
    #[error("unknown guess target: {0:?}")]
    UnknownTarget(String),
    /// Assertion text not of the form `{basis}|{quality}`.
    #[error("malformed assertion: {0:?}")]
    MalformedAssertion(String),
    /// Guess text not of the form `{target}|{color}|{shape}`.
    #[error("malformed guess: {0:?}")]
    MalformedGuess(String),
    /// An assertion arrived with a basis the receiving operation cannot use.
    #[error("expected a {expected} assertion, found {found}")]
    UnexpectedBasis { expected: Basis, found: Basis },
}
