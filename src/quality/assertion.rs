//! Assertions: a quality tagged with the basis it was asserted on.
//!
//! The contract reports assertions as `{basis}|{quality}`, e.g.
//! `nobody_has|red` or `i_have|star`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Quality;
use crate::error::DeductionError;

/// Provenance of an assertion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Basis {
    /// Neither the arbiter nor the opponent holds the quality.
    NobodyHas,
    /// The asserting party holds the quality.
    IHave,
}

impl Basis {
    pub const ALL: [Basis; 2] = [Basis::NobodyHas, Basis::IHave];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Basis::NobodyHas => "nobody_has",
            Basis::IHave => "i_have",
        }
    }

    /// Describe a (possibly still empty) subject on this basis.
    ///
    /// Used while the player is composing an assertion, so an empty subject
    /// renders as an ellipsis.
    #[must_use]
    pub fn describe(self, subject: &str) -> String {
        let subject = if subject.is_empty() { "..." } else { subject };
        match self {
            Basis::NobodyHas => format!("nobody has {subject}"),
            Basis::IHave => format!("my chip is {subject}"),
        }
    }
}

impl fmt::Display for Basis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Basis {
    type Err = DeductionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|b| b.name() == s)
            .ok_or_else(|| DeductionError::UnknownBasis(s.to_string()))
    }
}

/// A statement about a quality.
///
/// ```
/// use chip_deduction::quality::{Assertion, Color};
///
/// let a: Assertion = "nobody_has|red".parse().unwrap();
/// assert_eq!(a, Assertion::nobody_has(Color::Red));
/// assert_eq!(a.in_sentence(), "nobody has red");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Assertion {
    pub basis: Basis,
    pub quality: Quality,
}

impl Assertion {
    #[must_use]
    pub const fn new(basis: Basis, quality: Quality) -> Self {
        Self { basis, quality }
    }

    /// `nobody_has|{quality}`.
    #[must_use]
    pub fn nobody_has(quality: impl Into<Quality>) -> Self {
        Self::new(Basis::NobodyHas, quality.into())
    }

    /// `i_have|{quality}`.
    #[must_use]
    pub fn i_have(quality: impl Into<Quality>) -> Self {
        Self::new(Basis::IHave, quality.into())
    }

    /// Plain-English rendering: `nobody has red`, `my chip is a star`.
    #[must_use]
    pub fn in_sentence(&self) -> String {
        self.basis.describe(&self.quality.in_sentence())
    }
}

impl fmt::Display for Assertion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.basis, self.quality)
    }
}

impl FromStr for Assertion {
    type Err = DeductionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (basis, quality) = s
            .split_once('|')
            .ok_or_else(|| DeductionError::MalformedAssertion(s.to_string()))?;
        Ok(Self::new(basis.parse()?, quality.parse()?))
    }
}

impl TryFrom<String> for Assertion {
    type Error = DeductionError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Assertion> for String {
    fn from(a: Assertion) -> Self {
        a.to_string()
    }
}
