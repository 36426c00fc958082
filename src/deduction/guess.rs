//! Guess targets and guess options.
//!
//! The contract encodes a guess as `{target}|{color}|{shape}`, with an
//! abstention written as `abstain||`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DeductionError;
use crate::quality::{Color, Shape};

/// Party whose chip is being guessed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    /// The neutral arbiter.
    Bag,
    Opponent,
}

impl Target {
    pub const ALL: [Target; 2] = [Target::Bag, Target::Opponent];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Target::Bag => "bag",
            Target::Opponent => "opponent",
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Target::Bag => "Arbiter",
            Target::Opponent => "Opponent",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Target {
    type Err = DeductionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| DeductionError::UnknownTarget(s.to_string()))
    }
}

/// A concrete (color, shape) guess at a target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Guess {
    pub target: Target,
    pub color: Color,
    pub shape: Shape,
}

impl Guess {
    #[must_use]
    pub const fn new(target: Target, color: Color, shape: Shape) -> Self {
        Self { target, color, shape }
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}|{}", self.target, self.color, self.shape)
    }
}

impl FromStr for Guess {
    type Err = DeductionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match GuessOption::from_str(s)? {
            GuessOption::Guess(guess) => Ok(guess),
            GuessOption::Abstain => Err(DeductionError::MalformedGuess(s.to_string())),
        }
    }
}

impl TryFrom<String> for Guess {
    type Error = DeductionError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Guess> for String {
    fn from(g: Guess) -> Self {
        g.to_string()
    }
}

/// A guess, or declining to guess this round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum GuessOption {
    Guess(Guess),
    Abstain,
}

impl GuessOption {
    /// The guess, unless this is an abstention.
    #[must_use]
    pub const fn guess(self) -> Option<Guess> {
        match self {
            GuessOption::Guess(g) => Some(g),
            GuessOption::Abstain => None,
        }
    }
}

impl From<Guess> for GuessOption {
    fn from(g: Guess) -> Self {
        GuessOption::Guess(g)
    }
}

impl fmt::Display for GuessOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuessOption::Guess(g) => fmt::Display::fmt(g, f),
            GuessOption::Abstain => f.write_str("abstain||"),
        }
    }
}

impl FromStr for GuessOption {
    type Err = DeductionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || DeductionError::MalformedGuess(s.to_string());

        let mut parts = s.split('|');
        let target = parts.next().ok_or_else(malformed)?;
        let color = parts.next();
        let shape = parts.next();
        if parts.next().is_some() {
            return Err(malformed());
        }

        match (target, color, shape) {
            ("abstain", None, None) | ("abstain", Some(""), Some("")) => Ok(GuessOption::Abstain),
            (target, Some(color), Some(shape)) => Ok(GuessOption::Guess(Guess::new(
                target.parse()?,
                color.parse()?,
                shape.parse()?,
            ))),
            _ => Err(malformed()),
        }
    }
}

impl TryFrom<String> for GuessOption {
    type Error = DeductionError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<GuessOption> for String {
    fn from(g: GuessOption) -> Self {
        g.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_names() {
        assert_eq!("bag".parse::<Target>(), Ok(Target::Bag));
        assert_eq!("opponent".parse::<Target>(), Ok(Target::Opponent));
        assert_eq!(
            "abstain".parse::<Target>(),
            Err(DeductionError::UnknownTarget("abstain".to_string()))
        );
        assert_eq!(Target::Bag.label(), "Arbiter");
    }

    #[test]
    fn test_guess_text_form() {
        let g = Guess::new(Target::Bag, Color::Red, Shape::Circle);
        assert_eq!(g.to_string(), "bag|red|circle");
        assert_eq!("bag|red|circle".parse::<Guess>(), Ok(g));
        assert_eq!(
            "opponent|black|star".parse::<GuessOption>(),
            Ok(GuessOption::Guess(Guess::new(Target::Opponent, Color::Black, Shape::Star)))
        );
    }

    #[test]
    fn test_abstain_text_form() {
        assert_eq!(GuessOption::Abstain.to_string(), "abstain||");
        assert_eq!("abstain||".parse::<GuessOption>(), Ok(GuessOption::Abstain));
        assert_eq!("abstain".parse::<GuessOption>(), Ok(GuessOption::Abstain));
        assert!("abstain||".parse::<Guess>().is_err());
    }

    #[test]
    fn test_malformed_guesses() {
        assert_eq!(
            "bag|red".parse::<GuessOption>(),
            Err(DeductionError::MalformedGuess("bag|red".to_string()))
        );
        assert_eq!(
            "bag|red|circle|extra".parse::<GuessOption>(),
            Err(DeductionError::MalformedGuess("bag|red|circle|extra".to_string()))
        );
        assert_eq!(
            "bag|circle|red".parse::<GuessOption>(),
            Err(DeductionError::UnknownQuality("circle".to_string()))
        );
        assert_eq!(
            "abstain|red|circle".parse::<GuessOption>(),
            Err(DeductionError::UnknownTarget("abstain".to_string()))
        );
    }

    #[test]
    fn test_guess_option_serialization() {
        let options = vec![
            GuessOption::Guess(Guess::new(Target::Opponent, Color::Green, Shape::Square)),
            GuessOption::Abstain,
        ];
        let json = serde_json::to_string(&options).unwrap();
        assert_eq!(json, r#"["opponent|green|square","abstain||"]"#);
        let back: Vec<GuessOption> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, options);
    }
}
