//! Bit-level knowledge state.
//!
//! ## SubMask
//!
//! Eight bits, one per quality. Quality `i` sits at bit `7 - i`: colors in the
//! high nibble, shapes in the low nibble. A set bit means "still possible".
//!
//! ## Knowledge
//!
//! Two sub-masks, one for the arbiter and one for the opponent, packed into a
//! `u16` as `arbiter << 8 | opponent`. Every operation here only clears bits.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

use super::Target;
use crate::quality::{Color, Quality, Shape};

/// Per-party set of still-possible qualities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubMask(pub u8);

impl SubMask {
    /// Nothing ruled out.
    pub const FULL: SubMask = SubMask(0xFF);

    /// Everything ruled out.
    pub const EMPTY: SubMask = SubMask(0x00);

    #[must_use]
    pub const fn new(bits: u8) -> Self {
        Self(bits)
    }

    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Is `quality` still possible?
    #[must_use]
    pub const fn contains(self, quality: Quality) -> bool {
        self.0 & quality.bit() != 0
    }

    /// Rule out a single quality.
    pub fn exclude(&mut self, quality: Quality) {
        self.0 &= !quality.bit();
    }

    /// Rule out every other quality of `quality`'s dimension.
    ///
    /// The other dimension is left as it was.
    pub fn confine(&mut self, quality: Quality) {
        self.0 &= quality.mask(true);
    }

    /// Surviving colors, canonical order.
    #[must_use]
    pub fn colors(self) -> SmallVec<[Color; 4]> {
        Color::ALL
            .into_iter()
            .filter(|&c| self.contains(Quality::Color(c)))
            .collect()
    }

    /// Surviving shapes, canonical order.
    #[must_use]
    pub fn shapes(self) -> SmallVec<[Shape; 4]> {
        Shape::ALL
            .into_iter()
            .filter(|&s| self.contains(Quality::Shape(s)))
            .collect()
    }

    /// Every bit set here is also set in `other`.
    #[must_use]
    pub const fn is_subset_of(self, other: SubMask) -> bool {
        self.0 & !other.0 == 0
    }
}

impl fmt::Display for SubMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08b}", self.0)
    }
}

/// Both parties' sub-masks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Knowledge {
    pub arbiter: SubMask,
    pub opponent: SubMask,
}

impl Knowledge {
    /// Raw value of a fresh round.
    pub const BLANK_RAW: u16 = 0xFFFF;

    /// Nothing ruled out for either party.
    pub const BLANK: Knowledge = Knowledge {
        arbiter: SubMask::FULL,
        opponent: SubMask::FULL,
    };

    #[must_use]
    pub const fn from_raw(raw: u16) -> Self {
        Self {
            arbiter: SubMask((raw >> 8) as u8),
            opponent: SubMask((raw & 0xFF) as u8),
        }
    }

    #[must_use]
    pub const fn raw(self) -> u16 {
        ((self.arbiter.0 as u16) << 8) | self.opponent.0 as u16
    }

    /// The sub-mask tracking `target`.
    #[must_use]
    pub const fn get(self, target: Target) -> SubMask {
        match target {
            Target::Bag => self.arbiter,
            Target::Opponent => self.opponent,
        }
    }

    pub fn get_mut(&mut self, target: Target) -> &mut SubMask {
        match target {
            Target::Bag => &mut self.arbiter,
            Target::Opponent => &mut self.opponent,
        }
    }

    #[must_use]
    pub const fn is_subset_of(self, other: Knowledge) -> bool {
        self.arbiter.is_subset_of(other.arbiter) && self.opponent.is_subset_of(other.opponent)
    }
}

impl Default for Knowledge {
    fn default() -> Self {
        Self::BLANK
    }
}

impl From<u16> for Knowledge {
    fn from(raw: u16) -> Self {
        Self::from_raw(raw)
    }
}

impl From<Knowledge> for u16 {
    fn from(k: Knowledge) -> Self {
        k.raw()
    }
}
