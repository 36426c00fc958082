//! Colors, shapes and the eight-symbol quality alphabet.
//!
//! Every quality has a canonical index: colors occupy 0-3 and shapes 4-7.
//! Within an 8-bit sub-mask, quality `i` lives at bit `7 - i`, so colors fill
//! the high nibble and shapes the low nibble.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DeductionError;

/// Bits of a sub-mask holding the four colors.
pub const COLOR_BITS: u8 = 0xF0;

/// Bits of a sub-mask holding the four shapes.
pub const SHAPE_BITS: u8 = 0x0F;

/// Chip color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Red,
    Green,
    Blue,
    Black,
}

impl Color {
    /// All colors in canonical order.
    pub const ALL: [Color; 4] = [Color::Red, Color::Green, Color::Blue, Color::Black];

    /// Canonical index (0-3).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Black => "black",
        }
    }

    /// Single-character glyph used in diagnostics.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Green => 'G',
            Color::Blue => 'B',
            Color::Black => 'K',
        }
    }

    /// Look up a color by its canonical name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = DeductionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| DeductionError::UnknownQuality(s.to_string()))
    }
}

/// Chip shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    Triangle,
    Square,
    Circle,
    Star,
}

impl Shape {
    /// All shapes in canonical order.
    pub const ALL: [Shape; 4] = [Shape::Triangle, Shape::Square, Shape::Circle, Shape::Star];

    /// Index within the shape dimension (0-3).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Shape::Triangle => "triangle",
            Shape::Square => "square",
            Shape::Circle => "circle",
            Shape::Star => "star",
        }
    }

    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Shape::Triangle => '▲',
            Shape::Square => '■',
            Shape::Circle => '●',
            Shape::Star => '★',
        }
    }

    /// Look up a shape by its canonical name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Shape {
    type Err = DeductionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| DeductionError::UnknownQuality(s.to_string()))
    }
}

/// The two quality dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityKind {
    Color,
    Shape,
}

impl QualityKind {
    /// Sub-mask bits belonging to this dimension.
    #[must_use]
    pub const fn bits(self) -> u8 {
        match self {
            QualityKind::Color => COLOR_BITS,
            QualityKind::Shape => SHAPE_BITS,
        }
    }

    /// The other dimension.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            QualityKind::Color => QualityKind::Shape,
            QualityKind::Shape => QualityKind::Color,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            QualityKind::Color => "color",
            QualityKind::Shape => "shape",
        }
    }
}

impl fmt::Display for QualityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A color or a shape.
///
/// Text form is the bare name (`red`, `circle`). Parsing also accepts the
/// kind-prefixed spelling (`color:red`, `shape:circle`).
///
/// ```
/// use chip_deduction::quality::{Color, Quality};
///
/// let q: Quality = "color:red".parse().unwrap();
/// assert_eq!(q, Quality::Color(Color::Red));
/// assert_eq!(q.bit(), 0b1000_0000);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Quality {
    Color(Color),
    Shape(Shape),
}

impl Quality {
    /// All eight qualities in canonical index order.
    pub const ALL: [Quality; 8] = [
        Quality::Color(Color::Red),
        Quality::Color(Color::Green),
        Quality::Color(Color::Blue),
        Quality::Color(Color::Black),
        Quality::Shape(Shape::Triangle),
        Quality::Shape(Shape::Square),
        Quality::Shape(Shape::Circle),
        Quality::Shape(Shape::Star),
    ];

    /// Canonical index (0-7).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Quality::Color(c) => c.index(),
            Quality::Shape(s) => 4 + s.index(),
        }
    }

    /// Quality at a canonical index, `None` past 7.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    #[must_use]
    pub const fn kind(self) -> QualityKind {
        match self {
            Quality::Color(_) => QualityKind::Color,
            Quality::Shape(_) => QualityKind::Shape,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Quality::Color(c) => c.name(),
            Quality::Shape(s) => s.name(),
        }
    }

    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Quality::Color(c) => c.glyph(),
            Quality::Shape(s) => s.glyph(),
        }
    }

    /// This quality's bit within a sub-mask.
    ///
    /// Color `i` maps to `1 << (7 - i)`, shape `i` to `1 << (3 - i)`.
    #[must_use]
    pub const fn bit(self) -> u8 {
        1 << (7 - self.index())
    }

    /// The four bits of the other dimension.
    #[must_use]
    pub const fn complement(self) -> u8 {
        self.kind().other().bits()
    }

    /// The quality's bit, optionally ORed with [`Quality::complement`].
    #[must_use]
    pub const fn mask(self, complement: bool) -> u8 {
        if complement {
            self.bit() | self.complement()
        } else {
            self.bit()
        }
    }

    /// Kind-prefixed identifier, e.g. `color:red`.
    #[must_use]
    pub fn semantic_id(self) -> String {
        format!("{}:{}", self.kind(), self.name())
    }

    /// Phrase for use in a sentence: `red`, `a circle`.
    #[must_use]
    pub fn in_sentence(self) -> String {
        match self {
            Quality::Color(c) => c.name().to_string(),
            Quality::Shape(s) => format!("a {}", s.name()),
        }
    }
}

impl From<Color> for Quality {
    fn from(c: Color) -> Self {
        Quality::Color(c)
    }
}

impl From<Shape> for Quality {
    fn from(s: Shape) -> Self {
        Quality::Shape(s)
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Quality {
    type Err = DeductionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, name) = match s.split_once(':') {
            Some(("color", name)) => (Some(QualityKind::Color), name),
            Some(("shape", name)) => (Some(QualityKind::Shape), name),
            Some(_) => return Err(DeductionError::UnknownQuality(s.to_string())),
            None => (None, s),
        };

        let quality = Color::from_name(name)
            .map(Quality::Color)
            .or_else(|| Shape::from_name(name).map(Quality::Shape))
            .ok_or_else(|| DeductionError::UnknownQuality(s.to_string()))?;

        match kind {
            Some(kind) if kind != quality.kind() => Err(DeductionError::QualityKindMismatch {
                kind,
                value: name.to_string(),
            }),
            _ => Ok(quality),
        }
    }
}

impl TryFrom<String> for Quality {
    type Error = DeductionError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Quality> for String {
    fn from(q: Quality) -> Self {
        q.name().to_string()
    }
}
