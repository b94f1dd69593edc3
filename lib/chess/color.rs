use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Formatter};
use std::{ops::Not, str::FromStr};

/// The color of a chess [`Piece`][`crate::chess::Piece`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Deserialize, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// An iterator over both colors, white first.
    #[inline(always)]
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        [Color::White, Color::Black].into_iter()
    }

    /// The row delta of a single pawn advance.
    #[inline(always)]
    pub fn forward(&self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// The row where this color's pieces other than pawns start.
    #[inline(always)]
    pub fn back_rank(&self) -> i8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// The row where this color's pawns start.
    ///
    /// Pawns may only advance two squares from here.
    #[inline(always)]
    pub fn home_rank(&self) -> i8 {
        self.back_rank() + self.forward()
    }
}

impl Not for Color {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

/// Formats as `white` or `black`, or capitalized with the alternate flag `{:#}`.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match (self, f.alternate()) {
            (Color::White, false) => f.write_str("white"),
            (Color::Black, false) => f.write_str("black"),
            (Color::White, true) => f.write_str("White"),
            (Color::Black, true) => f.write_str("Black"),
        }
    }
}

/// The reason why parsing [`Color`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "failed to parse color, expected either `white` or `black`")]
pub struct ParseColorError;

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "white" | "White" | "w" => Ok(Color::White),
            "black" | "Black" | "b" => Ok(Color::Black),
            _ => Err(ParseColorError),
        }
    }
}
