use crate::chess::{Color, Role, Square};
use derive_more::Constructor;
use std::fmt::{self, Formatter, Write};

/// A chess [piece][`Role`] of a certain [`Color`] standing on a [`Square`].
///
/// The position is owned by the piece and kept in sync with the
/// [`Board`][`crate::chess::Board`] cell holding it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Constructor)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Piece {
    pub role: Role,
    pub color: Color,
    pub position: Square,
}

impl Piece {
    /// The letter used to display this piece, uppercase for white.
    #[inline(always)]
    pub fn symbol(&self) -> char {
        let c = self.role.letter();

        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }
}

/// Formats as the piece's [symbol](`Piece::symbol`), or as e.g. `white king`
/// with the alternate flag `{:#}`.
impl fmt::Display for Piece {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{} {:#}", self.color, self.role)
        } else {
            f.write_char(self.symbol())
        }
    }
}
