use serde::{Deserialize, Serialize};
use std::fmt::{self, Formatter, Write};

/// The kind of a chess [`Piece`][`crate::chess::Piece`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Deserialize, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Role {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// Formats as the lowercase letter `p`, `n`, `b`, `r`, `q`, or `k`,
/// or as the full name with the alternate flag `{:#}`.
impl fmt::Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            return match self {
                Role::Pawn => f.write_str("pawn"),
                Role::Knight => f.write_str("knight"),
                Role::Bishop => f.write_str("bishop"),
                Role::Rook => f.write_str("rook"),
                Role::Queen => f.write_str("queen"),
                Role::King => f.write_str("king"),
            };
        }

        f.write_char(self.letter())
    }
}

impl Role {
    /// The lowercase letter of this role.
    #[inline(always)]
    pub const fn letter(&self) -> char {
        match self {
            Role::Pawn => 'p',
            Role::Knight => 'n',
            Role::Bishop => 'b',
            Role::Rook => 'r',
            Role::Queen => 'q',
            Role::King => 'k',
        }
    }
}
