use crate::chess::{ParseSquareError, Piece, Square};
use derive_more::{DebugCustom, Deref, Display, Error, From};
use std::str::FromStr;

/// A chess move in [pure coordinate notation].
///
/// [pure coordinate notation]: https://www.chessprogramming.org/Algebraic_Chess_Notation#Pure_coordinate_notation
#[derive(DebugCustom, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[debug(fmt = "Move({self})")]
#[display(fmt = "{_0}{_1}")]
pub struct Move(pub Square, pub Square);

impl Move {
    /// The source [`Square`].
    #[inline(always)]
    pub fn whence(&self) -> Square {
        self.0
    }

    /// The destination [`Square`].
    #[inline(always)]
    pub fn whither(&self) -> Square {
        self.1
    }

    /// The same move played backwards.
    #[inline(always)]
    pub fn reversed(&self) -> Self {
        Move(self.1, self.0)
    }
}

/// The reason why parsing [`Move`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse move, expected a pair of squares such as `e2e4` or `e2 e4`")]
pub struct ParseMoveError(ParseSquareError);

/// Parses a pair of squares, optionally separated by whitespace.
impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (whence, whither) = match s.split_once(char::is_whitespace) {
            Some((a, b)) => (a, b.trim_start()),
            None => {
                let i = s.char_indices().nth(2).map_or_else(|| s.len(), |(i, _)| i);
                s.split_at(i)
            }
        };

        Ok(Move(whence.parse()?, whither.parse()?))
    }
}

/// The context of a [`Move`] applied to a board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Deref)]
pub struct MoveContext(#[deref] pub Move, pub Piece, pub Option<Piece>);

impl MoveContext {
    /// The [`Piece`] moved, as it stands after the move.
    #[inline(always)]
    pub fn piece(&self) -> Piece {
        self.1
    }

    /// The [`Piece`] captured, if any.
    #[inline(always)]
    pub fn capture(&self) -> Option<Piece> {
        self.2
    }

    /// Whether this is a capture move.
    #[inline(always)]
    pub fn is_capture(&self) -> bool {
        self.capture().is_some()
    }
}
