use crate::chess::{Board, Color, Role, SetupError, Square};
use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Formatter};
use std::str::FromStr;

/// The arrangement of pieces on a [`Board`], as a list of `(color, role, square)`.
///
/// Serialized in [RON], for example
/// `[(white, king, "a8"), (black, queen, "a7"), (black, king, "b6")]`.
///
/// [RON]: https://github.com/ron-rs/ron
#[derive(Debug, Default, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Setup(pub Vec<(Color, Role, Square)>);

impl fmt::Display for Setup {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&ron::ser::to_string(self).map_err(|_| fmt::Error)?)
    }
}

/// The reason why parsing [`Setup`] failed.
#[derive(Debug, Display, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse board setup")]
pub struct ParseSetupError(ron::de::SpannedError);

impl FromStr for Setup {
    type Err = ParseSetupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ron::de::from_str(s)?)
    }
}

impl From<&Board> for Setup {
    fn from(board: &Board) -> Self {
        Setup(board.iter().map(|p| (p.color, p.role, p.position)).collect())
    }
}

/// Builds a [`Board`] with exactly one king of each color.
impl TryFrom<Setup> for Board {
    type Error = SetupError;

    fn try_from(setup: Setup) -> Result<Self, Self::Error> {
        let mut board = Board::empty();

        for (c, r, sq) in setup.0 {
            board.place(r, c, sq)?;
        }

        for c in Color::iter() {
            if board.find_king(c).is_err() {
                return Err(SetupError::MissingKing(c));
            }
        }

        Ok(board)
    }
}
