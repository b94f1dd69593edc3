use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Formatter, Write};
use std::{ops::Sub, str::FromStr};

/// A square on the chess board, addressed by row and column.
///
/// Row 0 is white's back rank and corresponds to rank `8` in coordinate
/// notation, column 0 corresponds to file `a`. So `(0, 0)` is `a8` and
/// `(6, 4)` is `e2`.
///
/// Coordinates outside of `0..8` are representable, such squares are simply
/// not [on the board](`Square::in_bounds`).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Deserialize, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[serde(try_from = "String", into = "String")]
pub struct Square {
    #[cfg_attr(test, strategy(0i8..8))]
    row: i8,
    #[cfg_attr(test, strategy(0i8..8))]
    col: i8,
}

impl Square {
    /// Constructs [`Square`] from a pair of row and column.
    #[inline(always)]
    pub const fn new(row: i8, col: i8) -> Self {
        Square { row, col }
    }

    /// This square's row.
    #[inline(always)]
    pub const fn row(&self) -> i8 {
        self.row
    }

    /// This square's column.
    #[inline(always)]
    pub const fn col(&self) -> i8 {
        self.col
    }

    /// Whether both coordinates are within `0..8`.
    #[inline(always)]
    pub const fn in_bounds(&self) -> bool {
        0 <= self.row && self.row < 8 && 0 <= self.col && self.col < 8
    }

    /// The square displaced by the given number of rows and columns.
    #[inline(always)]
    pub const fn offset(&self, rows: i8, cols: i8) -> Self {
        Square::new(self.row.saturating_add(rows), self.col.saturating_add(cols))
    }

    /// An iterator over all 64 squares on the board in row-major order.
    #[inline(always)]
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> {
        (0..8).flat_map(|row| (0..8).map(move |col| Square::new(row, col)))
    }
}

/// The displacement `(rows, cols)` from `rhs` to `self`.
impl Sub for Square {
    type Output = (i8, i8);

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        (
            self.row.saturating_sub(rhs.row),
            self.col.saturating_sub(rhs.col),
        )
    }
}

/// Formats squares on the board in coordinate notation, e.g. `e2`,
/// and other squares as a pair of coordinates.
impl fmt::Display for Square {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.in_bounds() {
            f.write_char((b'a' + self.col as u8).into())?;
            f.write_char((b'8' - self.row as u8).into())
        } else {
            write!(f, "({}, {})", self.row, self.col)
        }
    }
}

/// The reason why parsing [`Square`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
pub enum ParseSquareError {
    #[display(fmt = "failed to parse square, expected file in the range `a..=h`")]
    InvalidFile,
    #[display(fmt = "failed to parse square, expected rank in the range `1..=8`")]
    InvalidRank,
    #[display(fmt = "failed to parse square, expected a file followed by a rank")]
    InvalidSyntax,
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let &[file, rank] = s.as_bytes() else {
            return Err(ParseSquareError::InvalidSyntax);
        };

        if !(b'a'..=b'h').contains(&file) {
            return Err(ParseSquareError::InvalidFile);
        }

        if !(b'1'..=b'8').contains(&rank) {
            return Err(ParseSquareError::InvalidRank);
        }

        Ok(Square::new((b'8' - rank) as i8, (file - b'a') as i8))
    }
}

#[doc(hidden)]
impl TryFrom<String> for Square {
    type Error = ParseSquareError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[doc(hidden)]
impl From<Square> for String {
    fn from(sq: Square) -> Self {
        sq.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[test]
    fn coordinate_notation_counts_ranks_from_the_last_row() {
        assert_eq!("a8".parse(), Ok(Square::new(0, 0)));
        assert_eq!("e2".parse(), Ok(Square::new(6, 4)));
        assert_eq!("h1".parse(), Ok(Square::new(7, 7)));
    }

    #[test]
    fn iter_visits_every_square_once() {
        let squares: Vec<_> = Square::iter().collect();
        assert_eq!(squares.len(), 64);
        assert!(squares.iter().all(Square::in_bounds));
        assert!(squares.windows(2).all(|w| w[0] < w[1]));
    }

    #[proptest]
    fn arbitrary_squares_are_on_the_board(sq: Square) {
        assert!(sq.in_bounds());
    }

    #[proptest]
    fn squares_outside_of_the_board_are_out_of_bounds(
        #[strategy(-16i8..24)] row: i8,
        #[strategy(-16i8..24)]
        #[filter(!(0..8).contains(&#row) || !(0..8).contains(&#col))]
        col: i8,
    ) {
        assert!(!Square::new(row, col).in_bounds());
    }

    #[proptest]
    fn subtracting_squares_returns_displacement(a: Square, b: Square) {
        let (rows, cols) = a - b;
        assert_eq!(b.offset(rows, cols), a);
    }

    #[proptest]
    fn offset_by_zero_is_an_identity(sq: Square) {
        assert_eq!(sq.offset(0, 0), sq);
    }

    #[proptest]
    fn parsing_printed_square_is_an_identity(sq: Square) {
        assert_eq!(sq.to_string().parse(), Ok(sq));
    }

    #[proptest]
    fn parsing_square_fails_if_file_invalid(
        #[filter(!('a'..='h').contains(&#c) && #c.is_ascii())] c: char,
        #[strategy(1u8..=8)] r: u8,
    ) {
        assert_eq!(
            format!("{c}{r}").parse::<Square>(),
            Err(ParseSquareError::InvalidFile)
        );
    }

    #[proptest]
    fn parsing_square_fails_if_rank_invalid(
        #[strategy(b'a'..=b'h')] f: u8,
        #[filter(!('1'..='8').contains(&#c) && #c.is_ascii())] c: char,
    ) {
        assert_eq!(
            format!("{}{c}", f as char).parse::<Square>(),
            Err(ParseSquareError::InvalidRank)
        );
    }

    #[proptest]
    fn parsing_square_fails_if_length_not_two(#[filter(#s.len() != 2)] s: String) {
        assert_eq!(s.parse::<Square>(), Err(ParseSquareError::InvalidSyntax));
    }

    #[proptest]
    fn square_is_serialized_in_coordinate_notation(sq: Square) {
        assert_eq!(ron::ser::to_string(&sq)?, format!("\"{sq}\""));
        assert_eq!(ron::de::from_str::<Square>(&format!("\"{sq}\""))?, sq);
    }
}
