use crate::chess::{rules, Color, Move, MoveContext, Piece, Role, Square};
use derive_more::{Display, Error};
use std::fmt::{self, Write};
use std::ops::Index;
use tracing::instrument;

/// The reason why a [`Move`] could not be applied to the [`Board`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum MoveError {
    #[display(fmt = "there is no piece on square `{_0}`")]
    EmptySquare(#[error(not(source))] Square),

    #[display(fmt = "move `{_0}` is illegal for the {_1:#}")]
    IllegalMove(Move, Piece),
}

/// The king of a [`Color`] is missing from the [`Board`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[display(fmt = "the {_0} king is not on the board")]
pub struct KingNotFound(#[error(not(source))] pub Color);

/// The reason why a [`Piece`] could not be placed on the [`Board`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum SetupError {
    #[display(fmt = "square `{_0}` is not on the board")]
    OutOfBounds(#[error(not(source))] Square),

    #[display(fmt = "square `{_0}` is already occupied")]
    Occupied(#[error(not(source))] Square),

    #[display(fmt = "the {_0} side has more than one king")]
    TooManyKings(#[error(not(source))] Color),

    #[display(fmt = "the {_0} side has no king")]
    MissingKing(#[error(not(source))] Color),

    #[display(fmt = "the {_0} king is in check, but it is not the {_0} player's turn")]
    CheckOutOfTurn(#[error(not(source))] Color),
}

#[doc(hidden)]
impl From<KingNotFound> for SetupError {
    fn from(KingNotFound(c): KingNotFound) -> Self {
        SetupError::MissingKing(c)
    }
}

/// The chess board.
///
/// Holds a grid of 8x8 squares, each of which is either empty or occupied by
/// exactly one [`Piece`]. Boards are plain values: cloning one yields an
/// independent board that can be freely mutated, e.g. to try out moves.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Board {
    grid: [[Option<Piece>; 8]; 8],
}

/// The standard initial position.
impl Default for Board {
    fn default() -> Self {
        use Role::*;
        const BACK_RANK: [Role; 8] = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];

        let mut board = Board::empty();
        for c in Color::iter() {
            for (col, role) in (0..).zip(BACK_RANK) {
                let back = Square::new(c.back_rank(), col);
                let home = Square::new(c.home_rank(), col);
                board.grid[back.row() as usize][col as usize] = Some(Piece::new(role, c, back));
                board.grid[home.row() as usize][col as usize] = Some(Piece::new(Pawn, c, home));
            }
        }

        board
    }
}

impl Board {
    /// A board without any pieces.
    #[inline(always)]
    pub fn empty() -> Self {
        Board {
            grid: [[None; 8]; 8],
        }
    }

    /// The [`Piece`] on the given [`Square`], if any.
    ///
    /// Squares off the board are always empty.
    #[inline(always)]
    pub fn get_piece_at(&self, sq: Square) -> Option<Piece> {
        self[sq]
    }

    /// An iterator over all pieces on the board in row-major order.
    #[inline(always)]
    pub fn iter(&self) -> impl Iterator<Item = Piece> + '_ {
        self.grid.iter().flatten().flatten().copied()
    }

    /// An iterator over the pieces of a [`Color`].
    #[inline(always)]
    pub fn by_color(&self, c: Color) -> impl Iterator<Item = Piece> + '_ {
        self.iter().filter(move |p| p.color == c)
    }

    /// A read-only snapshot of the grid, indexed by row and column.
    #[inline(always)]
    pub fn placement(&self) -> [[Option<Piece>; 8]; 8] {
        self.grid
    }

    /// Places a new [`Piece`] on an empty [`Square`].
    pub fn place(&mut self, role: Role, color: Color, sq: Square) -> Result<Piece, SetupError> {
        if !sq.in_bounds() {
            return Err(SetupError::OutOfBounds(sq));
        }

        if self[sq].is_some() {
            return Err(SetupError::Occupied(sq));
        }

        if role == Role::King && self.find_king(color).is_ok() {
            return Err(SetupError::TooManyKings(color));
        }

        let piece = Piece::new(role, color, sq);
        *self.cell_mut(sq) = Some(piece);
        Ok(piece)
    }

    /// Removes the [`Piece`] on a [`Square`], if any.
    pub fn remove(&mut self, sq: Square) -> Option<Piece> {
        if sq.in_bounds() {
            self.cell_mut(sq).take()
        } else {
            None
        }
    }

    /// The squares the piece on `sq` may move to according to its [rules].
    ///
    /// Every square on the board is tested, so this is empty if `sq` is.
    pub fn destinations(&self, sq: Square) -> impl Iterator<Item = Square> + '_ {
        let piece = self[sq];
        Square::iter().filter(move |&end| match piece {
            Some(p) => rules::is_legal_move(&p, sq, end, self),
            None => false,
        })
    }

    /// Moves the piece on `start` to `end` if its [rules] allow it.
    ///
    /// The safety of the mover's own king is not taken into account.
    #[instrument(level = "trace", skip(self), ret, err)]
    pub fn move_piece(&mut self, start: Square, end: Square) -> Result<MoveContext, MoveError> {
        let piece = self[start].ok_or(MoveError::EmptySquare(start))?;

        if !rules::is_legal_move(&piece, start, end, self) {
            return Err(MoveError::IllegalMove(Move(start, end), piece));
        }

        Ok(self.relocate(piece, end))
    }

    /// The [`Square`] occupied by the king of a [`Color`].
    pub fn find_king(&self, c: Color) -> Result<Square, KingNotFound> {
        self.by_color(c)
            .find(|p| p.role == Role::King)
            .map(|p| p.position)
            .ok_or(KingNotFound(c))
    }

    /// Whether the king of a [`Color`] is in [check].
    ///
    /// [check]: https://www.chessprogramming.org/Check
    pub fn is_check(&self, c: Color) -> Result<bool, KingNotFound> {
        let king = self.find_king(c)?;

        Ok(self
            .by_color(!c)
            .any(|p| rules::is_legal_move(&p, p.position, king, self)))
    }

    /// Whether the king of a [`Color`] is [checkmated].
    ///
    /// Tries every move available to that color on a copy of the board and
    /// looks for one after which the king is no longer in check.
    ///
    /// [checkmated]: https://www.chessprogramming.org/Checkmate
    pub fn is_checkmate(&self, c: Color) -> Result<bool, KingNotFound> {
        if !self.is_check(c)? {
            return Ok(false);
        }

        for piece in self.by_color(c) {
            for end in self.destinations(piece.position) {
                let mut trial = *self;
                trial.relocate(piece, end);
                if !trial.is_check(c)? {
                    return Ok(false);
                }
            }
        }

        Ok(true)
    }

    /// Moves a piece standing on the board to `end`, capturing whatever stands there.
    ///
    /// The grid and the piece's position are always updated together here.
    fn relocate(&mut self, mut piece: Piece, end: Square) -> MoveContext {
        let start = piece.position;
        debug_assert!(start.in_bounds() && end.in_bounds());
        debug_assert_eq!(self[start], Some(piece));

        *self.cell_mut(start) = None;
        piece.position = end;
        let capture = self.cell_mut(end).replace(piece);

        MoveContext(Move(start, end), piece, capture)
    }

    #[inline(always)]
    fn cell_mut(&mut self, sq: Square) -> &mut Option<Piece> {
        &mut self.grid[sq.row() as usize][sq.col() as usize]
    }
}

/// Retrieves the [`Piece`] at a given [`Square`], if any.
impl Index<Square> for Board {
    type Output = Option<Piece>;

    #[inline(always)]
    fn index(&self, sq: Square) -> &Self::Output {
        if sq.in_bounds() {
            &self.grid[sq.row() as usize][sq.col() as usize]
        } else {
            &None
        }
    }
}

/// Draws the board with rank and file labels, row 0 at the top.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const FILES: &str = "    a  b  c  d  e  f  g  h";
        const BORDER: &str = "  +------------------------+";

        writeln!(f, "{FILES}")?;
        writeln!(f, "{BORDER}")?;

        for (row, cells) in (0..8).zip(&self.grid) {
            let rank = 8 - row;
            write!(f, "{rank} |")?;
            for cell in cells {
                f.write_char(' ')?;
                f.write_char(cell.map_or('.', |p| p.symbol()))?;
                f.write_char(' ')?;
            }

            writeln!(f, "| {rank}")?;
        }

        writeln!(f, "{BORDER}")?;
        write!(f, "{FILES}")
    }
}

#[cfg(test)]
impl proptest::arbitrary::Arbitrary for Board {
    type Parameters = ();
    type Strategy = proptest::strategy::BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        use proptest::{collection::vec, prelude::*};

        vec(any::<Option<(Role, Color)>>(), 64)
            .prop_map(|cells| {
                let mut board = Board::empty();
                for (sq, cell) in Square::iter().zip(cells) {
                    if let Some((r, c)) = cell {
                        // A second king of the same color is simply skipped.
                        board.place(r, c, sq).ok();
                    }
                }

                board
            })
            .boxed()
    }
}
