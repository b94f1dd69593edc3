//! Movement rules for each kind of chess piece.
//!
//! Legality here is purely a matter of geometry and board occupancy: a move
//! that leaves the mover's own king in check is still accepted. King safety is
//! enforced a level up, by [`Board::is_checkmate`] and by the
//! [`Game`][`crate::game::Game`].

use crate::chess::{Board, Color, Piece, Role, Square};

/// Whether the [`Square`] is on the board.
#[inline(always)]
pub fn in_bounds(sq: Square) -> bool {
    sq.in_bounds()
}

/// Whether the [`Square`] holds a piece of a color other than `color`.
#[inline(always)]
pub fn is_enemy(sq: Square, board: &Board, color: Color) -> bool {
    board.get_piece_at(sq).is_some_and(|p| p.color != color)
}

/// Whether every square strictly between `start` and `end` is empty.
///
/// Walks from `start` towards `end` one step at a time along the sign of the
/// row and column displacements, so it is only meaningful for squares sharing
/// a row, a column, or a diagonal. A zero-length path has no intermediate
/// squares and is therefore clear.
pub fn path_clear(start: Square, end: Square, board: &Board) -> bool {
    let (rows, cols) = end - start;
    let (dr, dc) = (rows.signum(), cols.signum());
    let steps = rows.abs().max(cols.abs());
    (1..steps).all(|i| board.get_piece_at(start.offset(dr * i, dc * i)).is_none())
}

/// Whether the [`Piece`] may move from `start` to `end` on this [`Board`].
///
/// Moving nowhere, moving off the board, and landing on a piece of the same
/// color are illegal for every piece.
pub fn is_legal_move(piece: &Piece, start: Square, end: Square, board: &Board) -> bool {
    if start == end || !in_bounds(end) {
        return false;
    }

    if board.get_piece_at(end).is_some_and(|p| p.color == piece.color) {
        return false;
    }

    let rule = match piece.role {
        Role::Pawn => pawn,
        Role::Knight => knight,
        Role::Bishop => bishop,
        Role::Rook => rook,
        Role::Queen => queen,
        Role::King => king,
    };

    rule(piece, start, end, board)
}

fn king(_: &Piece, start: Square, end: Square, _: &Board) -> bool {
    let (rows, cols) = end - start;
    rows.abs().max(cols.abs()) == 1
}

fn queen(piece: &Piece, start: Square, end: Square, board: &Board) -> bool {
    rook(piece, start, end, board) || bishop(piece, start, end, board)
}

fn rook(_: &Piece, start: Square, end: Square, board: &Board) -> bool {
    let (rows, cols) = end - start;
    (rows == 0 || cols == 0) && path_clear(start, end, board)
}

fn bishop(_: &Piece, start: Square, end: Square, board: &Board) -> bool {
    let (rows, cols) = end - start;
    rows.abs() == cols.abs() && path_clear(start, end, board)
}

fn knight(_: &Piece, start: Square, end: Square, _: &Board) -> bool {
    let (rows, cols) = end - start;
    matches!((rows.abs(), cols.abs()), (2, 1) | (1, 2))
}

fn pawn(piece: &Piece, start: Square, end: Square, board: &Board) -> bool {
    let forward = piece.color.forward();
    let (rows, cols) = end - start;

    match cols.abs() {
        0 if rows == forward => board.get_piece_at(end).is_none(),
        0 if rows == 2 * forward => {
            start.row() == piece.color.home_rank()
                && path_clear(start, end, board)
                && board.get_piece_at(end).is_none()
        }
        1 if rows == forward => is_enemy(end, board, piece.color),
        _ => false,
    }
}
