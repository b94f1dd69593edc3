use crate::chess::{Board, Color, KingNotFound, Move, MoveContext, MoveError, Outcome, Piece};
use crate::chess::{SetupError, Square};
use derive_more::{Display, Error};
use std::fmt::{self, Formatter};
use std::ops::Index;
use tracing::instrument;

/// The state of the opponent's king after a [`Move`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Annotation {
    #[display(fmt = "check")]
    Check,
    #[display(fmt = "checkmate")]
    Checkmate,
}

/// The reason why an action was rejected by the [`Game`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum InvalidAction {
    #[display(fmt = "the game has ended in {_0}")]
    GameOver(#[error(not(source))] Outcome),

    #[display(fmt = "there is no piece on square `{_0}`")]
    EmptySquare(#[error(not(source))] Square),

    #[display(fmt = "it is not the {_0} player's turn")]
    NotYourTurn(#[error(not(source))] Color),

    #[display(fmt = "move `{_0}` is illegal for the {_1:#}")]
    Illegal(Move, Piece),

    #[display(fmt = "move `{_0}` would leave the {_1} king in check")]
    SelfCheck(Move, Color),

    #[display(fmt = "the game is in an inconsistent state")]
    MissingKing(KingNotFound),
}

#[doc(hidden)]
impl From<MoveError> for InvalidAction {
    fn from(e: MoveError) -> Self {
        match e {
            MoveError::EmptySquare(sq) => InvalidAction::EmptySquare(sq),
            MoveError::IllegalMove(m, p) => InvalidAction::Illegal(m, p),
        }
    }
}

#[doc(hidden)]
impl From<KingNotFound> for InvalidAction {
    fn from(e: KingNotFound) -> Self {
        InvalidAction::MissingKing(e)
    }
}

/// An entry in the history of a [`Game`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Record {
    pub color: Color,
    pub context: MoveContext,
    pub annotation: Option<Annotation>,
}

/// Formats as e.g. `White moves from e2 to e4`.
impl fmt::Display for Record {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let (whence, whither) = (self.context.whence(), self.context.whither());
        write!(f, "{:#} moves from {whence} to {whither}", self.color)?;

        if let Some(p) = self.context.capture() {
            write!(f, ", capturing the {p:#}")?;
        }

        if let Some(a) = self.annotation {
            write!(f, " ({a})")?;
        }

        Ok(())
    }
}

/// A game of chess between two sides taking turns.
///
/// Unlike [`Board::move_piece`], which only enforces the movement rules of
/// each piece, the game rejects moves out of turn and moves that leave the
/// mover's own king in check.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Game {
    board: Board,
    turn: Color,
    history: Vec<Record>,
    outcome: Option<Outcome>,
}

/// A game from the standard initial position with white to move.
impl Default for Game {
    fn default() -> Self {
        Game::start(Board::default(), Color::White)
    }
}

impl Game {
    /// Starts a game from an arbitrary [`Board`].
    ///
    /// Both kings must be on the board, and the side not to move may not be
    /// in check, otherwise its king could be captured.
    pub fn new(board: Board, turn: Color) -> Result<Self, SetupError> {
        board.find_king(turn)?;

        if board.is_check(!turn)? {
            return Err(SetupError::CheckOutOfTurn(!turn));
        }

        Ok(Game::start(board, turn))
    }

    fn start(board: Board, turn: Color) -> Self {
        Game {
            board,
            turn,
            history: Vec::new(),
            outcome: None,
        }
    }

    /// The current [`Board`].
    #[inline(always)]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move.
    #[inline(always)]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// The moves played so far.
    #[inline(always)]
    pub fn history(&self) -> &[Record] {
        &self.history
    }

    /// The [`Outcome`] of the game, if it has ended.
    #[inline(always)]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// An iterator over the moves the side to move may play.
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        let board = &self.board;
        let turn = self.turn;
        let over = self.outcome.is_some();

        board
            .by_color(turn)
            .filter(move |_| !over)
            .flat_map(move |p| {
                let whence = p.position;
                board.destinations(whence).map(move |whither| Move(whence, whither))
            })
            .filter(move |m| {
                let mut next = *board;
                next.move_piece(m.whence(), m.whither()).is_ok()
                    && next.is_check(turn) == Ok(false)
            })
    }

    /// Plays a [`Move`] for the side to move.
    #[instrument(level = "debug", skip(self), ret, err)]
    pub fn play(&mut self, m: Move) -> Result<Record, InvalidAction> {
        if let Some(o) = self.outcome {
            return Err(InvalidAction::GameOver(o));
        }

        let (whence, whither) = (m.whence(), m.whither());
        let piece = self[whence].ok_or(InvalidAction::EmptySquare(whence))?;

        if piece.color != self.turn {
            return Err(InvalidAction::NotYourTurn(piece.color));
        }

        let mut next = self.board;
        let context = next.move_piece(whence, whither)?;

        if next.is_check(self.turn)? {
            return Err(InvalidAction::SelfCheck(m, self.turn));
        }

        let annotation = if next.is_checkmate(!self.turn)? {
            Some(Annotation::Checkmate)
        } else if next.is_check(!self.turn)? {
            Some(Annotation::Check)
        } else {
            None
        };

        let record = Record {
            color: self.turn,
            context,
            annotation,
        };

        if annotation == Some(Annotation::Checkmate) {
            self.outcome = Some(Outcome::Checkmate(self.turn));
        }

        self.board = next;
        self.turn = !self.turn;
        self.history.push(record);

        Ok(record)
    }

    /// Concedes the game on behalf of a side.
    #[instrument(level = "debug", skip(self), ret, err)]
    pub fn resign(&mut self, c: Color) -> Result<Outcome, InvalidAction> {
        if let Some(o) = self.outcome {
            return Err(InvalidAction::GameOver(o));
        }

        let outcome = Outcome::Resignation(c);
        self.outcome = Some(outcome);
        Ok(outcome)
    }
}

/// Retrieves the [`Piece`] at a given [`Square`], if any.
impl Index<Square> for Game {
    type Output = Option<Piece>;

    #[inline(always)]
    fn index(&self, sq: Square) -> &Self::Output {
        &self.board[sq]
    }
}
