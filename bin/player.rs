use lib::{chess::Move, game::Game};
use std::io;

mod human;

pub use human::*;

/// A decision taken by a [`Player`] on its turn.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Action {
    Move(Move),
    Resign,
}

/// Trait for types that know how to play chess.
#[cfg_attr(test, mockall::automock)]
pub trait Player {
    /// Decides what to do on the current turn.
    fn act(&mut self, game: &Game) -> io::Result<Action>;

    /// Informs the player of an event in the game.
    fn notify(&mut self, msg: &str) -> io::Result<()>;
}
