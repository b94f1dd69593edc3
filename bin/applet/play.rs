use crate::io::{Io, Stdio};
use crate::{game::Match, player::Human};
use anyhow::Error as Anyhow;
use clap::Parser;
use lib::chess::{Board, Color, Setup};
use lib::game::Game;
use tracing::{info, instrument};

/// A game of chess between two players sharing the terminal.
#[derive(Debug, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Play {
    /// The starting position in RON, the standard initial position by default.
    #[clap(short, long)]
    setup: Option<Setup>,

    /// The side to move first.
    #[clap(short, long, default_value_t = Color::White)]
    turn: Color,
}

impl Default for Play {
    fn default() -> Self {
        Play {
            setup: None,
            turn: Color::White,
        }
    }
}

impl Play {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let board = match self.setup {
            None => Board::default(),
            Some(setup) => setup.try_into()?,
        };

        let mut game = Game::new(board, self.turn)?;
        let outcome = Match::new(Human::new(Stdio), Human::new(Stdio)).play(&mut game)?;
        info!(%outcome, moves = game.history().len());

        let mut io = Stdio;
        io.send(&game.board().to_string())?;
        io.send(&format!("Game over: {outcome}"))?;
        for record in game.history() {
            io.send(&record.to_string())?;
        }

        io.flush()?;

        Ok(())
    }
}
