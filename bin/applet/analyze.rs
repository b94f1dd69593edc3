use crate::io::{Io, Stdio};
use anyhow::Error as Anyhow;
use clap::Parser;
use lib::chess::{Board, Color, Setup};
use lib::game::Game;
use tracing::{info, instrument, warn};

/// Reports check and checkmate for a position.
#[derive(Debug, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Analyze {
    /// The side to move.
    #[clap(short, long, default_value_t = Color::White)]
    turn: Color,

    /// The position to analyze in RON.
    setup: Setup,
}

impl Analyze {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let board = Board::try_from(self.setup)?;
        let mut io = Stdio;
        io.send(&board.to_string())?;
        io.send(&Setup::from(&board).to_string())?;

        for c in Color::iter() {
            let check = board.is_check(c)?;
            let checkmate = board.is_checkmate(c)?;
            info!(color = %c, check, checkmate);
            io.send(&format!("{c:#}: check={check} checkmate={checkmate}"))?;
        }

        match Game::new(board, self.turn) {
            Ok(game) => {
                let moves: Vec<_> = game.moves().map(|m| m.to_string()).collect();
                info!(turn = %self.turn, moves = moves.len());
                io.send(&format!("{:#} to move: {}", self.turn, moves.join(" ")))?;
            }

            Err(e) => {
                warn!(turn = %self.turn, "{e}");
                io.send(&e.to_string())?;
            }
        }

        io.flush()?;

        Ok(())
    }
}
