use crate::player::{Action, Player};
use derive_more::{Constructor, Display, Error, From};
use lib::chess::{Color, KingNotFound, Outcome};
use lib::game::{Game, InvalidAction};
use std::io;
use tracing::{field::display, info, instrument, warn, Span};

/// The reason why the [`Match`] was interrupted.
#[derive(Debug, Display, Error, From)]
pub enum Interrupted {
    #[display(fmt = "failed to communicate with the player")]
    Io(io::Error),

    #[display(fmt = "the game reached an inconsistent state")]
    Corrupted(KingNotFound),
}

/// A match of chess between two players.
#[derive(Debug, Constructor)]
pub struct Match<W, B> {
    white: W,
    black: B,
}

impl<W: Player, B: Player> Match<W, B> {
    fn player(&mut self, c: Color) -> &mut dyn Player {
        match c {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }

    /// Lets the players take turns until the [`Game`] ends.
    ///
    /// Moves rejected by the game are reported back to the player, who is
    /// then asked to act again.
    #[instrument(level = "debug", skip(self, game), err, fields(outcome))]
    pub fn play(mut self, game: &mut Game) -> Result<Outcome, Interrupted> {
        let outcome = loop {
            if let Some(o) = game.outcome() {
                Span::current().record("outcome", display(o));
                break o;
            }

            let turn = game.turn();

            match self.player(turn).act(game)? {
                Action::Resign => {
                    if let Err(e) = game.resign(turn) {
                        warn!("{e}");
                    }
                }

                Action::Move(m) => match game.play(m) {
                    Err(InvalidAction::MissingKing(e)) => return Err(e.into()),

                    Err(e) => {
                        warn!(%m, "{e}");
                        self.player(turn).notify(&format!("{e}, try again"))?;
                    }

                    Ok(record) => {
                        info!(%record);
                        let history: Vec<_> = game.history().iter().map(|r| r.to_string()).collect();
                        self.player(!turn).notify(&history.join("\n"))?;
                    }
                },
            }
        };

        info!(%outcome);

        Ok(outcome)
    }
}
