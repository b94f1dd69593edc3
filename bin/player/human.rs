use super::{Action, Player};
use crate::io::Io;
use derive_more::Constructor;
use lib::chess::{Color, Move};
use lib::game::Game;
use std::io;
use tracing::{instrument, warn};

/// A human playing through a text interface.
#[derive(Debug, Constructor)]
pub struct Human<I: Io> {
    io: I,
}

impl<I: Io> Human<I> {
    fn prompt(turn: Color) -> String {
        let example = match turn {
            Color::White => "e7 e5",
            Color::Black => "e2 e4",
        };

        format!("{turn:#} to move (e.g., {example}) or type 'quit' to exit")
    }
}

impl<I: Io> Player for Human<I> {
    #[instrument(level = "debug", skip(self, game), ret, err, fields(turn = %game.turn()))]
    fn act(&mut self, game: &Game) -> io::Result<Action> {
        self.io.send(&game.board().to_string())?;

        loop {
            self.io.send(&Self::prompt(game.turn()))?;
            self.io.flush()?;

            let line = self.io.recv()?;
            let input = line.trim();

            if input.eq_ignore_ascii_case("quit") {
                return Ok(Action::Resign);
            }

            match input.parse::<Move>() {
                Ok(m) => return Ok(Action::Move(m)),
                Err(e) => {
                    warn!(%input, "{e}");
                    self.io.send(&format!("invalid input `{input}`: {e}"))?;
                }
            }
        }
    }

    #[instrument(level = "trace", skip(self), err)]
    fn notify(&mut self, msg: &str) -> io::Result<()> {
        self.io.send(msg)?;
        self.io.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::MockIo;
    use lib::chess::Square;
    use mockall::{predicate::function, Sequence};
    use proptest::sample::select;
    use test_strategy::proptest;

    fn io_replying(lines: &[&str]) -> MockIo {
        let mut io = MockIo::new();
        let mut lines: Vec<_> = lines.iter().rev().map(|s| s.to_string()).collect();
        io.expect_send().returning(|_| Ok(()));
        io.expect_flush().returning(|| Ok(()));
        io.expect_recv()
            .times(lines.len())
            .returning(move || Ok(lines.pop().unwrap()));

        io
    }

    #[test]
    fn human_shows_the_board_before_prompting() {
        let game = Game::default();
        let mut io = MockIo::new();
        let mut seq = Sequence::new();

        let board = game.board().to_string();
        io.expect_send()
            .with(function(move |s: &str| s == board))
            .once()
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        io.expect_send()
            .with(function(|s: &str| {
                s == "White to move (e.g., e7 e5) or type 'quit' to exit"
            }))
            .once()
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        io.expect_flush().once().in_sequence(&mut seq).returning(|| Ok(()));
        io.expect_recv()
            .once()
            .in_sequence(&mut seq)
            .returning(|| Ok("e7 e5".into()));

        let mut human = Human::new(io);
        assert_eq!(
            human.act(&game).unwrap(),
            Action::Move(Move(Square::new(1, 4), Square::new(3, 4)))
        );
    }

    #[proptest]
    fn human_accepts_moves_with_or_without_space(
        #[strategy("[a-h][1-8]")] whence: String,
        #[strategy("[a-h][1-8]")] whither: String,
        #[strategy(select(vec!["", " ", "  "]))] sep: &'static str,
    ) {
        let input = format!("{whence}{sep}{whither}");
        let mut human = Human::new(io_replying(&[&input]));
        let expected = Move(whence.parse()?, whither.parse()?);
        assert_eq!(human.act(&Game::default())?, Action::Move(expected));
    }

    #[test]
    fn human_resigns_by_typing_quit() {
        let mut human = Human::new(io_replying(&["quit"]));
        assert_eq!(human.act(&Game::default()).unwrap(), Action::Resign);
    }

    #[test]
    fn human_is_prompted_again_after_invalid_input() {
        let mut human = Human::new(io_replying(&["", "e9e5", "hello", "e7e5"]));
        assert_eq!(
            human.act(&Game::default()).unwrap(),
            Action::Move("e7e5".parse().unwrap())
        );
    }

    #[test]
    fn human_gives_up_if_input_ends() {
        let mut io = MockIo::new();
        io.expect_send().returning(|_| Ok(()));
        io.expect_flush().returning(|| Ok(()));
        io.expect_recv()
            .once()
            .returning(|| Err(io::ErrorKind::UnexpectedEof.into()));

        let mut human = Human::new(io);
        assert_eq!(
            human.act(&Game::default()).map_err(|e| e.kind()),
            Err(io::ErrorKind::UnexpectedEof)
        );
    }

    #[proptest]
    fn human_is_notified_through_io(msg: String) {
        let mut io = MockIo::new();
        let expected = msg.clone();
        io.expect_send()
            .with(function(move |s: &str| s == expected))
            .once()
            .returning(|_| Ok(()));
        io.expect_flush().once().returning(|| Ok(()));

        let mut human = Human::new(io);
        human.notify(&msg)?;
    }
}
