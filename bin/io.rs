use std::io::{self, ErrorKind, Write};
use tracing::instrument;

/// Trait for types that exchange lines of text with a user.
#[cfg_attr(test, mockall::automock)]
pub trait Io {
    /// Receive a line, without the line break.
    fn recv(&mut self) -> io::Result<String>;

    /// Send a line.
    fn send(&mut self, msg: &str) -> io::Result<()>;

    /// Flush the internal buffers.
    fn flush(&mut self) -> io::Result<()>;
}

/// The standard input and output of the process.
///
/// Lines are read through the process-wide [`io::Stdin`] buffer, so any
/// number of instances may share the terminal.
#[derive(Debug, Default, Copy, Clone)]
pub struct Stdio;

impl Io for Stdio {
    #[instrument(level = "trace", skip(self), ret, err)]
    fn recv(&mut self) -> io::Result<String> {
        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            return Err(ErrorKind::UnexpectedEof.into());
        }

        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    #[instrument(level = "trace", skip(self, msg), err, fields(%msg))]
    fn send(&mut self, msg: &str) -> io::Result<()> {
        writeln!(io::stdout(), "{msg}")
    }

    #[instrument(level = "trace", skip(self), err)]
    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()
    }
}
