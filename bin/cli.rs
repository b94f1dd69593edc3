use crate::applet::Applet;
use anyhow::Error as Anyhow;
use clap::Parser;
use std::{cmp::min, io::stderr};
use tracing::{debug, Level};
use tracing_subscriber::fmt::{format::FmtSpan, layer};
use tracing_subscriber::{filter::Targets, prelude::*, registry, util::SubscriberInitExt};

/// Chess for two players sharing a terminal.
#[derive(Debug, Parser)]
#[clap(author, version, about)]
pub struct Cli {
    /// How much to log to stderr.
    #[clap(short, long)]
    #[cfg_attr(not(debug_assertions), clap(default_value_t = Level::INFO))]
    #[cfg_attr(debug_assertions, clap(default_value_t = Level::DEBUG))]
    verbosity: Level,

    /// What to do, a game from the initial position if omitted.
    #[clap(subcommand)]
    applet: Option<Applet>,
}

impl Cli {
    /// Events from the binary and the rules engine pass at the requested verbosity,
    /// everything else at most at [`Level::WARN`].
    fn targets(&self) -> Targets {
        Targets::new()
            .with_target("cli", self.verbosity)
            .with_target("lib", self.verbosity)
            .with_default(min(Level::WARN, self.verbosity))
    }

    /// Span timings are only reported when debugging.
    fn span_events(&self) -> FmtSpan {
        if self.verbosity >= Level::DEBUG {
            FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        }
    }

    fn init_tracing(&self) -> Result<(), Anyhow> {
        let writer = layer()
            .pretty()
            .with_span_events(self.span_events())
            .with_writer(stderr);

        registry().with(self.targets()).with(writer).try_init()?;
        Ok(())
    }

    pub fn execute(self) -> Result<(), Anyhow> {
        self.init_tracing()?;
        let applet = self.applet.unwrap_or_default();
        debug!(?applet);
        applet.execute()
    }
}
