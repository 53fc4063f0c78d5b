//! Session execution for the CLI

use crate::{config::Config, core::Session, utils::input::ReaderSource};
use anyhow::Context;
use std::io;
use tracing::{info, instrument};

/// Run an interactive session on stdin/stdout until `exit`
#[instrument(skip(config))]
pub fn execute_session(config: &Config) -> anyhow::Result<()> {
    info!("Starting flashcard session");

    let input = ReaderSource::new(io::stdin().lock());
    let output = io::stdout().lock();

    let mut session =
        Session::start(config, input, output).context("Failed to start flashcard session")?;
    session.run().context("Flashcard session ended unexpectedly")?;

    info!(
        "Session finished with {} cards and {} log lines",
        session.deck().len(),
        session.log().len()
    );
    Ok(())
}
