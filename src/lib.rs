//! # Flashcards
//!
//! An interactive console application for term/definition flashcards.
//! Cards can be added, removed, quizzed, imported from and exported to a
//! flat text file, and every wrong answer is counted per card.
//!
//! ## Features
//!
//! - Ordered card collection with O(1) duplicate-definition checks
//! - Cyclic quizzes with "correct for another card" hints
//! - Hardest-card statistics with tie reporting
//! - Card file import/export and a full session log
//!
//! ## Example
//!
//! ```no_run
//! use flashcards::{config::Config, core::Session, utils::ReaderSource};
//! use std::io;
//!
//! let input = ReaderSource::new(io::stdin().lock());
//! let mut session = Session::start(&Config::default(), input, io::stdout())?;
//! session.run()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with appropriate verbosity.
///
/// Diagnostics go to stderr so stdout only carries the conversation.
pub fn setup_logging(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
