//! Command-line interface module
//!
//! Provides startup argument parsing and session execution.

pub mod args;
pub mod commands;

pub use args::{normalize_args, parse_args, Args};
pub use commands::execute_session;
