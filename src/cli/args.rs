//! Command-line argument parsing
//!
//! The classic invocation uses single-dash long flags (`-import FILE`,
//! `-export FILE`) and silently ignores anything else, which clap does not
//! accept as-is. [`normalize_args`] rewrites the raw argument list into the
//! `--flag=value` form before clap sees it.

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Interactive flashcards with quizzes and mistake tracking
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "flashcards", args_override_self = true)]
pub struct Args {
    /// Enable debug output
    #[arg(long)]
    pub debug: bool,

    /// Load cards from this file before the session starts
    #[arg(long, value_name = "FILE")]
    pub import: Option<PathBuf>,

    /// Save cards to this file when the session exits
    #[arg(long, value_name = "FILE")]
    pub export: Option<PathBuf>,
}

/// Parse command line arguments
pub fn parse_args() -> Args {
    Args::parse_from(normalize_args(std::env::args_os()))
}

/// Rewrite raw arguments into a form clap accepts.
///
/// Tokens are scanned left to right. Every `-import`/`-export` (or the
/// double-dash spelling) that has a following token takes that token as its
/// value; the value is not consumed, so it is still scanned itself. Later
/// occurrences override earlier ones. Unknown tokens are dropped.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let Some((program, rest)) = args.split_first() else {
        return Vec::new();
    };

    let mut normalized = vec![program.clone()];
    for (i, token) in rest.iter().enumerate() {
        match token.to_str() {
            Some("-import" | "--import") => {
                if let Some(value) = rest.get(i + 1) {
                    normalized.push(with_value("--import", value));
                }
            }
            Some("-export" | "--export") => {
                if let Some(value) = rest.get(i + 1) {
                    normalized.push(with_value("--export", value));
                }
            }
            Some("--debug" | "-h" | "--help" | "-V" | "--version") => {
                normalized.push(token.clone());
            }
            Some(flag) if flag.starts_with("--import=") || flag.starts_with("--export=") => {
                normalized.push(token.clone());
            }
            _ => {}
        }
    }
    normalized
}

fn with_value(flag: &str, value: &OsString) -> OsString {
    let mut arg = OsString::from(flag);
    arg.push("=");
    arg.push(value);
    arg
}
