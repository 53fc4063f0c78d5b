//! Configuration management for the flashcard session
//!
//! Collects the startup options into one value handed to the session.

use crate::cli::Args;
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Enable debug logging
    pub debug: bool,
    /// Card file loaded before the first command is read
    pub import_path: Option<PathBuf>,
    /// Card file written when the session exits
    pub export_path: Option<PathBuf>,
}

impl Config {
    /// Create configuration from command line arguments
    pub fn from_args(args: &Args) -> Self {
        Self {
            debug: args.debug,
            import_path: args.import.clone(),
            export_path: args.export.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_args() {
        let args = Args {
            debug: true,
            import: Some(PathBuf::from("in.txt")),
            export: None,
        };
        let config = Config::from_args(&args);
        assert!(config.debug);
        assert_eq!(config.import_path, Some(PathBuf::from("in.txt")));
        assert_eq!(config.export_path, None);
    }

    #[test]
    fn test_default_has_no_files() {
        let config = Config::default();
        assert!(config.import_path.is_none());
        assert!(config.export_path.is_none());
    }
}
