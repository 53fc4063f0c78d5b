//! Utility modules for common functionality
//!
//! Provides file helpers and line-oriented console input.

pub mod fs;
pub mod input;

pub use fs::FileSystemUtils;
pub use input::{LineSource, ReaderSource};
