//! File system utility functions
//!
//! Provides the line-oriented file reads and writes used by import, export
//! and log saving, with proper error handling.

use crate::error::{FlashcardError, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, instrument};

/// Utility struct for file system operations
#[derive(Debug)]
pub struct FileSystemUtils;

impl FileSystemUtils {
    /// Create a new file system utilities instance
    pub const fn new() -> Self {
        Self
    }

    /// Read file contents as UTF-8 text
    #[instrument(skip(self))]
    pub fn read_file_to_string<P: AsRef<Path> + std::fmt::Debug>(&self, path: P) -> Result<String> {
        let path = path.as_ref();
        debug!("Reading file: {}", path.display());
        fs::read_to_string(path).map_err(|e| FlashcardError::file_system("read", path, e))
    }

    /// Write each line followed by a newline, replacing any existing file
    #[instrument(skip(self, lines))]
    pub fn write_lines<P, I, S>(&self, path: P, lines: I) -> Result<usize>
    where
        P: AsRef<Path> + std::fmt::Debug,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let path = path.as_ref();
        let mut contents = String::new();
        let mut count = 0;
        for line in lines {
            contents.push_str(line.as_ref());
            contents.push('\n');
            count += 1;
        }

        debug!("Writing {} lines to {}", count, path.display());
        fs::write(path, contents).map_err(|e| FlashcardError::file_system("write", path, e))?;
        Ok(count)
    }
}

impl Default for FileSystemUtils {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_and_read_lines() {
        let temp_dir = TempDir::new().unwrap();
        let fs_utils = FileSystemUtils::new();

        let file_path = temp_dir.path().join("lines.txt");
        let written = fs_utils
            .write_lines(&file_path, ["Éire", "Baile Átha Cliath", "0"])
            .unwrap();
        assert_eq!(written, 3);

        let content = fs_utils.read_file_to_string(&file_path).unwrap();
        assert_eq!(content, "Éire\nBaile Átha Cliath\n0\n");
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let fs_utils = FileSystemUtils::new();

        let file_path = temp_dir.path().join("out.txt");
        fs::write(&file_path, "old\ncontent\nhere\n").unwrap();
        fs_utils.write_lines(&file_path, ["new"]).unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "new\n");
    }

    #[test]
    fn test_read_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let fs_utils = FileSystemUtils::new();

        let err = fs_utils
            .read_file_to_string(temp_dir.path().join("nope.txt"))
            .unwrap_err();
        assert!(matches!(err, FlashcardError::FileSystem { .. }));
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let fs_utils = FileSystemUtils::new();

        let file_path = temp_dir.path().join("missing").join("out.txt");
        let err = fs_utils.write_lines(&file_path, ["x"]).unwrap_err();
        assert!(matches!(err, FlashcardError::FileSystem { .. }));
    }
}
