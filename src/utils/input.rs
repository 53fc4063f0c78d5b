//! Line-oriented input for the interactive session
//!
//! The session only ever needs "give me the next line", so input is modeled
//! as a tiny trait that can be backed by stdin or by an in-memory script.

use crate::error::{FlashcardError, Result};
use std::io::BufRead;
use tracing::{trace, warn};

/// Sequential source of user-typed lines
pub trait LineSource {
    /// Read the next line without its terminator, blocking until available.
    ///
    /// Returns [`FlashcardError::EndOfInput`] once the source is exhausted.
    fn next_line(&mut self) -> Result<String>;
}

/// Line source backed by any buffered reader
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,
}

impl<R: BufRead> ReaderSource<R> {
    /// Wrap a buffered reader
    pub const fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn next_line(&mut self) -> Result<String> {
        let mut buf = Vec::new();
        let read = self
            .reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| FlashcardError::file_system("read", "<input>", e))?;

        if read == 0 {
            return Err(FlashcardError::EndOfInput);
        }

        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }

        // Undecodable bytes become U+FFFD instead of ending the session
        let line = match String::from_utf8(buf) {
            Ok(line) => line,
            Err(e) => {
                warn!("Input line is not valid UTF-8, replacing invalid bytes");
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };

        trace!("Read input line: {:?}", line);
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reads_lines_in_order() {
        let mut source = ReaderSource::new(Cursor::new("add\r\nFrance\nParis"));
        assert_eq!(source.next_line().unwrap(), "add");
        assert_eq!(source.next_line().unwrap(), "France");
        assert_eq!(source.next_line().unwrap(), "Paris");
        assert!(matches!(
            source.next_line(),
            Err(FlashcardError::EndOfInput)
        ));
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let bytes: &[u8] = b"Par\xffis\nexit\n";
        let mut source = ReaderSource::new(bytes);
        assert_eq!(source.next_line().unwrap(), "Par\u{FFFD}is");
        assert_eq!(source.next_line().unwrap(), "exit");
    }

    #[test]
    fn test_keeps_surrounding_whitespace() {
        let mut source = ReaderSource::new(Cursor::new("  spaced term \n\n"));
        assert_eq!(source.next_line().unwrap(), "  spaced term ");
        assert_eq!(source.next_line().unwrap(), "");
        assert!(source.next_line().is_err());
    }
}
