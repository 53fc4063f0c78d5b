//! Card file reading and writing
//!
//! A card file is plain UTF-8 text with one field per line, in repeating
//! groups of three: term, definition, mistake count. There is no header,
//! footer, quoting or separator between groups.

use crate::{
    core::deck::{Card, Deck},
    error::{FlashcardError, Result},
    utils::fs::FileSystemUtils,
};
use std::path::Path;
use tracing::{debug, info, instrument};

/// One card as stored in a card file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardRecord {
    pub card: Card,
    pub mistakes: u32,
}

/// Reads and writes card files
#[derive(Debug, Default)]
pub struct CardFile {
    fs_utils: FileSystemUtils,
}

impl CardFile {
    pub const fn new() -> Self {
        Self {
            fs_utils: FileSystemUtils::new(),
        }
    }

    /// Read and fully validate a card file.
    ///
    /// Nothing is returned unless every group parses, so callers can apply
    /// the records without worrying about half-imported state.
    #[instrument(skip(self))]
    pub fn read<P: AsRef<Path> + std::fmt::Debug>(&self, path: P) -> Result<Vec<CardRecord>> {
        let path = path.as_ref();
        let content = self.fs_utils.read_file_to_string(path)?;
        let records = parse(&content, path)?;
        info!("Read {} cards from {}", records.len(), path.display());
        Ok(records)
    }

    /// Write every card of `deck` in deck order, returning the card count
    #[instrument(skip(self, deck))]
    pub fn write<P: AsRef<Path> + std::fmt::Debug>(&self, path: P, deck: &Deck) -> Result<usize> {
        let path = path.as_ref();
        self.fs_utils.write_lines(path, render(deck))?;
        info!("Wrote {} cards to {}", deck.len(), path.display());
        Ok(deck.len())
    }
}

/// Parse card file content; `path` is only used for error reporting
pub fn parse(content: &str, path: &Path) -> Result<Vec<CardRecord>> {
    let lines: Vec<&str> = content.lines().collect();
    debug!("Card file has {} lines", lines.len());

    let mut groups = lines.chunks_exact(3);
    let mut records = Vec::with_capacity(lines.len() / 3);

    for (index, group) in groups.by_ref().enumerate() {
        let count_line = index * 3 + 3;
        let mistakes = group[2].parse::<u32>().map_err(|e| {
            FlashcardError::card_file(
                format!("mistake count {:?} is not a non-negative integer: {e}", group[2]),
                path,
                count_line,
            )
        })?;

        records.push(CardRecord {
            card: Card::new(group[0], group[1]),
            mistakes,
        });
    }

    let leftover = groups.remainder().len();
    if leftover > 0 {
        return Err(FlashcardError::card_file(
            format!("last card is incomplete ({leftover} of 3 lines)"),
            path,
            lines.len(),
        ));
    }

    Ok(records)
}

/// Render a deck as card file lines
pub fn render(deck: &Deck) -> impl Iterator<Item = String> + '_ {
    deck.iter().flat_map(|(term, definition, mistakes)| {
        [term.to_string(), definition.to_string(), mistakes.to_string()]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn parse_str(content: &str) -> Result<Vec<CardRecord>> {
        parse(content, Path::new("cards.txt"))
    }

    #[test]
    fn test_parse_groups() {
        let records = parse_str("France\nParis\n0\nGermany\nBerlin\n2\n").unwrap();
        assert_eq!(
            records,
            vec![
                CardRecord {
                    card: Card::new("France", "Paris"),
                    mistakes: 0
                },
                CardRecord {
                    card: Card::new("Germany", "Berlin"),
                    mistakes: 2
                },
            ]
        );
    }

    #[test]
    fn test_parse_empty_file() {
        assert!(parse_str("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_crlf_lines() {
        let records = parse_str("Japan\r\nTokyo\r\n7\r\n").unwrap();
        assert_eq!(records[0].card, Card::new("Japan", "Tokyo"));
        assert_eq!(records[0].mistakes, 7);
    }

    #[test]
    fn test_parse_rejects_bad_count() {
        let err = parse_str("France\nParis\n0\nGermany\nBerlin\nmany\n").unwrap_err();
        match err {
            FlashcardError::CardFile { line, .. } => assert_eq!(line, 6),
            other => panic!("Expected CardFile error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_negative_count() {
        assert!(parse_str("France\nParis\n-1\n").is_err());
    }

    #[test]
    fn test_parse_rejects_truncated_group() {
        let err = parse_str("France\nParis\n0\nGermany\n").unwrap_err();
        assert!(err.to_string().contains("incomplete"));
    }

    #[test]
    fn test_write_then_read_back() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("deck.txt");

        let mut deck = Deck::new();
        deck.add(Card::new("France", "Paris")).unwrap();
        deck.add(Card::new("Germany", "Berlin")).unwrap();
        deck.record_mistake("Germany");
        deck.record_mistake("Germany");

        let card_file = CardFile::new();
        assert_eq!(card_file.write(&path, &deck).unwrap(), 2);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "France\nParis\n0\nGermany\nBerlin\n2\n"
        );

        let records = card_file.read(&path).unwrap();
        let mut restored = Deck::new();
        for record in records {
            restored.upsert(record.card, record.mistakes);
        }
        let original: Vec<_> = deck.iter().collect();
        let reloaded: Vec<_> = restored.iter().collect();
        assert_eq!(original, reloaded);
    }

    #[test]
    fn test_read_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = CardFile::new()
            .read(temp_dir.path().join("missing.txt"))
            .unwrap_err();
        assert!(matches!(err, FlashcardError::FileSystem { .. }));
    }
}
