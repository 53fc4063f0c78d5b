//! Card collection with mistake tracking
//!
//! Keeps terms in insertion order, a reverse definition index for O(1)
//! duplicate and "matches another card" lookups, and one mistake counter
//! per card. All three are only ever changed together through [`Deck`]
//! methods, so they cannot drift apart.

use std::collections::HashMap;
use tracing::debug;

/// A single term/definition pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// Question side, unique within a deck
    pub term: String,
    /// Answer side
    pub definition: String,
}

impl Card {
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
        }
    }
}

/// Why a card could not be added
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddConflict {
    /// A card with this term already exists
    DuplicateTerm(String),
    /// Another card already uses this definition
    DuplicateDefinition(String),
}

/// Outcome of a hardest-card query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hardest<'a> {
    /// Every card has a zero mistake count (or the deck is empty)
    NoErrors,
    /// Terms sharing the highest non-zero count, in deck order
    Cards { terms: Vec<&'a str>, mistakes: u32 },
}

#[derive(Debug, Clone)]
struct Entry {
    definition: String,
    mistakes: u32,
}

/// Ordered term → definition map with reverse index and mistake counters
#[derive(Debug, Default, Clone)]
pub struct Deck {
    order: Vec<String>,
    entries: HashMap<String, Entry>,
    by_definition: HashMap<String, String>,
}

impl Deck {
    /// Create an empty deck
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains_term(&self, term: &str) -> bool {
        self.entries.contains_key(term)
    }

    /// Definition of `term`, if the card exists
    pub fn definition(&self, term: &str) -> Option<&str> {
        self.entries.get(term).map(|e| e.definition.as_str())
    }

    /// Term whose card carries `definition`
    pub fn term_for_definition(&self, definition: &str) -> Option<&str> {
        self.by_definition.get(definition).map(String::as_str)
    }

    /// Mistake count for `term`, if the card exists
    pub fn mistakes(&self, term: &str) -> Option<u32> {
        self.entries.get(term).map(|e| e.mistakes)
    }

    /// Terms in insertion order; always reflects the latest add/remove
    pub fn terms(&self) -> &[String] {
        &self.order
    }

    /// Cards with their mistake counts, in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, u32)> + '_ {
        self.order.iter().map(|term| {
            let entry = &self.entries[term];
            (term.as_str(), entry.definition.as_str(), entry.mistakes)
        })
    }

    /// Add a new card with a zero mistake count.
    ///
    /// Rejects the card if its term or its definition is already taken.
    pub fn add(&mut self, card: Card) -> Result<(), AddConflict> {
        if self.contains_term(&card.term) {
            return Err(AddConflict::DuplicateTerm(card.term));
        }
        if self.by_definition.contains_key(&card.definition) {
            return Err(AddConflict::DuplicateDefinition(card.definition));
        }

        debug!("Adding card {:?}", card.term);
        self.by_definition
            .insert(card.definition.clone(), card.term.clone());
        self.order.push(card.term.clone());
        self.entries.insert(
            card.term,
            Entry {
                definition: card.definition,
                mistakes: 0,
            },
        );
        Ok(())
    }

    /// Remove a card and its mistake counter
    pub fn remove(&mut self, term: &str) -> Option<Card> {
        let entry = self.entries.remove(term)?;
        self.order.retain(|t| t != term);
        self.unlink_definition(&entry.definition, term);

        debug!("Removed card {:?}", term);
        Some(Card {
            term: term.to_string(),
            definition: entry.definition,
        })
    }

    /// Insert or overwrite a card with an explicit mistake count.
    ///
    /// An existing term keeps its position; a new term goes to the end.
    pub fn upsert(&mut self, card: Card, mistakes: u32) {
        match self.entries.get_mut(&card.term) {
            Some(entry) => {
                let old = std::mem::replace(&mut entry.definition, card.definition.clone());
                entry.mistakes = mistakes;
                self.unlink_definition(&old, &card.term);
            }
            None => {
                self.order.push(card.term.clone());
                self.entries.insert(
                    card.term.clone(),
                    Entry {
                        definition: card.definition.clone(),
                        mistakes,
                    },
                );
            }
        }
        self.by_definition.insert(card.definition, card.term);
    }

    /// Bump the mistake counter of `term`, returning the new count
    pub fn record_mistake(&mut self, term: &str) -> Option<u32> {
        let entry = self.entries.get_mut(term)?;
        entry.mistakes = entry.mistakes.saturating_add(1);
        Some(entry.mistakes)
    }

    /// Zero every mistake counter, keeping all cards
    pub fn reset_mistakes(&mut self) {
        for entry in self.entries.values_mut() {
            entry.mistakes = 0;
        }
    }

    /// Find the card(s) with the most mistakes in a single pass
    pub fn hardest(&self) -> Hardest<'_> {
        let mut max = 0;
        let mut terms = Vec::new();

        for (term, _, mistakes) in self.iter() {
            if mistakes > max {
                max = mistakes;
                terms.clear();
                terms.push(term);
            } else if mistakes == max && mistakes > 0 {
                terms.push(term);
            }
        }

        if max == 0 {
            Hardest::NoErrors
        } else {
            Hardest::Cards {
                terms,
                mistakes: max,
            }
        }
    }

    /// Drop the reverse entry for `definition` if it points at `term`.
    ///
    /// Imports may leave two cards sharing a definition; when the indexed
    /// holder goes away the index falls back to the first surviving one.
    fn unlink_definition(&mut self, definition: &str, term: &str) {
        if self.by_definition.get(definition).map(String::as_str) != Some(term) {
            return;
        }
        self.by_definition.remove(definition);

        let survivor = self
            .order
            .iter()
            .find(|t| t.as_str() != term && self.entries[t.as_str()].definition == definition)
            .cloned();
        if let Some(other) = survivor {
            self.by_definition.insert(definition.to_string(), other);
        }
    }
}
