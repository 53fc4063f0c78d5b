//! Core flashcard functionality
//!
//! Contains the card collection, the card file format and the interactive
//! session that drives them.

pub mod card_file;
pub mod deck;
pub mod session;

pub use card_file::{CardFile, CardRecord};
pub use deck::{AddConflict, Card, Deck, Hardest};
pub use session::{Action, Session};
