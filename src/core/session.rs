//! Interactive flashcard session
//!
//! Owns the deck, the session log and the console, and runs the command
//! loop until `exit`. Every line shown to the user and every line read
//! from the user goes through `say` or `listen`, which append it to the
//! session log in conversation order.

use crate::{
    config::Config,
    core::{
        card_file::CardFile,
        deck::{AddConflict, Card, Deck, Hardest},
    },
    error::{FlashcardError, Result},
    utils::{fs::FileSystemUtils, input::LineSource},
};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

const MENU: &str =
    "Input the action (add, remove, import, export, ask, exit, log, hardest card, reset stats):";
const FILE_PROMPT: &str = "File name:";

/// Commands understood by the interactive loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add,
    Remove,
    Import,
    Export,
    Ask,
    Log,
    HardestCard,
    ResetStats,
    Exit,
}

impl Action {
    /// Match a command line verbatim; no trimming or case folding
    pub fn from_line(line: &str) -> Option<Self> {
        match line {
            "add" => Some(Self::Add),
            "remove" => Some(Self::Remove),
            "import" => Some(Self::Import),
            "export" => Some(Self::Export),
            "ask" => Some(Self::Ask),
            "log" => Some(Self::Log),
            "hardest card" => Some(Self::HardestCard),
            "reset stats" => Some(Self::ResetStats),
            "exit" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// A single interactive run over a line source and a console
pub struct Session<S, W> {
    deck: Deck,
    log: Vec<String>,
    export_path: Option<PathBuf>,
    input: S,
    output: W,
    card_file: CardFile,
    fs_utils: FileSystemUtils,
}

impl<S: LineSource, W: Write> Session<S, W> {
    /// Create a session with an empty deck and no startup import
    pub fn new(input: S, output: W) -> Self {
        Self {
            deck: Deck::new(),
            log: Vec::new(),
            export_path: None,
            input,
            output,
            card_file: CardFile::new(),
            fs_utils: FileSystemUtils::new(),
        }
    }

    /// Create a session from the startup configuration.
    ///
    /// Runs the startup import, if any, before returning. A failed import is
    /// reported to the user and does not prevent the session from starting.
    #[instrument(skip(input, output))]
    pub fn start(config: &Config, input: S, output: W) -> Result<Self> {
        let mut session = Self::new(input, output);
        session.export_path = config.export_path.clone();

        if let Some(path) = &config.import_path {
            info!("Importing startup cards from {}", path.display());
            session.import_from(path)?;
        }
        Ok(session)
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Every printed and typed line so far, oldest first
    pub fn log(&self) -> &[String] {
        &self.log
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// Run the command loop until `exit` is processed
    pub fn run(&mut self) -> Result<()> {
        loop {
            let line = self.prompt(MENU)?;
            match Action::from_line(&line) {
                Some(Action::Exit) => return self.exit(),
                Some(action) => self.dispatch(action)?,
                None => {
                    debug!("Unknown action {:?}", line);
                    self.say("Unknown action")?;
                }
            }
        }
    }

    /// Execute one non-exit command, including all of its prompts
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Add => self.add_card(),
            Action::Remove => self.remove_card(),
            Action::Import => self.import_cards(),
            Action::Export => self.export_cards(),
            Action::Ask => self.ask(),
            Action::Log => self.save_log(),
            Action::HardestCard => self.hardest_card(),
            Action::ResetStats => self.reset_stats(),
            Action::Exit => self.exit(),
        }
    }

    /// Print a line to the user and record it
    fn say(&mut self, message: impl Into<String>) -> Result<()> {
        let message = message.into();
        writeln!(self.output, "{message}").map_err(FlashcardError::output)?;
        self.output.flush().map_err(FlashcardError::output)?;
        self.log.push(message);
        Ok(())
    }

    /// Read a line from the user and record it
    fn listen(&mut self) -> Result<String> {
        let line = self.input.next_line()?;
        self.log.push(line.clone());
        Ok(line)
    }

    fn prompt(&mut self, message: &str) -> Result<String> {
        self.say(message)?;
        self.listen()
    }

    fn add_card(&mut self) -> Result<()> {
        let term = self.prompt("The card:")?;
        if self.deck.contains_term(&term) {
            return self.say(format!("The card \"{term}\" already exists."));
        }

        let definition = self.prompt("The definition of the card:")?;
        match self.deck.add(Card::new(term.clone(), definition.clone())) {
            Ok(()) => self.say(format!(
                "The pair (\"{term}\":\"{definition}\") has been added."
            )),
            Err(AddConflict::DuplicateDefinition(definition)) => {
                self.say(format!("The definition \"{definition}\" already exists."))
            }
            Err(AddConflict::DuplicateTerm(term)) => {
                self.say(format!("The card \"{term}\" already exists."))
            }
        }
    }

    fn remove_card(&mut self) -> Result<()> {
        let term = self.prompt("Which card?")?;
        match self.deck.remove(&term) {
            Some(_) => self.say("The card has been removed."),
            None => self.say(format!("Can't remove \"{term}\": there is no such card.")),
        }
    }

    fn import_cards(&mut self) -> Result<()> {
        let path = self.prompt(FILE_PROMPT)?;
        self.import_from(Path::new(&path))
    }

    /// Load a card file, upserting every card, or change nothing on failure
    fn import_from(&mut self, path: &Path) -> Result<()> {
        match self.card_file.read(path) {
            Ok(records) => {
                let count = records.len();
                for record in records {
                    self.deck.upsert(record.card, record.mistakes);
                }
                self.say(format!("{count} cards have been loaded."))
            }
            Err(e) => {
                warn!("Import from {} failed: {}", path.display(), e);
                self.say("File not found.")
            }
        }
    }

    fn export_cards(&mut self) -> Result<()> {
        let path = self.prompt(FILE_PROMPT)?;
        self.export_to(Path::new(&path))
    }

    fn export_to(&mut self, path: &Path) -> Result<()> {
        match self.card_file.write(path, &self.deck) {
            Ok(count) => self.say(format!("{count} cards have been saved.")),
            Err(e) => {
                warn!("Export to {} failed: {}", path.display(), e);
                self.say("Error writing file.")
            }
        }
    }

    fn ask(&mut self) -> Result<()> {
        let input = self.prompt("How many times to ask?")?;
        let times = match parse_times(&input) {
            Ok(times) => times,
            Err(e) => {
                warn!("{}", e);
                return self.say(format!("Invalid number of times: \"{input}\"."));
            }
        };

        if times == 0 {
            return Ok(());
        }
        if self.deck.is_empty() {
            return self.say("There are no cards to ask about.");
        }

        for i in 0..times {
            let term = self.deck.terms()[i % self.deck.len()].clone();
            let Some(definition) = self.deck.definition(&term).map(str::to_owned) else {
                continue;
            };

            let answer = self.prompt(&format!("Print the definition of \"{term}\":"))?;
            if answer == definition {
                self.say("Correct!")?;
                continue;
            }

            self.deck.record_mistake(&term);
            let message = match self.deck.term_for_definition(&answer) {
                Some(other) => format!(
                    "Wrong. The right answer is \"{definition}\", but your definition is correct for \"{other}\"."
                ),
                None => format!("Wrong. The right answer is \"{definition}\"."),
            };
            self.say(message)?;
        }
        Ok(())
    }

    fn save_log(&mut self) -> Result<()> {
        let path = self.prompt(FILE_PROMPT)?;
        match self.fs_utils.write_lines(&path, &self.log) {
            Ok(lines) => {
                debug!("Saved {} log lines to {}", lines, path);
                self.say("The log has been saved.")
            }
            Err(e) => {
                warn!("Saving log to {} failed: {}", path, e);
                self.say("Error saving log.")
            }
        }
    }

    fn hardest_card(&mut self) -> Result<()> {
        let message = match self.deck.hardest() {
            Hardest::NoErrors => "There are no cards with errors.".to_string(),
            Hardest::Cards { terms, mistakes } if terms.len() == 1 => format!(
                "The hardest card is \"{}\". You have {mistakes} errors answering it.",
                terms[0]
            ),
            Hardest::Cards { terms, mistakes } => format!(
                "The hardest cards are {}. You have {mistakes} errors answering them.",
                quote_terms(&terms)
            ),
        };
        self.say(message)
    }

    fn reset_stats(&mut self) -> Result<()> {
        self.deck.reset_mistakes();
        self.say("Card statistics have been reset.")
    }

    fn exit(&mut self) -> Result<()> {
        self.say("Bye bye!")?;
        if let Some(path) = self.export_path.clone() {
            info!("Exporting cards on exit to {}", path.display());
            self.export_to(&path)?;
        }
        Ok(())
    }
}

/// Parse the quiz count; zero or negative means "ask nothing"
fn parse_times(input: &str) -> Result<usize> {
    let times: i64 = input
        .parse()
        .map_err(|_| FlashcardError::invalid_count(input))?;
    Ok(usize::try_from(times).unwrap_or(0))
}

/// Format terms as `"t1", "t2"`
fn quote_terms(terms: &[&str]) -> String {
    terms
        .iter()
        .map(|term| format!("\"{term}\""))
        .collect::<Vec<_>>()
        .join(", ")
}
