//! Practice-session cursor and its transition function.
//!
//! The session tracks the current language, level, and sentence index, plus
//! the resolved sentence text. Every user action re-resolves the active
//! sentence list from the catalog, so file-backed catalogs pick up edits
//! between requests.

use crate::catalog::Catalog;
use crate::language::{Language, Level};

/// Sentinel text shown when the current `(language, level)` pair has no
/// sentences. Resolving never fails; it degrades to this.
pub const NO_SENTENCES_AVAILABLE: &str = "No sentences available for this selection.";

/// User action applied to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Switch language; resets the index to 0.
    SetLanguage(Language),
    /// Switch difficulty; resets the index to 0.
    SetLevel(Level),
    /// Move to the next sentence, wrapping at the end of the list.
    Advance,
    /// Keep the current sentence (replay).
    Repeat,
}

/// Mutable cursor over the catalog.
///
/// Index invariant: 0 whenever language or level changes, otherwise always
/// within `[0, len)` of the active list (0 when the list is empty).
#[derive(Debug, Clone)]
pub struct Session {
    language: Language,
    level: Level,
    index: usize,
    current: String,
}

impl Session {
    /// New session with the default selection (German, easy, first sentence).
    pub fn new(catalog: &Catalog) -> Self {
        let mut session = Self {
            language: Language::De,
            level: Level::Leicht,
            index: 0,
            current: String::new(),
        };
        session.resolve(catalog);
        session
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// The resolved sentence text, or the unavailability sentinel.
    pub fn current_sentence(&self) -> &str {
        &self.current
    }

    /// Apply one user action and re-resolve the current sentence.
    ///
    /// Infallible: unsupported selections degrade to the sentinel.
    pub fn apply(&mut self, action: Action, catalog: &Catalog) {
        match action {
            Action::SetLanguage(language) => {
                self.language = language;
                self.index = 0;
            }
            Action::SetLevel(level) => {
                self.level = level;
                self.index = 0;
            }
            Action::Advance => {
                let len = catalog.sentences(self.language, self.level).len();
                self.index = if len == 0 { 0 } else { (self.index + 1) % len };
            }
            Action::Repeat => {}
        }
        self.resolve(catalog);
    }

    /// Re-resolve `current` from the catalog, clamping a stale index.
    fn resolve(&mut self, catalog: &Catalog) {
        let sentences = catalog.sentences(self.language, self.level);
        if sentences.is_empty() {
            self.index = 0;
            self.current = NO_SENTENCES_AVAILABLE.to_string();
        } else {
            // A file edit can shrink the list between requests.
            if self.index >= sentences.len() {
                self.index = 0;
            }
            self.current = sentences[self.index].clone();
        }
    }
}
