//! Sentence catalog and practice-session cursor for Parlo.
//!
//! This crate holds the language/level enumerations, the sentence catalog
//! with its two sources (builtin table or per-pair text files), and the
//! session cursor that tracks which sentence is currently being practiced.
//!
//! ## Quick Start
//!
//! ```
//! use parlo_catalog::{Action, Catalog, Language, Level, Session};
//!
//! let catalog = Catalog::builtin();
//! let mut session = Session::new(&catalog);
//!
//! session.apply(Action::SetLanguage(Language::En), &catalog);
//! session.apply(Action::SetLevel(Level::Leicht), &catalog);
//! assert_eq!(session.current_sentence(), "Hello, how are you?");
//! ```

pub mod catalog;
pub mod language;
pub mod session;

pub use catalog::{Catalog, CatalogSource};
pub use language::{Language, Level, ParseCodeError};
pub use session::{Action, Session, NO_SENTENCES_AVAILABLE};
