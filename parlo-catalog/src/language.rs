//! Supported languages and difficulty levels.
//!
//! Both enumerations are closed: the catalog, the speech endpoints, and the
//! web forms all speak the same short wire codes, and anything outside them
//! is rejected at the request boundary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error for unrecognized language or level codes.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unknown {kind} code: {code}")]
pub struct ParseCodeError {
    kind: &'static str,
    code: String,
}

/// Practice language.
///
/// The wire code doubles as the TTS/recognition language parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    De,
    Fr,
    En,
}

impl Language {
    /// All supported languages, in menu order.
    pub const ALL: [Language; 3] = [Language::De, Language::Fr, Language::En];

    /// Short wire code (`de`, `fr`, `en`).
    pub fn code(&self) -> &'static str {
        match self {
            Language::De => "de",
            Language::Fr => "fr",
            Language::En => "en",
        }
    }

    /// Human-readable name for menus.
    pub fn name(&self) -> &'static str {
        match self {
            Language::De => "Deutsch",
            Language::Fr => "Français",
            Language::En => "English",
        }
    }
}

impl FromStr for Language {
    type Err = ParseCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "de" => Ok(Language::De),
            "fr" => Ok(Language::Fr),
            "en" => Ok(Language::En),
            other => Err(ParseCodeError {
                kind: "language",
                code: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Difficulty level.
///
/// Wire codes are the German tier names (easy, medium, hard).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Leicht,
    Mittel,
    Schwer,
}

impl Level {
    /// All supported levels, easiest first.
    pub const ALL: [Level; 3] = [Level::Leicht, Level::Mittel, Level::Schwer];

    /// Short wire code (`leicht`, `mittel`, `schwer`).
    pub fn code(&self) -> &'static str {
        match self {
            Level::Leicht => "leicht",
            Level::Mittel => "mittel",
            Level::Schwer => "schwer",
        }
    }
}

impl FromStr for Level {
    type Err = ParseCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "leicht" => Ok(Level::Leicht),
            "mittel" => Ok(Level::Mittel),
            "schwer" => Ok(Level::Schwer),
            other => Err(ParseCodeError {
                kind: "level",
                code: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
