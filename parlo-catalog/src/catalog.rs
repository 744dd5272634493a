//! Sentence catalog with pluggable sources.
//!
//! A catalog maps `(Language, Level)` to an ordered list of practice
//! sentences. Two sources exist:
//!
//! - **Builtin**: a fixed table compiled into the binary.
//! - **Files**: one text file per `(language, level)` pair under a base
//!   directory, named `<lang>_<level>.txt`, one sentence per non-blank line.
//!
//! File lookups are fail-soft: a missing or unreadable file yields an empty
//! list (with a warning), never an error. Callers must check for emptiness
//! before indexing; the session layer resolves empty lists to a sentinel.
//! Files are re-read on every access, so edits take effect without a restart.

use std::path::{Path, PathBuf};

use tracing::warn;

use crate::language::{Language, Level};

/// Where a catalog gets its sentences from.
#[derive(Debug, Clone)]
pub enum CatalogSource {
    /// Fixed table compiled into the binary.
    Builtin,
    /// Per-pair text files under this directory.
    Files(PathBuf),
}

/// Sentence catalog keyed by `(Language, Level)`.
#[derive(Debug, Clone)]
pub struct Catalog {
    source: CatalogSource,
}

impl Catalog {
    /// Catalog backed by the builtin sentence table.
    pub fn builtin() -> Self {
        Self {
            source: CatalogSource::Builtin,
        }
    }

    /// Catalog backed by text files under `dir`.
    pub fn from_files<P: Into<PathBuf>>(dir: P) -> Self {
        Self {
            source: CatalogSource::Files(dir.into()),
        }
    }

    /// Ordered sentences for a `(language, level)` pair.
    ///
    /// Never fails: an absent file or unsupported pair yields an empty list.
    pub fn sentences(&self, language: Language, level: Level) -> Vec<String> {
        match &self.source {
            CatalogSource::Builtin => builtin_sentences(language, level)
                .iter()
                .map(|s| s.to_string())
                .collect(),
            CatalogSource::Files(dir) => read_sentence_file(dir, language, level),
        }
    }
}

/// Read one sentence per non-blank line, whitespace-trimmed.
///
/// Missing or unreadable files are logged and treated as empty.
fn read_sentence_file(dir: &Path, language: Language, level: Level) -> Vec<String> {
    let path = dir.join(format!("{}_{}.txt", language.code(), level.code()));

    match std::fs::read_to_string(&path) {
        Ok(contents) => contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect(),
        Err(e) => {
            warn!("No sentences at {}: {}", path.display(), e);
            Vec::new()
        }
    }
}

/// The builtin corpus: three sentences per pair, all nine pairs.
fn builtin_sentences(language: Language, level: Level) -> &'static [&'static str] {
    match (language, level) {
        (Language::De, Level::Leicht) => &[
            "Hallo, wie geht es dir?",
            "Ich liebe Programmieren mit Python.",
            "Der Himmel ist heute sehr blau.",
        ],
        (Language::De, Level::Mittel) => &[
            "Künstliche Intelligenz ist faszinierend.",
            "Ich trinke gerne Kaffee am Morgen.",
            "Die Blumen im Garten blühen prächtig.",
        ],
        (Language::De, Level::Schwer) => &[
            "Die tiefgreifende Analyse der Daten ist essenziell.",
            "Kollaboratives Arbeiten erfordert Kommunikation und Geduld.",
            "Die Wolken spiegeln sich im ruhigen Wasser des Sees wider.",
        ],
        (Language::Fr, Level::Leicht) => &[
            "Bonjour, comment ça va?",
            "J'adore programmer en Python.",
            "Le ciel est très bleu aujourd'hui.",
        ],
        (Language::Fr, Level::Mittel) => &[
            "L'intelligence artificielle est fascinante.",
            "Je bois du café le matin.",
            "Les fleurs dans le jardin sont magnifiques.",
        ],
        (Language::Fr, Level::Schwer) => &[
            "L'analyse approfondie des données est essentielle.",
            "La collaboration nécessite communication et patience.",
            "Les nuages se reflètent dans l'eau calme du lac.",
        ],
        (Language::En, Level::Leicht) => &[
            "Hello, how are you?",
            "I love programming with Python.",
            "The sky is very blue today.",
        ],
        (Language::En, Level::Mittel) => &[
            "Artificial intelligence is fascinating.",
            "I enjoy drinking coffee in the morning.",
            "The flowers in the garden are blooming beautifully.",
        ],
        (Language::En, Level::Schwer) => &[
            "In-depth data analysis is essential.",
            "Collaborative work requires communication and patience.",
            "The clouds are reflected in the calm water of the lake.",
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_covers_all_pairs() {
        let catalog = Catalog::builtin();
        for lang in Language::ALL {
            for level in Level::ALL {
                let sentences = catalog.sentences(lang, level);
                assert_eq!(
                    sentences.len(),
                    3,
                    "builtin entry for ({}, {}) should have 3 sentences",
                    lang,
                    level
                );
            }
        }
    }

    #[test]
    fn test_file_source_trims_and_skips_blank_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("en_leicht.txt");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "  Hello, how are you?  ").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "\t").unwrap();
        writeln!(file, "The sky is very blue today.").unwrap();

        let catalog = Catalog::from_files(dir.path());
        let sentences = catalog.sentences(Language::En, Level::Leicht);
        assert_eq!(
            sentences,
            vec![
                "Hello, how are you?".to_string(),
                "The sky is very blue today.".to_string(),
            ]
        );
    }

    #[test]
    fn test_missing_file_is_empty_not_error() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = Catalog::from_files(dir.path());
        assert!(catalog.sentences(Language::De, Level::Schwer).is_empty());
    }

    #[test]
    fn test_file_source_rereads_on_access() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fr_mittel.txt");
        std::fs::write(&path, "Je bois du café le matin.\n").unwrap();

        let catalog = Catalog::from_files(dir.path());
        assert_eq!(catalog.sentences(Language::Fr, Level::Mittel).len(), 1);

        std::fs::write(&path, "Une phrase.\nUne autre phrase.\n").unwrap();
        assert_eq!(catalog.sentences(Language::Fr, Level::Mittel).len(), 2);
    }
}
