//! Configuration management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use parlo_catalog::Catalog;
use parlo_score::Normalization;

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Path to configuration file
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Address the HTTP server binds to
    pub listen_addr: String,

    /// Directory holding static assets, including the audio slot
    pub static_dir: PathBuf,

    /// Directory with per-(language, level) sentence files.
    /// Unset = builtin sentence table.
    pub sentences_dir: Option<PathBuf>,

    /// Strip punctuation and other non-ASCII-alphanumeric characters
    /// before scoring
    pub strip_symbols: bool,

    /// Translate-style TTS endpoint
    pub tts_endpoint: String,

    /// Speech-recognition endpoint (accepts WAV, returns a JSON transcript)
    pub recognition_endpoint: String,

    /// Microphone recording window in seconds
    pub capture_seconds: f32,

    /// Audio input device index (None = default device)
    pub audio_device_index: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            config_path: Self::default_config_path(),
            listen_addr: "127.0.0.1:5000".to_string(),
            static_dir: PathBuf::from("static"),
            sentences_dir: None,
            strip_symbols: false,
            tts_endpoint: "https://translate.google.com/translate_tts".to_string(),
            recognition_endpoint: "http://127.0.0.1:5005/transcribe".to_string(),
            capture_seconds: 5.0,
            audio_device_index: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from file, or create default
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)
                .context("Failed to read config file")?;

            let mut config: ServerConfig = toml::from_str(&contents)
                .context("Failed to parse config file")?;

            config.config_path = config_path;
            Ok(config)
        } else {
            let config = Self::default();
            config.save()
                .context("Failed to save default config")?;
            Ok(config)
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent)
                .context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;

        std::fs::write(&self.config_path, contents)
            .context("Failed to write config file")?;

        Ok(())
    }

    /// Catalog selected by the configuration.
    pub fn catalog(&self) -> Catalog {
        match &self.sentences_dir {
            Some(dir) => Catalog::from_files(dir.clone()),
            None => Catalog::builtin(),
        }
    }

    /// Scoring normalization selected by the configuration.
    pub fn normalization(&self) -> Normalization {
        if self.strip_symbols {
            Normalization::CasefoldStripSymbols
        } else {
            Normalization::Casefold
        }
    }

    /// Get default config path
    fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("parlo")
            .join("config.toml")
    }
}
