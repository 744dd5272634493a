//! Text-to-speech client
//!
//! Thin adapter over a translate-style TTS HTTP endpoint: sentence text and
//! language code in, MP3 bytes out. One request per sentence, no caching.

use async_trait::async_trait;
use parlo_catalog::Language;
use tracing::debug;

use crate::error::{Result, SpeechError};

/// Speech synthesis adapter.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Synthesize `text` in `language` and return the audio bytes (MP3).
    async fn synthesize(&self, text: &str, language: Language) -> Result<Vec<u8>>;
}

/// Synthesizer backed by a translate-style TTS HTTP endpoint.
pub struct TranslateTts {
    client: reqwest::Client,
    endpoint: String,
}

impl TranslateTts {
    pub fn new<S: Into<String>>(endpoint: S) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl SpeechSynthesizer for TranslateTts {
    async fn synthesize(&self, text: &str, language: Language) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("ie", "UTF-8"),
                ("client", "tw-ob"),
                ("tl", language.code()),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| SpeechError::synthesis(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(SpeechError::synthesis(format!(
                "TTS endpoint returned {}",
                response.status()
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| SpeechError::synthesis(format!("Failed to read audio: {}", e)))?;

        debug!("Synthesized {} bytes for '{}' ({})", bytes.len(), text, language);
        Ok(bytes.to_vec())
    }
}
