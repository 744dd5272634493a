//! Speech recognition client
//!
//! Captures one window from the microphone, uploads it as WAV to the
//! recognition HTTP endpoint, and returns the transcript. Failures map onto
//! the two user-visible outcomes: `Unintelligible` when the service could
//! not make sense of the audio, `ServiceUnavailable` when it could not be
//! reached. Nothing is retried.

use async_trait::async_trait;
use parlo_catalog::Language;
use serde::Deserialize;
use tracing::{debug, info};

use crate::capture::{capture_wav, CaptureConfig};
use crate::error::{Result, SpeechError};

/// Speech recognition adapter.
#[async_trait]
pub trait SpeechRecognizer: Send + Sync {
    /// Capture audio and return the transcript for `language`.
    async fn listen_and_transcribe(&self, language: Language) -> Result<String>;
}

/// JSON body returned by the recognition endpoint.
#[derive(Debug, Deserialize)]
struct TranscriptResponse {
    transcript: Option<String>,
}

/// Recognizer that records from the microphone and posts to an HTTP
/// recognition endpoint.
pub struct MicRecognizer {
    client: reqwest::Client,
    endpoint: String,
    capture: CaptureConfig,
}

impl MicRecognizer {
    pub fn new<S: Into<String>>(endpoint: S, capture: CaptureConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            capture,
        }
    }
}

#[async_trait]
impl SpeechRecognizer for MicRecognizer {
    async fn listen_and_transcribe(&self, language: Language) -> Result<String> {
        // Capture blocks for the whole window; keep it off the async workers.
        let capture = self.capture.clone();
        let wav = tokio::task::spawn_blocking(move || capture_wav(&capture))
            .await
            .map_err(|e| SpeechError::audio_capture(format!("Capture task failed: {}", e)))??;

        debug!("Uploading {} bytes of WAV for recognition", wav.len());

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("lang", language.code())])
            .header(reqwest::header::CONTENT_TYPE, "audio/wav")
            .body(wav)
            .send()
            .await
            .map_err(|e| SpeechError::service_unavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(SpeechError::service_unavailable(format!(
                "Recognition endpoint returned {}",
                response.status()
            )));
        }

        let body: TranscriptResponse = response
            .json()
            .await
            .map_err(|e| SpeechError::service_unavailable(format!("Bad response: {}", e)))?;

        match body.transcript {
            Some(text) if !text.trim().is_empty() => {
                info!("Recognized: {}", text);
                Ok(text)
            }
            _ => Err(SpeechError::Unintelligible),
        }
    }
}
