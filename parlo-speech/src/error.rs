//! Error types for speech operations

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SpeechError>;

#[derive(Error, Debug)]
pub enum SpeechError {
    #[error("Could not understand the audio")]
    Unintelligible,

    #[error("Recognition service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Audio capture error: {0}")]
    AudioCapture(String),

    #[error("Speech synthesis error: {0}")]
    Synthesis(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SpeechError {
    pub fn service_unavailable<S: Into<String>>(msg: S) -> Self {
        Self::ServiceUnavailable(msg.into())
    }

    pub fn audio_capture<S: Into<String>>(msg: S) -> Self {
        Self::AudioCapture(msg.into())
    }

    pub fn synthesis<S: Into<String>>(msg: S) -> Self {
        Self::Synthesis(msg.into())
    }
}
