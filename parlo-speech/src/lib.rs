//! Speech adapters for Parlo.
//!
//! Two thin, single-shot adapters around external services, plus the shared
//! audio output slot:
//!
//! - [`SpeechSynthesizer`] / [`TranslateTts`]: text + language code in, MP3
//!   bytes out, via a translate-style TTS HTTP endpoint.
//! - [`SpeechRecognizer`] / [`MicRecognizer`]: blocking microphone capture,
//!   WAV upload to a recognition HTTP endpoint, transcript out.
//! - [`AudioSlot`]: the single well-known audio file the playback surface
//!   consumes, with delete-then-write semantics.
//!
//! No retries, no queueing: every failure is reported to the caller once.

pub mod capture;
pub mod error;
pub mod recognize;
pub mod slot;
pub mod tts;

pub use capture::{capture_wav, CaptureConfig};
pub use error::{Result, SpeechError};
pub use recognize::{MicRecognizer, SpeechRecognizer};
pub use slot::AudioSlot;
pub use tts::{SpeechSynthesizer, TranslateTts};
