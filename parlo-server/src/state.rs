//! Shared application state for request handlers.

use std::sync::Arc;

use tokio::sync::RwLock;

use parlo_catalog::{Catalog, Session};
use parlo_score::Normalization;
use parlo_speech::{AudioSlot, SpeechRecognizer, SpeechSynthesizer};

/// State shared by all HTTP handlers.
///
/// There is exactly one session for the whole process: concurrent clients
/// mutate the same cursor and the last writer wins. The adapters sit behind
/// trait objects so tests can swap in mocks.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Catalog,
    pub session: Arc<RwLock<Session>>,
    pub synthesizer: Arc<dyn SpeechSynthesizer>,
    pub recognizer: Arc<dyn SpeechRecognizer>,
    pub slot: AudioSlot,
    pub normalization: Normalization,
}

impl AppState {
    pub fn new(
        catalog: Catalog,
        synthesizer: Arc<dyn SpeechSynthesizer>,
        recognizer: Arc<dyn SpeechRecognizer>,
        slot: AudioSlot,
        normalization: Normalization,
    ) -> Self {
        let session = Session::new(&catalog);
        Self {
            catalog,
            session: Arc::new(RwLock::new(session)),
            synthesizer,
            recognizer,
            slot,
            normalization,
        }
    }
}
