//! HTTP request handlers.
//!
//! `GET/POST /` serves the practice page and its form actions, `POST /check`
//! runs the capture-transcribe-score round, `GET /health` reports liveness.
//! Every
//! adapter failure is converted to a user-facing message here; no error
//! escapes as a 500 and nothing is retried.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use axum::extract::State;
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use serde::Deserialize;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::warn;

use parlo_catalog::{Action, Language, Level, NO_SENTENCES_AVAILABLE};
use parlo_speech::SpeechError;

use crate::render;
use crate::state::AppState;

/// User-facing messages for the check page.
const MSG_UNINTELLIGIBLE: &str = "I could not understand you.";
const MSG_SERVICE_UNAVAILABLE: &str = "Error during the request.";
const MSG_GENERIC: &str = "Speech check failed. Please try again.";
const MSG_NO_AUDIO: &str = "Audio playback is unavailable right now.";

/// Build the full router.
pub fn build_router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/", get(practice).post(apply_actions))
        .route("/check", post(check))
        .route("/health", get(health))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Form fields from the practice page.
///
/// `next` and `repeat` are presence-triggered button values; their content
/// is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct PracticeForm {
    pub language: Option<String>,
    pub level: Option<String>,
    pub next: Option<String>,
    pub repeat: Option<String>,
}

async fn practice(State(state): State<AppState>) -> Html<String> {
    let session = state.session.read().await;
    Html(render::practice_page(
        session.current_sentence(),
        session.language(),
        session.level(),
        unix_timestamp(),
        None,
    ))
}

async fn apply_actions(
    State(state): State<AppState>,
    Form(form): Form<PracticeForm>,
) -> Html<String> {
    let mut session = state.session.write().await;

    // Fixed action order: language, then level, then next/repeat.
    if let Some(code) = &form.language {
        match code.parse::<Language>() {
            Ok(language) => session.apply(Action::SetLanguage(language), &state.catalog),
            Err(e) => warn!("Ignoring form value: {}", e),
        }
    }
    if let Some(code) = &form.level {
        match code.parse::<Level>() {
            Ok(level) => session.apply(Action::SetLevel(level), &state.catalog),
            Err(e) => warn!("Ignoring form value: {}", e),
        }
    }
    if form.next.is_some() {
        session.apply(Action::Advance, &state.catalog);
    } else if form.repeat.is_some() {
        session.apply(Action::Repeat, &state.catalog);
    }

    let sentence = session.current_sentence().to_string();
    let language = session.language();
    let level = session.level();
    drop(session);

    // Synthesize the resolved sentence into the shared audio slot. The
    // sentinel is not worth speaking; a synthesis failure becomes a banner.
    let mut error = None;
    if sentence != NO_SENTENCES_AVAILABLE {
        match state.synthesizer.synthesize(&sentence, language).await {
            Ok(bytes) => {
                if let Err(e) = state.slot.write(&bytes) {
                    warn!("Failed to write audio slot: {}", e);
                    error = Some(MSG_NO_AUDIO);
                }
            }
            Err(e) => {
                warn!("Synthesis failed: {}", e);
                error = Some(MSG_NO_AUDIO);
            }
        }
    }

    Html(render::practice_page(
        &sentence,
        language,
        level,
        unix_timestamp(),
        error,
    ))
}

async fn check(State(state): State<AppState>) -> Html<String> {
    // Snapshot the reference before the (long, blocking) capture so the
    // session lock is not held across it.
    let (sentence, language) = {
        let session = state.session.read().await;
        (
            session.current_sentence().to_string(),
            session.language(),
        )
    };

    match state.recognizer.listen_and_transcribe(language).await {
        Ok(transcript) => {
            let score = parlo_score::score(&sentence, &transcript, state.normalization);
            Html(render::result_page(&sentence, &transcript, score))
        }
        Err(SpeechError::Unintelligible) => Html(render::error_page(MSG_UNINTELLIGIBLE)),
        Err(SpeechError::ServiceUnavailable(e)) => {
            warn!("Recognition service unavailable: {}", e);
            Html(render::error_page(MSG_SERVICE_UNAVAILABLE))
        }
        Err(e) => {
            warn!("Speech check failed: {}", e);
            Html(render::error_page(MSG_GENERIC))
        }
    }
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Cache-busting timestamp for the audio element.
fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
