//! End-to-end form-action flow over the router with mock speech adapters.
//!
//! No audio hardware and no network: the synthesizer and recognizer are
//! replaced with in-process mocks, the catalog is the builtin table, and
//! requests go through `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use tower::util::ServiceExt;

use parlo_catalog::{Catalog, Language};
use parlo_score::Normalization;
use parlo_server::routes::build_router;
use parlo_server::state::AppState;
use parlo_speech::{AudioSlot, SpeechError, SpeechRecognizer, SpeechSynthesizer};

/// Synthesizer returning fixed bytes.
struct StaticSynth;

#[async_trait]
impl SpeechSynthesizer for StaticSynth {
    async fn synthesize(&self, _text: &str, _language: Language) -> parlo_speech::Result<Vec<u8>> {
        Ok(b"mp3".to_vec())
    }
}

/// Synthesizer that always fails.
struct BrokenSynth;

#[async_trait]
impl SpeechSynthesizer for BrokenSynth {
    async fn synthesize(&self, _text: &str, _language: Language) -> parlo_speech::Result<Vec<u8>> {
        Err(SpeechError::synthesis("endpoint down"))
    }
}

/// Recognizer returning a fixed transcript.
struct FixedRecognizer(&'static str);

#[async_trait]
impl SpeechRecognizer for FixedRecognizer {
    async fn listen_and_transcribe(&self, _language: Language) -> parlo_speech::Result<String> {
        Ok(self.0.to_string())
    }
}

/// Recognizer failing with a given error.
struct FailingRecognizer(fn() -> SpeechError);

#[async_trait]
impl SpeechRecognizer for FailingRecognizer {
    async fn listen_and_transcribe(&self, _language: Language) -> parlo_speech::Result<String> {
        Err((self.0)())
    }
}

/// Router + kept-alive temp dir + slot for assertions.
fn test_app(
    synthesizer: Arc<dyn SpeechSynthesizer>,
    recognizer: Arc<dyn SpeechRecognizer>,
    normalization: Normalization,
) -> (Router, tempfile::TempDir, AudioSlot) {
    let static_dir = tempfile::tempdir().unwrap();
    let slot = AudioSlot::new(static_dir.path());
    let state = AppState::new(
        Catalog::builtin(),
        synthesizer,
        recognizer,
        slot.clone(),
        normalization,
    );
    let router = build_router(state, static_dir.path());
    (router, static_dir, slot)
}

fn form_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn practice_page_shows_default_sentence() {
    let (router, _dir, _slot) = test_app(
        Arc::new(StaticSynth),
        Arc::new(FixedRecognizer("")),
        Normalization::Casefold,
    );

    let response = router
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("Hallo, wie geht es dir?"));
    assert!(body.contains("<option value=\"de\" selected>"));
}

#[tokio::test]
async fn selecting_language_and_level_resolves_and_synthesizes() {
    let (router, _dir, slot) = test_app(
        Arc::new(StaticSynth),
        Arc::new(FixedRecognizer("")),
        Normalization::Casefold,
    );

    let response = router
        .oneshot(form_post("/", "language=en&level=leicht"))
        .await
        .unwrap();

    let body = body_string(response).await;
    assert!(body.contains("Hello, how are you?"));
    assert!(body.contains("<option value=\"en\" selected>"));
    assert_eq!(std::fs::read(slot.path()).unwrap(), b"mp3");
}

#[tokio::test]
async fn next_cycles_back_to_the_first_sentence() {
    let (router, _dir, _slot) = test_app(
        Arc::new(StaticSynth),
        Arc::new(FixedRecognizer("")),
        Normalization::Casefold,
    );

    // Three sentences per builtin entry: three advances complete the cycle.
    for _ in 0..2 {
        let response = router
            .clone()
            .oneshot(form_post("/", "next=1"))
            .await
            .unwrap();
        let body = body_string(response).await;
        assert!(!body.contains("Hallo, wie geht es dir?"));
    }

    let response = router.oneshot(form_post("/", "next=1")).await.unwrap();
    let body = body_string(response).await;
    assert!(body.contains("Hallo, wie geht es dir?"));
}

#[tokio::test]
async fn repeat_keeps_the_current_sentence() {
    let (router, _dir, _slot) = test_app(
        Arc::new(StaticSynth),
        Arc::new(FixedRecognizer("")),
        Normalization::Casefold,
    );

    let response = router
        .clone()
        .oneshot(form_post("/", "repeat=1"))
        .await
        .unwrap();
    let body = body_string(response).await;
    assert!(body.contains("Hallo, wie geht es dir?"));
}

#[tokio::test]
async fn check_scores_a_clean_transcript_at_100() {
    let (router, _dir, _slot) = test_app(
        Arc::new(StaticSynth),
        Arc::new(FixedRecognizer("hello how are you")),
        Normalization::CasefoldStripSymbols,
    );

    // Move the shared session to the English easy sentence first.
    let _ = router
        .clone()
        .oneshot(form_post("/", "language=en&level=leicht"))
        .await
        .unwrap();

    let response = router.oneshot(form_post("/check", "")).await.unwrap();
    let body = body_string(response).await;
    assert!(body.contains("Hello, how are you?"));
    assert!(body.contains("hello how are you"));
    assert!(body.contains("Score: 100%"));
}

#[tokio::test]
async fn check_reports_unintelligible_audio() {
    let (router, _dir, _slot) = test_app(
        Arc::new(StaticSynth),
        Arc::new(FailingRecognizer(|| SpeechError::Unintelligible)),
        Normalization::Casefold,
    );

    let response = router.oneshot(form_post("/check", "")).await.unwrap();
    let body = body_string(response).await;
    assert!(body.contains("I could not understand you."));
}

#[tokio::test]
async fn check_reports_unreachable_service() {
    let (router, _dir, _slot) = test_app(
        Arc::new(StaticSynth),
        Arc::new(FailingRecognizer(|| {
            SpeechError::service_unavailable("connection refused")
        })),
        Normalization::Casefold,
    );

    let response = router.oneshot(form_post("/check", "")).await.unwrap();
    let body = body_string(response).await;
    assert!(body.contains("Error during the request."));
}

#[tokio::test]
async fn check_reports_generic_failure_for_other_errors() {
    let (router, _dir, _slot) = test_app(
        Arc::new(StaticSynth),
        Arc::new(FailingRecognizer(|| {
            SpeechError::audio_capture("no microphone")
        })),
        Normalization::Casefold,
    );

    let response = router.oneshot(form_post("/check", "")).await.unwrap();
    let body = body_string(response).await;
    assert!(body.contains("Speech check failed. Please try again."));
}

#[tokio::test]
async fn synthesis_failure_renders_banner_not_error_status() {
    let (router, _dir, slot) = test_app(
        Arc::new(BrokenSynth),
        Arc::new(FixedRecognizer("")),
        Normalization::Casefold,
    );

    let response = router.oneshot(form_post("/", "repeat=1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("Audio playback is unavailable right now."));
    assert!(!slot.path().exists());
}

#[tokio::test]
async fn unknown_codes_are_ignored() {
    let (router, _dir, _slot) = test_app(
        Arc::new(StaticSynth),
        Arc::new(FixedRecognizer("")),
        Normalization::Casefold,
    );

    let response = router
        .oneshot(form_post("/", "language=es&level=impossible"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("Hallo, wie geht es dir?"));
}

#[tokio::test]
async fn health_reports_ok() {
    let (router, _dir, _slot) = test_app(
        Arc::new(StaticSynth),
        Arc::new(FixedRecognizer("")),
        Normalization::Casefold,
    );

    let response = router
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("\"status\":\"ok\""));
}
