//! Parlo - spoken-sentence practice server
//!
//! Serves the practice page, synthesizes sentence audio into the shared
//! slot, and scores spoken answers against the reference sentence.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use parlo_server::config::ServerConfig;
use parlo_server::routes::build_router;
use parlo_server::state::AppState;
use parlo_speech::{AudioSlot, CaptureConfig, MicRecognizer, TranslateTts};

#[derive(Parser, Debug)]
#[command(name = "parlo-server", version, about = "Spoken-sentence practice server")]
struct Args {
    /// Listen address override (e.g. 0.0.0.0:5000)
    #[arg(long)]
    listen: Option<String>,

    /// Sentence file directory override (switches to the file-backed catalog)
    #[arg(long)]
    sentences_dir: Option<PathBuf>,

    /// Strip punctuation before scoring (the stricter comparison)
    #[arg(long)]
    strip_symbols: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    info!("Starting Parlo v{}", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();
    let mut config = ServerConfig::load().context("Failed to load configuration")?;
    info!("Configuration loaded from {}", config.config_path.display());

    if let Some(listen) = args.listen {
        config.listen_addr = listen;
    }
    if let Some(dir) = args.sentences_dir {
        config.sentences_dir = Some(dir);
    }
    if args.strip_symbols {
        config.strip_symbols = true;
    }

    let catalog = config.catalog();
    match &config.sentences_dir {
        Some(dir) => info!("Catalog: sentence files under {}", dir.display()),
        None => info!("Catalog: builtin sentence table"),
    }

    let synthesizer = Arc::new(TranslateTts::new(config.tts_endpoint.clone()));
    let recognizer = Arc::new(MicRecognizer::new(
        config.recognition_endpoint.clone(),
        CaptureConfig {
            device_index: config.audio_device_index,
            seconds: config.capture_seconds,
        },
    ));
    let slot = AudioSlot::new(&config.static_dir);

    let state = AppState::new(
        catalog,
        synthesizer,
        recognizer,
        slot,
        config.normalization(),
    );
    let router = build_router(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.listen_addr))?;
    info!("Listening on http://{}", config.listen_addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Parlo stopped");
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("Received shutdown signal");
}
