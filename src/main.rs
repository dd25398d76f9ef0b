use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

mod api;
mod config;
mod error;
mod languages;
mod providers;
mod store;

use api::routes::{create_router, AppState};
use config::Config;
use languages::LanguageRegistry;
use providers::{http_client, TranslateClient, TtsClient};
use store::AudioStore;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("Invalid address");

    tracing::info!("Anuvad Server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Starting server on http://{}", addr);
    tracing::info!("Audio staging directory: {}", config.audio_dir.display());

    // Prepare the audio staging directory
    let store = AudioStore::new(config.audio_dir.clone(), config.audio_ttl)
        .expect("Failed to prepare audio staging directory");

    // One pooled client serves both providers
    let http = http_client().expect("Failed to create HTTP client");
    let translator = TranslateClient::new(http.clone(), config.translate_api_url.clone());
    let tts = TtsClient::new(http, config.tts_api_url.clone(), store.clone());

    let state = Arc::new(AppState {
        config,
        languages: LanguageRegistry::new(),
        translator,
        tts,
        store: store.clone(),
    });

    // Evict stale audio files in the background
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(60));
        loop {
            interval.tick().await;
            match store.purge_expired().await {
                Ok(0) => {}
                Ok(n) => tracing::info!("Evicted {} expired audio file(s)", n),
                Err(e) => tracing::warn!("Audio eviction sweep failed: {}", e),
            }
        }
    });

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .await
        .expect("Server error");
}
