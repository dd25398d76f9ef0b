use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use super::handlers;
use crate::config::Config;
use crate::languages::LanguageRegistry;
use crate::providers::{TranslateClient, TtsClient};
use crate::store::AudioStore;

pub struct AppState {
    pub config: Config,
    pub languages: LanguageRegistry,
    pub translator: TranslateClient,
    pub tts: TtsClient,
    pub store: AudioStore,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    let static_dir = state.config.static_dir.clone();

    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route("/languages", get(handlers::languages))
        .route("/translate", post(handlers::translate))
        .route("/tts", post(handlers::text_to_speech))
        .route("/audio/:filename", get(handlers::audio))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
