use axum::{
    extract::rejection::JsonRejection,
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use std::collections::BTreeMap;
use std::sync::Arc;

use super::{
    HealthResponse, LanguagesResponse, TranslateRequest, TranslateResponse, TtsRequest,
    TtsResponse,
};
use crate::api::routes::AppState;
use crate::error::AppError;
use crate::store::AUDIO_MIME;

// Compiled-in copy of the UI, served when the static directory is absent.
const FALLBACK_INDEX: &str = include_str!("../../static/index.html");

pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    let page = state.config.static_dir.join("index.html");
    match tokio::fs::read_to_string(&page).await {
        Ok(body) => Html(body),
        Err(_) => Html(FALLBACK_INDEX.to_string()),
    }
}

pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        port: state.config.port,
        languages_supported: state.languages.count(),
    })
}

pub async fn languages(State(state): State<Arc<AppState>>) -> Json<LanguagesResponse> {
    let languages: BTreeMap<_, _> = state.languages.iter().map(|l| (l.code, l)).collect();
    Json(LanguagesResponse {
        success: true,
        count: languages.len(),
        languages,
    })
}

pub async fn translate(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<TranslateRequest>, JsonRejection>,
) -> Result<Json<TranslateResponse>, AppError> {
    let Json(request) = payload.map_err(|_| AppError::BadRequest("No data provided".into()))?;

    // Validate input
    let text = request.text.trim();
    if text.is_empty() {
        return Err(AppError::BadRequest("Please enter text".into()));
    }

    tracing::info!(
        "Translating {} characters to {}",
        text.chars().count(),
        request.target_lang
    );

    let translated = state
        .translator
        .translate(text, &request.target_lang)
        .await?;

    let target_name = state
        .languages
        .get(&request.target_lang)
        .map(|l| l.name.to_string())
        .unwrap_or_else(|| "Unknown".to_string());

    Ok(Json(TranslateResponse {
        success: true,
        original_text: text.to_string(),
        translated_text: translated,
        target_lang: target_name,
    }))
}

pub async fn text_to_speech(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<TtsRequest>, JsonRejection>,
) -> Result<Json<TtsResponse>, AppError> {
    let Json(request) = payload.map_err(|_| AppError::BadRequest("No data provided".into()))?;

    // Validate input
    let text = request.text.trim();
    if text.is_empty() {
        return Err(AppError::BadRequest("No text provided".into()));
    }

    let language = state.languages.get_or_default(&request.lang);
    tracing::info!("Generating speech for {}", language.code);

    let artifact = state.tts.synthesize(text, language.tts_lang).await?;

    Ok(Json(TtsResponse {
        success: true,
        audio_url: format!("/audio/{}", artifact.filename),
        message: "Speech generated successfully".to_string(),
    }))
}

pub async fn audio(
    State(state): State<Arc<AppState>>,
    Path(filename): Path<String>,
) -> Result<Response, AppError> {
    let bytes = state.store.open(&filename).await?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, AUDIO_MIME),
            (
                header::CONTENT_DISPOSITION,
                "inline; filename=\"translation.mp3\"",
            ),
        ],
        bytes,
    )
        .into_response())
}
