pub mod handlers;
pub mod routes;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::languages::Language;

#[derive(Debug, Deserialize)]
pub struct TranslateRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default = "default_target_lang")]
    pub target_lang: String,
}

fn default_target_lang() -> String {
    "hi".to_string()
}

#[derive(Debug, Serialize)]
pub struct TranslateResponse {
    pub success: bool,
    pub original_text: String,
    pub translated_text: String,
    /// Display name of the target language, or "Unknown".
    pub target_lang: String,
}

#[derive(Debug, Deserialize)]
pub struct TtsRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default = "default_tts_lang")]
    pub lang: String,
}

fn default_tts_lang() -> String {
    "en".to_string()
}

#[derive(Debug, Serialize)]
pub struct TtsResponse {
    pub success: bool,
    pub audio_url: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub port: u16,
    pub languages_supported: usize,
}

#[derive(Debug, Serialize)]
pub struct LanguagesResponse {
    pub success: bool,
    pub languages: BTreeMap<&'static str, &'static Language>,
    pub count: usize,
}
