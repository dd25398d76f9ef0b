use serde_json::Value;

use crate::error::AppError;

/// Client for the unauthenticated Google translate endpoint (`client=gtx`).
#[derive(Debug, Clone)]
pub struct TranslateClient {
    http: reqwest::Client,
    base_url: String,
}

impl TranslateClient {
    pub fn new(http: reqwest::Client, base_url: String) -> Self {
        Self { http, base_url }
    }

    /// Translate `text` into `target_lang`, auto-detecting the source
    /// language. Callers validate the text first; this never sees an
    /// empty string.
    pub async fn translate(&self, text: &str, target_lang: &str) -> Result<String, AppError> {
        let url = format!("{}/translate_a/single", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", target_lang),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| AppError::Translation(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AppError::Translation(format!(
                "provider returned status {}",
                response.status()
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| AppError::Translation(e.to_string()))?;

        parse_translation(&body)
    }
}

/// The endpoint answers with nested arrays: translated segments sit at
/// `[0][i][0]`, the detected source language at `[2]`.
fn parse_translation(body: &Value) -> Result<String, AppError> {
    let segments = body
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| AppError::Translation("unexpected response shape".to_string()))?;

    let mut translated = String::new();
    for segment in segments {
        if let Some(part) = segment.get(0).and_then(Value::as_str) {
            translated.push_str(part);
        }
    }

    if translated.is_empty() {
        return Err(AppError::Translation(
            "provider returned no translation".to_string(),
        ));
    }

    if let Some(detected) = body.get(2).and_then(Value::as_str) {
        tracing::debug!("Detected source language: {}", detected);
    }

    Ok(translated)
}
