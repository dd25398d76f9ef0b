use crate::error::AppError;
use crate::store::{AudioArtifact, AudioStore};

/// Hard limit imposed by the speech endpoint; longer text is cut, not
/// rejected.
pub const MAX_TTS_CHARS: usize = 500;

/// Client for the unauthenticated Google speech endpoint (`client=tw-ob`),
/// staging the returned MP3 for later retrieval.
#[derive(Debug, Clone)]
pub struct TtsClient {
    http: reqwest::Client,
    base_url: String,
    store: AudioStore,
}

impl TtsClient {
    pub fn new(http: reqwest::Client, base_url: String, store: AudioStore) -> Self {
        Self {
            http,
            base_url,
            store,
        }
    }

    pub async fn synthesize(&self, text: &str, lang: &str) -> Result<AudioArtifact, AppError> {
        // 1. Cap the text at the provider limit
        let text = truncate_chars(text, MAX_TTS_CHARS);

        // 2. Fetch the MP3
        let url = format!("{}/translate_tts", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[
                ("ie", "UTF-8"),
                ("client", "tw-ob"),
                ("tl", lang),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| AppError::Synthesis(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AppError::Synthesis(format!(
                "provider returned status {}",
                response.status()
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| AppError::Synthesis(e.to_string()))?;

        // 3. Stage the audio for the /audio route
        let artifact = self
            .store
            .save(&bytes)
            .await
            .map_err(|e| AppError::Synthesis(e.to_string()))?;
        tracing::debug!("Staged audio at {}", artifact.path.display());

        Ok(artifact)
    }
}

fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::http_client;
    use std::time::Duration;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn keeps_short_text_untouched() {
        assert_eq!(truncate_chars("hello", MAX_TTS_CHARS), "hello");
    }

    #[test]
    fn cuts_ascii_at_the_limit() {
        let text = "a".repeat(501);
        assert_eq!(truncate_chars(&text, MAX_TTS_CHARS).len(), 500);
    }

    #[test]
    fn counts_chars_not_bytes() {
        let text = "न".repeat(600);
        let cut = truncate_chars(&text, MAX_TTS_CHARS);
        assert_eq!(cut.chars().count(), 500);
        assert!(text.starts_with(cut));
    }

    #[tokio::test]
    async fn stages_provider_audio() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/translate_tts"))
            .and(query_param("client", "tw-ob"))
            .and(query_param("tl", "hi"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "audio/mpeg")
                    .set_body_bytes(b"mp3 bytes".to_vec()),
            )
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let store = AudioStore::new(dir.path(), Duration::from_secs(3600)).unwrap();
        let client = TtsClient::new(http_client().unwrap(), server.uri(), store.clone());

        let artifact = client.synthesize("नमस्ते", "hi").await.unwrap();
        assert_eq!(store.open(&artifact.filename).await.unwrap(), b"mp3 bytes");
    }

    #[tokio::test]
    async fn truncates_before_calling_the_provider() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/translate_tts"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "audio/mpeg")
                    .set_body_bytes(b"mp3".to_vec()),
            )
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let store = AudioStore::new(dir.path(), Duration::from_secs(3600)).unwrap();
        let client = TtsClient::new(http_client().unwrap(), server.uri(), store);

        let long_text = "a".repeat(700);
        client.synthesize(&long_text, "en").await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        let sent = requests[0]
            .url
            .query_pairs()
            .find(|(key, _)| key == "q")
            .map(|(_, value)| value.into_owned())
            .unwrap();
        assert_eq!(sent.chars().count(), 500);
    }

    #[tokio::test]
    async fn surfaces_provider_failures() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let store = AudioStore::new(dir.path(), Duration::from_secs(3600)).unwrap();
        let client = TtsClient::new(http_client().unwrap(), server.uri(), store);

        let err = client.synthesize("hello", "en").await.unwrap_err();
        assert!(matches!(err, AppError::Synthesis(_)));
    }
}
