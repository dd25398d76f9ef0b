pub mod translate;
pub mod tts;

pub use translate::TranslateClient;
pub use tts::TtsClient;

use std::time::Duration;

// The free Google endpoints refuse requests without a browser User-Agent.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Shared client for both providers: pooled connections, hard timeout.
pub fn http_client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(10))
        .user_agent(USER_AGENT)
        .build()
}
