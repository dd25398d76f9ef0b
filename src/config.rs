use std::path::PathBuf;
use std::time::Duration;

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    pub audio_dir: PathBuf,
    pub audio_ttl: Duration,
    pub translate_api_url: String,
    pub tts_api_url: String,
    /// Accepted for deployment parity; nothing consumes it yet.
    #[allow(dead_code)]
    pub secret_key: String,
}

impl Config {
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse()
            .expect("PORT must be a number");
        let static_dir = std::env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("static"));
        let audio_dir = std::env::var("AUDIO_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| std::env::temp_dir().join("anuvad-audio"));
        let audio_ttl_secs: u64 = std::env::var("AUDIO_TTL_SECS")
            .unwrap_or_else(|_| "3600".to_string())
            .parse()
            .expect("AUDIO_TTL_SECS must be a number");
        let translate_api_url = std::env::var("TRANSLATE_API_URL")
            .unwrap_or_else(|_| "https://translate.googleapis.com".to_string());
        let tts_api_url = std::env::var("TTS_API_URL")
            .unwrap_or_else(|_| "https://translate.google.com".to_string());
        let secret_key = std::env::var("SECRET_KEY")
            .unwrap_or_else(|_| "indian-translator-secret-key-2024".to_string());

        Self {
            host,
            port,
            static_dir,
            audio_dir,
            audio_ttl: Duration::from_secs(audio_ttl_secs),
            translate_api_url,
            tts_api_url,
            secret_key,
        }
    }
}
