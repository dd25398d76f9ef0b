use std::path::PathBuf;
use std::time::Duration;

use lazy_static::lazy_static;
use regex::Regex;
use uuid::Uuid;

use crate::error::AppError;

pub const AUDIO_MIME: &str = "audio/mpeg";

lazy_static! {
    // Bare .mp3 filenames only: no path separators, no leading dot.
    static ref AUDIO_FILENAME_RE: Regex =
        Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]*\.mp3$").unwrap();
}

/// A staged audio file, addressable by its public filename.
#[derive(Debug)]
pub struct AudioArtifact {
    pub filename: String,
    pub path: PathBuf,
}

/// Staging directory for generated speech. Files get unique names on the
/// way in and are evicted once older than `ttl`.
#[derive(Debug, Clone)]
pub struct AudioStore {
    root: PathBuf,
    ttl: Duration,
}

impl AudioStore {
    pub fn new(root: impl Into<PathBuf>, ttl: Duration) -> Result<Self, AppError> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;
        let root = root.canonicalize()?;
        Ok(Self { root, ttl })
    }

    pub async fn save(&self, bytes: &[u8]) -> Result<AudioArtifact, AppError> {
        let filename = format!("tts-{}.mp3", Uuid::new_v4().simple());
        let path = self.root.join(&filename);
        tokio::fs::write(&path, bytes).await?;
        Ok(AudioArtifact { filename, path })
    }

    /// Read a staged file back. Names that fail the filename check or
    /// resolve outside the staging directory are reported as missing.
    pub async fn open(&self, filename: &str) -> Result<Vec<u8>, AppError> {
        if !AUDIO_FILENAME_RE.is_match(filename) {
            return Err(AppError::AudioNotFound);
        }

        let resolved = tokio::fs::canonicalize(self.root.join(filename))
            .await
            .map_err(|_| AppError::AudioNotFound)?;
        if !resolved.starts_with(&self.root) {
            return Err(AppError::AudioNotFound);
        }

        Ok(tokio::fs::read(&resolved).await?)
    }

    /// Delete files older than the TTL. Returns how many were removed.
    pub async fn purge_expired(&self) -> Result<usize, AppError> {
        let mut removed = 0;
        let mut entries = tokio::fs::read_dir(&self.root).await?;

        while let Some(entry) = entries.next_entry().await? {
            let metadata = entry.metadata().await?;
            if !metadata.is_file() {
                continue;
            }

            let expired = metadata
                .modified()
                .ok()
                .and_then(|mtime| mtime.elapsed().ok())
                .map(|age| age > self.ttl)
                .unwrap_or(false);

            if expired {
                tokio::fs::remove_file(entry.path()).await?;
                removed += 1;
            }
        }

        Ok(removed)
    }
}
