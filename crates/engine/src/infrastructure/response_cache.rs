//! On-disk response cache keyed by prompt.
//!
//! One JSON file per prompt, named by the SHA-256 of the prompt text. Entries
//! older than the TTL are treated as misses. Unreadable or corrupted entries are
//! misses too, and write failures are only logged: the cache must never fail a
//! request.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use lorecrafter_domain::GameResponse;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tokio::fs;

use crate::infrastructure::ports::{ClockPort, ResponseCachePort};

#[derive(Debug, Serialize, Deserialize)]
struct CacheEntry {
    timestamp: DateTime<Utc>,
    prompt: String,
    response: GameResponse,
}

pub struct FileResponseCache {
    dir: PathBuf,
    ttl: Duration,
    clock: Arc<dyn ClockPort>,
}

impl FileResponseCache {
    pub fn new(dir: impl Into<PathBuf>, ttl: Duration, clock: Arc<dyn ClockPort>) -> Self {
        Self {
            dir: dir.into(),
            ttl,
            clock,
        }
    }

    /// Hex SHA-256 of the prompt.
    pub fn cache_key(prompt: &str) -> String {
        hex::encode(Sha256::digest(prompt.as_bytes()))
    }

    fn entry_path(&self, prompt: &str) -> PathBuf {
        self.dir.join(format!("{}.json", Self::cache_key(prompt)))
    }

    fn is_fresh(&self, entry: &CacheEntry) -> bool {
        let age = self.clock.now().signed_duration_since(entry.timestamp);
        match age.to_std() {
            Ok(age) => age < self.ttl,
            // Timestamp in the future (clock skew): keep it.
            Err(_) => true,
        }
    }
}

#[async_trait]
impl ResponseCachePort for FileResponseCache {
    async fn get(&self, prompt: &str) -> Option<GameResponse> {
        let path = self.entry_path(prompt);
        let raw = fs::read(&path).await.ok()?;

        let entry: CacheEntry = match serde_json::from_slice(&raw) {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Ignoring corrupted cache entry");
                return None;
            }
        };

        if entry.prompt != prompt || !self.is_fresh(&entry) {
            return None;
        }

        tracing::debug!(path = %path.display(), "Response cache hit");
        Some(entry.response)
    }

    async fn put(&self, prompt: &str, response: &GameResponse) {
        let entry = CacheEntry {
            timestamp: self.clock.now(),
            prompt: prompt.to_string(),
            response: response.clone(),
        };

        let json = match serde_json::to_vec_pretty(&entry) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to serialize cache entry");
                return;
            }
        };

        if let Err(e) = fs::create_dir_all(&self.dir).await {
            tracing::warn!(dir = %self.dir.display(), error = %e, "Failed to create cache directory");
            return;
        }

        let path = self.entry_path(prompt);
        if let Err(e) = fs::write(&path, json).await {
            tracing::warn!(path = %path.display(), error = %e, "Failed to write cache entry");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::FixedClock;
    use crate::infrastructure::ports::MockClockPort;
    use chrono::TimeZone;
    use lorecrafter_domain::{GameImages, NarrativeDraft};
    use serde_json::json;

    fn sample_response(prompt: &str) -> GameResponse {
        let narrative: NarrativeDraft =
            serde_json::from_value(json!({"setting": "Sunken Archive", "hook": "Water drips."}))
                .unwrap();
        GameResponse::new(narrative, GameImages::default(), prompt)
    }

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_cache_key_is_sha256_hex() {
        assert_eq!(
            FileResponseCache::cache_key("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[tokio::test]
    async fn test_put_then_get_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let cache = FileResponseCache::new(
            dir.path(),
            Duration::from_secs(60),
            Arc::new(FixedClock(noon())),
        );

        assert!(cache.get("sunken archive").await.is_none());

        cache.put("sunken archive", &sample_response("sunken archive")).await;
        let cached = cache.get("sunken archive").await.unwrap();

        assert_eq!(cached.prompt, "sunken archive");
        assert_eq!(cached.game_data.narrative.text("setting"), Some("Sunken Archive"));
    }

    #[tokio::test]
    async fn test_expired_entry_is_a_miss() {
        let dir = tempfile::tempdir().unwrap();
        let mut clock = MockClockPort::new();
        let mut calls = 0;
        clock.expect_now().returning(move || {
            calls += 1;
            // First call stamps the entry, later calls read two hours on.
            if calls == 1 {
                noon()
            } else {
                noon() + chrono::Duration::hours(2)
            }
        });
        let cache = FileResponseCache::new(dir.path(), Duration::from_secs(3600), Arc::new(clock));

        cache.put("ice tower", &sample_response("ice tower")).await;

        assert!(cache.get("ice tower").await.is_none());
    }

    #[tokio::test]
    async fn test_corrupted_entry_is_a_miss() {
        let dir = tempfile::tempdir().unwrap();
        let cache = FileResponseCache::new(
            dir.path(),
            Duration::from_secs(60),
            Arc::new(FixedClock(noon())),
        );
        let path = dir
            .path()
            .join(format!("{}.json", FileResponseCache::cache_key("broken")));
        std::fs::write(path, "{not json").unwrap();

        assert!(cache.get("broken").await.is_none());
    }

    #[tokio::test]
    async fn test_write_failure_is_silent() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, b"x").unwrap();
        let cache = FileResponseCache::new(
            blocker.join("cache"),
            Duration::from_secs(60),
            Arc::new(FixedClock(noon())),
        );

        cache.put("desert", &sample_response("desert")).await;

        assert!(cache.get("desert").await.is_none());
    }
}
