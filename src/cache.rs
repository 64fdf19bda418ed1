use sha2::{Digest, Sha256};
use std::time::{Duration, Instant};
use crate::models::GenerationResult;

// Relay cache entry with timestamp
#[derive(Clone)]
pub struct CacheEntry {
    pub result: GenerationResult,
    pub created_at: Instant,
}

impl CacheEntry {
    pub fn new(result: GenerationResult) -> Self {
        Self {
            result,
            created_at: Instant::now(),
        }
    }

    pub fn is_fresh(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() < ttl
    }
}

// Create a cache key (hash of model + prompt, NUL between them)
pub fn make_cache_key(model: &str, prompt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(model);
    hasher.update(b"\0");
    hasher.update(prompt.trim());
    format!("{:x}", hasher.finalize())
}
