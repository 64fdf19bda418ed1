use dashmap::DashMap;
use std::time::Duration;
use tracing::{debug, info};

use crate::cache::{CacheEntry, make_cache_key};
use crate::client::GenerationClient;
use crate::error::GenerateError;
use crate::metrics::{CACHE_HITS, CACHE_MISSES, CACHE_SIZE};
use crate::models::GenerationResult;

/// Forwards prompts to an upstream model, caching successful results.
pub struct Relay {
    client: GenerationClient,
    cache: DashMap<String, CacheEntry>,
    ttl: Duration,
}

impl Relay {
    pub fn new(client: GenerationClient, ttl: Duration) -> Self {
        Self {
            client,
            cache: DashMap::new(),
            ttl,
        }
    }

    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    pub async fn generate(&self, prompt: &str) -> Result<GenerationResult, GenerateError> {
        let cache_key = make_cache_key(&self.client.config().model, prompt);

        // check cache first
        let cached = self
            .cache
            .get(&cache_key)
            .filter(|entry| entry.is_fresh(self.ttl))
            .map(|entry| entry.result.clone());
        if let Some(result) = cached {
            CACHE_HITS.inc();
            debug!("[Relay] Cache HIT");
            return Ok(result);
        }
        CACHE_MISSES.inc();
        info!("[Relay] Cache MISS - calling {}", self.client.config().endpoint());

        let result = self.client.generate(prompt).await?;

        self.cache.insert(cache_key, CacheEntry::new(result.clone()));
        self.cache.retain(|_, entry| entry.is_fresh(self.ttl));
        CACHE_SIZE.set(self.cache.len() as f64);

        Ok(result)
    }
}
