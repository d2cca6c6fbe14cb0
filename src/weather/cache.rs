//! TTL cache for feed payloads, keyed by data type.
//!
//! Mirrors the server-side cache-or-fetch contract: an entry is served
//! while its expiry timestamp has not passed, otherwise the inner
//! provider is asked for a fresh payload which is cached for the next
//! `ttl` seconds.

use rustc_hash::FxHashMap;

use super::feed::SpaceWeatherFeed;
use super::provider::WeatherProvider;

/// Default entry lifetime: one hour.
pub const DEFAULT_TTL_SECS: u64 = 3600;

/// Cache key for the combined feed payload.
const FEED_KEY: &str = "solar_flare";

#[derive(Clone, Debug)]
struct CacheEntry {
    feed: SpaceWeatherFeed,
    expires_at: u64,
}

/// In-memory payload cache keyed by data type.
#[derive(Clone, Debug, Default)]
pub struct FeedCache {
    entries: FxHashMap<String, CacheEntry>,
}

impl FeedCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a cached feed if its expiry has not passed.
    #[must_use]
    pub fn get(&self, data_type: &str, now: u64) -> Option<&SpaceWeatherFeed> {
        self.entries
            .get(data_type)
            .filter(|entry| entry.expires_at >= now)
            .map(|entry| &entry.feed)
    }

    /// Insert or replace an entry with an absolute expiry timestamp.
    pub fn put(&mut self, data_type: impl Into<String>, feed: SpaceWeatherFeed, expires_at: u64) {
        self.entries
            .insert(data_type.into(), CacheEntry { feed, expires_at });
    }

    /// Drop all entries whose expiry has passed.
    pub fn evict_expired(&mut self, now: u64) {
        self.entries.retain(|_, entry| entry.expires_at >= now);
    }

    /// Number of entries, including expired ones not yet evicted.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Cache-or-fetch wrapper around a provider.
#[derive(Clone, Debug)]
pub struct CachingProvider<P> {
    inner: P,
    cache: FeedCache,
    ttl: u64,
}

impl<P: WeatherProvider> CachingProvider<P> {
    /// Wrap a provider with the default one-hour TTL.
    #[must_use]
    pub fn new(inner: P) -> Self {
        Self::with_ttl(inner, DEFAULT_TTL_SECS)
    }

    /// Wrap a provider with a custom TTL in seconds.
    #[must_use]
    pub fn with_ttl(inner: P, ttl: u64) -> Self {
        Self {
            inner,
            cache: FeedCache::new(),
            ttl,
        }
    }

    /// The underlying cache, for inspection.
    #[must_use]
    pub fn cache(&self) -> &FeedCache {
        &self.cache
    }
}

impl<P: WeatherProvider> WeatherProvider for CachingProvider<P> {
    fn fetch(&mut self, now: u64) -> SpaceWeatherFeed {
        if let Some(feed) = self.cache.get(FEED_KEY, now) {
            return feed.clone();
        }

        let feed = self.inner.fetch(now);
        self.cache.put(FEED_KEY, feed.clone(), now + self.ttl);
        feed
    }
}
