//! URL-keyed response cache.
//!
//! The upstream app kept a module-level object keyed by URL with a fixed
//! five-minute TTL; here the cache is an explicit capability injected into
//! the client, with the expiry configurable and a zero-TTL constructor that
//! disables caching outright.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

pub const DEFAULT_TTL: Duration = Duration::from_secs(300);

struct CacheEntry {
    body: String,
    stored_at: Instant,
}

pub struct ResponseCache {
    ttl: Duration,
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl ResponseCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// A cache that never returns a hit.
    pub fn disabled() -> Self {
        Self::new(Duration::ZERO)
    }

    /// The cached body for `url`, if stored within the TTL.
    pub fn get(&self, url: &str) -> Option<String> {
        let entries = self.entries.lock().ok()?;
        let entry = entries.get(url)?;
        if entry.stored_at.elapsed() < self.ttl {
            Some(entry.body.clone())
        } else {
            None
        }
    }

    pub fn put(&self, url: &str, body: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(
                url.to_string(),
                CacheEntry {
                    body: body.to_string(),
                    stored_at: Instant::now(),
                },
            );
        }
    }
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_within_ttl() {
        let cache = ResponseCache::new(Duration::from_secs(60));
        cache.put("http://x/a", "[1,2]");
        assert_eq!(cache.get("http://x/a").as_deref(), Some("[1,2]"));
    }

    #[test]
    fn miss_for_unknown_url() {
        let cache = ResponseCache::default();
        assert_eq!(cache.get("http://x/missing"), None);
    }

    #[test]
    fn disabled_cache_never_hits() {
        let cache = ResponseCache::disabled();
        cache.put("http://x/a", "[1]");
        assert_eq!(cache.get("http://x/a"), None);
    }

    #[test]
    fn put_overwrites_previous_body() {
        let cache = ResponseCache::new(Duration::from_secs(60));
        cache.put("http://x/a", "old");
        cache.put("http://x/a", "new");
        assert_eq!(cache.get("http://x/a").as_deref(), Some("new"));
    }
}
