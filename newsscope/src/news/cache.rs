use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use lru::LruCache;

use crate::models::Article;

/// Cache key version. Bump to invalidate entries after fetch-logic changes.
pub const CACHE_VERSION: &str = "v3";

struct Entry {
    inserted: Instant,
    articles: Vec<Article>,
}

/// Thread-safe TTL cache for fetched article batches. LRU eviction bounds
/// memory; entries additionally expire after `ttl` so stale headlines age
/// out even when capacity is never reached.
#[derive(Clone)]
pub struct ArticleCache {
    cache: Arc<Mutex<LruCache<String, Entry>>>,
    ttl: Duration,
}

impl ArticleCache {
    /// # Panics
    /// Panics if capacity is 0.
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        let cache = LruCache::new(NonZeroUsize::new(capacity).expect("Capacity must be non-zero"));
        Self {
            cache: Arc::new(Mutex::new(cache)),
            ttl,
        }
    }

    pub fn get(&self, key: &str) -> Option<Vec<Article>> {
        let mut cache = self.cache.lock().unwrap();
        match cache.get(key) {
            Some(entry) if entry.inserted.elapsed() < self.ttl => Some(entry.articles.clone()),
            Some(_) => {
                cache.pop(key);
                None
            }
            None => None,
        }
    }

    pub fn put(&self, key: String, articles: Vec<Article>) {
        let mut cache = self.cache.lock().unwrap();
        cache.put(
            key,
            Entry {
                inserted: Instant::now(),
                articles,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(title: &str) -> Article {
        Article {
            title: Some(title.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_hit_within_ttl() {
        let cache = ArticleCache::new(4, Duration::from_secs(60));
        cache.put("v3:th:science_10".to_string(), vec![article("a")]);

        let hit = cache.get("v3:th:science_10");
        assert_eq!(hit.map(|v| v.len()), Some(1));
    }

    #[test]
    fn test_expired_entry_is_a_miss() {
        let cache = ArticleCache::new(4, Duration::from_millis(0));
        cache.put("k".to_string(), vec![article("a")]);
        assert!(cache.get("k").is_none());
    }

    #[test]
    fn test_capacity_eviction() {
        let cache = ArticleCache::new(2, Duration::from_secs(60));
        cache.put("a".to_string(), vec![]);
        cache.put("b".to_string(), vec![]);
        cache.put("c".to_string(), vec![]);
        assert!(cache.get("a").is_none());
        assert!(cache.get("b").is_some());
        assert!(cache.get("c").is_some());
    }
}
