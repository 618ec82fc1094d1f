//! Lookup result caching
//!
//! Lookups against a frozen matcher are pure, so their results can be cached
//! by path. The cache is an explicit value handed to [`CachedMatcher`] rather
//! than process-wide state: every wrapper owns its own entries and statistics.

use crate::matcher::Matcher;
use crate::nested::NestedMatches;
use crate::{trace_log, Match};
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Arc;

/// Cache performance statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub best_hits: usize,
    pub best_misses: usize,
    pub nested_hits: usize,
    pub nested_misses: usize,
    pub invalidations: usize,
}

impl CacheStats {
    pub fn best_hit_rate(&self) -> f64 {
        rate(self.best_hits, self.best_misses)
    }

    pub fn nested_hit_rate(&self) -> f64 {
        rate(self.nested_hits, self.nested_misses)
    }

    pub fn overall_hit_rate(&self) -> f64 {
        rate(
            self.best_hits + self.nested_hits,
            self.best_misses + self.nested_misses,
        )
    }
}

fn rate(hits: usize, misses: usize) -> f64 {
    let total = hits + misses;
    if total == 0 {
        0.0
    } else {
        hits as f64 / total as f64
    }
}

/// LRU storage for lookup results, keyed by the requested path.
///
/// Negative results are cached too, so repeated misses stay cheap.
///
/// Default capacity: 1000 entries per lookup kind.
#[derive(Debug)]
pub struct MatchCache {
    best: LruCache<String, Option<Match>>,
    nested: LruCache<String, Option<NestedMatches>>,
    stats: CacheStats,
}

impl MatchCache {
    const DEFAULT_CAPACITY: usize = 1000;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// A zero capacity is raised to one entry.
    pub fn with_capacity(capacity: usize) -> Self {
        let cap = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            best: LruCache::new(cap),
            nested: LruCache::new(cap),
            stats: CacheStats::default(),
        }
    }

    pub fn clear(&mut self) {
        trace_log!("Clearing match cache");
        self.best.clear();
        self.nested.clear();
        self.stats.invalidations += 1;
    }

    pub fn get_best(&mut self, path: &str) -> Option<Option<Match>> {
        if let Some(entry) = self.best.get(path) {
            self.stats.best_hits += 1;
            trace_log!("Best-match cache hit for path: '{}'", path);
            Some(entry.clone())
        } else {
            self.stats.best_misses += 1;
            trace_log!("Best-match cache miss for path: '{}'", path);
            None
        }
    }

    pub fn set_best(&mut self, path: String, result: Option<Match>) {
        self.best.put(path, result);
    }

    pub fn get_nested(&mut self, path: &str) -> Option<Option<NestedMatches>> {
        if let Some(entry) = self.nested.get(path) {
            self.stats.nested_hits += 1;
            trace_log!("Nested cache hit for path: '{}'", path);
            Some(entry.clone())
        } else {
            self.stats.nested_misses += 1;
            trace_log!("Nested cache miss for path: '{}'", path);
            None
        }
    }

    pub fn set_nested(&mut self, path: String, result: Option<NestedMatches>) {
        self.nested.put(path, result);
    }

    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = CacheStats::default();
    }

    pub fn best_cache_size(&self) -> usize {
        self.best.len()
    }

    pub fn nested_cache_size(&self) -> usize {
        self.nested.len()
    }

    pub fn total_size(&self) -> usize {
        self.best_cache_size() + self.nested_cache_size()
    }
}

impl Default for MatchCache {
    fn default() -> Self {
        Self::new()
    }
}

/// A frozen [`Matcher`] with its own injected [`MatchCache`].
///
/// # Example
///
/// ```
/// use route_trie::{CachedMatcher, MatchCache, Matcher};
/// use std::sync::Arc;
///
/// let mut matcher = Matcher::default();
/// matcher.register_pattern("/users/:id");
///
/// let mut cached = CachedMatcher::new(Arc::new(matcher), MatchCache::with_capacity(64));
/// assert!(cached.find_best_match("/users/1").is_some());
/// assert!(cached.find_best_match("/users/1").is_some());
/// assert_eq!(cached.cache().stats().best_hits, 1);
/// ```
#[derive(Debug)]
pub struct CachedMatcher {
    matcher: Arc<Matcher>,
    cache: MatchCache,
}

impl CachedMatcher {
    pub fn new(matcher: Arc<Matcher>, cache: MatchCache) -> Self {
        Self { matcher, cache }
    }

    pub fn matcher(&self) -> &Arc<Matcher> {
        &self.matcher
    }

    pub fn cache(&self) -> &MatchCache {
        &self.cache
    }

    pub fn find_best_match(&mut self, path: &str) -> Option<Match> {
        if let Some(cached) = self.cache.get_best(path) {
            return cached;
        }
        let result = self.matcher.find_best_match(path);
        self.cache.set_best(path.to_string(), result.clone());
        result
    }

    pub fn find_nested_matches(&mut self, path: &str) -> Option<NestedMatches> {
        if let Some(cached) = self.cache.get_nested(path) {
            return cached;
        }
        let result = self.matcher.find_nested_matches(path);
        self.cache.set_nested(path.to_string(), result.clone());
        result
    }

    pub fn clear(&mut self) {
        self.cache.clear();
    }
}
