/// Per-selection content cache for the interactive dashboard
///
/// Entries never expire. Presence is binary and only an explicit
/// [`ContentCache::invalidate`] of the same key removes one.
use std::fmt;

use cached::{Cached, UnboundCache};

use crate::tui::renderer::Frame;
use crate::types::{Content, View};

/// Identifies a cacheable content slot: (competition name, view)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub competition: &'static str,
    pub view: View,
}

impl CacheKey {
    pub fn new(competition: &'static str, view: View) -> Self {
        Self { competition, view }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.competition, self.view)
    }
}

#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub content: Content,
    /// Last frame composed from `content`; only valid for the selection it records
    pub rendered: Option<Frame>,
}

impl CacheEntry {
    pub fn new(content: Content) -> Self {
        Self { content, rendered: None }
    }
}

pub struct ContentCache {
    entries: UnboundCache<CacheKey, CacheEntry>,
}

impl Default for ContentCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentCache {
    pub fn new() -> Self {
        Self {
            entries: UnboundCache::new(),
        }
    }

    pub fn get(&mut self, key: &CacheKey) -> Option<&CacheEntry> {
        self.entries.cache_get(key)
    }

    pub fn get_mut(&mut self, key: &CacheKey) -> Option<&mut CacheEntry> {
        self.entries.cache_get_mut(key)
    }

    pub fn contains(&self, key: &CacheKey) -> bool {
        self.entries.get_store().contains_key(key)
    }

    pub fn put(&mut self, key: CacheKey, entry: CacheEntry) {
        self.entries.cache_set(key, entry);
    }

    /// Remove the entry for `key`, returning whether one was present
    pub fn invalidate(&mut self, key: &CacheKey) -> bool {
        self.entries.cache_remove(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.cache_size()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for ContentCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentCache")
            .field("entries", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standings() -> Content {
        Content::Standings(vec![])
    }

    #[test]
    fn test_key_display() {
        let key = CacheKey::new("EPL", View::Fixtures);
        assert_eq!(key.to_string(), "EPL-Fixtures");
    }

    #[test]
    fn test_put_get_invalidate() {
        let mut cache = ContentCache::new();
        let key = CacheKey::new("EPL", View::Table);
        assert!(cache.get(&key).is_none());

        cache.put(key, CacheEntry::new(standings()));
        assert!(cache.contains(&key));
        assert_eq!(cache.len(), 1);
        assert!(cache.get(&key).is_some());

        assert!(cache.invalidate(&key));
        assert!(!cache.contains(&key));
        assert!(!cache.invalidate(&key));
        assert!(cache.is_empty());
    }

    #[test]
    fn test_invalidate_only_touches_its_key() {
        let mut cache = ContentCache::new();
        let table = CacheKey::new("EPL", View::Table);
        let other = CacheKey::new("Serie A", View::Table);
        cache.put(table, CacheEntry::new(standings()));
        cache.put(other, CacheEntry::new(standings()));

        cache.invalidate(&table);

        assert!(!cache.contains(&table));
        assert!(cache.contains(&other));
    }
}
