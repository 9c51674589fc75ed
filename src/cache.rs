//! Bounded memoization of extraction calls.
//!
//! Identical (segment, difficulty) pairs skip the external model call
//! entirely. Entries live for the process lifetime only and the least
//! recently used entry is evicted once capacity is exceeded.

use indexmap::IndexMap;
use sha2::{Digest, Sha256};

use crate::types::vocabulary::{Difficulty, VocabularyItem};

/// Exact-match cache key for one extraction call.
///
/// The segment text is keyed by its SHA-256 rather than stored whole.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    content_hash: String,
    difficulty: Difficulty,
}

impl CacheKey {
    /// Build a key from normalized segment text and a difficulty tier.
    pub fn new(content: &str, difficulty: Difficulty) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(content.as_bytes());
        Self {
            content_hash: format!("{:x}", hasher.finalize()),
            difficulty,
        }
    }
}

/// LRU cache of validated extraction results.
///
/// Recency order rides on the `IndexMap` insertion order: the entry at
/// index 0 is the least recently used and the first to go.
pub struct ExtractionCache {
    entries: IndexMap<CacheKey, Vec<VocabularyItem>>,
    capacity: usize,
    hits: u64,
    misses: u64,
}

impl ExtractionCache {
    /// Create a cache holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: IndexMap::with_capacity(capacity),
            capacity,
            hits: 0,
            misses: 0,
        }
    }

    /// Look up a key, refreshing its recency on a hit.
    pub fn get(&mut self, key: &CacheKey) -> Option<Vec<VocabularyItem>> {
        match self.entries.shift_remove(key) {
            Some(items) => {
                self.entries.insert(key.clone(), items.clone());
                self.hits += 1;
                Some(items)
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// Insert a result, evicting the least recently used entry if full.
    pub fn insert(&mut self, key: CacheKey, items: Vec<VocabularyItem>) {
        if self.entries.shift_remove(&key).is_none() && self.entries.len() >= self.capacity {
            self.entries.shift_remove_index(0);
        }
        self.entries.insert(key, items);
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of lookups answered from the cache.
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Number of lookups that fell through to the model.
    pub fn misses(&self) -> u64 {
        self.misses
    }
}
