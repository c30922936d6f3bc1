//! Transposition table keyed by symmetry hashes

use crate::symmetry::CacheKey;
use rustc_hash::FxHashMap;

/// Memoization cache for search results. A position is stored under every
/// key of its symmetry class, so a hit on *any* key short-circuits the
/// node. Keys are trusted without re-verifying the underlying board; hash
/// collisions are an accepted approximation.
///
/// Memory is bounded by `max_entries`: an insert that would exceed it wipes
/// the whole table first. Lifetime is one game; never persisted.
#[derive(Debug)]
pub struct TranspositionTable {
    map: FxHashMap<CacheKey, f32>,
    max_entries: usize,
}

impl TranspositionTable {
    pub fn new(max_entries: usize) -> Self {
        Self {
            map: FxHashMap::default(),
            max_entries: max_entries.max(1),
        }
    }

    /// Score for the first key present, if any
    pub fn lookup(&self, keys: &[CacheKey]) -> Option<f32> {
        keys.iter().find_map(|key| self.map.get(key).copied())
    }

    /// Record `score` under all keys of the position's symmetry class
    pub fn store(&mut self, keys: &[CacheKey], score: f32) {
        if self.map.len() + keys.len() > self.max_entries {
            self.map.clear();
        }
        for &key in keys {
            self.map.insert(key, score);
        }
    }

    pub fn clear(&mut self) {
        self.map.clear();
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
