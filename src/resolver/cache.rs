//! Per-run cache of resolved build variables.
//!
//! The cache lives for the duration of a single documentation build and is
//! dropped with its resolver. It never persists between builds, so a changed
//! resolver script is always picked up by the next run.

use std::collections::{BTreeMap, HashMap};
use std::collections::hash_map::Entry;

/// Append-only mapping from build variable name to its resolved value.
///
/// Entries are never overwritten or evicted: once a name is resolved, every
/// later request in the same run sees the same value.
#[derive(Debug, Default)]
pub struct VariableCache {
    entries: HashMap<String, String>,
    hits: usize,
    misses: usize,
}

impl VariableCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a cached value, counting the hit or miss.
    pub fn get(&mut self, name: &str) -> Option<&str> {
        if let Some(value) = self.entries.get(name) {
            self.hits += 1;
            Some(value.as_str())
        } else {
            self.misses += 1;
            None
        }
    }

    /// Peek at a cached value without touching the statistics.
    pub fn peek(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Record a resolved value and return the value now stored for `name`.
    ///
    /// If `name` is already present the existing value is kept.
    pub fn insert(&mut self, name: &str, value: String) -> &str {
        match self.entries.entry(name.to_string()) {
            Entry::Occupied(existing) => {
                tracing::warn!("Build variable {} already cached; keeping first value", name);
                existing.into_mut().as_str()
            }
            Entry::Vacant(slot) => slot.insert(value).as_str(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Get cache statistics as `(hits, misses)`.
    pub fn stats(&self) -> (usize, usize) {
        (self.hits, self.misses)
    }

    /// Sorted copy of every cached entry.
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.entries.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }
}
