#[cfg(test)]
#[path = "cache_test.rs"]
mod cache_test;

use std::collections::BTreeMap;

use crate::nav::page::PageKey;

/// In-memory store of prefetched sub-page markup.
///
/// One instance per page session, created empty at boot and handed to the
/// navigation controller. Each slot is written at most once (the first
/// successful fetch wins); a failed preload leaves its slot empty for the
/// rest of the session. Nothing is evicted or retried.
#[derive(Debug, Default)]
pub struct PageCache {
    pages: BTreeMap<PageKey, String>,
}

impl PageCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store markup for `key` unless the slot is already filled.
    /// Returns whether the markup was stored.
    pub fn fill(&mut self, key: PageKey, markup: String) -> bool {
        if self.pages.contains_key(&key) {
            return false;
        }
        self.pages.insert(key, markup);
        true
    }

    /// Synchronous snapshot read; never blocks on in-flight preloads.
    pub fn get(&self, key: PageKey) -> Option<&str> {
        self.pages.get(&key).map(String::as_str)
    }

    pub fn contains(&self, key: PageKey) -> bool {
        self.pages.contains_key(&key)
    }
}
