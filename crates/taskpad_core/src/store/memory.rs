//! In-memory key-value store.
//!
//! Backs tests and embedders that do not want a database file. Counts write
//! attempts so callers can assert that a persist was issued even though the
//! controller ignores the outcome.

use super::kv_store::{KvStore, StoreResult};
use std::collections::HashMap;

/// Map-backed [`KvStore`] with a write-attempt counter.
#[derive(Debug, Default)]
pub struct MemoryKvStore {
    entries: HashMap<String, String>,
    set_calls: u64,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with one entry, as if written earlier.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.into(), value.into());
        store
    }

    /// Number of `set` calls issued so far.
    pub fn set_calls(&self) -> u64 {
        self.set_calls
    }

    /// Currently stored value for `key`, if any.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl KvStore for MemoryKvStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.set_calls += 1;
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
