//! Core list-state logic for taskpad.
//! This crate is the single source of truth for business invariants.

pub mod controller;
pub mod db;
pub mod logging;
pub mod model;
pub mod search;
pub mod store;

pub use controller::list_controller::{ListController, LIST_STORAGE_KEY};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::item::{ItemId, TaskItem};
pub use search::filter::{filter_items, query_is_active, title_matches};
pub use store::kv_store::{KvStore, SqliteKvStore, StoreError, StoreResult};
pub use store::memory::MemoryKvStore;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
