//! Task item record.
//!
//! # Responsibility
//! - Define the single record type held by the list controller.
//! - Pin the stored JSON field names (`id`, `title`, `isDone`).
//!
//! # Invariants
//! - `id` and `title` are immutable after creation; only `is_done` changes.
//! - `title` may be absent in data written by older builds; such items are
//!   kept but never match a non-empty search query.

use serde::{Deserialize, Serialize};

/// Numeric identifier unique within one task list.
///
/// Ids are handed out by the controller from a monotonic counter, so
/// uniqueness holds by construction rather than by collision odds.
pub type ItemId = u64;

/// One task record: identity, optional label, completion flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskItem {
    pub id: ItemId,
    /// Absent titles survive round-trips; the field is omitted on disk.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "isDone")]
    pub is_done: bool,
}

impl TaskItem {
    /// Creates a fresh, not-yet-done item with the given label.
    pub fn new(id: ItemId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: Some(title.into()),
            is_done: false,
        }
    }

    /// Flips the completion flag in place.
    pub fn toggle(&mut self) {
        self.is_done = !self.is_done;
    }
}
