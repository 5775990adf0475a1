//! Case-insensitive substring filtering over item titles.
//!
//! # Invariants
//! - A trimmed-empty query matches every item (filter off).
//! - Items without a title never match a non-empty query.
//! - Filtering preserves the insertion order of the input.

use crate::model::item::TaskItem;

/// Returns whether `query` actually narrows the list.
pub fn query_is_active(query: &str) -> bool {
    !query.trim().is_empty()
}

/// Returns whether an optional title matches the query.
///
/// Matching is case-insensitive substring containment. Only the emptiness
/// check trims; an active query is matched with its whitespace intact.
pub fn title_matches(title: Option<&str>, query: &str) -> bool {
    if !query_is_active(query) {
        return true;
    }

    let needle = query.to_lowercase();
    title.is_some_and(|title| title.to_lowercase().contains(&needle))
}

/// Derives the visible subset of `items` for the given query.
pub fn filter_items(items: &[TaskItem], query: &str) -> Vec<TaskItem> {
    if !query_is_active(query) {
        return items.to_vec();
    }

    items
        .iter()
        .filter(|item| title_matches(item.title.as_deref(), query))
        .cloned()
        .collect()
}
