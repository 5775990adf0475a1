//! Task list controller.
//!
//! # Responsibility
//! - Hold the full (authoritative) and visible collections plus the active
//!   search query.
//! - Apply add/delete/toggle mutations to the full list and mirror it to the
//!   store under one fixed key.
//!
//! # Invariants
//! - Mutations update memory first; the store write is issued afterward in
//!   user-action order and its outcome only reaches the diagnostic log.
//! - The visible list is re-derived from the full list after every mutation
//!   and every query change, so an active filter stays applied.
//! - Item ids are handed out by a monotonic counter seeded past the largest
//!   loaded id.

use crate::model::item::{ItemId, TaskItem};
use crate::search::filter::filter_items;
use crate::store::kv_store::KvStore;
use log::{error, info};

/// Fixed storage key holding the whole serialized collection.
pub const LIST_STORAGE_KEY: &str = "taskpad.items";

/// Owner of the in-memory task list, generic over the persistence adapter.
///
/// One value per screen/session; hand it by reference to the interface layer.
pub struct ListController<S: KvStore> {
    store: S,
    full_items: Vec<TaskItem>,
    items: Vec<TaskItem>,
    query: String,
    next_id: ItemId,
}

impl<S: KvStore> ListController<S> {
    /// Creates an empty controller over the given store.
    pub fn new(store: S) -> Self {
        Self {
            store,
            full_items: Vec::new(),
            items: Vec::new(),
            query: String::new(),
            next_id: 1,
        }
    }

    /// Loads the persisted collection, if any, into both lists.
    ///
    /// Read or parse failures are logged and leave the controller empty and
    /// usable; the next mutation overwrites the stored value.
    pub fn initialize(&mut self) {
        match self.store.get(LIST_STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<TaskItem>>(&raw) {
                Ok(loaded) => {
                    self.next_id = loaded
                        .iter()
                        .map(|item| item.id)
                        .max()
                        .map_or(1, |max| max + 1);
                    self.full_items = loaded;
                    self.refresh_visible();
                    info!(
                        "event=list_load module=controller status=ok count={}",
                        self.full_items.len()
                    );
                }
                Err(err) => {
                    error!(
                        "event=list_load module=controller status=error error_code=parse_failed error={err}"
                    );
                }
            },
            Ok(None) => {
                info!("event=list_load module=controller status=ok count=0 source=empty");
            }
            Err(err) => {
                error!(
                    "event=list_load module=controller status=error error_code=read_failed error={err}"
                );
            }
        }
    }

    /// Appends a new item built from `text`.
    ///
    /// Whitespace-only input is rejected: nothing is created, nothing is
    /// persisted, and `None` is returned so the caller can keep its entry
    /// field intact. The stored title keeps the caller's original spacing.
    pub fn add(&mut self, text: &str) -> Option<ItemId> {
        if text.trim().is_empty() {
            return None;
        }

        let id = self.next_id;
        self.next_id += 1;
        self.full_items.push(TaskItem::new(id, text));
        self.refresh_visible();
        self.persist();
        Some(id)
    }

    /// Removes the item with `id`, if present.
    ///
    /// Unknown ids are a no-op that still persists the unchanged collection,
    /// keeping the operation idempotent.
    pub fn delete(&mut self, id: ItemId) {
        self.full_items.retain(|item| item.id != id);
        self.refresh_visible();
        self.persist();
    }

    /// Flips the completion flag of the item with `id`, if present.
    ///
    /// Unknown ids are a no-op that still persists the unchanged collection.
    pub fn toggle_done(&mut self, id: ItemId) {
        if let Some(item) = self.full_items.iter_mut().find(|item| item.id == id) {
            item.toggle();
        }
        self.refresh_visible();
        self.persist();
    }

    /// Updates the active query and re-derives the visible list.
    ///
    /// Never touches the full list and never persists. A trimmed-empty query
    /// restores the visible list to the full list.
    pub fn set_query(&mut self, text: &str) {
        self.query = text.to_string();
        self.refresh_visible();
    }

    /// Visible items in insertion order.
    pub fn visible_items(&self) -> &[TaskItem] {
        &self.items
    }

    /// Visible items newest-first, the order the screen presents them in.
    pub fn visible_items_newest_first(&self) -> Vec<TaskItem> {
        self.items.iter().rev().cloned().collect()
    }

    /// Full authoritative collection in insertion order.
    pub fn full_items(&self) -> &[TaskItem] {
        &self.full_items
    }

    /// Active search query text as last set.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Read access to the underlying store, mainly for test assertions.
    pub fn store(&self) -> &S {
        &self.store
    }

    fn refresh_visible(&mut self) {
        self.items = filter_items(&self.full_items, &self.query);
    }

    /// Writes the full collection under [`LIST_STORAGE_KEY`].
    ///
    /// The write is issued and its result ignored beyond logging: memory
    /// stays authoritative for the session, no retry, no rollback.
    fn persist(&mut self) {
        let payload = match serde_json::to_string(&self.full_items) {
            Ok(payload) => payload,
            Err(err) => {
                error!(
                    "event=list_persist module=controller status=error error_code=encode_failed error={err}"
                );
                return;
            }
        };

        if let Err(err) = self.store.set(LIST_STORAGE_KEY, &payload) {
            error!(
                "event=list_persist module=controller status=error error_code=write_failed error={err}"
            );
        }
    }
}
