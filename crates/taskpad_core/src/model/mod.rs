//! Domain model for the task list.
//!
//! # Responsibility
//! - Define the canonical item record shared by controller, storage and UI
//!   surfaces.
//!
//! # Invariants
//! - Every item is identified by a numeric `ItemId` unique within one list.
//! - Deletion is hard removal from the collection, no tombstones.

pub mod item;
