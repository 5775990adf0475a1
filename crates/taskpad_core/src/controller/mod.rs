//! List-state orchestration.
//!
//! # Responsibility
//! - Own the authoritative and visible item collections.
//! - Mirror every mutation to the persistence adapter.
//!
//! # Invariants
//! - In-memory state is authoritative for the running session; persistence
//!   failures are logged, never rolled back.
//! - The visible list is always `filter(full_items, query)`.

pub mod list_controller;
