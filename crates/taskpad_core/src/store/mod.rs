//! Persistence adapter layer.
//!
//! # Responsibility
//! - Define the opaque key-value contract the controller persists through.
//! - Keep SQLite details out of controller/business code.
//!
//! # Invariants
//! - One key holds one whole serialized collection; writes replace the value.
//! - Adapter implementations return semantic errors, they never panic.

pub mod kv_store;
pub mod memory;
