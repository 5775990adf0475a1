//! Host-UI bridge for taskpad.
//!
//! The rendering layer lives in the host application; this crate exposes the
//! list controller's operations to it as stable, synchronous calls.

pub mod api;
