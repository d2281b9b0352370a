//! Page-level domain model shared by services and host bridges.
//!
//! # Responsibility
//! - Define the data carried between DOM events and core services.
//! - Keep every model free of DOM handles so it can be built in tests.
//!
//! # Invariants
//! - Models are plain values; mutation happens only inside services.

pub mod animation;
pub mod field;
pub mod notification;
