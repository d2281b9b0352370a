//! Boundary contracts between core services and the page host.
//!
//! # Responsibility
//! - Describe what core needs from the DOM, the clock and the visibility
//!   observer, without naming any browser type.
//! - Let tests drive every service with deterministic fakes.
//!
//! # Invariants
//! - All ports are single-threaded; callbacks run on the host's UI thread.
//! - No port call re-enters a service synchronously, except visibility and
//!   close callbacks that the host fires from its own event dispatch.
//!
//! # See also
//! - `crate::testing` for in-memory implementations.

pub mod dom;
pub mod scheduler;
pub mod visibility;
