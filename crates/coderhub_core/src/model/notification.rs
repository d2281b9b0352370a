//! Transient notification model.
//!
//! # Responsibility
//! - Define notification severity and its rendering attributes.
//! - Define the lifecycle states of the single notification slot.
//!
//! # Invariants
//! - `NotificationId` values are never reused within one manager.
//! - Severity controls color and icon only, never behavior.

use serde::{Deserialize, Serialize};

/// Monotonic id assigned by the notification manager.
pub type NotificationId = u64;

/// Notification category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    /// Background color for the notification box.
    pub fn color(self) -> &'static str {
        match self {
            Self::Info => "#17a2b8",
            Self::Success => "#28a745",
            Self::Error => "#dc3545",
        }
    }

    /// Font Awesome icon name (without the `fa-` prefix).
    pub fn icon(self) -> &'static str {
        match self {
            Self::Info => "info-circle",
            Self::Success => "check-circle",
            Self::Error => "exclamation-circle",
        }
    }
}

/// One displayed message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub severity: Severity,
    /// Scheduler clock reading (ms) when the notification was created.
    pub created_at_ms: f64,
}

/// Lifecycle state of the notification slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationState {
    Absent,
    Visible,
    /// Exit animation running; detach is pending.
    Dismissing,
}
