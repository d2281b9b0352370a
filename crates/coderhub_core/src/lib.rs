//! Core behavior for the CoderHub landing page.
//!
//! Contact form validation, count-up statistics, the hero typing effect,
//! the transient notification slot and the small scroll/filter behaviors,
//! all written against the ports in [`port`] so they run without a browser.

pub mod config;
#[cfg(not(target_arch = "wasm32"))]
pub mod logging;
pub mod model;
pub mod port;
pub mod service;
pub mod testing;

pub use config::{ConfigError, ConfigResult, PageConfig};
#[cfg(not(target_arch = "wasm32"))]
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::animation::{CountUpFrame, CountUpTarget, CountUpTask, TypingTask};
pub use model::field::{FieldName, FieldSet, ValidationResult};
pub use model::notification::{Notification, NotificationId, NotificationState, Severity};
pub use port::dom::{CloseAction, ContactForm, ElementRef, NotificationView, PageElement, TextSink, Viewport};
pub use port::scheduler::{FrameCallback, Scheduler, TimerCallback, TimerHandle};
pub use port::visibility::{VisibilityCallback, VisibilityObserver, VisibilityOptions};
pub use service::contact_service::{ContactService, SubmissionMessages};
pub use service::count_up::CountUpAnimator;
pub use service::notification_service::{NotificationManager, NotificationTiming};
pub use service::portfolio::{FilterOutcome, PortfolioFilter};
pub use service::typing::TypingAnimator;
pub use service::validator::{is_valid_email, validate};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
