//! Contact form submission use case.
//!
//! # Responsibility
//! - Run one validation pass per submit and reflect it on the form.
//! - Report the overall outcome through the notification manager.
//!
//! # Invariants
//! - Every invalid highlight is cleared before the new pass is applied.
//! - Success resets the form; failure keeps the entered values.
//! - Exactly one notification is emitted per submission.

use crate::config::NotificationConfig;
use crate::model::field::{FieldName, ValidationResult};
use crate::model::notification::Severity;
use crate::port::dom::ContactForm;
use crate::service::notification_service::NotificationManager;
use crate::service::validator::validate;
use log::info;

/// Messages shown for the two submission outcomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionMessages {
    pub success: String,
    pub failure: String,
}

impl From<&NotificationConfig> for SubmissionMessages {
    fn from(value: &NotificationConfig) -> Self {
        Self {
            success: value.success_message.clone(),
            failure: value.error_message.clone(),
        }
    }
}

impl Default for SubmissionMessages {
    fn default() -> Self {
        Self::from(&NotificationConfig::default())
    }
}

/// Use-case service wrapping one contact form.
pub struct ContactService<F: ContactForm> {
    form: F,
    notifications: NotificationManager,
    messages: SubmissionMessages,
}

impl<F: ContactForm> ContactService<F> {
    pub fn new(form: F, notifications: NotificationManager, messages: SubmissionMessages) -> Self {
        Self {
            form,
            notifications,
            messages,
        }
    }

    /// Handles one submit attempt.
    ///
    /// # Contract
    /// - Clears all five invalid flags, then flags each failing field.
    /// - All valid: success notification, form reset.
    /// - Otherwise: failure notification, values and flags kept.
    pub fn submit(&self) -> ValidationResult {
        let fields = self.form.read_fields();
        for field in FieldName::ALL {
            self.form.set_invalid(field, false);
        }

        let result = validate(&fields);
        for field in result.invalid_fields() {
            self.form.set_invalid(field, true);
        }

        if result.all_valid() {
            self.notifications
                .notify(self.messages.success.clone(), Severity::Success);
            self.form.reset();
            info!("event=contact_submit module=contact status=ok");
        } else {
            self.notifications
                .notify(self.messages.failure.clone(), Severity::Error);
            let invalid = result
                .invalid_fields()
                .iter()
                .map(|field| field.as_str())
                .collect::<Vec<_>>()
                .join(",");
            info!(
                "event=contact_submit module=contact status=error invalid={}",
                invalid
            );
        }
        result
    }
}
