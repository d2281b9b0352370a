//! DOM-facing contracts.
//!
//! Each trait covers one role an element plays for a service. A host type
//! may implement several of them for the same element.

use crate::model::field::{FieldName, FieldSet};
use crate::model::notification::{Notification, NotificationId};
use std::rc::Rc;

/// Text-bearing element an animator writes into.
pub trait TextSink {
    fn text(&self) -> String;

    fn set_text(&self, text: &str);

    fn append_text(&self, text: &str) {
        let mut current = self.text();
        current.push_str(text);
        self.set_text(&current);
    }
}

/// Generic element access: attributes, classes and inline style.
pub trait PageElement {
    fn attribute(&self, name: &str) -> Option<String>;

    fn has_class(&self, class: &str) -> bool;

    /// Adds `class`; adding a class that is already present is a no-op.
    fn add_class(&self, class: &str);

    fn remove_class(&self, class: &str);

    fn set_style(&self, property: &str, value: &str);
}

/// Shared handle to a host element.
pub type ElementRef = Rc<dyn PageElement>;

/// The contact form as a whole.
pub trait ContactForm {
    /// Reads the current value of every field.
    fn read_fields(&self) -> FieldSet;

    /// Sets or clears the invalid highlight of one field.
    fn set_invalid(&self, field: FieldName, invalid: bool);

    /// Restores every field to its initial value.
    fn reset(&self);
}

impl<F: ContactForm> ContactForm for Rc<F> {
    fn read_fields(&self) -> FieldSet {
        self.as_ref().read_fields()
    }

    fn set_invalid(&self, field: FieldName, invalid: bool) {
        self.as_ref().set_invalid(field, invalid);
    }

    fn reset(&self) {
        self.as_ref().reset();
    }
}

/// Action the view binds to the notification's close button.
pub type CloseAction = Rc<dyn Fn()>;

/// Renders the single notification slot.
pub trait NotificationView {
    /// Attaches a notification to the page, wiring `on_close` to its close
    /// control.
    fn mount(&self, notification: &Notification, on_close: CloseAction);

    /// Starts the exit animation of a mounted notification.
    fn begin_exit(&self, id: NotificationId);

    /// Removes a notification from the page immediately.
    fn detach(&self, id: NotificationId);
}

/// Window scroll position and in-page navigation.
pub trait Viewport {
    /// Current vertical scroll offset in px.
    fn scroll_y(&self) -> f64;

    /// Document offset of the element with `element_id`, if it exists.
    fn offset_top(&self, element_id: &str) -> Option<f64>;

    /// Starts a smooth scroll to vertical offset `top`.
    fn smooth_scroll_to(&self, top: f64);
}
