//! Browser bridge for CoderHub page behaviors.
//!
//! # Responsibility
//! - Implement the core ports with `web-sys` and wire them to the page.
//! - Expose a small, stable JS API via `wasm-bindgen`.
//!
//! # Invariants
//! - Exported functions must not panic across the JS boundary.
//! - Errors cross the boundary as plain message strings.

pub mod console_log;
pub mod dom;
pub mod error;
pub mod notification_view;
pub mod page;
pub mod scheduler;
pub mod visibility;

use coderhub_core::{PageConfig, Severity};
use error::BindError;
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

/// Module start hook: panic reporting and console logging.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init(console_log::default_level()) {
        web_sys::console::warn_1(&JsValue::from_str(&err));
    }
}

/// Expose core crate version.
///
/// # JS contract
/// - Never throws; always returns a UTF-8 string.
#[wasm_bindgen(js_name = coreVersion)]
pub fn core_version() -> String {
    coderhub_core::core_version().to_owned()
}

/// Re-initializes console logging at `level`.
///
/// # JS contract
/// - Safe to call repeatedly with the level already active.
/// - Never throws; returns empty string on success and error message on
///   failure.
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging(level: String) -> String {
    match console_log::init(level.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Wires all page behaviors, now or on `DOMContentLoaded`.
///
/// `config_json` overrides timings, thresholds and messages; `undefined` or
/// blank keeps the defaults.
///
/// # JS contract
/// - Throws a message string for invalid config or a second call.
/// - Wiring errors found after `DOMContentLoaded` are logged, not thrown.
#[wasm_bindgen(js_name = initPage)]
pub fn init_page(config_json: Option<String>) -> Result<(), JsValue> {
    let config = PageConfig::from_json(config_json.as_deref().unwrap_or_default())
        .map_err(BindError::from)?;
    if page::is_initialized() {
        return Err(BindError::AlreadyInitialized.into());
    }

    let window = web_sys::window().ok_or(BindError::MissingWindow)?;
    let document = window.document().ok_or(BindError::MissingDocument)?;
    if document.ready_state() != "loading" {
        return page::init(config).map_err(JsValue::from);
    }

    let on_ready = Closure::once_into_js(move || {
        if let Err(err) = page::init(config) {
            warn!("event=page_init module=web status=error err={err}");
        }
    });
    document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
    Ok(())
}

/// Shows a notification in the page's notification slot.
///
/// `severity` is `info`, `success` or `error`; anything else is `info`.
///
/// # JS contract
/// - Returns the notification id, or `undefined` before `initPage` wiring.
#[wasm_bindgen(js_name = showNotification)]
pub fn show_notification(message: String, severity: Option<String>) -> Option<f64> {
    let severity = match severity.as_deref().map(str::trim) {
        Some("success") => Severity::Success,
        Some("error") => Severity::Error,
        _ => Severity::Info,
    };
    page::with_page(|page| page.notifications().notify(message, severity) as f64)
}

/// Dismisses the visible notification, as its close button would.
///
/// # JS contract
/// - Returns `false` when nothing is visible or wiring has not run.
#[wasm_bindgen(js_name = dismissNotification)]
pub fn dismiss_notification() -> bool {
    page::with_page(|page| page.notifications().dismiss()).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::{core_version, init_logging};

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string());
        assert!(!error.is_empty());
    }
}
