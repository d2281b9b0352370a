//! `log` backend writing to the browser console.
//!
//! # Invariants
//! - Installed at most once per page; re-installing with the same level is
//!   a no-op, a different level is rejected.
//! - Never panics.

use log::{Level, LevelFilter, Log, Metadata, Record};
use once_cell::sync::OnceCell;
use wasm_bindgen::JsValue;

static LOGGER: ConsoleLogger = ConsoleLogger;
static ACTIVE_LEVEL: OnceCell<LevelFilter> = OnceCell::new();

struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format!(
            "[{} {}] {}",
            record.level(),
            record.target(),
            record.args()
        ));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Installs the console logger at `level`.
///
/// # Errors
/// - Returns an error when `level` is unsupported.
/// - Returns an error when already installed with a different level, or
///   when another `log` backend owns the page.
pub fn init(level: &str) -> Result<(), String> {
    let filter = parse_level(level)?;
    let active = ACTIVE_LEVEL.get_or_try_init(|| -> Result<LevelFilter, String> {
        log::set_logger(&LOGGER).map_err(|err| format!("failed to install logger: {err}"))?;
        log::set_max_level(filter);
        log::info!(
            "event=web_init module=web status=ok version={} level={}",
            env!("CARGO_PKG_VERSION"),
            filter
        );
        Ok(filter)
    })?;
    if *active != filter {
        return Err(format!(
            "logging already initialized with level `{active}`; refusing to switch to `{filter}`"
        ));
    }
    Ok(())
}

/// Default console level for the current build mode.
pub fn default_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn parse_level(level: &str) -> Result<LevelFilter, String> {
    match level.trim().to_ascii_lowercase().as_str() {
        "warning" => Ok(LevelFilter::Warn),
        other @ ("trace" | "debug" | "info" | "warn" | "error") => other
            .parse::<LevelFilter>()
            .map_err(|err| format!("unsupported log level `{other}`: {err}")),
        other => Err(format!(
            "unsupported log level `{other}`; expected trace|debug|info|warn|error"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::parse_level;
    use log::LevelFilter;

    #[test]
    fn parse_level_accepts_aliases_and_case() {
        assert_eq!(parse_level(" Warning "), Ok(LevelFilter::Warn));
        assert_eq!(parse_level("DEBUG"), Ok(LevelFilter::Debug));
    }

    #[test]
    fn parse_level_rejects_off_and_unknown() {
        assert!(parse_level("off").is_err());
        assert!(parse_level("verbose").is_err());
    }
}
