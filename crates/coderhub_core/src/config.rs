//! Page behavior configuration.
//!
//! # Responsibility
//! - Hold every timing, threshold and message the page behaviors use.
//! - Load overrides from JSON supplied by the host page.
//!
//! # Invariants
//! - `PageConfig::default()` reproduces the stock page behavior.
//! - Absent JSON keys fall back to defaults; unknown keys are rejected.
//! - A config returned by `from_json` has passed `validate()`.

use crate::port::visibility::VisibilityOptions;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug)]
pub enum ConfigError {
    Parse(serde_json::Error),
    ThresholdOutOfRange { key: &'static str, value: f64 },
    ZeroDelay(&'static str),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "invalid page config: {err}"),
            Self::ThresholdOutOfRange { key, value } => {
                write!(f, "{key} must be within [0, 1], got {value}")
            }
            Self::ZeroDelay(key) => write!(f, "{key} must be greater than zero"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::ThresholdOutOfRange { .. } | Self::ZeroDelay(_) => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Top-level page configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    pub count_up: CountUpConfig,
    pub typing: TypingConfig,
    pub notification: NotificationConfig,
    pub reveal: RevealConfig,
    pub navbar: NavbarConfig,
    pub smooth_scroll: SmoothScrollConfig,
}

impl PageConfig {
    /// Parses a JSON override document and validates it.
    ///
    /// Blank input yields the default config.
    pub fn from_json(raw: &str) -> ConfigResult<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let config = serde_json::from_str::<Self>(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        check_threshold("count_up.threshold", self.count_up.threshold)?;
        check_threshold("reveal.threshold", self.reveal.threshold)?;
        if self.typing.char_delay_ms == 0 {
            return Err(ConfigError::ZeroDelay("typing.char_delay_ms"));
        }
        Ok(())
    }
}

fn check_threshold(key: &'static str, value: f64) -> ConfigResult<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::ThresholdOutOfRange { key, value });
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CountUpConfig {
    pub duration_ms: u32,
    pub threshold: f64,
}

impl CountUpConfig {
    pub fn visibility(&self) -> VisibilityOptions {
        VisibilityOptions::new(self.threshold, "0px")
    }
}

impl Default for CountUpConfig {
    fn default() -> Self {
        Self {
            duration_ms: 2000,
            threshold: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TypingConfig {
    /// Lead-in before the first character, during which the sink is blank.
    pub initial_delay_ms: u32,
    pub char_delay_ms: u32,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            initial_delay_ms: 500,
            char_delay_ms: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NotificationConfig {
    pub auto_dismiss_ms: u32,
    /// Exit animation length; detach happens when it ends.
    pub exit_ms: u32,
    pub success_message: String,
    pub error_message: String,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            auto_dismiss_ms: 5000,
            exit_ms: 300,
            success_message: "¡Mensaje enviado correctamente! Te contactaremos pronto.".to_string(),
            error_message: "Por favor completa todos los campos requeridos correctamente."
                .to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RevealConfig {
    pub threshold: f64,
    pub root_margin: String,
}

impl RevealConfig {
    pub fn visibility(&self) -> VisibilityOptions {
        VisibilityOptions::new(self.threshold, self.root_margin.clone())
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavbarConfig {
    /// Scroll offset past which the navbar switches to its solid style.
    pub scroll_threshold_px: f64,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            scroll_threshold_px: 100.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SmoothScrollConfig {
    /// Height kept clear above the target for the fixed navbar.
    pub offset_px: f64,
}

impl Default for SmoothScrollConfig {
    fn default() -> Self {
        Self { offset_px: 80.0 }
    }
}
