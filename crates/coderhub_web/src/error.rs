//! Bridge-level error type.
//!
//! Validation failures never surface here; they are reported to the user
//! through the notification slot. `BindError` only covers page wiring.

use coderhub_core::ConfigError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use wasm_bindgen::JsValue;

pub type BindResult<T> = Result<T, BindError>;

#[derive(Debug)]
pub enum BindError {
    MissingWindow,
    MissingDocument,
    MissingBody,
    /// A required element id is absent from the markup.
    MissingElement(String),
    AlreadyInitialized,
    Config(ConfigError),
    /// A DOM call threw.
    Js(String),
}

impl Display for BindError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingWindow => write!(f, "no global window"),
            Self::MissingDocument => write!(f, "window has no document"),
            Self::MissingBody => write!(f, "document has no body"),
            Self::MissingElement(id) => write!(f, "required element `#{id}` not found"),
            Self::AlreadyInitialized => write!(f, "page behaviors already initialized"),
            Self::Config(err) => write!(f, "{err}"),
            Self::Js(message) => write!(f, "DOM call failed: {message}"),
        }
    }
}

impl Error for BindError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ConfigError> for BindError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<JsValue> for BindError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<BindError> for JsValue {
    fn from(value: BindError) -> Self {
        JsValue::from_str(&value.to_string())
    }
}
