//! Error type shared by configuration and browser wiring.
//!
//! Nothing here reaches the visitor. Installers return these errors so the
//! page can log them and carry on with the remaining behaviors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FxError {
    #[error("typewriter needs at least one phrase")]
    EmptyPhrases,
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("config parse failed: {0}")]
    ConfigParse(#[from] serde_json::Error),
    #[error("no window available")]
    NoWindow,
    #[error("no document available")]
    NoDocument,
    #[error("missing element: {0}")]
    MissingElement(&'static str),
    #[error("javascript error: {0}")]
    Js(String),
}

pub type Result<T> = std::result::Result<T, FxError>;

#[cfg(feature = "web")]
impl From<wasm_bindgen::JsValue> for FxError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
