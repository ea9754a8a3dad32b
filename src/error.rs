//! Error type shared by every handler.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PageError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("HTTP {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Parse(#[from] serde_json::Error),
    /// Response parsed but `success` was false or missing.
    #[error("server reported failure")]
    Rejected,
    #[error("unknown like action '{0}'")]
    UnknownAction(String),
    #[error("missing game id")]
    MissingGameId,
    #[error("dom: {0}")]
    Dom(String),
}

impl PageError {
    /// Wrap a thrown JS value as a transport failure.
    pub fn from_js(err: &wasm_bindgen::JsValue) -> Self {
        PageError::Transport(js_message(err))
    }
}

pub(crate) fn js_message(err: &wasm_bindgen::JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
