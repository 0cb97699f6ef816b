//! API Errors

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("no browser window available")]
    NoWindow,
    #[error("network error: {0}")]
    Network(String),
    #[error("{uri} responded {status} {status_text}")]
    Status { uri: String, status: u16, status_text: String },
    #[error("unexpected payload: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("could not read form: {0}")]
    Form(String),
}

impl From<JsValue> for ApiError {
    fn from(value: JsValue) -> Self {
        ApiError::Network(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl ApiError {
    /// Convert a JS failure raised while reading a form
    pub fn form(value: JsValue) -> Self {
        ApiError::Form(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
