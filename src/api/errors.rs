//! Error types for the JavaScript boundary
//!
//! The layout core never fails; only converting values to and from
//! JavaScript can.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// A JavaScript argument did not match the expected shape
    #[error("{context}: {message}")]
    Deserialize { context: String, message: String },

    /// A result could not be converted back to JavaScript
    #[error("{context}: {message}")]
    Serialize { context: String, message: String },

    /// A date argument was not in `YYYY-MM-DD` form
    #[error("Invalid date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),
}

impl From<ApiError> for JsValue {
    fn from(err: ApiError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
