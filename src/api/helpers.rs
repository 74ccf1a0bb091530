//! Shared helpers for WASM API operations
//!
//! Serialization, deserialization and error logging used by every
//! exported function.

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::errors::ApiError;

// ============================================================================
// Serialization/Deserialization Helpers
// ============================================================================

/// Deserialize a value from JavaScript with automatic error handling
pub fn deserialize<T: DeserializeOwned>(value: JsValue, error_context: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        report(ApiError::Deserialize {
            context: error_context.to_string(),
            message: e.to_string(),
        })
    })
}

/// Deserialize an optional argument, falling back to `T::default()` when
/// JavaScript passes `undefined` or `null`
pub fn deserialize_or_default<T: DeserializeOwned + Default>(
    value: JsValue,
    error_context: &str,
) -> Result<T, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(T::default());
    }
    deserialize(value, error_context)
}

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    // Plain objects, not ES Maps
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_maps_as_objects(true);
    value.serialize(&serializer).map_err(|e| {
        report(ApiError::Serialize {
            context: error_context.to_string(),
            message: e.to_string(),
        })
    })
}

// ============================================================================
// Result Conversion Helpers
// ============================================================================

/// Log an API error and convert it to a JsValue
pub fn report(err: ApiError) -> JsValue {
    log::error!("[WASM] {}", err);
    err.into()
}
