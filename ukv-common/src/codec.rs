//! # Stored-Value Codec
//!
//! Purpose: convert arbitrary structured values to the stored text form
//! and back, so a value survives the round trip through a text-oriented
//! backend deep-equal to the original.
//!
//! The stored form is compact JSON. Decoding a key that was never set or
//! was deleted yields `None`, the absent-value sentinel; it is not an
//! error. Malformed stored text is an error and is never swallowed.

use serde_json::Value;

/// Encodes a value into its stored text form.
pub fn encode(value: &Value) -> Result<String, serde_json::Error> {
    serde_json::to_string(value)
}

/// Decodes stored text back into a value.
///
/// `None` in means the backend had no value for the key; that decodes to
/// `Ok(None)` rather than an error.
pub fn decode(text: Option<&str>) -> Result<Option<Value>, serde_json::Error> {
    match text {
        Some(text) => serde_json::from_str(text).map(Some),
        None => Ok(None),
    }
}
