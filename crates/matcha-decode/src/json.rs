//! # JSON Decoding

use matcha_core::Document;

use crate::error::DecodeError;

/// Parse a JSON document. Object key order is preserved.
pub fn decode_json(bytes: &[u8]) -> Result<Document, DecodeError> {
    Ok(serde_json::from_slice(bytes)?)
}
