//! # matcha-decode — Document Decoders
//!
//! Turns raw response bodies into the `serde_json::Value` trees the
//! matching engine walks. Both formats share one document model, so a
//! schema written once checks either.
//!
//! - [`json::decode_json`] — plain `serde_json` parsing.
//! - [`xml::decode_xml`] — an element tree folded into nested objects,
//!   with repeated siblings collected into arrays and scalar text cast to
//!   numbers and booleans where it parses as one.
//!
//! Decoding either succeeds completely or fails with a [`DecodeError`];
//! there is no partial document.

pub mod error;
pub mod json;
pub mod xml;

use matcha_core::{Document, DocumentFormat};

pub use error::DecodeError;
pub use json::decode_json;
pub use xml::decode_xml;

/// Decode `bytes` as `format`.
pub fn decode(format: DocumentFormat, bytes: &[u8]) -> Result<Document, DecodeError> {
    match format {
        DocumentFormat::Json => decode_json(bytes),
        DocumentFormat::Xml => decode_xml(bytes),
    }
}
