//! # Decode Errors

use matcha_core::DocumentFormat;
use thiserror::Error;

/// Error while decoding a raw document.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The input is not valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The input is not well-formed XML.
    #[error("invalid XML at byte {position}: {reason}")]
    Xml {
        /// Byte offset where the reader gave up.
        position: u64,
        /// Reader message.
        reason: String,
    },
}

impl DecodeError {
    /// The format whose decoder failed.
    pub fn format(&self) -> DocumentFormat {
        match self {
            Self::Json(_) => DocumentFormat::Json,
            Self::Xml { .. } => DocumentFormat::Xml,
        }
    }
}
