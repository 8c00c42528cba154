//! # Match Errors

use matcha_core::DocumentFormat;
use matcha_decode::DecodeError;
use thiserror::Error;

/// A response that could not be checked at all.
///
/// Mismatches are not errors; they come back as a failed
/// [`Verdict`](matcha_engine::Verdict).
#[derive(Error, Debug)]
pub enum MatchError {
    /// The body did not decode as the declared format. No matching was
    /// attempted.
    #[error("Was not possible to decode {} response. {} data:\n{}", .format.label(), .format.label(), .raw)]
    Decode {
        /// Format the body was expected to be in.
        format: DocumentFormat,
        /// The body as text, for the report.
        raw: String,
        /// Decoder failure.
        #[source]
        source: DecodeError,
    },
}

impl MatchError {
    pub(crate) fn decode(raw: &[u8], source: DecodeError) -> Self {
        Self::Decode {
            format: source.format(),
            raw: String::from_utf8_lossy(raw).into_owned(),
            source,
        }
    }
}
