//! # Expectations
//!
//! An [`Expectation`] is the schema a response is checked against plus,
//! optionally, where captured values should go. It is the only
//! configuration a check takes.

use matcha_core::DocumentFormat;
use matcha_engine::{format_report, Captures, Matcher, Verdict};
use matcha_schema::SchemaDescriptor;

use crate::error::MatchError;

/// What a response is expected to look like.
#[derive(Debug)]
pub struct Expectation<'a> {
    schema: &'a SchemaDescriptor,
    captures: Option<&'a mut Captures>,
}

impl<'a> Expectation<'a> {
    pub fn new(schema: &'a SchemaDescriptor) -> Self {
        Self {
            schema,
            captures: None,
        }
    }

    /// Store captured field values in `captures`.
    pub fn capture_into(mut self, captures: &'a mut Captures) -> Self {
        self.captures = Some(captures);
        self
    }

    pub fn schema(&self) -> &SchemaDescriptor {
        self.schema
    }

    /// Decode `body` as `format` and match it against the schema.
    ///
    /// The report of a failed verdict shows `body` as received.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::Decode`] if `body` is not valid `format`.
    pub fn check(&mut self, format: DocumentFormat, body: &[u8]) -> Result<Verdict, MatchError> {
        let document =
            matcha_decode::decode(format, body).map_err(|e| MatchError::decode(body, e))?;

        tracing::debug!(%format, expected = self.schema.kind_name(), "checking response");

        let mut matcher = Matcher::new(&format);
        if let Some(captures) = self.captures.as_deref_mut() {
            matcher = matcher.with_captures(captures);
        }
        let found = matcher.match_document(&document, self.schema);

        Ok(format_report(
            found,
            format,
            String::from_utf8_lossy(body).into_owned(),
        ))
    }

    pub fn check_json(&mut self, body: &[u8]) -> Result<Verdict, MatchError> {
        self.check(DocumentFormat::Json, body)
    }

    pub fn check_xml(&mut self, body: &[u8]) -> Result<Verdict, MatchError> {
        self.check(DocumentFormat::Xml, body)
    }
}

/// String form of [`Expectation::check`] for assertion helpers: `""` when
/// the body matches, otherwise the report or the decode failure.
pub fn should_match(format: DocumentFormat, body: &[u8], mut expectation: Expectation<'_>) -> String {
    match expectation.check(format, body) {
        Ok(verdict) => verdict.into_message(),
        Err(err) => err.to_string(),
    }
}

pub fn should_match_json(body: &[u8], expectation: Expectation<'_>) -> String {
    should_match(DocumentFormat::Json, body, expectation)
}

pub fn should_match_xml(body: &[u8], expectation: Expectation<'_>) -> String {
    should_match(DocumentFormat::Xml, body, expectation)
}
