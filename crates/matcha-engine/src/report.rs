//! # Reports and Verdicts
//!
//! A match either passes or fails with a [`Report`]: every discrepancy on
//! its own line, in the order found, followed by the document that was
//! checked so the failure can be read in context.
//!
//! Assertion layers that signal success with an empty string can use
//! [`Verdict::into_message`].

use std::fmt;

use matcha_core::DocumentFormat;
use serde_json::Value;

use crate::discrepancy::{Discrepancies, Discrepancy};

/// Outcome of matching one document.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Fail(Report),
}

impl Verdict {
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    pub fn report(&self) -> Option<&Report> {
        match self {
            Self::Pass => None,
            Self::Fail(report) => Some(report),
        }
    }

    /// Discrepancies behind a failure; empty on pass.
    pub fn discrepancies(&self) -> &[Discrepancy] {
        match self {
            Self::Pass => &[],
            Self::Fail(report) => report.discrepancies.as_slice(),
        }
    }

    /// The empty string on pass, the full report text on failure.
    pub fn into_message(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pass => Ok(()),
            Self::Fail(report) => report.fmt(f),
        }
    }
}

/// A failed match: the discrepancies plus the document they were found in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    discrepancies: Discrepancies,
    format: DocumentFormat,
    document: String,
}

impl Report {
    pub fn discrepancies(&self) -> &Discrepancies {
        &self.discrepancies
    }

    pub fn format(&self) -> DocumentFormat {
        self.format
    }

    /// The document text appended to the report.
    pub fn document(&self) -> &str {
        &self.document
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\n{} data:\n{}",
            self.discrepancies,
            self.format.label(),
            self.document
        )
    }
}

/// Turn the discrepancies of one match into a verdict.
///
/// `document` is the text shown after the discrepancy lines: usually the
/// raw response body, or [`render_document`] when only the decoded value
/// is at hand.
pub fn format_report(
    discrepancies: Discrepancies,
    format: DocumentFormat,
    document: impl Into<String>,
) -> Verdict {
    if discrepancies.is_empty() {
        return Verdict::Pass;
    }
    Verdict::Fail(Report {
        discrepancies,
        format,
        document: document.into(),
    })
}

/// Pretty-printed JSON rendering of a decoded document.
pub fn render_document(document: &Value) -> String {
    serde_json::to_string_pretty(document).unwrap_or_else(|_| document.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_discrepancies_pass_with_empty_message() {
        let verdict = format_report(Discrepancies::new(), DocumentFormat::Json, "{}");
        assert!(verdict.is_pass());
        assert!(verdict.discrepancies().is_empty());
        assert_eq!(verdict.into_message(), "");
    }

    #[test]
    fn failure_lists_lines_then_document() {
        let found = Discrepancies::from(vec![
            Discrepancy::MissingField { key: "attributes".into() },
            Discrepancy::MissingField { key: "success".into() },
        ]);
        let verdict = format_report(found, DocumentFormat::Json, r#"{"result": {}}"#);
        assert!(!verdict.is_pass());
        assert_eq!(
            verdict.into_message(),
            "No field 'attributes' found in response\n\
             No field 'success' found in response\n\
             JSON data:\n\
             {\"result\": {}}"
        );
    }

    #[test]
    fn xml_reports_are_labelled() {
        let found = Discrepancies::from(vec![Discrepancy::MissingField { key: "a".into() }]);
        let verdict = format_report(found, DocumentFormat::Xml, "<b/>");
        let report = verdict.report().unwrap();
        assert_eq!(report.format(), DocumentFormat::Xml);
        assert!(report.to_string().ends_with("XML data:\n<b/>"));
    }

    #[test]
    fn render_document_pretty_prints() {
        let rendered = render_document(&json!({"a": [1, 2]}));
        assert_eq!(rendered, "{\n  \"a\": [\n    1,\n    2\n  ]\n}");
    }
}
