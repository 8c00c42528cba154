//! # Discrepancies
//!
//! One [`Discrepancy`] describes exactly one place where a document and
//! its schema disagree. Its `Display` form is the line that appears in the
//! final report, with the field path encoded in the message.

use std::fmt;

use matcha_core::{PrimitiveKind, ValueKind};
use thiserror::Error;

/// Broad category of a discrepancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiscrepancyKind {
    /// A scalar of the wrong kind.
    TypeMismatch,
    /// A declared field is absent from the document object.
    MissingField,
    /// A scalar where an object or array was expected.
    StructuralMismatch,
    /// A pattern constraint failed or could not be applied to the value.
    PatternViolation,
    /// The schema itself is malformed.
    DescriptorDefect,
}

/// A single localized discrepancy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Discrepancy {
    #[error("Expected '{field}' to be: '{expected}' (but was: '{actual}')!")]
    TypeMismatch {
        field: String,
        expected: PrimitiveKind,
        actual: ValueKind,
    },

    #[error("No field '{key}' found in response")]
    MissingField { key: String },

    #[error("Was expecting an object for field: {field}")]
    ExpectedObject { field: String },

    #[error("Was expecting an array for field: {field}")]
    ExpectedArray { field: String },

    #[error("Expected a string value for field: {field} but instead got {actual}")]
    PatternOnNonStringValue { field: String, actual: ValueKind },

    #[error("Received invalid regular expression: {pattern}")]
    InvalidPattern { pattern: String },

    #[error("{field}: '{value}' does not match expected pattern: {pattern}")]
    PatternMismatch {
        field: String,
        value: String,
        pattern: String,
    },

    /// A pattern declared on a field whose expected kind is not `string`.
    #[error("'pattern' directive cannot be used on non-string fields: {field}")]
    PatternOnNonStringField { field: String },

    /// A schema type the engine has no rule for.
    #[error("'{type_name}' is of a type I don't know how to handle")]
    UnsupportedType { type_name: String },
}

impl Discrepancy {
    pub fn kind(&self) -> DiscrepancyKind {
        match self {
            Self::TypeMismatch { .. } => DiscrepancyKind::TypeMismatch,
            Self::MissingField { .. } => DiscrepancyKind::MissingField,
            Self::ExpectedObject { .. } | Self::ExpectedArray { .. } => {
                DiscrepancyKind::StructuralMismatch
            }
            Self::PatternOnNonStringValue { .. }
            | Self::InvalidPattern { .. }
            | Self::PatternMismatch { .. } => DiscrepancyKind::PatternViolation,
            Self::PatternOnNonStringField { .. } | Self::UnsupportedType { .. } => {
                DiscrepancyKind::DescriptorDefect
            }
        }
    }

    /// Whether the discrepancy points at the schema rather than the document.
    pub fn is_descriptor_defect(&self) -> bool {
        self.kind() == DiscrepancyKind::DescriptorDefect
    }
}

/// Ordered collection of discrepancies from one match call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Discrepancies {
    entries: Vec<Discrepancy>,
}

impl Discrepancies {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, discrepancy: Discrepancy) {
        self.entries.push(discrepancy);
    }

    /// Returns the number of discrepancies.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the document matched.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn as_slice(&self) -> &[Discrepancy] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Discrepancy> {
        self.entries.iter()
    }

    /// Number of entries of the given kind.
    pub fn count_of(&self, kind: DiscrepancyKind) -> usize {
        self.entries.iter().filter(|d| d.kind() == kind).count()
    }

    /// One rendered line per discrepancy, in accumulation order.
    pub fn messages(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_inner(self) -> Vec<Discrepancy> {
        self.entries
    }
}

impl From<Vec<Discrepancy>> for Discrepancies {
    fn from(entries: Vec<Discrepancy>) -> Self {
        Self { entries }
    }
}

impl<'a> IntoIterator for &'a Discrepancies {
    type Item = &'a Discrepancy;
    type IntoIter = std::slice::Iter<'a, Discrepancy>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Newline separated, never reordered or deduplicated.
impl fmt::Display for Discrepancies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, d) in self.entries.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{d}")?;
        }
        Ok(())
    }
}
