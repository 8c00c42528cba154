//! # matcha — Structural Response Assertions
//!
//! Check that a JSON or XML response body has the shape a schema expects.
//! Every discrepancy is collected into one report instead of stopping at
//! the first, and fields can be captured into a map for later assertions.
//!
//! ```
//! use matcha::{should_match_json, Captures, Expectation, FieldSpec, SchemaDescriptor};
//!
//! let schema = SchemaDescriptor::object(vec![
//!     FieldSpec::new("NumberField", SchemaDescriptor::number()).with_capture("n"),
//!     FieldSpec::new("StringField", SchemaDescriptor::string()),
//! ]);
//!
//! let mut captures = Captures::new();
//! let body = br#"{"string_field": "X", "number_field": 16}"#;
//! let message = should_match_json(body, Expectation::new(&schema).capture_into(&mut captures));
//!
//! assert_eq!(message, "");
//! assert_eq!(captures["n"], 16);
//! ```
//!
//! ## Layers
//!
//! - `matcha-core`: document kinds, formats and naming conventions.
//! - `matcha-schema`: the descriptor tree and its YAML/JSON definitions.
//! - `matcha-decode`: raw bytes to a document value.
//! - `matcha-engine`: the matching walk, captures and reports.
//!
//! This crate wires them together and re-exports what a test suite needs.
//!
//! ## Crate Policy
//!
//! - A mismatch is a [`Verdict::Fail`], never an `Err`. Only input that
//!   cannot be decoded at all is a [`MatchError`].
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod expectation;

pub use error::MatchError;
pub use expectation::{should_match, should_match_json, should_match_xml, Expectation};

pub use matcha_core::{Document, DocumentFormat, NamingConvention, PrimitiveKind, ValueKind};
pub use matcha_decode::DecodeError;
pub use matcha_engine::{Captures, Discrepancies, Discrepancy, DiscrepancyKind, Report, Verdict};
pub use matcha_schema::{load_schema, FieldSpec, SchemaDescriptor, SchemaLoadError};
