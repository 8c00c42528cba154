//! # matcha-engine — Structural Matching
//!
//! Walks a [`SchemaDescriptor`](matcha_schema::SchemaDescriptor) against a
//! decoded document and reports every place the two disagree.
//!
//! ## Pipeline
//!
//! 1. [`resolve`] — a field's declared name becomes a lookup key under the
//!    active naming convention.
//! 2. [`capture`] — a found value is copied into the caller's capture map
//!    before it is validated.
//! 3. [`pattern`] — string fields may carry a regular expression that the
//!    value must contain a match for.
//! 4. [`engine`] — the recursive walk, collecting [`Discrepancy`] entries
//!    in schema declaration order (objects) and document order (arrays).
//! 5. [`report`] — the collected entries plus the original document become
//!    a [`Verdict`].
//!
//! ## Error Policy
//!
//! Discrepancies are data. The walk only stops descending beneath a node
//! whose gross shape is wrong (a scalar where an object or array was
//! expected); everything else is collected and the walk continues.
//! Defects in the schema itself (a pattern on a number field, a type the
//! engine has no rule for) are reported the same way, so one bad
//! declaration never aborts a run.

pub mod capture;
pub mod discrepancy;
pub mod engine;
pub mod pattern;
pub mod report;
pub mod resolve;

pub use capture::{capture, Captures};
pub use discrepancy::{Discrepancies, Discrepancy, DiscrepancyKind};
pub use engine::{Matcher, ROOT_FIELD_NAME};
pub use pattern::{check_pattern, PatternCache};
pub use report::{format_report, render_document, Report, Verdict};
pub use resolve::resolve_lookup_key;
