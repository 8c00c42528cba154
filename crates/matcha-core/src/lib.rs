//! # matcha-core — Foundational Types for matcha
//!
//! The leaf crate of the matcha workspace. It defines the vocabulary every
//! other crate shares:
//!
//! - [`ValueKind`] — the kind of a decoded document node, with the display
//!   names used in every mismatch report.
//! - [`PrimitiveKind`] — the scalar kinds a schema may expect.
//! - [`DocumentFormat`] — JSON or XML, with its report label.
//! - [`NamingConvention`] — how a declared field name becomes the key looked
//!   up in a decoded object.
//!
//! Documents themselves are plain `serde_json::Value` trees. Both the JSON
//! and the XML decoders produce them, so the matching engine never needs to
//! know which wire format it is looking at.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `matcha-*` crates.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod format;
pub mod kind;
pub mod naming;

pub use format::DocumentFormat;
pub use kind::{PrimitiveKind, ValueKind};
pub use naming::{snake_case, NamingConvention};

/// The decoded document type consumed by the matching engine.
pub type Document = serde_json::Value;
