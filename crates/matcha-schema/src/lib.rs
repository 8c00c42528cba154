//! # matcha-schema — Schema Descriptors
//!
//! A schema describes the shape a decoded document is expected to have.
//! It is an immutable tree built once and shared by any number of match
//! calls, on any number of threads.
//!
//! ## Building in code (`descriptor`)
//!
//! ```
//! use matcha_schema::{FieldSpec, SchemaDescriptor};
//!
//! let schema = SchemaDescriptor::object(vec![
//!     FieldSpec::new("Url", SchemaDescriptor::string()).with_pattern("https://.*"),
//!     FieldSpec::new("Count", SchemaDescriptor::number()).with_capture("count"),
//!     FieldSpec::new("Tags", SchemaDescriptor::array(SchemaDescriptor::string())),
//! ]);
//! assert_eq!(schema.fields().len(), 3);
//! ```
//!
//! ## Loading from a file (`definition`)
//!
//! [`load_schema`] reads the same tree from a YAML or JSON definition, so
//! that test fixtures and the `matcha` CLI can share schemas without Rust
//! code. Type names the engine has no rule for load as
//! [`SchemaDescriptor::Unsupported`] and are reported when matched, not
//! when loaded.

pub mod definition;
pub mod descriptor;

pub use definition::{
    from_json_str, from_yaml_str, load_schema, FieldDefinition, SchemaDefinition, SchemaLoadError,
};
pub use descriptor::{FieldSpec, SchemaDescriptor};
