//! # Matching Engine
//!
//! The recursive walk of a schema descriptor against a document.
//!
//! | Expected            | Actual must be | On mismatch                          |
//! |---------------------|----------------|--------------------------------------|
//! | `Primitive(kind)`   | same kind      | type mismatch                        |
//! | `Object(fields)`    | object         | structural mismatch, stop descending |
//! | `Array(element)`    | array          | structural mismatch, stop descending |
//! | `Unsupported(name)` | anything       | descriptor defect                    |
//!
//! Object fields are visited in declaration order. A missing field is
//! reported and its siblings are still checked. A found field is captured,
//! then pattern-checked, then (if the pattern passed) recursed into under
//! its lookup key. Array elements are each checked against the element
//! descriptor under the name `<field> array values`.

use matcha_core::{NamingConvention, ValueKind};
use matcha_schema::{FieldSpec, SchemaDescriptor};
use serde_json::{Map, Value};

use crate::capture::{capture, Captures};
use crate::discrepancy::{Discrepancies, Discrepancy};
use crate::pattern::PatternCache;
use crate::resolve::resolve_lookup_key;

/// Field name used for the document root.
pub const ROOT_FIELD_NAME: &str = "Result";

/// One matching session: a naming convention, an optional capture sink,
/// and the patterns compiled so far.
///
/// A `Matcher` holds the capture map mutably for its lifetime; schemas and
/// documents are only borrowed per call, so one schema can be shared by
/// any number of matchers.
pub struct Matcher<'a> {
    convention: &'a dyn NamingConvention,
    captures: Option<&'a mut Captures>,
    patterns: PatternCache,
}

impl<'a> Matcher<'a> {
    pub fn new(convention: &'a dyn NamingConvention) -> Self {
        Self {
            convention,
            captures: None,
            patterns: PatternCache::new(),
        }
    }

    /// Copy captured field values into `captures`. Existing entries are
    /// kept unless a capture overwrites them.
    pub fn with_captures(mut self, captures: &'a mut Captures) -> Self {
        self.captures = Some(captures);
        self
    }

    /// Match a whole document against `schema`, naming the root
    /// [`ROOT_FIELD_NAME`].
    pub fn match_document(&mut self, document: &Value, schema: &SchemaDescriptor) -> Discrepancies {
        let mut found = Discrepancies::new();
        self.walk(document, schema, ROOT_FIELD_NAME, &mut found);
        tracing::debug!(
            expected = schema.kind_name(),
            discrepancies = found.len(),
            captured = self.captures.as_ref().map_or(0, |c| c.len()),
            "matched document"
        );
        found
    }

    /// Match `actual` against `expected`, reporting under `field_name`.
    /// Returns an empty list when they agree.
    pub fn match_value(
        &mut self,
        actual: &Value,
        expected: &SchemaDescriptor,
        field_name: &str,
    ) -> Vec<Discrepancy> {
        let mut found = Discrepancies::new();
        self.walk(actual, expected, field_name, &mut found);
        found.into_inner()
    }

    fn walk(
        &mut self,
        actual: &Value,
        expected: &SchemaDescriptor,
        field_name: &str,
        found: &mut Discrepancies,
    ) {
        match expected {
            SchemaDescriptor::Primitive(kind) => {
                if !kind.admits(actual) {
                    found.push(Discrepancy::TypeMismatch {
                        field: field_name.to_string(),
                        expected: *kind,
                        actual: ValueKind::of(actual),
                    });
                }
            }
            SchemaDescriptor::Object(fields) => match actual {
                Value::Object(object) => {
                    for field in fields {
                        self.walk_field(object, field, found);
                    }
                }
                _ => found.push(Discrepancy::ExpectedObject {
                    field: field_name.to_string(),
                }),
            },
            SchemaDescriptor::Array(element) => match actual {
                Value::Array(items) => {
                    let element_name = format!("{field_name} array values");
                    for item in items {
                        self.walk(item, element, &element_name, found);
                    }
                }
                _ => found.push(Discrepancy::ExpectedArray {
                    field: field_name.to_string(),
                }),
            },
            SchemaDescriptor::Unsupported(type_name) => {
                tracing::warn!(
                    field = field_name,
                    type_name = type_name.as_str(),
                    "schema declares an unsupported type"
                );
                found.push(Discrepancy::UnsupportedType {
                    type_name: type_name.clone(),
                });
            }
        }
    }

    fn walk_field(
        &mut self,
        object: &Map<String, Value>,
        field: &FieldSpec,
        found: &mut Discrepancies,
    ) {
        let key = resolve_lookup_key(field, self.convention);
        let Some(value) = object.get(&key) else {
            tracing::trace!(key = %key, field = field.name(), "field not found");
            found.push(Discrepancy::MissingField { key });
            return;
        };

        capture(self.captures.as_deref_mut(), field, &key, value);

        if let Some(violation) = self.patterns.check(value, field) {
            if violation.is_descriptor_defect() {
                tracing::warn!(field = field.name(), "pattern declared on a non-string field");
            }
            found.push(violation);
            return;
        }

        self.walk(value, field.descriptor(), &key, found);
    }
}
