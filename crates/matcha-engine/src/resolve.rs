//! # Field Resolution
//!
//! A field is looked up under its explicit key for the active convention
//! if it declares one, otherwise under the key the convention derives from
//! its declared name.

use matcha_core::NamingConvention;
use matcha_schema::FieldSpec;

/// Compute the document key for `field` under `convention`.
pub fn resolve_lookup_key(field: &FieldSpec, convention: &dyn NamingConvention) -> String {
    match field.key_override(convention) {
        Some(key) => key.to_string(),
        None => convention.derive_key(field.name()),
    }
}
