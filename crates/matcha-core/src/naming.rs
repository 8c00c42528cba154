//! # Field Naming Conventions
//!
//! Schemas declare fields with their natural identifier capitalisation
//! (`StringField`, `URL`, `ClassId`). Documents key their objects in snake
//! case (`string_field`, `url`, `class_id`). A [`NamingConvention`] bridges
//! the two: it names the per-format override a field may carry and derives
//! a key when no override is present.

use heck::ToSnakeCase;

/// Policy for turning a declared field name into a document lookup key.
///
/// Implementors only have to name their override tag; the derivation
/// defaults to [`snake_case`], which every built-in format shares.
pub trait NamingConvention {
    /// The tag under which a field may carry an explicit key for this
    /// convention (e.g. `json`, `xml`).
    fn override_tag(&self) -> &str;

    /// Derive a lookup key from a declared name when no override applies.
    fn derive_key(&self, declared_name: &str) -> String {
        snake_case(declared_name)
    }
}

/// Lower-case, underscore separated form of an identifier.
///
/// Acronyms collapse into a single word: `URL` → `url`,
/// `HTTPStatus` → `http_status`.
pub fn snake_case(name: &str) -> String {
    name.to_snake_case()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Upper;

    impl NamingConvention for Upper {
        fn override_tag(&self) -> &str {
            "upper"
        }

        fn derive_key(&self, declared_name: &str) -> String {
            declared_name.to_uppercase()
        }
    }

    #[test]
    fn snake_cases_declared_names() {
        assert_eq!(snake_case("StringField"), "string_field");
        assert_eq!(snake_case("URL"), "url");
        assert_eq!(snake_case("ClassId"), "class_id");
        assert_eq!(snake_case("already_snake"), "already_snake");
        assert_eq!(snake_case("HTTPStatus"), "http_status");
        assert_eq!(snake_case("Field1Name"), "field1_name");
    }

    #[test]
    fn conventions_may_override_derivation() {
        assert_eq!(Upper.derive_key("code"), "CODE");
        assert_eq!(Upper.override_tag(), "upper");
    }
}
