//! # Value and Primitive Kinds
//!
//! Kind names appear verbatim in mismatch reports, e.g.
//! `Expected 'count' to be: 'float64' (but was: 'string')!`. Numbers are
//! reported as `float64` regardless of whether the decoder kept them as
//! integers: the document model has a single numeric kind.

use std::fmt;

use serde_json::Value;

/// The kind of a decoded document node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    String,
    Number,
    Bool,
    Object,
    Array,
    Null,
}

impl ValueKind {
    /// Classify a decoded value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::String(_) => Self::String,
            Value::Number(_) => Self::Number,
            Value::Bool(_) => Self::Bool,
            Value::Object(_) => Self::Object,
            Value::Array(_) => Self::Array,
            Value::Null => Self::Null,
        }
    }

    /// The name used for this kind in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "float64",
            Self::Bool => "bool",
            Self::Object => "object",
            Self::Array => "array",
            Self::Null => "null",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scalar kind a schema field can expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    String,
    Number,
    Bool,
}

impl PrimitiveKind {
    /// The document kind a value must have to satisfy this primitive.
    pub fn value_kind(&self) -> ValueKind {
        match self {
            Self::String => ValueKind::String,
            Self::Number => ValueKind::Number,
            Self::Bool => ValueKind::Bool,
        }
    }

    /// Whether `value` has exactly this kind. No coercion is attempted:
    /// `"5"` is not a number and `5` is not a string.
    pub fn admits(&self, value: &Value) -> bool {
        ValueKind::of(value) == self.value_kind()
    }

    /// Parse a declared type name. Accepts both `bool` and `boolean`.
    pub fn from_type_name(name: &str) -> Option<Self> {
        match name {
            "string" => Some(Self::String),
            "number" | "float64" => Some(Self::Number),
            "bool" | "boolean" => Some(Self::Bool),
            _ => None,
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value_kind().fmt(f)
    }
}
