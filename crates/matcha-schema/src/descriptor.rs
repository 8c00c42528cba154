//! # Schema Descriptor Tree
//!
//! One enum variant per expected kind. The matching engine dispatches on
//! the variant; nothing is inspected at runtime beyond that.

use std::collections::BTreeMap;
use std::fmt;

use matcha_core::{NamingConvention, PrimitiveKind};

/// The expected shape of a document node.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaDescriptor {
    /// A scalar of exactly this kind.
    Primitive(PrimitiveKind),
    /// An object carrying at least these fields, checked in this order.
    Object(Vec<FieldSpec>),
    /// An array whose every element has this shape.
    Array(Box<SchemaDescriptor>),
    /// A declared type the engine has no rule for. Matching it always
    /// yields a descriptor defect naming the type.
    Unsupported(String),
}

impl SchemaDescriptor {
    pub fn string() -> Self {
        Self::Primitive(PrimitiveKind::String)
    }

    pub fn number() -> Self {
        Self::Primitive(PrimitiveKind::Number)
    }

    pub fn bool() -> Self {
        Self::Primitive(PrimitiveKind::Bool)
    }

    pub fn object(fields: Vec<FieldSpec>) -> Self {
        Self::Object(fields)
    }

    pub fn array(element: SchemaDescriptor) -> Self {
        Self::Array(Box::new(element))
    }

    pub fn unsupported(type_name: impl Into<String>) -> Self {
        Self::Unsupported(type_name.into())
    }

    /// Name of the expected kind as it appears in reports.
    pub fn kind_name(&self) -> &str {
        match self {
            Self::Primitive(kind) => kind.value_kind().as_str(),
            Self::Object(_) => "object",
            Self::Array(_) => "array",
            Self::Unsupported(name) => name,
        }
    }

    /// Whether this descriptor expects a string scalar.
    pub fn is_string(&self) -> bool {
        matches!(self, Self::Primitive(PrimitiveKind::String))
    }

    /// Fields of an object descriptor; empty for every other kind.
    pub fn fields(&self) -> &[FieldSpec] {
        match self {
            Self::Object(fields) => fields,
            _ => &[],
        }
    }

    fn write_tree(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        match self {
            Self::Object(fields) => {
                for field in fields {
                    write!(f, "\n{:indent$}{}", "", field, indent = depth * 2)?;
                    field.descriptor.write_tree(f, depth + 1)?;
                }
                Ok(())
            }
            Self::Array(element) => element.write_tree(f, depth),
            Self::Primitive(_) | Self::Unsupported(_) => Ok(()),
        }
    }
}

/// Renders the whole tree, one field per line, indented by nesting depth.
impl fmt::Display for SchemaDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Array(element) => write!(f, "array of {}", element.kind_name())?,
            other => f.write_str(other.kind_name())?,
        }
        self.write_tree(f, 1)
    }
}

/// A single declared field of an object descriptor.
///
/// Built with [`FieldSpec::new`] and the `with_*` methods; read-only
/// afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    name: String,
    key: Option<String>,
    format_keys: BTreeMap<String, String>,
    descriptor: SchemaDescriptor,
    pattern: Option<String>,
    capture: Option<String>,
}

impl FieldSpec {
    /// A field declared as `name`, expecting a value shaped like
    /// `descriptor`. Without overrides the lookup key is derived from
    /// `name` by the active naming convention.
    pub fn new(name: impl Into<String>, descriptor: SchemaDescriptor) -> Self {
        Self {
            name: name.into(),
            key: None,
            format_keys: BTreeMap::new(),
            descriptor,
            pattern: None,
            capture: None,
        }
    }

    /// Look the field up under `key` in every format.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Look the field up under `key` when the convention's override tag is
    /// `tag`. Takes precedence over [`with_key`](Self::with_key).
    pub fn with_key_for(mut self, tag: impl Into<String>, key: impl Into<String>) -> Self {
        self.format_keys.insert(tag.into(), key.into());
        self
    }

    pub fn with_json_key(self, key: impl Into<String>) -> Self {
        self.with_key_for("json", key)
    }

    pub fn with_xml_key(self, key: impl Into<String>) -> Self {
        self.with_key_for("xml", key)
    }

    /// Require the value to contain a match for `pattern`. Only meaningful
    /// on string fields; on any other kind it is reported as a defect.
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Capture the field's raw value under `key`. An empty key captures
    /// under the resolved lookup key.
    pub fn with_capture(mut self, key: impl Into<String>) -> Self {
        self.capture = Some(key.into());
        self
    }

    /// The declared field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn descriptor(&self) -> &SchemaDescriptor {
        &self.descriptor
    }

    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_deref()
    }

    /// The declared capture key, `Some("")` meaning "use the lookup key".
    pub fn capture_key(&self) -> Option<&str> {
        self.capture.as_deref()
    }

    /// The explicit key for `convention`, if any: the per-format key first,
    /// then the format-agnostic one.
    pub fn key_override(&self, convention: &dyn NamingConvention) -> Option<&str> {
        self.format_keys
            .get(convention.override_tag())
            .or(self.key.as_ref())
            .map(String::as_str)
    }
}

impl fmt::Display for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.name)?;
        match &self.descriptor {
            SchemaDescriptor::Array(element) => write!(f, "array of {}", element.kind_name())?,
            other => f.write_str(other.kind_name())?,
        }
        if let Some(key) = &self.key {
            write!(f, " key={key}")?;
        }
        for (tag, key) in &self.format_keys {
            write!(f, " {tag}={key}")?;
        }
        if let Some(pattern) = &self.pattern {
            write!(f, " pattern={pattern:?}")?;
        }
        match self.capture.as_deref() {
            Some("") => f.write_str(" capture")?,
            Some(key) => write!(f, " capture={key}")?,
            None => {}
        }
        Ok(())
    }
}
