//! # Schema Definitions
//!
//! Declarative schema files, in YAML or JSON, converted into a
//! [`SchemaDescriptor`] tree.
//!
//! ```yaml
//! type: object
//! fields:
//!   - name: Url
//!     type: string
//!     json: url
//!     pattern: "https://.*"
//!     capture: ""
//!   - name: Results
//!     type: array
//!     items:
//!       type: object
//!       fields:
//!         - name: Success
//!           type: bool
//! ```
//!
//! The format is chosen from the file extension: `.yaml`/`.yml` for YAML,
//! anything else is parsed as JSON.

use std::path::Path;

use matcha_core::PrimitiveKind;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::descriptor::{FieldSpec, SchemaDescriptor};

/// Error while loading a schema definition.
#[derive(Error, Debug)]
pub enum SchemaLoadError {
    /// The definition file could not be read.
    #[error("cannot read schema '{path}': {source}")]
    Io {
        /// Path to the definition file.
        path: String,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },

    /// The definition is not valid YAML/JSON, or does not have the shape
    /// of a schema definition.
    #[error("invalid schema definition '{origin}': {reason}")]
    Parse {
        /// File path, or `<inline>` for string input.
        origin: String,
        /// Parser message.
        reason: String,
    },

    /// A node of the definition is structurally incomplete.
    #[error("schema definition error at {location}: {reason}")]
    Definition {
        /// Dotted path to the offending node, e.g. `fields[1].items`.
        location: String,
        /// What is missing or inconsistent.
        reason: String,
    },
}

/// A node of a schema definition file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaDefinition {
    /// `string`, `number`, `bool`/`boolean`, `object` or `array`. Other
    /// names load as unsupported types.
    #[serde(rename = "type")]
    pub kind: String,

    /// Fields of an `object` node, in checking order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<FieldDefinition>>,

    /// Element shape of an `array` node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<SchemaDefinition>>,
}

/// A field entry under `fields`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    /// Declared field name; the lookup key is derived from it unless an
    /// override is given.
    pub name: String,

    #[serde(flatten)]
    pub schema: SchemaDefinition,

    /// Lookup key for every format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// Lookup key when matching JSON.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json: Option<String>,

    /// Lookup key when matching XML.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xml: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    /// Capture key; an empty string captures under the lookup key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capture: Option<String>,
}

impl SchemaDefinition {
    /// Convert into a descriptor tree. Error locations are reported as
    /// dotted paths from the root (`$`).
    pub fn into_descriptor(self) -> Result<SchemaDescriptor, SchemaLoadError> {
        self.convert("$")
    }

    fn convert(self, location: &str) -> Result<SchemaDescriptor, SchemaLoadError> {
        if let Some(kind) = PrimitiveKind::from_type_name(&self.kind) {
            return Ok(SchemaDescriptor::Primitive(kind));
        }

        match self.kind.as_str() {
            "object" => {
                let fields = self.fields.ok_or_else(|| SchemaLoadError::Definition {
                    location: location.to_string(),
                    reason: "object type requires a 'fields' list".to_string(),
                })?;
                let specs = fields
                    .into_iter()
                    .enumerate()
                    .map(|(i, field)| field.convert(&format!("{location}.fields[{i}]")))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(SchemaDescriptor::Object(specs))
            }
            "array" => {
                let items = self.items.ok_or_else(|| SchemaLoadError::Definition {
                    location: location.to_string(),
                    reason: "array type requires an 'items' definition".to_string(),
                })?;
                let element = items.convert(&format!("{location}.items"))?;
                Ok(SchemaDescriptor::array(element))
            }
            other => {
                tracing::debug!(location, type_name = other, "loading unsupported schema type");
                Ok(SchemaDescriptor::unsupported(other))
            }
        }
    }
}

impl FieldDefinition {
    fn convert(self, location: &str) -> Result<FieldSpec, SchemaLoadError> {
        if self.name.is_empty() {
            return Err(SchemaLoadError::Definition {
                location: location.to_string(),
                reason: "field 'name' must not be empty".to_string(),
            });
        }

        let descriptor = self.schema.convert(location)?;
        let mut spec = FieldSpec::new(self.name, descriptor);
        if let Some(key) = self.key {
            spec = spec.with_key(key);
        }
        if let Some(key) = self.json {
            spec = spec.with_json_key(key);
        }
        if let Some(key) = self.xml {
            spec = spec.with_xml_key(key);
        }
        if let Some(pattern) = self.pattern {
            spec = spec.with_pattern(pattern);
        }
        if let Some(capture) = self.capture {
            spec = spec.with_capture(capture);
        }
        Ok(spec)
    }
}

/// Parse a YAML schema definition.
pub fn from_yaml_str(content: &str) -> Result<SchemaDescriptor, SchemaLoadError> {
    let definition: SchemaDefinition =
        serde_yaml::from_str(content).map_err(|e| SchemaLoadError::Parse {
            origin: "<inline>".to_string(),
            reason: format!("invalid YAML: {e}"),
        })?;
    definition.into_descriptor()
}

/// Parse a JSON schema definition.
pub fn from_json_str(content: &str) -> Result<SchemaDescriptor, SchemaLoadError> {
    let definition: SchemaDefinition =
        serde_json::from_str(content).map_err(|e| SchemaLoadError::Parse {
            origin: "<inline>".to_string(),
            reason: format!("invalid JSON: {e}"),
        })?;
    definition.into_descriptor()
}

/// Load a schema definition file.
///
/// # Errors
///
/// Returns [`SchemaLoadError::Io`] if the file cannot be read,
/// [`SchemaLoadError::Parse`] if it is not a well-formed definition, and
/// [`SchemaLoadError::Definition`] if an `object` lacks `fields` or an
/// `array` lacks `items`.
pub fn load_schema(path: &Path) -> Result<SchemaDescriptor, SchemaLoadError> {
    let content = std::fs::read_to_string(path).map_err(|e| SchemaLoadError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    let parsed = match ext {
        "yaml" | "yml" => from_yaml_str(&content),
        _ => from_json_str(&content),
    };

    let descriptor = parsed.map_err(|e| match e {
        SchemaLoadError::Parse { reason, .. } => SchemaLoadError::Parse {
            origin: path.display().to_string(),
            reason,
        },
        other => other,
    })?;

    tracing::debug!(
        path = %path.display(),
        fields = descriptor.fields().len(),
        "loaded schema definition"
    );
    Ok(descriptor)
}
