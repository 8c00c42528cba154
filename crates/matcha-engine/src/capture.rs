//! # Value Capture
//!
//! Fields may ask for their raw document value to be copied into a
//! caller-owned map. Capture happens as soon as the field is found, before
//! any validation, so a value that fails its checks is still available to
//! the caller for diagnostics.

use std::collections::BTreeMap;

use matcha_schema::FieldSpec;
use serde_json::Value;

/// Captured values keyed by capture key. Later captures under the same
/// key overwrite earlier ones.
pub type Captures = BTreeMap<String, Value>;

/// Record `value` for `field` if both a sink and a capture directive are
/// present. An empty capture key stores under `lookup_key`.
pub fn capture(sink: Option<&mut Captures>, field: &FieldSpec, lookup_key: &str, value: &Value) {
    let (Some(sink), Some(declared)) = (sink, field.capture_key()) else {
        return;
    };

    let key = if declared.is_empty() { lookup_key } else { declared };
    tracing::trace!(key, field = field.name(), "captured value");
    sink.insert(key.to_string(), value.clone());
}
