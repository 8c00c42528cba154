//! # Pattern Constraints
//!
//! A string field may declare a regular expression. The value passes if
//! the expression matches anywhere in it; anchor with `^`/`$` for a full
//! match. Any failure here replaces the ordinary type check for the field.

use std::collections::HashMap;

use matcha_core::ValueKind;
use matcha_schema::FieldSpec;
use regex::Regex;
use serde_json::Value;

use crate::discrepancy::Discrepancy;

/// Compiled patterns for one match call, keyed by source text. Invalid
/// patterns are remembered as `None` so they are reported without being
/// recompiled for every array element.
#[derive(Debug, Default)]
pub struct PatternCache {
    compiled: HashMap<String, Option<Regex>>,
}

impl PatternCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn regex(&mut self, pattern: &str) -> Option<&Regex> {
        self.compiled
            .entry(pattern.to_string())
            .or_insert_with(|| Regex::new(pattern).ok())
            .as_ref()
    }

    /// Check `value` against `field`'s pattern, if it declares one.
    ///
    /// The checks run in order and the first failure is returned: the
    /// field must expect a string, the value must be a string, the pattern
    /// must compile, and it must match the value.
    pub fn check(&mut self, value: &Value, field: &FieldSpec) -> Option<Discrepancy> {
        let pattern = field.pattern()?;

        if !field.descriptor().is_string() {
            return Some(Discrepancy::PatternOnNonStringField {
                field: field.name().to_string(),
            });
        }

        let Value::String(text) = value else {
            return Some(Discrepancy::PatternOnNonStringValue {
                field: field.name().to_string(),
                actual: ValueKind::of(value),
            });
        };

        let Some(regex) = self.regex(pattern) else {
            return Some(Discrepancy::InvalidPattern {
                pattern: pattern.to_string(),
            });
        };

        if regex.is_match(text) {
            None
        } else {
            Some(Discrepancy::PatternMismatch {
                field: field.name().to_string(),
                value: text.clone(),
                pattern: pattern.to_string(),
            })
        }
    }
}

/// One-off pattern check without a shared cache.
pub fn check_pattern(value: &Value, field: &FieldSpec) -> Option<Discrepancy> {
    PatternCache::new().check(value, field)
}
