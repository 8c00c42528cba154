//! # XML Decoding
//!
//! XML has no native notion of objects, arrays or scalar types, so the
//! element tree is folded into the shared document model:
//!
//! - The document is an object keyed by its top-level element name(s).
//! - An element holding only text becomes a scalar. Text that parses as a
//!   number becomes a number, `true`/`false` (any case) a bool, anything
//!   else stays a string. An empty element is the empty string.
//! - An element with child elements or attributes becomes an object.
//!   Attributes are keyed `-<name>`; text mixed with children is kept
//!   under `#text`.
//! - Sibling elements sharing a name become an array, in document order.
//!   A single occurrence is never an array.
//!
//! Declarations, comments, processing instructions and doctypes are
//! skipped.

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use serde_json::{Map, Number, Value};

use matcha_core::Document;

use crate::error::DecodeError;

const ATTRIBUTE_PREFIX: &str = "-";
const TEXT_KEY: &str = "#text";

/// An element whose end tag has not been read yet.
#[derive(Debug, Default)]
struct OpenElement {
    name: String,
    children: Map<String, Value>,
    text: String,
}

impl OpenElement {
    fn from_start(start: &BytesStart<'_>, position: u64) -> Result<Self, DecodeError> {
        let mut element = Self {
            name: String::from_utf8_lossy(start.name().as_ref()).into_owned(),
            ..Self::default()
        };

        for attr in start.attributes() {
            let attr = attr.map_err(|e| DecodeError::Xml {
                position,
                reason: format!("malformed attribute: {e}"),
            })?;
            let key = String::from_utf8_lossy(attr.key.into_inner()).into_owned();
            let raw = String::from_utf8_lossy(&attr.value).into_owned();
            let value = quick_xml::escape::unescape(&raw).map_err(|e| DecodeError::Xml {
                position,
                reason: format!("malformed attribute value for '{key}': {e}"),
            })?;
            element
                .children
                .insert(format!("{ATTRIBUTE_PREFIX}{key}"), cast_text(&value));
        }

        Ok(element)
    }

    fn into_value(self) -> (String, Value) {
        let text = self.text.trim();
        if self.children.is_empty() {
            return (self.name, cast_text(text));
        }

        let mut children = self.children;
        if !text.is_empty() {
            children.insert(TEXT_KEY.to_string(), cast_text(text));
        }
        (self.name, Value::Object(children))
    }
}

/// Insert a child, turning repeated names into an array.
fn insert_child(children: &mut Map<String, Value>, name: String, value: Value) {
    match children.get_mut(&name) {
        Some(Value::Array(items)) => items.push(value),
        Some(existing) => {
            let first = existing.take();
            *existing = Value::Array(vec![first, value]);
        }
        None => {
            children.insert(name, value);
        }
    }
}

/// Cast element text to the most specific scalar it spells.
fn cast_text(text: &str) -> Value {
    if let Ok(n) = text.parse::<i64>() {
        return Value::Number(n.into());
    }
    if let Some(n) = text.parse::<f64>().ok().and_then(Number::from_f64) {
        return Value::Number(n);
    }
    if text.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if text.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }
    Value::String(text.to_string())
}

/// Resolve a general entity reference body (`amp`, `#38`, `#x26`).
fn resolve_reference(name: &str) -> Option<String> {
    if let Some(code) = name.strip_prefix('#') {
        let code = match code.strip_prefix('x') {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => code.parse::<u32>().ok()?,
        };
        return char::from_u32(code).map(String::from);
    }
    let resolved = match name {
        "amp" => "&",
        "lt" => "<",
        "gt" => ">",
        "apos" => "'",
        "quot" => "\"",
        _ => return None,
    };
    Some(resolved.to_string())
}

/// Decode an XML document into nested objects.
///
/// # Errors
///
/// Returns [`DecodeError::Xml`] for malformed markup, mismatched or
/// unclosed tags, unknown entities, or a document without any element.
pub fn decode_xml(bytes: &[u8]) -> Result<Document, DecodeError> {
    let mut reader = Reader::from_reader(bytes);
    let mut buf = Vec::new();

    // The bottom frame collects top-level elements.
    let mut stack = vec![OpenElement::default()];

    loop {
        let position = reader.buffer_position();
        let event = reader.read_event_into(&mut buf).map_err(|e| DecodeError::Xml {
            position: reader.buffer_position(),
            reason: e.to_string(),
        })?;

        match event {
            Event::Start(start) => {
                stack.push(OpenElement::from_start(&start, position)?);
            }
            Event::Empty(start) => {
                let (name, value) = OpenElement::from_start(&start, position)?.into_value();
                if let Some(parent) = stack.last_mut() {
                    insert_child(&mut parent.children, name, value);
                }
            }
            Event::End(_) => {
                if stack.len() < 2 {
                    return Err(DecodeError::Xml {
                        position,
                        reason: "end tag without matching start tag".to_string(),
                    });
                }
                if let Some(element) = stack.pop() {
                    let (name, value) = element.into_value();
                    if let Some(parent) = stack.last_mut() {
                        insert_child(&mut parent.children, name, value);
                    }
                }
            }
            Event::Text(text) => {
                if let Some(open) = stack.last_mut() {
                    open.text.push_str(&String::from_utf8_lossy(&text));
                }
            }
            Event::CData(data) => {
                if let Some(open) = stack.last_mut() {
                    open.text.push_str(&String::from_utf8_lossy(&data));
                }
            }
            Event::GeneralRef(reference) => {
                let name = String::from_utf8_lossy(&reference).into_owned();
                let resolved = resolve_reference(&name).ok_or_else(|| DecodeError::Xml {
                    position,
                    reason: format!("unknown entity reference: &{name};"),
                })?;
                if let Some(open) = stack.last_mut() {
                    open.text.push_str(&resolved);
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if stack.len() > 1 {
        let unclosed: Vec<&str> = stack[1..].iter().map(|e| e.name.as_str()).collect();
        return Err(DecodeError::Xml {
            position: reader.buffer_position(),
            reason: format!("unclosed element(s): {}", unclosed.join(", ")),
        });
    }

    let root = stack.pop().unwrap_or_default();
    if root.children.is_empty() {
        return Err(DecodeError::Xml {
            position: reader.buffer_position(),
            reason: "document has no root element".to_string(),
        });
    }

    tracing::trace!(top_level = root.children.len(), "decoded XML document");
    Ok(Value::Object(root.children))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_elements_become_cast_scalars() {
        let doc = decode_xml(
            b"<result><name>some string</name><count>16</count><ratio>25.2</ratio>\
              <ok>true</ok><answer>yes</answer><empty></empty><blank/></result>",
        )
        .unwrap();
        assert_eq!(
            doc,
            json!({"result": {
                "name": "some string",
                "count": 16,
                "ratio": 25.2,
                "ok": true,
                "answer": "yes",
                "empty": "",
                "blank": ""
            }})
        );
    }

    #[test]
    fn repeated_siblings_become_arrays() {
        let doc = decode_xml(
            b"<result><array_field>one</array_field><array_field>2</array_field></result>",
        )
        .unwrap();
        assert_eq!(doc, json!({"result": {"array_field": ["one", 2]}}));
    }

    #[test]
    fn single_occurrence_is_not_an_array() {
        let doc = decode_xml(b"<result><array_field>one</array_field></result>").unwrap();
        assert_eq!(doc, json!({"result": {"array_field": "one"}}));
    }

    #[test]
    fn attributes_and_mixed_text() {
        let doc = decode_xml(br#"<price currency="GBP" amount="12.5">twelve<note>x</note></price>"#)
            .unwrap();
        assert_eq!(
            doc,
            json!({"price": {"-currency": "GBP", "-amount": 12.5, "note": "x", "#text": "twelve"}})
        );
    }

    #[test]
    fn entities_are_resolved_and_whitespace_kept_inside_text() {
        let doc = decode_xml(b"<desc>Rock &amp; Pop &#x21;</desc>").unwrap();
        assert_eq!(doc, json!({"desc": "Rock & Pop !"}));
    }

    #[test]
    fn declaration_and_comments_are_skipped() {
        let doc = decode_xml(
            b"<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<!-- weather -->\n<temp>72</temp>",
        )
        .unwrap();
        assert_eq!(doc, json!({"temp": 72}));
    }

    #[test]
    fn multiple_top_level_elements_share_the_root() {
        let doc = decode_xml(b"<string_field>s</string_field><another_field>10</another_field>")
            .unwrap();
        assert_eq!(doc, json!({"string_field": "s", "another_field": 10}));
    }

    #[test]
    fn unclosed_element_is_an_error() {
        let err = decode_xml(b"<a>").unwrap_err();
        assert!(matches!(err, DecodeError::Xml { .. }), "got: {err}");
    }

    #[test]
    fn mismatched_end_tag_is_an_error() {
        assert!(decode_xml(b"<a><b></a></b>").is_err());
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(decode_xml(b"   ").is_err());
    }

    #[test]
    fn non_finite_numbers_stay_strings() {
        assert_eq!(cast_text("NaN"), json!("NaN"));
        assert_eq!(cast_text("inf"), json!("inf"));
        assert_eq!(cast_text("TRUE"), json!(true));
        assert_eq!(cast_text("-7"), json!(-7));
    }
}
