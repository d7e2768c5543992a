//! Composite input from the Vue widget.
//!
//! The widget sends a single value. Normally it is a mapping with `text` and
//! `separator`, but anything else is accepted and read as the text itself.

use super::assemble::{JoinStyle, assemble_with};
use super::options::DEFAULT_SEPARATOR;
use serde_json::Value;

/// Separator used by the composite variant when the payload carries none.
pub const DEFAULT_COMPOSITE_SEPARATOR: &str = DEFAULT_SEPARATOR;

/// Text and separator extracted from a composite payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeInput {
    pub text: String,
    pub separator: String,
}

impl CompositeInput {
    /// Extract text and separator from an arbitrary JSON value.
    ///
    /// - Object: `text` (default `""`) and `separator` (default `", "`); `null`
    ///   fields count as missing, other non-string fields are stringified
    /// - Anything else: the whole value, stringified, is the text
    pub fn from_value(data: &Value) -> Self {
        match data {
            Value::Object(map) => {
                tracing::debug!(keys = ?map.keys().collect::<Vec<_>>(), "composite payload is a mapping");
                let text = map.get("text").map(value_to_string).unwrap_or_default();
                let separator = map
                    .get("separator")
                    .filter(|v| !v.is_null())
                    .map(value_to_string)
                    .unwrap_or_else(|| DEFAULT_COMPOSITE_SEPARATOR.to_string());
                Self { text, separator }
            }
            other => {
                tracing::debug!(kind = value_kind(other), "composite payload is not a mapping, using it as text");
                Self {
                    text: value_to_string(other),
                    separator: DEFAULT_COMPOSITE_SEPARATOR.to_string(),
                }
            }
        }
    }
}

/// Assemble from a composite payload with a plain separator join.
///
/// No prefix, no newline handling, no trailing separator.
///
/// # Example
///
/// ```
/// use promptpalette::palette::assemble_composite;
/// use serde_json::json;
///
/// let data = json!({"text": "a\n// b\nc [g]", "separator": " | "});
/// assert_eq!(assemble_composite(&data), "a | c");
/// ```
pub fn assemble_composite(data: &Value) -> String {
    let input = CompositeInput::from_value(data);
    tracing::debug!(
        text_len = input.text.len(),
        separator = ?input.separator,
        "extracted composite input"
    );
    assemble_with(&input.text, JoinStyle::Plain(&input.separator))
}

fn value_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
