use std::fmt;

use serde::{Deserialize, Serialize};

/// Normalized value read from a form control.
///
/// Serialized bare: a JSON string, boolean or `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Checkbox state.
    Bool(bool),
    /// Text, select and radio values.
    Text(String),
    /// Unchecked radio.
    Null,
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    /// String form used when assigning the value to a control.
    pub fn as_text(&self) -> Option<String> {
        match self {
            FieldValue::Bool(b) => Some(b.to_string()),
            FieldValue::Text(s) => Some(s.clone()),
            FieldValue::Null => None,
        }
    }

    /// `null` or the empty string.
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Null => true,
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::Bool(_) => false,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Bool(b) => write!(f, "{b}"),
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Null => f.write_str("null"),
        }
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

/// Tolerant boolean parse over raw text.
///
/// `true/1/si/sí` → true and `false/0/no` → false (trimmed,
/// case-insensitive); any other non-empty text is truthy.
pub fn parse_boolean_str(raw: &str) -> bool {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "si" | "sí" => true,
        "false" | "0" | "no" => false,
        _ => !raw.is_empty(),
    }
}

/// Tolerant boolean parse over a field value.
pub fn parse_boolean_like(value: &FieldValue) -> bool {
    match value {
        FieldValue::Bool(b) => *b,
        FieldValue::Text(s) => parse_boolean_str(s),
        FieldValue::Null => false,
    }
}
