//! Value-to-code matching used while capturing mappings.

use super::value::{parse_boolean_like, parse_boolean_str, FieldValue};

/// Decides whether a control value identifies a catalog code.
pub trait MatchPolicy: Send + Sync {
    fn matches(&self, value: &FieldValue, code: &str) -> bool;
}

/// Best-effort heuristic.
///
/// Codes spelled `true`/`false` compare through the tolerant boolean
/// parser. Other codes use loose equality: text must be equal, a checkbox
/// state equals a code whose numeric value is 1 or 0 (blank counts as 0),
/// and an unchecked radio never matches.
#[derive(Debug, Clone, Copy, Default)]
pub struct LooseMatchPolicy;

impl MatchPolicy for LooseMatchPolicy {
    fn matches(&self, value: &FieldValue, code: &str) -> bool {
        if let Some(expected) = boolean_code(code) {
            return parse_boolean_like(value) == expected;
        }
        match value {
            FieldValue::Text(text) => text == code,
            FieldValue::Bool(state) => {
                numeric_value(code) == Some(if *state { 1.0 } else { 0.0 })
            }
            FieldValue::Null => false,
        }
    }
}

/// Exact matching: text equals the code verbatim, checkbox states only
/// match `true`/`false` codes.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrictMatchPolicy;

impl MatchPolicy for StrictMatchPolicy {
    fn matches(&self, value: &FieldValue, code: &str) -> bool {
        match value {
            FieldValue::Text(text) => text == code,
            FieldValue::Bool(state) => boolean_code(code) == Some(*state),
            FieldValue::Null => false,
        }
    }
}

fn boolean_code(code: &str) -> Option<bool> {
    match code.trim().to_lowercase().as_str() {
        "true" | "false" => Some(parse_boolean_str(code)),
        _ => None,
    }
}

fn numeric_value(code: &str) -> Option<f64> {
    let trimmed = code.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.parse::<f64>().ok()
}
