use once_cell::sync::Lazy;
use regex::Regex;

use super::FieldCategory;
use crate::error::ValidationError;

static DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+$").expect("valid digits regex"));
static ISO_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date regex"));

/// Tokens accepted as boolean field codes.
pub const BOOLEAN_TOKENS: [&str; 7] = ["true", "false", "1", "0", "si", "sí", "no"];

/// Checks a (trimmed) code against the format rule of its category.
pub fn validate_code(category: FieldCategory, code: &str) -> Result<(), ValidationError> {
    let code = code.trim();
    if code.is_empty() {
        return Err(ValidationError::EmptyCode);
    }

    let ok = match category {
        FieldCategory::Number => DIGITS.is_match(code),
        FieldCategory::Date => ISO_DATE.is_match(code),
        FieldCategory::Boolean => {
            let lowered = code.to_lowercase();
            BOOLEAN_TOKENS.contains(&lowered.as_str())
        }
        FieldCategory::Text | FieldCategory::Select | FieldCategory::LongText => true,
    };

    if ok {
        Ok(())
    } else {
        Err(ValidationError::InvalidCode {
            category,
            hint: code_rule(category),
        })
    }
}

fn code_rule(category: FieldCategory) -> &'static str {
    match category {
        FieldCategory::Number => "digits only",
        FieldCategory::Date => "format YYYY-MM-DD",
        FieldCategory::Boolean => "true/false/1/0/si/no",
        FieldCategory::Text | FieldCategory::Select | FieldCategory::LongText => "non-empty",
    }
}

/// Input hint shown next to the code editor for a category.
pub fn validation_hint(category: FieldCategory) -> &'static str {
    match category {
        FieldCategory::Number => "Digits only (e.g. 1234).",
        FieldCategory::Date => "Format YYYY-MM-DD (e.g. 2025-09-01).",
        FieldCategory::Boolean => "Use true/false/1/0/si/no.",
        FieldCategory::Text | FieldCategory::Select | FieldCategory::LongText => {
            "Free text. Use it as a unique identifier."
        }
    }
}
