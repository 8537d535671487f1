use std::fmt;

use serde::{Deserialize, Serialize};

/// Type category of a catalog field.
///
/// The serialized names are the storage keys of the `fields` record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FieldCategory {
    #[serde(rename = "texto")]
    Text,
    #[serde(rename = "numeros")]
    Number,
    #[serde(rename = "fechas")]
    Date,
    #[serde(rename = "booleanos")]
    Boolean,
    #[serde(rename = "select")]
    Select,
    #[serde(rename = "textoLargo")]
    LongText,
}

impl FieldCategory {
    /// Every category, in catalog enumeration order.
    pub const ALL: [FieldCategory; 6] = [
        FieldCategory::Text,
        FieldCategory::Number,
        FieldCategory::Date,
        FieldCategory::Boolean,
        FieldCategory::Select,
        FieldCategory::LongText,
    ];

    pub fn storage_key(self) -> &'static str {
        match self {
            FieldCategory::Text => "texto",
            FieldCategory::Number => "numeros",
            FieldCategory::Date => "fechas",
            FieldCategory::Boolean => "booleanos",
            FieldCategory::Select => "select",
            FieldCategory::LongText => "textoLargo",
        }
    }

    /// Parses either the storage key or the English name (`text`, `number`,
    /// `date`, `boolean`, `select`, `long-text`).
    pub fn parse(raw: &str) -> Option<Self> {
        let key = raw.trim();
        Self::ALL.into_iter().find(|c| {
            c.storage_key().eq_ignore_ascii_case(key) || c.label().eq_ignore_ascii_case(key)
        })
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldCategory::Text => "text",
            FieldCategory::Number => "number",
            FieldCategory::Date => "date",
            FieldCategory::Boolean => "boolean",
            FieldCategory::Select => "select",
            FieldCategory::LongText => "long-text",
        }
    }
}

impl fmt::Display for FieldCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::FieldCategory;

    #[test]
    fn parse_accepts_storage_keys_and_labels() {
        assert_eq!(FieldCategory::parse("numeros"), Some(FieldCategory::Number));
        assert_eq!(FieldCategory::parse("long-text"), Some(FieldCategory::LongText));
        assert_eq!(FieldCategory::parse("TextoLargo"), Some(FieldCategory::LongText));
        assert_eq!(FieldCategory::parse("colors"), None);
    }
}
