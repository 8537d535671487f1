use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Direction a binding is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Copy,
    Paste,
}

impl Direction {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "copy" => Some(Direction::Copy),
            "paste" => Some(Direction::Paste),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Copy => f.write_str("copy"),
            Direction::Paste => f.write_str("paste"),
        }
    }
}

/// How to read or write one field code on a specific page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldBinding {
    pub selector: String,
    /// Input category: checkbox, radio, select-one, date, number, text, ...
    #[serde(alias = "type")]
    pub kind: String,
    /// Form field name; needed to address radio groups.
    #[serde(default)]
    pub name: Option<String>,
}

/// Field code → binding.
pub type BindingMap = BTreeMap<String, FieldBinding>;

/// Copy and paste bindings of one domain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainBindings {
    #[serde(default)]
    pub copy: BindingMap,
    #[serde(default)]
    pub paste: BindingMap,
}

impl DomainBindings {
    pub fn direction(&self, direction: Direction) -> &BindingMap {
        match direction {
            Direction::Copy => &self.copy,
            Direction::Paste => &self.paste,
        }
    }

    fn direction_mut(&mut self, direction: Direction) -> &mut BindingMap {
        match direction {
            Direction::Copy => &mut self.copy,
            Direction::Paste => &mut self.paste,
        }
    }
}

/// Per-domain bindings, persisted under the `mappings` key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DomainMappings(BTreeMap<String, DomainBindings>);

impl DomainMappings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bindings for a domain and direction; empty when absent.
    pub fn bindings(&self, domain: &str, direction: Direction) -> BindingMap {
        self.0
            .get(domain)
            .map(|entry| entry.direction(direction).clone())
            .unwrap_or_default()
    }

    pub fn domain(&self, domain: &str) -> Option<&DomainBindings> {
        self.0.get(domain)
    }

    /// Upserts `bindings` into one direction of a domain.
    ///
    /// Codes not present in `bindings` keep their previous binding, and the
    /// other direction is untouched.
    pub fn merge(&mut self, domain: &str, direction: Direction, bindings: BindingMap) {
        self.0
            .entry(domain.to_string())
            .or_default()
            .direction_mut(direction)
            .extend(bindings);
    }

    /// Removes both directions of a domain. Returns whether it existed.
    pub fn clear_domain(&mut self, domain: &str) -> bool {
        self.0.remove(domain).is_some()
    }

    pub fn domains(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
