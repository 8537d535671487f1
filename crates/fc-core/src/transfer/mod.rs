//! JSON export/import of the persisted configuration.

mod export;
mod import;

pub use export::{ConfigExportView, ExportDocument, ExportExtras, ExportFields};
pub use import::parse_import;

use serde::{Deserialize, Serialize};

use crate::catalog::FieldCatalog;
use crate::mapping::DomainMappings;
use crate::settings::Settings;

/// The persisted configuration keys; each is `None` when not stored (or,
/// for an import, not present in the payload).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<Settings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<FieldCatalog>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mappings: Option<DomainMappings>,
}

impl StoredConfig {
    pub fn is_empty(&self) -> bool {
        self.settings.is_none() && self.fields.is_none() && self.mappings.is_none()
    }

    /// Names of the keys that are present.
    pub fn present_keys(&self) -> Vec<&'static str> {
        let mut keys = Vec::new();
        if self.settings.is_some() {
            keys.push("settings");
        }
        if self.fields.is_some() {
            keys.push("fields");
        }
        if self.mappings.is_some() {
            keys.push("mappings");
        }
        keys
    }
}
