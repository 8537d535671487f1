use serde::{Deserialize, Serialize};

use super::StoredConfig;
use crate::catalog::{FieldCatalog, FieldGroup};
use crate::mapping::DomainMappings;
use crate::settings::Settings;

/// Document written by an export: the stored keys plus a regrouped view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportDocument {
    #[serde(flatten)]
    pub stored: StoredConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_export: Option<ConfigExportView>,
}

/// Convenience view splitting the catalog into `campos` and `extras`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigExportView {
    pub campos: ExportFields,
    pub extras: ExportExtras,
    pub settings: Settings,
    pub mappings: DomainMappings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportFields {
    #[serde(default)]
    pub texto: FieldGroup,
    #[serde(default)]
    pub numeros: FieldGroup,
    #[serde(default)]
    pub fechas: FieldGroup,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportExtras {
    #[serde(default)]
    pub booleanos: FieldGroup,
    #[serde(default)]
    pub select: FieldGroup,
    #[serde(default, rename = "textoLargo")]
    pub texto_largo: FieldGroup,
}

impl ConfigExportView {
    fn new(fields: &FieldCatalog, settings: Option<&Settings>, mappings: Option<&DomainMappings>) -> Self {
        Self {
            campos: ExportFields {
                texto: fields.texto.clone(),
                numeros: fields.numeros.clone(),
                fechas: fields.fechas.clone(),
            },
            extras: ExportExtras {
                booleanos: fields.booleanos.clone(),
                select: fields.select.clone(),
                texto_largo: fields.texto_largo.clone(),
            },
            settings: settings.cloned().unwrap_or_default(),
            mappings: mappings.cloned().unwrap_or_default(),
        }
    }
}

impl ExportDocument {
    /// Builds the export; the `config_export` view exists only when a
    /// catalog is stored.
    pub fn from_stored(stored: StoredConfig) -> Self {
        let config_export = stored.fields.as_ref().map(|fields| {
            ConfigExportView::new(fields, stored.settings.as_ref(), stored.mappings.as_ref())
        });
        Self {
            stored,
            config_export,
        }
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_regroups_fields() {
        let stored = StoredConfig {
            settings: None,
            fields: Some(FieldCatalog::install_defaults()),
            mappings: None,
        };
        let json = serde_json::to_value(ExportDocument::from_stored(stored)).unwrap();

        assert_eq!(json["fields"]["numeros"]["dni"], "1");
        assert_eq!(json["config_export"]["campos"]["numeros"]["dni"], "1");
        assert_eq!(json["config_export"]["extras"]["booleanos"]["terminos"], "true");
        assert_eq!(json["config_export"]["settings"]["ttlSeconds"], 900);
        assert!(json["config_export"]["mappings"].as_object().unwrap().is_empty());
        assert!(json.get("settings").is_none());
    }

    #[test]
    fn no_view_without_fields() {
        let doc = ExportDocument::from_stored(StoredConfig {
            settings: Some(Settings::default()),
            fields: None,
            mappings: None,
        });
        assert!(doc.config_export.is_none());
    }
}
