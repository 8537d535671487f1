use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::StoredConfig;
use crate::catalog::{FieldCatalog, FieldGroup};
use crate::error::FormClipError;

/// Parses an import payload.
///
/// Accepts the flat `fields`/`mappings`/`settings` shape or the nested
/// `config_export` shape. Missing catalog groups default to empty; keys
/// absent from the payload stay `None` so they are not replaced.
pub fn parse_import(json: &Value) -> Result<StoredConfig, FormClipError> {
    let root = json
        .as_object()
        .ok_or_else(|| FormClipError::ImportFormat("expected a JSON object".into()))?;
    let nested = present(root, "config_export").and_then(Value::as_object);
    let extras = nested
        .and_then(|view| present(view, "extras"))
        .and_then(Value::as_object);
    let flat_fields = present(root, "fields").and_then(Value::as_object);

    let campos = match present(root, "fields") {
        Some(fields) => Some(fields),
        None => nested.and_then(|view| present(view, "campos")),
    };

    let fields = match campos {
        Some(campos) => {
            let campos = campos
                .as_object()
                .ok_or_else(|| FormClipError::ImportFormat("fields must be an object".into()))?;
            let extra = |key: &str| -> Result<FieldGroup, FormClipError> {
                match flat_fields.and_then(|f| present(f, key)) {
                    Some(group) => field_group(key, group),
                    None => optional_group(extras, key),
                }
            };
            Some(FieldCatalog {
                texto: optional_group(Some(campos), "texto")?,
                numeros: match present(campos, "numeros") {
                    Some(group) => field_group("numeros", group)?,
                    None => optional_group(Some(campos), "números")?,
                },
                fechas: optional_group(Some(campos), "fechas")?,
                booleanos: extra("booleanos")?,
                select: extra("select")?,
                texto_largo: extra("textoLargo")?,
            })
        }
        None => None,
    };

    let mappings = pick(root, nested, "mappings")
        .map(|value| typed(value, "mappings"))
        .transpose()?;
    let settings = pick(root, nested, "settings")
        .map(|value| typed(value, "settings"))
        .transpose()?;

    Ok(StoredConfig {
        settings,
        fields,
        mappings,
    })
}

fn present<'a>(object: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    object.get(key).filter(|value| !value.is_null())
}

fn pick<'a>(
    root: &'a Map<String, Value>,
    nested: Option<&'a Map<String, Value>>,
    key: &str,
) -> Option<&'a Value> {
    present(root, key).or_else(|| nested.and_then(|view| present(view, key)))
}

fn typed<T: DeserializeOwned>(value: &Value, key: &str) -> Result<T, FormClipError> {
    serde_json::from_value(value.clone())
        .map_err(|e| FormClipError::ImportFormat(format!("invalid {key}: {e}")))
}

fn optional_group(
    object: Option<&Map<String, Value>>,
    key: &str,
) -> Result<FieldGroup, FormClipError> {
    match object.and_then(|o| present(o, key)) {
        Some(group) => field_group(key, group),
        None => Ok(FieldGroup::new()),
    }
}

/// Field group with string codes; numeric and boolean codes are stringified.
fn field_group(key: &str, value: &Value) -> Result<FieldGroup, FormClipError> {
    let object = value
        .as_object()
        .ok_or_else(|| FormClipError::ImportFormat(format!("group {key} must be an object")))?;
    object
        .iter()
        .map(|(name, code)| {
            let code = match code {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                _ => {
                    return Err(FormClipError::ImportFormat(format!(
                        "code of {key}.{name} must be a string"
                    )))
                }
            };
            Ok((name.clone(), code))
        })
        .collect()
}
