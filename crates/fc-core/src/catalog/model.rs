use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::validation::validate_code;
use super::FieldCategory;
use crate::error::ValidationError;

/// Field name → field code within one category.
pub type FieldGroup = BTreeMap<String, String>;

/// User-defined catalog of semantic fields, grouped by type category.
///
/// Field codes are unique across the whole catalog; names are unique within
/// their category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldCatalog {
    #[serde(default)]
    pub texto: FieldGroup,
    #[serde(default)]
    pub numeros: FieldGroup,
    #[serde(default)]
    pub fechas: FieldGroup,
    #[serde(default)]
    pub booleanos: FieldGroup,
    #[serde(default)]
    pub select: FieldGroup,
    #[serde(default, rename = "textoLargo")]
    pub texto_largo: FieldGroup,
}

/// One entry of the flattened catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogCode {
    pub category: FieldCategory,
    pub name: String,
    pub code: String,
}

impl FieldCatalog {
    pub fn group(&self, category: FieldCategory) -> &FieldGroup {
        match category {
            FieldCategory::Text => &self.texto,
            FieldCategory::Number => &self.numeros,
            FieldCategory::Date => &self.fechas,
            FieldCategory::Boolean => &self.booleanos,
            FieldCategory::Select => &self.select,
            FieldCategory::LongText => &self.texto_largo,
        }
    }

    fn group_mut(&mut self, category: FieldCategory) -> &mut FieldGroup {
        match category {
            FieldCategory::Text => &mut self.texto,
            FieldCategory::Number => &mut self.numeros,
            FieldCategory::Date => &mut self.fechas,
            FieldCategory::Boolean => &mut self.booleanos,
            FieldCategory::Select => &mut self.select,
            FieldCategory::LongText => &mut self.texto_largo,
        }
    }

    /// Whether `code` is used by any field, ignoring the field `except`.
    fn code_in_use(&self, code: &str, except: Option<(FieldCategory, &str)>) -> bool {
        FieldCategory::ALL.into_iter().any(|category| {
            self.group(category).iter().any(|(name, existing)| {
                existing == code && except != Some((category, name.as_str()))
            })
        })
    }

    /// Inserts a new field after validating name, code format and uniqueness.
    ///
    /// The catalog is untouched when validation fails.
    pub fn add_field(
        &mut self,
        category: FieldCategory,
        name: &str,
        code: &str,
    ) -> Result<(), ValidationError> {
        let name = name.trim();
        let code = code.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        validate_code(category, code)?;
        if self.group(category).contains_key(name) {
            return Err(ValidationError::DuplicateName {
                category,
                name: name.to_string(),
            });
        }
        if self.code_in_use(code, None) {
            return Err(ValidationError::DuplicateCode {
                code: code.to_string(),
            });
        }

        self.group_mut(category)
            .insert(name.to_string(), code.to_string());
        Ok(())
    }

    /// Replaces the code of an existing field.
    pub fn edit_field(
        &mut self,
        category: FieldCategory,
        name: &str,
        new_code: &str,
    ) -> Result<(), ValidationError> {
        let name = name.trim();
        let new_code = new_code.trim();
        validate_code(category, new_code)?;
        if !self.group(category).contains_key(name) {
            return Err(ValidationError::UnknownField {
                category,
                name: name.to_string(),
            });
        }
        if self.code_in_use(new_code, Some((category, name))) {
            return Err(ValidationError::DuplicateCode {
                code: new_code.to_string(),
            });
        }

        self.group_mut(category)
            .insert(name.to_string(), new_code.to_string());
        Ok(())
    }

    /// Removes a field. Returns whether it existed.
    pub fn delete_field(&mut self, category: FieldCategory, name: &str) -> bool {
        self.group_mut(category).remove(name.trim()).is_some()
    }

    /// Every field in category order, then name order.
    pub fn flatten(&self) -> Vec<CatalogCode> {
        FieldCategory::ALL
            .into_iter()
            .flat_map(|category| {
                self.group(category)
                    .iter()
                    .map(move |(name, code)| CatalogCode {
                        category,
                        name: name.clone(),
                        code: code.clone(),
                    })
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        FieldCategory::ALL
            .into_iter()
            .map(|category| self.group(category).len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
