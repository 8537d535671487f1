//! Field catalog: the user-defined semantic fields and their codes.

mod category;
mod defaults;
mod model;
mod validation;

pub use category::FieldCategory;
pub use model::{CatalogCode, FieldCatalog, FieldGroup};
pub use validation::{validate_code, validation_hint, BOOLEAN_TOKENS};
