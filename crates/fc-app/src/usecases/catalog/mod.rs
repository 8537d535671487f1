//! Field catalog maintenance.

mod add_field;
mod delete_field;
mod edit_field;
mod list_fields;

pub use add_field::AddField;
pub use delete_field::DeleteField;
pub use edit_field::EditField;
pub use list_fields::ListFields;
