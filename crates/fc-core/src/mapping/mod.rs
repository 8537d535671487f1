//! Domain mapping store: per-domain copy/paste bindings.

mod capture;
mod model;

pub use capture::match_inputs;
pub use model::{BindingMap, Direction, DomainBindings, DomainMappings, FieldBinding};
