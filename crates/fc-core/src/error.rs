use thiserror::Error;

use crate::catalog::FieldCategory;
use crate::mapping::Direction;

/// Errors surfaced by FormClip operations.
///
/// Every variant is recovered at the operation boundary and turned into a
/// user notification; none of them is fatal to the running extension.
#[derive(Debug, Error)]
pub enum FormClipError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("no {direction} mapping for {domain}")]
    NoMapping { domain: String, direction: Direction },

    #[error("no current clipboard data to paste")]
    NoData,

    #[error("invalid import payload: {0}")]
    ImportFormat(String),

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

/// Rejected catalog edit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("field name is required")]
    EmptyName,

    #[error("field code is required")]
    EmptyCode,

    #[error("invalid code for {category}: {hint}")]
    InvalidCode {
        category: FieldCategory,
        hint: &'static str,
    },

    #[error("field name '{name}' already exists in {category}")]
    DuplicateName {
        category: FieldCategory,
        name: String,
    },

    #[error("field code '{code}' already exists")]
    DuplicateCode { code: String },

    #[error("unknown field '{name}' in {category}")]
    UnknownField {
        category: FieldCategory,
        name: String,
    },
}

/// Failure reported by the page DOM collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    #[error("element is detached from the document")]
    Detached,

    #[error("element does not accept {0}")]
    Unsupported(&'static str),
}
