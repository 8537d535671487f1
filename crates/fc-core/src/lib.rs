//! # fc-core
//!
//! Core domain models and business logic for FormClip.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

pub mod catalog;
pub mod clipboard;
pub mod command;
pub mod config;
pub mod error;
pub mod form;
pub mod mapping;
pub mod notify;
pub mod ports;
pub mod settings;
pub mod transfer;

// Re-export commonly used types at the crate root
pub use catalog::{FieldCatalog, FieldCategory};
pub use clipboard::{ClipboardSnapshot, ClipboardStatus, CLIPBOARD_TTL_SECONDS};
pub use command::{Command, CommandReply};
pub use config::AppConfig;
pub use error::{DomError, FormClipError, ValidationError};
pub use form::FieldValue;
pub use mapping::{Direction, DomainMappings, FieldBinding};
pub use notify::{Notification, Severity};
pub use settings::Settings;
