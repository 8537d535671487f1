//! Business logic use cases
//!
//! One struct per operation. Each holds the ports it needs and exposes a
//! single `execute`; page-bound operations borrow the page document for
//! the duration of the call.

pub mod catalog;
pub mod clipboard;
pub mod initialize_defaults;
pub mod mapping;
pub mod notify;
pub mod settings;
pub mod transfer;

pub use catalog::{AddField, DeleteField, EditField, ListFields};
pub use clipboard::{ClearClipboard, CopyNow, GetClipboardStatus, PasteNow};
pub use initialize_defaults::InitializeDefaults;
pub use mapping::{CaptureMapping, CaptureOutcome, ClearDomainMapping};
pub use notify::Notify;
pub use settings::{GetSettings, SettingsUpdate, UpdateSettings};
pub use transfer::{ExportConfig, ImportConfig};
