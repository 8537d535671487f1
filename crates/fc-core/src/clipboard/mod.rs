//! Transient clipboard: captured values with a bounded lifetime.

mod phase;
mod report;
mod snapshot;

pub use phase::{ClipboardPhase, ClipboardStatus};
pub use report::{CopyReport, PasteReport};
pub use snapshot::{ClipboardData, ClipboardSnapshot, CLIPBOARD_TTL_SECONDS};
