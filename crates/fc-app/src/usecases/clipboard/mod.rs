//! Transient clipboard: capture, status, paste and clear.

mod clear_clipboard;
mod copy_now;
mod get_status;
mod paste_now;

pub use clear_clipboard::ClearClipboard;
pub use copy_now::CopyNow;
pub use get_status::GetClipboardStatus;
pub use paste_now::PasteNow;
