use serde::{Deserialize, Serialize};

use crate::clipboard::CLIPBOARD_TTL_SECONDS;

/// Process-wide configuration persisted under the `settings` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Stored clipboard TTL. Capture ignores it and always applies
    /// [`CLIPBOARD_TTL_SECONDS`].
    #[serde(default = "default_ttl_seconds")]
    pub ttl_seconds: i64,

    #[serde(default = "enabled")]
    pub notifications: bool,

    #[serde(default = "enabled")]
    pub commands_enabled: bool,
}

impl Settings {
    /// Replaces a non-positive stored TTL with the clipboard TTL.
    pub fn sanitized(mut self) -> Self {
        if self.ttl_seconds <= 0 {
            self.ttl_seconds = i64::from(CLIPBOARD_TTL_SECONDS);
        }
        self
    }

    /// TTL actually applied to new clipboard snapshots.
    pub fn effective_clipboard_ttl(&self) -> u32 {
        CLIPBOARD_TTL_SECONDS
    }
}

pub(super) fn default_ttl_seconds() -> i64 {
    900
}

fn enabled() -> bool {
    true
}
