use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::form::FieldValue;

/// TTL applied by every capture, independent of the stored settings.
pub const CLIPBOARD_TTL_SECONDS: u32 = 45;

/// Field code → captured value.
pub type ClipboardData = BTreeMap<String, FieldValue>;

/// Time-boxed set of captured values. Exactly one exists at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClipboardSnapshot {
    #[serde(default)]
    pub data: ClipboardData,
    /// Capture time, milliseconds since the Unix epoch.
    #[serde(alias = "ts")]
    pub captured_at: i64,
    pub ttl_seconds: u32,
}

impl ClipboardSnapshot {
    /// New snapshot with the fixed clipboard TTL.
    pub fn new(data: ClipboardData, now_ms: i64) -> Self {
        Self::with_ttl(data, now_ms, CLIPBOARD_TTL_SECONDS)
    }

    pub fn with_ttl(data: ClipboardData, now_ms: i64, ttl_seconds: u32) -> Self {
        Self {
            data,
            captured_at: now_ms,
            ttl_seconds,
        }
    }

    fn ttl_ms(&self) -> i64 {
        i64::from(self.ttl_seconds) * 1000
    }

    /// Valid while `now - captured_at <= ttl`.
    pub fn is_expired(&self, now_ms: i64) -> bool {
        now_ms.saturating_sub(self.captured_at) > self.ttl_ms()
    }

    /// Whole seconds left before expiry, clamped to `0..=ttl`.
    pub fn remaining_secs(&self, now_ms: i64) -> u64 {
        let elapsed_ms = now_ms.saturating_sub(self.captured_at);
        let remaining_ms = self.ttl_ms().saturating_sub(elapsed_ms);
        u64::try_from(remaining_ms.div_euclid(1000))
            .unwrap_or(0)
            .min(u64::from(self.ttl_seconds))
    }
}
