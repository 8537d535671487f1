use serde::{Deserialize, Serialize};

use super::snapshot::{ClipboardData, ClipboardSnapshot};

/// Clipboard state as observed at a point in time.
///
/// `Empty → Captured → (Valid | Expired) → Empty`: an expired snapshot must
/// be deleted by whoever observes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardPhase<'a> {
    Empty,
    Valid {
        snapshot: &'a ClipboardSnapshot,
        remaining_secs: u64,
    },
    Expired,
}

impl<'a> ClipboardPhase<'a> {
    pub fn evaluate(snapshot: Option<&'a ClipboardSnapshot>, now_ms: i64) -> Self {
        match snapshot {
            None => ClipboardPhase::Empty,
            Some(snapshot) if snapshot.is_expired(now_ms) => ClipboardPhase::Expired,
            Some(snapshot) => ClipboardPhase::Valid {
                snapshot,
                remaining_secs: snapshot.remaining_secs(now_ms),
            },
        }
    }

    /// Status as reported to the popup.
    pub fn status(&self) -> ClipboardStatus {
        match self {
            ClipboardPhase::Valid {
                snapshot,
                remaining_secs,
            } => ClipboardStatus {
                data: snapshot.data.clone(),
                remaining_secs: *remaining_secs,
            },
            ClipboardPhase::Empty | ClipboardPhase::Expired => ClipboardStatus::empty(),
        }
    }
}

/// Clipboard contents and seconds left before expiry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipboardStatus {
    pub data: ClipboardData,
    #[serde(rename = "remaining")]
    pub remaining_secs: u64,
}

impl ClipboardStatus {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
