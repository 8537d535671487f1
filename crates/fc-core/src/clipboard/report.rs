use serde::{Deserialize, Serialize};

/// Outcome of a best-effort copy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyReport {
    pub copied: usize,
    pub total: usize,
    /// Codes whose source control could not be located.
    pub missing: Vec<String>,
}

/// Outcome of a best-effort paste.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasteReport {
    pub pasted: usize,
    pub total: usize,
    /// Codes with no target control or no stored value.
    pub missing: Vec<String>,
    /// Codes whose write was rejected by the page.
    pub failed: Vec<String>,
    pub remaining_secs: u64,
}

impl PasteReport {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty() && self.failed.is_empty()
    }
}
