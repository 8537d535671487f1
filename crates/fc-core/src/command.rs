//! Messages exchanged between the popup/keyboard side and a page context.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::clipboard::ClipboardStatus;
use crate::mapping::Direction;

/// Action requested from a page context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Command {
    CaptureCopyMapping,
    CapturePasteMapping,
    CopyNow,
    PasteNow,
    ClearDomainMapping,
    ClipboardStatus,
    ClearClipboard,
}

impl Command {
    pub const ALL: [Command; 7] = [
        Command::CaptureCopyMapping,
        Command::CapturePasteMapping,
        Command::CopyNow,
        Command::PasteNow,
        Command::ClearDomainMapping,
        Command::ClipboardStatus,
        Command::ClearClipboard,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Command::CaptureCopyMapping => "capture-copy-mapping",
            Command::CapturePasteMapping => "capture-paste-mapping",
            Command::CopyNow => "copy-now",
            Command::PasteNow => "paste-now",
            Command::ClearDomainMapping => "clear-domain-mapping",
            Command::ClipboardStatus => "clipboard-status",
            Command::ClearClipboard => "clear-clipboard",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == raw.trim())
    }

    pub fn capture(direction: Direction) -> Self {
        match direction {
            Direction::Copy => Command::CaptureCopyMapping,
            Direction::Paste => Command::CapturePasteMapping,
        }
    }

    /// Only copy and paste are bound to keyboard shortcuts.
    pub fn is_shortcut(self) -> bool {
        matches!(self, Command::CopyNow | Command::PasteNow)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exactly one reply per command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reply", rename_all = "kebab-case")]
pub enum CommandReply {
    Done,
    Status(ClipboardStatus),
}
