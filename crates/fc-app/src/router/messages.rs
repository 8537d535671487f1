//! User-facing wording of command outcomes.

use fc_core::clipboard::{CopyReport, PasteReport};
use fc_core::mapping::Direction;
use fc_core::notify::Notification;
use fc_core::FormClipError;

use crate::usecases::CaptureOutcome;

pub(crate) const TITLE_MAPPING: &str = "Mapping";
pub(crate) const TITLE_COPY: &str = "Copy";
pub(crate) const TITLE_PASTE: &str = "Paste";
pub(crate) const TITLE_CLIPBOARD: &str = "Clipboard";
pub(crate) const TITLE_CONNECTION: &str = "Connection";

pub(crate) fn mapping_captured(outcome: &CaptureOutcome) -> Notification {
    let side = match outcome.direction {
        Direction::Copy => "Copy",
        Direction::Paste => "Paste",
    };
    Notification::success(
        TITLE_MAPPING,
        format!(
            "{side} mapping saved ({} fields) for {}",
            outcome.matched.len(),
            outcome.domain
        ),
    )
}

pub(crate) fn mapping_cleared(domain: &str) -> Notification {
    Notification::warn(TITLE_MAPPING, format!("Mapping removed for {domain}"))
}

pub(crate) fn copied(report: &CopyReport) -> Notification {
    let mut message = format!("Copied {}/{}", report.copied, report.total);
    if report.missing.is_empty() {
        return Notification::success(TITLE_COPY, message);
    }
    message.push_str(&format!(", missing: {}", report.missing.join(", ")));
    Notification::warn(TITLE_COPY, message)
}

pub(crate) fn pasted(report: &PasteReport) -> Notification {
    let mut message = format!("Pasted {}/{}", report.pasted, report.total);
    if !report.missing.is_empty() {
        message.push_str(&format!(", missing: {}", report.missing.join(", ")));
    }
    if !report.failed.is_empty() {
        message.push_str(&format!(", failed: {}", report.failed.join(", ")));
    }
    if report.remaining_secs > 0 {
        message.push_str(&format!(" (expires in {}s)", report.remaining_secs));
    }
    if report.is_complete() {
        Notification::success(TITLE_PASTE, message)
    } else {
        Notification::warn(TITLE_PASTE, message)
    }
}

pub(crate) fn clipboard_cleared() -> Notification {
    Notification::warn(TITLE_CLIPBOARD, "Data cleared")
}

pub(crate) fn page_unreachable() -> Notification {
    Notification::warn(
        TITLE_CONNECTION,
        "Could not reach the page. Open a web page and try again.",
    )
}

pub(crate) fn failure(title: &str, err: &FormClipError) -> Notification {
    let message = match err {
        FormClipError::NoMapping {
            direction: Direction::Copy,
            ..
        } => "No copy mapping for this domain".to_string(),
        FormClipError::NoMapping {
            direction: Direction::Paste,
            ..
        } => "No paste mapping for this domain".to_string(),
        FormClipError::NoData => "No current data to paste".to_string(),
        other => other.to_string(),
    };
    Notification::error(title, message)
}
