use std::sync::Arc;

use tracing::{debug, warn};

use fc_core::command::{Command, CommandReply};
use fc_core::mapping::Direction;
use fc_core::notify::Notification;
use fc_core::ports::PageDomPort;
use fc_core::ClipboardStatus;

use super::messages;
use crate::deps::AppDeps;
use crate::usecases::{
    CaptureMapping, ClearClipboard, ClearDomainMapping, CopyNow, GetClipboardStatus, Notify,
    PasteNow,
};

/// Page-context side of the command channel.
///
/// Every command gets exactly one reply; failures never escape and are
/// reported to the user as notifications instead.
pub struct PageCommandHandler {
    capture: CaptureMapping,
    clear_mapping: ClearDomainMapping,
    copy: CopyNow,
    paste: PasteNow,
    status: GetClipboardStatus,
    clear_clipboard: ClearClipboard,
    notify: Arc<Notify>,
}

impl PageCommandHandler {
    pub fn new(deps: &AppDeps, notify: Arc<Notify>) -> Self {
        Self {
            capture: CaptureMapping::new(
                deps.catalog.clone(),
                deps.mappings.clone(),
                deps.match_policy.clone(),
            ),
            clear_mapping: ClearDomainMapping::new(deps.mappings.clone()),
            copy: CopyNow::new(
                deps.mappings.clone(),
                deps.clipboard.clone(),
                deps.settings.clone(),
                deps.clock.clone(),
            ),
            paste: PasteNow::new(
                deps.mappings.clone(),
                deps.clipboard.clone(),
                deps.clock.clone(),
            ),
            status: GetClipboardStatus::new(deps.clipboard.clone(), deps.clock.clone()),
            clear_clipboard: ClearClipboard::new(deps.clipboard.clone()),
            notify,
        }
    }

    pub async fn handle(&self, dom: &mut dyn PageDomPort, command: Command) -> CommandReply {
        debug!(command = %command, "Handling page command");
        match command {
            Command::CaptureCopyMapping => self.capture(dom, Direction::Copy).await,
            Command::CapturePasteMapping => self.capture(dom, Direction::Paste).await,
            Command::CopyNow => {
                let note = match self.copy.execute(dom).await {
                    Ok(report) => messages::copied(&report),
                    Err(err) => messages::failure(messages::TITLE_COPY, &err),
                };
                self.notify(note).await
            }
            Command::PasteNow => {
                let note = match self.paste.execute(dom).await {
                    Ok(report) => messages::pasted(&report),
                    Err(err) => messages::failure(messages::TITLE_PASTE, &err),
                };
                self.notify(note).await
            }
            Command::ClearDomainMapping => {
                let domain = dom.hostname();
                let note = match self.clear_mapping.execute(&domain).await {
                    Ok(_) => messages::mapping_cleared(&domain),
                    Err(err) => messages::failure(messages::TITLE_MAPPING, &err),
                };
                self.notify(note).await
            }
            Command::ClipboardStatus => match self.status.execute().await {
                Ok(status) => CommandReply::Status(status),
                Err(err) => {
                    warn!(error = %err, "Clipboard status unavailable");
                    CommandReply::Status(ClipboardStatus::empty())
                }
            },
            Command::ClearClipboard => {
                let note = match self.clear_clipboard.execute().await {
                    Ok(()) => messages::clipboard_cleared(),
                    Err(err) => messages::failure(messages::TITLE_CLIPBOARD, &err),
                };
                self.notify(note).await
            }
        }
    }

    async fn capture(&self, dom: &dyn PageDomPort, direction: Direction) -> CommandReply {
        let note = match self.capture.execute(dom, direction).await {
            Ok(outcome) => messages::mapping_captured(&outcome),
            Err(err) => messages::failure(messages::TITLE_MAPPING, &err),
        };
        self.notify(note).await
    }

    async fn notify(&self, note: Notification) -> CommandReply {
        self.notify.execute(&note).await;
        CommandReply::Done
    }
}
