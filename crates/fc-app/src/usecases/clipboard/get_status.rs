use std::sync::Arc;

use tracing::{debug, info_span, Instrument};

use fc_core::clipboard::{ClipboardPhase, ClipboardStatus};
use fc_core::ports::{ClipboardRepositoryPort, ClockPort};
use fc_core::FormClipError;

/// Current clipboard contents and countdown.
///
/// Observing an expired snapshot deletes it.
pub struct GetClipboardStatus {
    clipboard: Arc<dyn ClipboardRepositoryPort>,
    clock: Arc<dyn ClockPort>,
}

impl GetClipboardStatus {
    pub fn new(clipboard: Arc<dyn ClipboardRepositoryPort>, clock: Arc<dyn ClockPort>) -> Self {
        Self { clipboard, clock }
    }

    pub async fn execute(&self) -> Result<ClipboardStatus, FormClipError> {
        let span = info_span!("usecase.clipboard_status.execute");

        async {
            let stored = self.clipboard.load().await?;
            let phase = ClipboardPhase::evaluate(stored.as_ref(), self.clock.now_ms());
            if phase == ClipboardPhase::Expired {
                debug!("Clipboard expired, deleting snapshot");
                self.clipboard.clear().await?;
            }
            Ok(phase.status())
        }
        .instrument(span)
        .await
    }
}
