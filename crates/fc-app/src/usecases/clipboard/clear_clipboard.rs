use std::sync::Arc;

use tracing::{info, info_span, Instrument};

use fc_core::ports::ClipboardRepositoryPort;
use fc_core::FormClipError;

pub struct ClearClipboard {
    clipboard: Arc<dyn ClipboardRepositoryPort>,
}

impl ClearClipboard {
    pub fn new(clipboard: Arc<dyn ClipboardRepositoryPort>) -> Self {
        Self { clipboard }
    }

    pub async fn execute(&self) -> Result<(), FormClipError> {
        let span = info_span!("usecase.clear_clipboard.execute");

        async {
            self.clipboard.clear().await?;
            info!("Clipboard cleared");
            Ok(())
        }
        .instrument(span)
        .await
    }
}
