use std::sync::Arc;

use tracing::{info, info_span, Instrument};

use fc_core::ports::ConfigTransferPort;
use fc_core::transfer::ExportDocument;
use fc_core::FormClipError;

pub struct ExportConfig {
    transfer: Arc<dyn ConfigTransferPort>,
}

impl ExportConfig {
    pub fn new(transfer: Arc<dyn ConfigTransferPort>) -> Self {
        Self { transfer }
    }

    pub async fn execute(&self) -> Result<ExportDocument, FormClipError> {
        let span = info_span!("usecase.export_config.execute");

        async {
            let stored = self.transfer.read_stored().await?;
            info!(keys = ?stored.present_keys(), "Configuration exported");
            Ok(ExportDocument::from_stored(stored))
        }
        .instrument(span)
        .await
    }
}
