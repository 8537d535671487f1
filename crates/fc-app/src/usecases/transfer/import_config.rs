use std::sync::Arc;

use serde_json::Value;
use tracing::{info, info_span, Instrument};

use fc_core::ports::ConfigTransferPort;
use fc_core::transfer::parse_import;
use fc_core::FormClipError;

/// Replaces the stored keys present in an import payload.
///
/// The payload is fully validated before anything is written.
pub struct ImportConfig {
    transfer: Arc<dyn ConfigTransferPort>,
}

impl ImportConfig {
    pub fn new(transfer: Arc<dyn ConfigTransferPort>) -> Self {
        Self { transfer }
    }

    /// Returns the names of the replaced keys.
    pub async fn execute(&self, payload: &Value) -> Result<Vec<&'static str>, FormClipError> {
        let span = info_span!("usecase.import_config.execute");

        async {
            let config = parse_import(payload)?;
            self.transfer.write_stored(&config).await?;

            let keys = config.present_keys();
            info!(keys = ?keys, "Configuration imported");
            Ok(keys)
        }
        .instrument(span)
        .await
    }
}
