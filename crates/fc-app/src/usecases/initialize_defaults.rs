use std::sync::Arc;

use tracing::{info, info_span, Instrument};

use fc_core::catalog::FieldCatalog;
use fc_core::mapping::DomainMappings;
use fc_core::ports::ConfigTransferPort;
use fc_core::settings::Settings;
use fc_core::transfer::StoredConfig;
use fc_core::FormClipError;

/// Install hook: seeds settings, catalog and an empty mapping record.
///
/// Keys that already exist are left alone, so running it again is safe.
pub struct InitializeDefaults {
    transfer: Arc<dyn ConfigTransferPort>,
}

impl InitializeDefaults {
    pub fn new(transfer: Arc<dyn ConfigTransferPort>) -> Self {
        Self { transfer }
    }

    /// Returns the names of the keys that were written.
    pub async fn execute(&self) -> Result<Vec<&'static str>, FormClipError> {
        let span = info_span!("usecase.initialize_defaults.execute");

        async {
            let stored = self.transfer.read_stored().await?;
            let seed = StoredConfig {
                settings: stored.settings.is_none().then(Settings::default),
                fields: stored.fields.is_none().then(FieldCatalog::install_defaults),
                mappings: stored.mappings.is_none().then(DomainMappings::new),
            };
            self.transfer.write_stored(&seed).await?;

            let written = seed.present_keys();
            info!(written = ?written, "Defaults initialized");
            Ok(written)
        }
        .instrument(span)
        .await
    }
}
