use std::sync::Arc;

use tracing::{info_span, Instrument};

use fc_core::ports::SettingsPort;
use fc_core::settings::Settings;
use fc_core::FormClipError;

/// Stored settings, or the defaults before install.
pub struct GetSettings {
    settings: Arc<dyn SettingsPort>,
}

impl GetSettings {
    pub fn new(settings: Arc<dyn SettingsPort>) -> Self {
        Self { settings }
    }

    pub async fn execute(&self) -> Result<Settings, FormClipError> {
        let span = info_span!("usecase.get_settings.execute");

        async { Ok(self.settings.load().await?.unwrap_or_default()) }
            .instrument(span)
            .await
    }
}
