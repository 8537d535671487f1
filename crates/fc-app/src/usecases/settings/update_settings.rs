use std::sync::Arc;

use tracing::{info, info_span, Instrument};

use fc_core::ports::SettingsPort;
use fc_core::settings::Settings;
use fc_core::FormClipError;

/// User-editable switches; `None` keeps the stored value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SettingsUpdate {
    pub notifications: Option<bool>,
    pub commands_enabled: Option<bool>,
}

/// Toggles notification delivery and keyboard commands.
///
/// The clipboard TTL is not editable through this path.
pub struct UpdateSettings {
    settings: Arc<dyn SettingsPort>,
}

impl UpdateSettings {
    pub fn new(settings: Arc<dyn SettingsPort>) -> Self {
        Self { settings }
    }

    pub async fn execute(&self, update: SettingsUpdate) -> Result<Settings, FormClipError> {
        let span = info_span!("usecase.update_settings.execute");

        async {
            let old = self.settings.load().await?.unwrap_or_default();
            let mut new = old.clone();
            if let Some(notifications) = update.notifications {
                new.notifications = notifications;
            }
            if let Some(commands_enabled) = update.commands_enabled {
                new.commands_enabled = commands_enabled;
            }

            let changes = describe_changes(&old, &new);
            if changes.is_empty() {
                info!("Updating settings (no changes detected)");
            } else {
                info!(changed_fields = %changes.join(", "), "Updating settings");
            }

            self.settings.save(&new).await?;
            Ok(new)
        }
        .instrument(span)
        .await
    }
}

fn describe_changes(old: &Settings, new: &Settings) -> Vec<String> {
    let mut parts = Vec::new();
    if old.notifications != new.notifications {
        parts.push(format!(
            "notifications: {} → {}",
            old.notifications, new.notifications
        ));
    }
    if old.commands_enabled != new.commands_enabled {
        parts.push(format!(
            "commands_enabled: {} → {}",
            old.commands_enabled, new.commands_enabled
        ));
    }
    parts
}
