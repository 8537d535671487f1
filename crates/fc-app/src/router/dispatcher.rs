use std::sync::Arc;

use tokio::time::{timeout, Duration};
use tracing::{debug, info_span, warn, Instrument};

use fc_core::command::{Command, CommandReply};
use fc_core::ports::{ActiveTabPort, SettingsPort};

use super::messages;
use crate::usecases::Notify;

pub const DEFAULT_DISPATCH_TIMEOUT: Duration = Duration::from_millis(5000);

/// Popup and keyboard side of the command channel.
///
/// Forwards commands to the active tab. A missing or unresponsive page is
/// reported as a warning notification and yields no reply.
pub struct TabDispatcher {
    tab: Arc<dyn ActiveTabPort>,
    settings: Arc<dyn SettingsPort>,
    notify: Arc<Notify>,
    timeout: Duration,
}

impl TabDispatcher {
    pub fn new(
        tab: Arc<dyn ActiveTabPort>,
        settings: Arc<dyn SettingsPort>,
        notify: Arc<Notify>,
        timeout: Duration,
    ) -> Self {
        Self {
            tab,
            settings,
            notify,
            timeout,
        }
    }

    pub async fn dispatch(&self, command: Command) -> Option<CommandReply> {
        let span = info_span!("router.dispatch", command = %command);

        async {
            match timeout(self.timeout, self.tab.send(command)).await {
                Ok(Ok(reply)) => Some(reply),
                Ok(Err(err)) => {
                    warn!(error = %err, "Page did not accept the command");
                    self.notify.execute(&messages::page_unreachable()).await;
                    None
                }
                Err(_) => {
                    warn!(
                        timeout_ms = self.timeout.as_millis() as u64,
                        "Page did not answer in time"
                    );
                    self.notify.execute(&messages::page_unreachable()).await;
                    None
                }
            }
        }
        .instrument(span)
        .await
    }

    /// Keyboard entry point: only copy and paste, and only while commands
    /// are enabled.
    pub async fn shortcut(&self, command: Command) -> Option<CommandReply> {
        if !command.is_shortcut() {
            debug!(command = %command, "Not a shortcut command, ignoring");
            return None;
        }
        let enabled = match self.settings.load().await {
            Ok(settings) => settings.map_or(true, |s| s.commands_enabled),
            Err(err) => {
                warn!(error = %err, "Settings unavailable, ignoring shortcut");
                false
            }
        };
        if !enabled {
            debug!(command = %command, "Keyboard commands disabled");
            return None;
        }
        self.dispatch(command).await
    }
}
