use std::sync::Arc;

use tokio::time::{sleep, Duration};
use tracing::{debug, info_span, warn, Instrument};

use fc_core::notify::{Badge, Notification};
use fc_core::ports::{BadgePort, NotificationPort, SettingsPort};

/// How long the fallback badge stays visible.
pub const BADGE_CLEAR_DELAY: Duration = Duration::from_secs(2);

/// Best-effort user notification.
///
/// Respects `settings.notifications` (absent settings count as enabled).
/// When the native surface fails, a severity badge is shown instead and
/// cleared after [`BADGE_CLEAR_DELAY`]. Never fails.
pub struct Notify {
    settings: Arc<dyn SettingsPort>,
    notifier: Arc<dyn NotificationPort>,
    badge: Arc<dyn BadgePort>,
}

impl Notify {
    pub fn new(
        settings: Arc<dyn SettingsPort>,
        notifier: Arc<dyn NotificationPort>,
        badge: Arc<dyn BadgePort>,
    ) -> Self {
        Self {
            settings,
            notifier,
            badge,
        }
    }

    pub async fn execute(&self, notification: &Notification) {
        let span = info_span!(
            "usecase.notify.execute",
            severity = %notification.severity
        );

        async {
            if !self.enabled().await {
                debug!(title = %notification.title, "Notifications disabled, skipping");
                return;
            }
            if let Err(err) = self.notifier.show(notification).await {
                warn!(error = %err, "Native notification failed, falling back to badge");
                self.show_badge(Badge::for_severity(notification.severity))
                    .await;
            }
        }
        .instrument(span)
        .await
    }

    async fn enabled(&self) -> bool {
        match self.settings.load().await {
            Ok(settings) => settings.map_or(true, |s| s.notifications),
            Err(err) => {
                warn!(error = %err, "Settings unavailable, notifying anyway");
                true
            }
        }
    }

    async fn show_badge(&self, badge: Badge) {
        if let Err(err) = self.badge.set_badge(Some(badge)).await {
            warn!(error = %err, "Badge fallback failed");
            return;
        }
        let port = Arc::clone(&self.badge);
        tokio::spawn(async move {
            sleep(BADGE_CLEAR_DELAY).await;
            if let Err(err) = port.set_badge(None).await {
                warn!(error = %err, "Badge clear failed");
            }
        });
    }
}
