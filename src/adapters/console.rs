use anyhow::Result;
use fc_core::notify::{Badge, Notification};
use fc_core::ports::{BadgePort, NotificationPort};
use tokio::io::{AsyncWriteExt, Stdout};
use tokio::sync::Mutex;

/// Prints notifications as `[severity] title: message` lines on stdout.
pub struct ConsoleNotifier {
    out: Mutex<Stdout>,
}

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self {
            out: Mutex::new(tokio::io::stdout()),
        }
    }

    pub(crate) fn format_line(notification: &Notification) -> String {
        format!(
            "[{}] {}: {}\n",
            notification.severity, notification.title, notification.message
        )
    }
}

impl Default for ConsoleNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl NotificationPort for ConsoleNotifier {
    async fn show(&self, notification: &Notification) -> Result<()> {
        let mut out = self.out.lock().await;
        out.write_all(Self::format_line(notification).as_bytes())
            .await?;
        out.flush().await?;
        Ok(())
    }
}

/// Badge fallback rendered as a log event; a terminal has no toolbar.
#[derive(Debug, Clone, Default)]
pub struct ConsoleBadge;

#[async_trait::async_trait]
impl BadgePort for ConsoleBadge {
    async fn set_badge(&self, badge: Option<Badge>) -> Result<()> {
        match badge {
            Some(badge) => tracing::info!(text = badge.text, color = badge.color, "badge set"),
            None => tracing::debug!("badge cleared"),
        }
        Ok(())
    }
}
