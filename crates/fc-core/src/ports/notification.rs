use async_trait::async_trait;

use crate::notify::{Badge, Notification};

/// Native notification surface.
#[async_trait]
pub trait NotificationPort: Send + Sync {
    async fn show(&self, notification: &Notification) -> anyhow::Result<()>;
}

/// Toolbar badge used as a fallback indicator.
#[async_trait]
pub trait BadgePort: Send + Sync {
    /// Shows `badge`, or clears the badge when `None`.
    async fn set_badge(&self, badge: Option<Badge>) -> anyhow::Result<()>;
}
