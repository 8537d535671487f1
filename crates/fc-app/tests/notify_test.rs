mod common;

use std::sync::Arc;

use async_trait::async_trait;
use mockall::mock;
use tokio::time::{advance, Duration};

use common::{Harness, RecordingBadge};
use fc_app::usecases::{Notify, SettingsUpdate, UpdateSettings};
use fc_core::notify::{Badge, Notification, Severity};
use fc_core::ports::{BadgePort, NotificationPort};

mock! {
    pub Notifier {}

    #[async_trait]
    impl NotificationPort for Notifier {
        async fn show(&self, notification: &Notification) -> anyhow::Result<()>;
    }
}

mock! {
    pub Badges {}

    #[async_trait]
    impl BadgePort for Badges {
        async fn set_badge(&self, badge: Option<Badge>) -> anyhow::Result<()>;
    }
}

#[tokio::test]
async fn disabled_notifications_touch_nothing() {
    let h = Harness::new();
    UpdateSettings::new(h.deps.settings.clone())
        .execute(SettingsUpdate {
            notifications: Some(false),
            commands_enabled: None,
        })
        .await
        .unwrap();

    let mut notifier = MockNotifier::new();
    notifier.expect_show().never();
    let mut badges = MockBadges::new();
    badges.expect_set_badge().never();

    Notify::new(h.deps.settings.clone(), Arc::new(notifier), Arc::new(badges))
        .execute(&Notification::success("Copy", "Copied 2/2"))
        .await;
}

#[tokio::test]
async fn absent_settings_count_as_enabled() {
    let h = Harness::new();
    let mut notifier = MockNotifier::new();
    notifier
        .expect_show()
        .withf(|n| n.title == "Paste" && n.severity == Severity::Error)
        .times(1)
        .returning(|_| Ok(()));
    let mut badges = MockBadges::new();
    badges.expect_set_badge().never();

    Notify::new(h.deps.settings.clone(), Arc::new(notifier), Arc::new(badges))
        .execute(&Notification::error("Paste", "No current data to paste"))
        .await;
}

#[tokio::test]
async fn native_failure_falls_back_to_a_badge_cleared_after_two_seconds() {
    tokio::time::pause();
    let h = Harness::new();
    let mut notifier = MockNotifier::new();
    notifier
        .expect_show()
        .returning(|_| Err(anyhow::anyhow!("notifications unavailable")));
    let badge = Arc::new(RecordingBadge::default());

    Notify::new(h.deps.settings.clone(), Arc::new(notifier), badge.clone())
        .execute(&Notification::warn("Copy", "Copied 1/2, missing: nom"))
        .await;
    assert_eq!(
        *badge.calls.lock().unwrap(),
        vec![Some(Badge::for_severity(Severity::Warn))]
    );

    advance(Duration::from_millis(1_900)).await;
    tokio::task::yield_now().await;
    assert_eq!(badge.calls.lock().unwrap().len(), 1);

    advance(Duration::from_millis(200)).await;
    tokio::task::yield_now().await;
    let calls = badge.calls.lock().unwrap().clone();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].as_ref().map(|b| b.text), Some("!"));
    assert_eq!(calls[1], None);
}

#[tokio::test]
async fn badge_failure_is_swallowed() {
    let h = Harness::new();
    let mut notifier = MockNotifier::new();
    notifier
        .expect_show()
        .returning(|_| Err(anyhow::anyhow!("no native surface")));
    let mut badges = MockBadges::new();
    badges
        .expect_set_badge()
        .times(1)
        .returning(|_| Err(anyhow::anyhow!("no toolbar")));

    Notify::new(h.deps.settings.clone(), Arc::new(notifier), Arc::new(badges))
        .execute(&Notification::info("Clipboard", "Data cleared"))
        .await;
}
