mod common;

use std::sync::Arc;

use async_trait::async_trait;
use mockall::mock;
use tokio::time::Duration;

use common::{destination_page, source_page, Harness};
use fc_app::usecases::{SettingsUpdate, UpdateSettings};
use fc_app::{PageCommandHandler, TabDispatcher};
use fc_core::command::{Command, CommandReply};
use fc_core::notify::Severity;
use fc_core::ports::{ActiveTabPort, PageDomPort, TabError};

mock! {
    pub Tab {}

    #[async_trait]
    impl ActiveTabPort for Tab {
        async fn send(&self, command: Command) -> Result<CommandReply, TabError>;
    }
}

/// Page that never answers.
struct SilentTab;

#[async_trait]
impl ActiveTabPort for SilentTab {
    async fn send(&self, _command: Command) -> Result<CommandReply, TabError> {
        std::future::pending().await
    }
}

#[tokio::test]
async fn handler_reports_outcomes_as_notifications() {
    let h = Harness::with_catalog().await;
    let handler = PageCommandHandler::new(&h.deps, h.notify());
    let mut source = source_page();

    let reply = handler.handle(&mut source, Command::CopyNow).await;
    assert_eq!(reply, CommandReply::Done);
    let note = h.notifier.last().unwrap();
    assert_eq!(note.message, "No copy mapping for this domain");
    assert_eq!(note.severity, Severity::Error);

    handler
        .handle(&mut source, Command::CaptureCopyMapping)
        .await;
    assert_eq!(
        h.notifier.last().unwrap().message,
        "Copy mapping saved (4 fields) for origen.example"
    );

    handler.handle(&mut source, Command::CopyNow).await;
    let note = h.notifier.last().unwrap();
    assert_eq!(note.message, "Copied 4/4");
    assert_eq!(note.severity, Severity::Success);

    let mut destination = destination_page();
    handler.handle(&mut destination, Command::PasteNow).await;
    assert_eq!(
        h.notifier.last().unwrap().message,
        "No paste mapping for this domain"
    );
}

#[tokio::test]
async fn status_reply_carries_no_notification() {
    let h = Harness::with_catalog().await;
    let handler = PageCommandHandler::new(&h.deps, h.notify());
    let mut page = source_page();

    let reply = handler.handle(&mut page, Command::ClipboardStatus).await;
    match reply {
        CommandReply::Status(status) => {
            assert!(status.is_empty());
            assert_eq!(status.remaining_secs, 0);
        }
        other => panic!("unexpected reply {other:?}"),
    }
    assert!(h.notifier.messages().is_empty());

    handler.handle(&mut page, Command::PasteNow).await;
    handler.handle(&mut page, Command::PasteNow).await;
    assert_eq!(
        h.notifier.messages(),
        vec!["No current data to paste", "No current data to paste"]
    );
}

#[tokio::test]
async fn clear_commands_are_idempotent() {
    let h = Harness::with_catalog().await;
    let handler = PageCommandHandler::new(&h.deps, h.notify());
    let mut page = source_page();

    handler.handle(&mut page, Command::CaptureCopyMapping).await;
    handler.handle(&mut page, Command::ClearDomainMapping).await;
    handler.handle(&mut page, Command::ClearDomainMapping).await;
    handler.handle(&mut page, Command::ClearClipboard).await;

    let messages = h.notifier.messages();
    assert_eq!(messages[1], "Mapping removed for origen.example");
    assert_eq!(messages[2], "Mapping removed for origen.example");
    assert_eq!(messages[3], "Data cleared");
    assert_eq!(page.hostname(), "origen.example");
}

#[tokio::test]
async fn unresponsive_page_times_out_into_a_warning() {
    tokio::time::pause();
    let h = Harness::new();
    let dispatcher = TabDispatcher::new(
        Arc::new(SilentTab),
        h.deps.settings.clone(),
        h.notify(),
        Duration::from_millis(5000),
    );

    let reply = dispatcher.dispatch(Command::ClipboardStatus).await;
    assert!(reply.is_none());
    let note = h.notifier.last().unwrap();
    assert_eq!(note.severity, Severity::Warn);
    assert_eq!(note.title, "Connection");
}

#[tokio::test]
async fn missing_tab_is_a_warning() {
    let h = Harness::new();
    let mut tab = MockTab::new();
    tab.expect_send()
        .returning(|_| Err(TabError::NoActiveTab));
    let dispatcher = TabDispatcher::new(
        Arc::new(tab),
        h.deps.settings.clone(),
        h.notify(),
        Duration::from_secs(5),
    );

    assert!(dispatcher.dispatch(Command::CopyNow).await.is_none());
    assert_eq!(h.notifier.last().unwrap().severity, Severity::Warn);
}

#[tokio::test]
async fn shortcuts_are_gated() {
    let h = Harness::new();
    let mut tab = MockTab::new();
    tab.expect_send()
        .withf(|c| *c == Command::PasteNow)
        .times(1)
        .returning(|_| Ok(CommandReply::Done));
    let dispatcher = TabDispatcher::new(
        Arc::new(tab),
        h.deps.settings.clone(),
        h.notify(),
        Duration::from_secs(5),
    );

    assert!(dispatcher.shortcut(Command::ClearClipboard).await.is_none());
    assert_eq!(
        dispatcher.shortcut(Command::PasteNow).await,
        Some(CommandReply::Done)
    );

    UpdateSettings::new(h.deps.settings.clone())
        .execute(SettingsUpdate {
            notifications: None,
            commands_enabled: Some(false),
        })
        .await
        .unwrap();
    assert!(dispatcher.shortcut(Command::PasteNow).await.is_none());
}
