#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tempfile::TempDir;

use fc_core::notify::{Badge, Notification};
use fc_core::ports::{BadgePort, NotificationPort};
use fc_infra::{FileKeyValueStore, ManualClock};
use formclip_lib::bootstrap::{wire_with_store, AppRuntime, HostAdapters};
use formclip_lib::cli::Commands;
use formclip_lib::commands;

/// 2024-03-01T10:00:00Z
pub const START_MS: i64 = 1_709_287_200_000;

#[derive(Default)]
pub struct RecordingNotifier {
    shown: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.shown
            .lock()
            .unwrap()
            .iter()
            .map(|n| n.message.clone())
            .collect()
    }

    pub fn last(&self) -> Option<Notification> {
        self.shown.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl NotificationPort for RecordingNotifier {
    async fn show(&self, notification: &Notification) -> anyhow::Result<()> {
        self.shown.lock().unwrap().push(notification.clone());
        Ok(())
    }
}

struct NoBadge;

#[async_trait]
impl BadgePort for NoBadge {
    async fn set_badge(&self, _badge: Option<Badge>) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Runtime over a JSON storage file in a temp dir.
pub struct TestHost {
    pub dir: TempDir,
    pub runtime: AppRuntime,
    pub clock: Arc<ManualClock>,
    pub notifier: Arc<RecordingNotifier>,
}

impl TestHost {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let clock = Arc::new(ManualClock::at(START_MS));
        let notifier = Arc::new(RecordingNotifier::default());
        let deps = wire_with_store(
            FileKeyValueStore::new(dir.path().join("storage.json")),
            HostAdapters {
                clock: clock.clone(),
                notifier: notifier.clone(),
                badge: Arc::new(NoBadge),
            },
        );
        Self {
            dir,
            runtime: AppRuntime::new(deps, Duration::from_millis(500)),
            clock,
            notifier,
        }
    }

    pub fn storage_path(&self) -> PathBuf {
        self.dir.path().join("storage.json")
    }

    /// Runs a command and returns its exit code and stdout.
    pub async fn run(&self, command: Commands) -> (ExitCode, String) {
        let mut out = Vec::new();
        let code = commands::execute(&self.runtime, command, &mut out)
            .await
            .unwrap();
        (code, String::from_utf8(out).unwrap())
    }
}

pub fn demo(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("demos").join(name)
}
