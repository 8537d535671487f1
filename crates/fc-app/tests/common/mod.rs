#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use fc_app::usecases::Notify;
use fc_app::AppDeps;
use fc_core::catalog::FieldCatalog;
use fc_core::form::LooseMatchPolicy;
use fc_core::notify::{Badge, Notification};
use fc_core::ports::{BadgePort, CatalogRepositoryPort, NotificationPort};
use fc_infra::dom::{NodeFixture, PageFixture};
use fc_infra::{ManualClock, MemoryDocument, MemoryKeyValueStore, StorageRepository};

/// 2024-03-01T10:00:00Z
pub const START_MS: i64 = 1_709_287_200_000;

#[derive(Default)]
pub struct RecordingNotifier {
    pub shown: Mutex<Vec<Notification>>,
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

#[derive(Default)]
pub struct RecordingBadge {
    pub calls: Mutex<Vec<Option<Badge>>>,
}

#[async_trait]
impl BadgePort for RecordingBadge {
    async fn set_badge(&self, badge: Option<Badge>) -> anyhow::Result<()> {
        self.calls.lock().unwrap().push(badge);
        Ok(())
    }
}

pub struct Harness {
    pub deps: AppDeps,
    pub repo: Arc<StorageRepository<MemoryKeyValueStore>>,
    pub clock: Arc<ManualClock>,
    pub notifier: Arc<RecordingNotifier>,
    pub badge: Arc<RecordingBadge>,
}

impl Harness {
    pub fn new() -> Self {
        let repo = Arc::new(StorageRepository::new(MemoryKeyValueStore::new()));
        let clock = Arc::new(ManualClock::at(START_MS));
        let notifier = Arc::new(RecordingNotifier::default());
        let badge = Arc::new(RecordingBadge::default());
        let deps = AppDeps {
            catalog: repo.clone(),
            mappings: repo.clone(),
            clipboard: repo.clone(),
            settings: repo.clone(),
            transfer: repo.clone(),
            match_policy: Arc::new(LooseMatchPolicy),
            clock: clock.clone(),
            notifier: notifier.clone(),
            badge: badge.clone(),
        };
        Self {
            deps,
            repo,
            clock,
            notifier,
            badge,
        }
    }

    /// Harness whose catalog has no boolean codes, so loose matching only
    /// binds exact placeholders.
    pub async fn with_catalog() -> Self {
        let harness = Self::new();
        CatalogRepositoryPort::save(harness.repo.as_ref(), &catalog())
            .await
            .unwrap();
        harness
    }

    pub fn notify(&self) -> Arc<Notify> {
        Arc::new(Notify::new(
            self.deps.settings.clone(),
            self.deps.notifier.clone(),
            self.deps.badge.clone(),
        ))
    }
}

pub fn catalog() -> FieldCatalog {
    let mut catalog = FieldCatalog::default();
    catalog.numeros.insert("dni".into(), "1".into());
    catalog.texto.insert("nombre".into(), "nom".into());
    catalog.select.insert("sexo".into(), "M".into());
    catalog.fechas.insert("fechaNacimiento".into(), "2025-09-01".into());
    catalog
}

/// Source form filled with the catalog placeholders.
pub fn source_page() -> MemoryDocument {
    MemoryDocument::from_fixture(&PageFixture {
        hostname: "origen.example".into(),
        body: vec![NodeFixture::element("form").with_children(vec![
            NodeFixture::input("text").with_id("dni").with_value("1"),
            NodeFixture::input("text").with_name("nombre").with_value("nom"),
            NodeFixture::input("radio").with_name("sexo").with_value("F"),
            NodeFixture::input("radio")
                .with_name("sexo")
                .with_value("M")
                .checked(),
            NodeFixture::input("date").with_value("2025-09-01"),
        ])],
    })
}

/// Destination form with different markup, filled with the placeholders.
pub fn destination_page() -> MemoryDocument {
    MemoryDocument::from_fixture(&PageFixture {
        hostname: "destino.example".into(),
        body: vec![NodeFixture::element("div").with_id("app").with_children(vec![
            NodeFixture::input("number").with_name("documento").with_value("1"),
            NodeFixture::element("textarea").with_id("nombre-completo").with_value("nom"),
            NodeFixture::element("select")
                .with_id("genero")
                .with_options(&["F", "M", "X"])
                .with_value("M"),
            NodeFixture::input("text").with_id("nacimiento").with_value("2025-09-01"),
        ])],
    })
}
