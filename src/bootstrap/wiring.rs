//! # Dependency Injection
//!
//! The only place that depends on `fc-infra`, the terminal adapters and
//! `fc-app` at the same time. It assembles ports; it decides nothing.

use std::sync::Arc;

use fc_app::AppDeps;
use fc_core::form::LooseMatchPolicy;
use fc_core::ports::{BadgePort, ClockPort, NotificationPort};
use fc_infra::{FileKeyValueStore, KeyValueStore, StorageRepository, SystemClock};

use super::config::ResolvedConfig;
use crate::adapters::{ConsoleBadge, ConsoleNotifier};

/// Feedback and time adapters, replaceable in tests.
pub struct HostAdapters {
    pub clock: Arc<dyn ClockPort>,
    pub notifier: Arc<dyn NotificationPort>,
    pub badge: Arc<dyn BadgePort>,
}

impl HostAdapters {
    pub fn console() -> Self {
        Self {
            clock: Arc::new(SystemClock),
            notifier: Arc::new(ConsoleNotifier::new()),
            badge: Arc::new(ConsoleBadge),
        }
    }
}

/// Wires every storage port to one repository over `store`.
pub fn wire_with_store<S>(store: S, host: HostAdapters) -> AppDeps
where
    S: KeyValueStore + 'static,
{
    let repository = Arc::new(StorageRepository::new(store));

    AppDeps {
        catalog: repository.clone(),
        mappings: repository.clone(),
        clipboard: repository.clone(),
        settings: repository.clone(),
        transfer: repository,
        match_policy: Arc::new(LooseMatchPolicy),
        clock: host.clock,
        notifier: host.notifier,
        badge: host.badge,
    }
}

/// Production wiring: JSON file storage and console feedback.
pub fn wire_dependencies(config: &ResolvedConfig) -> AppDeps {
    tracing::debug!(storage = %config.storage_path.display(), "wiring dependencies");
    wire_with_store(
        FileKeyValueStore::new(config.storage_path.clone()),
        HostAdapters::console(),
    )
}
