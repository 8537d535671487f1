//! # Application Dependencies
//!
//! Parameter grouping for constructing use cases. Not a builder: every
//! dependency is required and nothing is defaulted here.

use std::sync::Arc;

use fc_core::form::MatchPolicy;
use fc_core::ports::*;

#[derive(Clone)]
pub struct AppDeps {
    // Storage
    pub catalog: Arc<dyn CatalogRepositoryPort>,
    pub mappings: Arc<dyn MappingRepositoryPort>,
    pub clipboard: Arc<dyn ClipboardRepositoryPort>,
    pub settings: Arc<dyn SettingsPort>,
    pub transfer: Arc<dyn ConfigTransferPort>,

    // Matching and time
    pub match_policy: Arc<dyn MatchPolicy>,
    pub clock: Arc<dyn ClockPort>,

    // User feedback
    pub notifier: Arc<dyn NotificationPort>,
    pub badge: Arc<dyn BadgePort>,
}
