//! Typed stores over the synced key-value storage.
//!
//! Use cases only see these ports; the key-value substrate stays behind the
//! infrastructure adapter.

use async_trait::async_trait;

use crate::catalog::FieldCatalog;
use crate::clipboard::ClipboardSnapshot;
use crate::mapping::DomainMappings;
use crate::settings::Settings;
use crate::transfer::StoredConfig;

#[async_trait]
pub trait CatalogRepositoryPort: Send + Sync {
    /// Stored catalog, or `None` before install.
    async fn load(&self) -> anyhow::Result<Option<FieldCatalog>>;
    /// Replaces the whole catalog record.
    async fn save(&self, catalog: &FieldCatalog) -> anyhow::Result<()>;
}

#[async_trait]
pub trait MappingRepositoryPort: Send + Sync {
    /// Stored mappings, empty when absent.
    async fn load(&self) -> anyhow::Result<DomainMappings>;
    async fn save(&self, mappings: &DomainMappings) -> anyhow::Result<()>;
}

#[async_trait]
pub trait ClipboardRepositoryPort: Send + Sync {
    async fn load(&self) -> anyhow::Result<Option<ClipboardSnapshot>>;
    /// Overwrites any previous snapshot.
    async fn save(&self, snapshot: &ClipboardSnapshot) -> anyhow::Result<()>;
    async fn clear(&self) -> anyhow::Result<()>;
}

#[async_trait]
pub trait SettingsPort: Send + Sync {
    /// Stored settings, or `None` before install.
    async fn load(&self) -> anyhow::Result<Option<Settings>>;
    async fn save(&self, settings: &Settings) -> anyhow::Result<()>;
}

/// Bulk access used by export/import and the install hook.
#[async_trait]
pub trait ConfigTransferPort: Send + Sync {
    async fn read_stored(&self) -> anyhow::Result<StoredConfig>;
    /// Writes the present keys in one storage call; absent keys are kept.
    async fn write_stored(&self, config: &StoredConfig) -> anyhow::Result<()>;
}
