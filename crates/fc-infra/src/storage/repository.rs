use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::warn;

use fc_core::catalog::FieldCatalog;
use fc_core::clipboard::ClipboardSnapshot;
use fc_core::mapping::DomainMappings;
use fc_core::ports::{
    CatalogRepositoryPort, ClipboardRepositoryPort, ConfigTransferPort, MappingRepositoryPort,
    SettingsPort,
};
use fc_core::settings::Settings;
use fc_core::transfer::StoredConfig;

use super::KeyValueStore;

pub const SETTINGS_KEY: &str = "settings";
pub const FIELDS_KEY: &str = "fields";
pub const MAPPINGS_KEY: &str = "mappings";
pub const CLIPBOARD_KEY: &str = "clipboard";

/// Typed records over a [`KeyValueStore`].
///
/// One instance serves every storage port; each record lives under its own
/// top-level key.
pub struct StorageRepository<S> {
    store: S,
}

impl<S: KeyValueStore> StorageRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    async fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.store.get(key).await? {
            None | Some(Value::Null) => Ok(None),
            Some(value) => serde_json::from_value(value)
                .map(Some)
                .with_context(|| format!("decode {key} failed")),
        }
    }

    async fn write<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let mut entries = Map::new();
        entries.insert(
            key.to_string(),
            serde_json::to_value(value).with_context(|| format!("encode {key} failed"))?,
        );
        self.store.set(entries).await
    }
}

#[async_trait]
impl<S: KeyValueStore> CatalogRepositoryPort for StorageRepository<S> {
    async fn load(&self) -> Result<Option<FieldCatalog>> {
        self.read(FIELDS_KEY).await
    }

    async fn save(&self, catalog: &FieldCatalog) -> Result<()> {
        self.write(FIELDS_KEY, catalog).await
    }
}

#[async_trait]
impl<S: KeyValueStore> MappingRepositoryPort for StorageRepository<S> {
    async fn load(&self) -> Result<DomainMappings> {
        Ok(self.read(MAPPINGS_KEY).await?.unwrap_or_default())
    }

    async fn save(&self, mappings: &DomainMappings) -> Result<()> {
        self.write(MAPPINGS_KEY, mappings).await
    }
}

#[async_trait]
impl<S: KeyValueStore> ClipboardRepositoryPort for StorageRepository<S> {
    async fn load(&self) -> Result<Option<ClipboardSnapshot>> {
        let Some(raw) = self.store.get(CLIPBOARD_KEY).await? else {
            return Ok(None);
        };
        if raw.is_null() {
            return Ok(None);
        }
        match serde_json::from_value(raw) {
            Ok(snapshot) => Ok(Some(snapshot)),
            Err(err) => {
                // An unreadable snapshot behaves like no snapshot.
                warn!(error = %err, "ignoring malformed clipboard record");
                Ok(None)
            }
        }
    }

    async fn save(&self, snapshot: &ClipboardSnapshot) -> Result<()> {
        self.write(CLIPBOARD_KEY, snapshot).await
    }

    async fn clear(&self) -> Result<()> {
        self.store.remove(&[CLIPBOARD_KEY]).await
    }
}

#[async_trait]
impl<S: KeyValueStore> SettingsPort for StorageRepository<S> {
    async fn load(&self) -> Result<Option<Settings>> {
        Ok(self
            .read::<Settings>(SETTINGS_KEY)
            .await?
            .map(Settings::sanitized))
    }

    async fn save(&self, settings: &Settings) -> Result<()> {
        self.write(SETTINGS_KEY, settings).await
    }
}

#[async_trait]
impl<S: KeyValueStore> ConfigTransferPort for StorageRepository<S> {
    async fn read_stored(&self) -> Result<StoredConfig> {
        Ok(StoredConfig {
            settings: SettingsPort::load(self).await?,
            fields: CatalogRepositoryPort::load(self).await?,
            mappings: self.read(MAPPINGS_KEY).await?,
        })
    }

    async fn write_stored(&self, config: &StoredConfig) -> Result<()> {
        let mut entries = Map::new();
        if let Some(settings) = &config.settings {
            entries.insert(SETTINGS_KEY.into(), serde_json::to_value(settings)?);
        }
        if let Some(fields) = &config.fields {
            entries.insert(FIELDS_KEY.into(), serde_json::to_value(fields)?);
        }
        if let Some(mappings) = &config.mappings {
            entries.insert(MAPPINGS_KEY.into(), serde_json::to_value(mappings)?);
        }
        if entries.is_empty() {
            return Ok(());
        }
        self.store.set(entries).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::storage::MemoryKeyValueStore;

    fn repo_with(entries: Value) -> StorageRepository<MemoryKeyValueStore> {
        let Value::Object(map) = entries else {
            panic!("fixture must be an object");
        };
        StorageRepository::new(MemoryKeyValueStore::with_entries(map))
    }

    #[tokio::test]
    async fn absent_records() -> Result<()> {
        let repo = repo_with(json!({}));
        assert!(CatalogRepositoryPort::load(&repo).await?.is_none());
        assert!(SettingsPort::load(&repo).await?.is_none());
        assert!(ClipboardRepositoryPort::load(&repo).await?.is_none());
        assert!(MappingRepositoryPort::load(&repo).await?.is_empty());
        assert!(repo.read_stored().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn malformed_clipboard_is_absent() -> Result<()> {
        let repo = repo_with(json!({ "clipboard": { "data": 7 } }));
        assert!(ClipboardRepositoryPort::load(&repo).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn malformed_catalog_is_an_error() {
        let repo = repo_with(json!({ "fields": { "texto": [1, 2] } }));
        assert!(CatalogRepositoryPort::load(&repo).await.is_err());
    }

    #[tokio::test]
    async fn stored_settings_are_sanitized() -> Result<()> {
        let repo = repo_with(json!({ "settings": { "ttlSeconds": -5 } }));
        let settings = SettingsPort::load(&repo).await?.expect("settings stored");
        assert_eq!(settings.ttl_seconds, 45);
        assert!(settings.notifications);
        Ok(())
    }

    #[tokio::test]
    async fn write_stored_keeps_absent_keys() -> Result<()> {
        let repo = repo_with(json!({
            "settings": { "ttlSeconds": 900, "notifications": true, "commandsEnabled": true },
            "clipboard": { "data": {}, "capturedAt": 1, "ttlSeconds": 45 }
        }));
        repo.write_stored(&StoredConfig {
            settings: None,
            fields: Some(FieldCatalog::install_defaults()),
            mappings: None,
        })
        .await?;

        let stored = repo.read_stored().await?;
        assert!(stored.settings.is_some());
        assert_eq!(stored.fields.map(|f| f.len()), Some(14));
        assert!(stored.mappings.is_none());
        assert!(ClipboardRepositoryPort::load(&repo).await?.is_some());
        Ok(())
    }

    #[tokio::test]
    async fn clipboard_clear_removes_the_key() -> Result<()> {
        let repo = repo_with(json!({}));
        let snapshot = ClipboardSnapshot::new(Default::default(), 10);
        ClipboardRepositoryPort::save(&repo, &snapshot).await?;
        assert_eq!(ClipboardRepositoryPort::load(&repo).await?, Some(snapshot));

        repo.clear().await?;
        assert_eq!(repo.store().get(CLIPBOARD_KEY).await?, None);
        Ok(())
    }
}
