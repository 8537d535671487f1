//! Synced key-value storage and the typed repository over it.

mod file;
mod memory;
mod repository;

pub use file::FileKeyValueStore;
pub use memory::MemoryKeyValueStore;
pub use repository::{
    StorageRepository, CLIPBOARD_KEY, FIELDS_KEY, MAPPINGS_KEY, SETTINGS_KEY,
};

use async_trait::async_trait;
use serde_json::{Map, Value};

/// Untyped key-value substrate with JSON values.
///
/// `set` writes every given key in one call so readers never observe a
/// partially applied batch.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> anyhow::Result<Option<Value>>;

    async fn get_all(&self) -> anyhow::Result<Map<String, Value>>;

    async fn set(&self, entries: Map<String, Value>) -> anyhow::Result<()>;

    async fn remove(&self, keys: &[&str]) -> anyhow::Result<()>;
}
