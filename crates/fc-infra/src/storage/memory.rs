use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::Mutex;

use super::KeyValueStore;

/// In-process store, used by tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryKeyValueStore {
    entries: Mutex<Map<String, Value>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: Map<String, Value>) -> Self {
        Self {
            entries: Mutex::new(entries),
        }
    }
}

#[async_trait]
impl KeyValueStore for MemoryKeyValueStore {
    async fn get(&self, key: &str) -> anyhow::Result<Option<Value>> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn get_all(&self) -> anyhow::Result<Map<String, Value>> {
        Ok(self.entries.lock().await.clone())
    }

    async fn set(&self, entries: Map<String, Value>) -> anyhow::Result<()> {
        self.entries.lock().await.extend(entries);
        Ok(())
    }

    async fn remove(&self, keys: &[&str]) -> anyhow::Result<()> {
        let mut guard = self.entries.lock().await;
        for key in keys {
            guard.remove(*key);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn set_merges_and_remove_drops() -> anyhow::Result<()> {
        let store = MemoryKeyValueStore::new();
        let mut batch = Map::new();
        batch.insert("a".into(), json!(1));
        batch.insert("b".into(), json!({ "x": true }));
        store.set(batch).await?;

        let mut update = Map::new();
        update.insert("a".into(), json!(2));
        store.set(update).await?;

        assert_eq!(store.get("a").await?, Some(json!(2)));
        assert_eq!(store.get("b").await?, Some(json!({ "x": true })));

        store.remove(&["a", "missing"]).await?;
        assert_eq!(store.get("a").await?, None);
        assert_eq!(store.get_all().await?.len(), 1);
        Ok(())
    }
}
