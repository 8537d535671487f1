use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::fs::{self, OpenOptions};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use super::KeyValueStore;

/// Key-value store persisted as one JSON object on disk.
///
/// Every mutation rewrites the file through a temporary sibling and a
/// rename, so the file holds either the previous or the new contents.
///
/// Writers also hold an exclusive `<name>.json.lock` sibling for the whole
/// read-modify-write cycle, so two processes sharing the file cannot drop
/// each other's keys. A lock older than [`STALE_LOCK_AFTER`] is treated as
/// left behind by a crashed writer and broken.
pub struct FileKeyValueStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within the process.
    lock: Mutex<()>,
}

const LOCK_RETRY_INTERVAL: Duration = Duration::from_millis(10);
pub const STALE_LOCK_AFTER: Duration = Duration::from_secs(10);

/// Removes the lock file when the write cycle ends.
struct WriteLock {
    path: PathBuf,
}

impl Drop for WriteLock {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            warn!(path = %self.path.display(), error = %e, "release storage lock failed");
        }
    }
}

impl FileKeyValueStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .await
                .with_context(|| format!("create storage dir failed: {}", dir.display()))?;
        }
        Ok(())
    }

    fn lock_path(&self) -> PathBuf {
        self.path.with_extension("json.lock")
    }

    async fn lock_is_stale(lock_path: &Path) -> bool {
        fs::metadata(lock_path)
            .await
            .ok()
            .and_then(|m| m.modified().ok())
            .and_then(|t| t.elapsed().ok())
            .is_some_and(|age| age > STALE_LOCK_AFTER)
    }

    async fn acquire_write_lock(&self) -> Result<WriteLock> {
        self.ensure_parent_dir().await?;
        let lock_path = self.lock_path();
        loop {
            match OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&lock_path)
                .await
            {
                Ok(_) => return Ok(WriteLock { path: lock_path }),
                Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                    if Self::lock_is_stale(&lock_path).await {
                        warn!(path = %lock_path.display(), "breaking stale storage lock");
                        let _ = fs::remove_file(&lock_path).await;
                        continue;
                    }
                    tokio::time::sleep(LOCK_RETRY_INTERVAL).await;
                }
                Err(e) => {
                    return Err(e).with_context(|| {
                        format!("acquire storage lock failed: {}", lock_path.display())
                    })
                }
            }
        }
    }

    async fn read_all(&self) -> Result<Map<String, Value>> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("read storage failed: {}", self.path.display()))
            }
        };
        if content.trim().is_empty() {
            return Ok(Map::new());
        }
        serde_json::from_str(&content)
            .with_context(|| format!("parse storage failed: {}", self.path.display()))
    }

    async fn atomic_write(&self, entries: &Map<String, Value>) -> Result<()> {
        self.ensure_parent_dir().await?;
        let content = serde_json::to_string_pretty(entries).context("serialize storage failed")?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content)
            .await
            .with_context(|| format!("write temp storage failed: {}", tmp_path.display()))?;
        fs::rename(&tmp_path, &self.path).await.with_context(|| {
            format!(
                "rename temp storage to target failed: {} -> {}",
                tmp_path.display(),
                self.path.display()
            )
        })?;
        debug!(path = %self.path.display(), keys = entries.len(), "storage written");
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<Value>> {
        let _guard = self.lock.lock().await;
        Ok(self.read_all().await?.remove(key))
    }

    async fn get_all(&self) -> Result<Map<String, Value>> {
        let _guard = self.lock.lock().await;
        self.read_all().await
    }

    async fn set(&self, entries: Map<String, Value>) -> Result<()> {
        let _guard = self.lock.lock().await;
        let _file_lock = self.acquire_write_lock().await?;
        let mut all = self.read_all().await?;
        all.extend(entries);
        self.atomic_write(&all).await
    }

    async fn remove(&self, keys: &[&str]) -> Result<()> {
        let _guard = self.lock.lock().await;
        let _file_lock = self.acquire_write_lock().await?;
        let mut all = self.read_all().await?;
        let before = all.len();
        for key in keys {
            all.remove(*key);
        }
        if all.len() == before {
            return Ok(());
        }
        self.atomic_write(&all).await
    }
}
