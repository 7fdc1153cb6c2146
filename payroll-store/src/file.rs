use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::warn;

use crate::store::{SessionStore, StoreError};

/// File-backed store: one JSON object mapping keys to raw value strings.
///
/// Every mutation rewrites the whole file. There are no partial-write or
/// transactional guarantees; a crash mid-write can leave state from a
/// previous revision, which the session layer tolerates by falling back to
/// defaults.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_map(&self) -> Result<BTreeMap<String, String>, StoreError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(error) => Err(error.into()),
        }
    }

    /// Like `read_map`, but a corrupt file degrades to an empty map so a
    /// write can still proceed. Matches local-storage behavior: a broken
    /// store is overwritten, not fatal.
    async fn read_map_lossy(&self) -> Result<BTreeMap<String, String>, StoreError> {
        match self.read_map().await {
            Ok(map) => Ok(map),
            Err(StoreError::Serialization(error)) => {
                warn!(path = %self.path.display(), %error, "discarding corrupt store file");
                Ok(BTreeMap::new())
            }
            Err(error) => Err(error),
        }
    }

    async fn write_map(
        &self,
        map: &BTreeMap<String, String>,
    ) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(map)?;
        tokio::fs::write(&self.path, raw).await?;
        Ok(())
    }
}

#[async_trait]
impl SessionStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_map().await?.get(key).cloned())
    }

    async fn put(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut map = self.read_map_lossy().await?;
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map).await
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut map = self.read_map_lossy().await?;
        map.remove(key);
        self.write_map(&map).await
    }

    async fn clear(&self) -> Result<(), StoreError> {
        self.write_map(&BTreeMap::new()).await
    }
}
