use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::store::{SessionStore, StoreError};

/// In-memory store backend. The fake used by tests and by callers that do
/// not want persistence at all.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| StoreError::Backend("store mutex poisoned".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    async fn put(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| StoreError::Backend("store mutex poisoned".to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| StoreError::Backend("store mutex poisoned".to_string()))?;
        entries.remove(key);
        Ok(())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| StoreError::Backend("store mutex poisoned".to_string()))?;
        entries.clear();
        Ok(())
    }
}
