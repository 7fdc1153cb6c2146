use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store backend error: {0}")]
    Backend(String),
}

/// Key-value persistence contract for session state.
///
/// Mirrors the shape of a browser-local storage area: string keys, string
/// values, no transactions. A write failure (quota, disabled storage) is
/// reported but never fatal to the caller.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    async fn put(&self, key: &str, value: &str) -> Result<(), StoreError>;

    async fn remove(&self, key: &str) -> Result<(), StoreError>;

    async fn clear(&self) -> Result<(), StoreError>;
}
