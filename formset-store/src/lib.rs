//! Asynchronous string key-value storage used to persist form records.

mod error;
mod file;
mod memory;

use async_trait::async_trait;

pub use error::StoreError;
pub use file::FileStore;
pub use memory::MemoryStore;

pub type Result<T> = std::result::Result<T, StoreError>;

/// A string-to-string store addressed by key.
///
/// Removing a key that is not present succeeds.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;
    async fn set(&self, key: &str, value: String) -> Result<()>;
    async fn remove(&self, key: &str) -> Result<()>;
}
