//! Data access for users and classes.
//!
//! Handlers talk to a [`Store`] and never to a backing medium directly, so the
//! JSON file, the in-memory document and SQLite are interchangeable.

pub mod error;
pub mod file_store;
pub mod memory_store;
pub mod models;
pub mod sqlite;

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::StoreConfig;

pub use error::StoreError;
pub use file_store::JsonFileStore;
pub use memory_store::MemoryStore;
pub use models::{Class, MockData, NewClass, NewUser, User};
pub use sqlite::SqliteStore;

#[async_trait]
pub trait Store: Send + Sync {
    /// All users in insertion order.
    async fn get_users(&self) -> Result<Vec<User>, StoreError>;

    /// `Ok(None)` when no user has this id.
    async fn get_user(&self, id: i64) -> Result<Option<User>, StoreError>;

    /// Appends a user with the next free id and returns it once persisted.
    async fn create_user(&self, params: NewUser) -> Result<User, StoreError>;

    async fn get_classes(&self) -> Result<Vec<Class>, StoreError>;

    async fn get_class(&self, id: i64) -> Result<Option<Class>, StoreError>;

    async fn create_class(&self, params: NewClass) -> Result<Class, StoreError>;

    /// Replaces both collections with `data`, ids included.
    async fn reset(&self, data: &MockData) -> Result<(), StoreError>;
}

/// Opens the backend selected by configuration.
pub async fn open(config: &StoreConfig) -> Result<Arc<dyn Store>, StoreError> {
    let store: Arc<dyn Store> = match config {
        StoreConfig::JsonFile(path) => {
            tracing::info!(path = %path.display(), "using JSON file store");
            Arc::new(JsonFileStore::new(path.clone()))
        }
        StoreConfig::Sqlite(url) => {
            tracing::info!(url = %url, "using SQLite store");
            Arc::new(SqliteStore::connect(url).await?)
        }
    };
    Ok(store)
}
