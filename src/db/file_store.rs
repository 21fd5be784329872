use std::ffi::OsString;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::db::{Class, MockData, NewClass, NewUser, Store, StoreError, User};

/// Store backed by a single JSON document on disk.
///
/// Every call re-reads the file, so an external overwrite (a seed reset) is
/// visible to the next request. Mutations rewrite the whole document.
pub struct JsonFileStore {
    path: PathBuf,
    // Held across read-modify-write so concurrent creates cannot drop records.
    writer: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            writer: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn load(&self) -> Result<MockData, StoreError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| StoreError::Io {
                path: self.path.clone(),
                source,
            })?;

        serde_json::from_slice(&bytes).map_err(|source| StoreError::Malformed {
            path: self.path.clone(),
            source,
        })
    }

    /// Writes a sibling temp file and renames it over the store so readers
    /// never see a partial document.
    async fn save(&self, data: &MockData) -> Result<(), StoreError> {
        let body = serde_json::to_vec_pretty(data).map_err(|source| StoreError::Encode {
            path: self.path.clone(),
            source,
        })?;

        let tmp = self.temp_path();
        tokio::fs::write(&tmp, body)
            .await
            .map_err(|source| StoreError::Io {
                path: tmp.clone(),
                source,
            })?;

        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|source| StoreError::Io {
                path: self.path.clone(),
                source,
            })
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = OsString::from(".");
        name.push(self.path.file_name().unwrap_or_default());
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Nothing is written when `apply` fails.
    async fn update<T>(
        &self,
        apply: impl FnOnce(&mut MockData) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let _guard = self.writer.lock().await;
        let mut data = self.load().await?;
        let out = apply(&mut data)?;
        self.save(&data).await?;
        Ok(out)
    }
}

#[async_trait]
impl Store for JsonFileStore {
    async fn get_users(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.load().await?.users)
    }

    async fn get_user(&self, id: i64) -> Result<Option<User>, StoreError> {
        Ok(self.load().await?.user(id).cloned())
    }

    async fn create_user(&self, params: NewUser) -> Result<User, StoreError> {
        let user = self.update(|data| data.push_user(params)).await?;
        tracing::debug!(id = user.id, path = %self.path.display(), "user created");
        Ok(user)
    }

    async fn get_classes(&self) -> Result<Vec<Class>, StoreError> {
        Ok(self.load().await?.classes)
    }

    async fn get_class(&self, id: i64) -> Result<Option<Class>, StoreError> {
        Ok(self.load().await?.class(id).cloned())
    }

    async fn create_class(&self, params: NewClass) -> Result<Class, StoreError> {
        let class = self.update(|data| data.push_class(params)).await?;
        tracing::debug!(id = class.id, path = %self.path.display(), "class created");
        Ok(class)
    }

    async fn reset(&self, data: &MockData) -> Result<(), StoreError> {
        let _guard = self.writer.lock().await;
        self.save(data).await
    }
}
