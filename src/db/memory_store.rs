use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::db::{Class, MockData, NewClass, NewUser, Store, StoreError, User};

/// Process-local store; the document lives as long as the value does.
#[derive(Default)]
pub struct MemoryStore {
    data: RwLock<MockData>,
}

impl MemoryStore {
    pub fn new(data: MockData) -> Self {
        Self {
            data: RwLock::new(data),
        }
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn get_users(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.data.read().await.users.clone())
    }

    async fn get_user(&self, id: i64) -> Result<Option<User>, StoreError> {
        Ok(self.data.read().await.user(id).cloned())
    }

    async fn create_user(&self, params: NewUser) -> Result<User, StoreError> {
        self.data.write().await.push_user(params)
    }

    async fn get_classes(&self) -> Result<Vec<Class>, StoreError> {
        Ok(self.data.read().await.classes.clone())
    }

    async fn get_class(&self, id: i64) -> Result<Option<Class>, StoreError> {
        Ok(self.data.read().await.class(id).cloned())
    }

    async fn create_class(&self, params: NewClass) -> Result<Class, StoreError> {
        self.data.write().await.push_class(params)
    }

    async fn reset(&self, data: &MockData) -> Result<(), StoreError> {
        *self.data.write().await = data.clone();
        Ok(())
    }
}
