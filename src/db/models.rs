use serde::{Deserialize, Serialize};

use crate::db::StoreError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub last: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Class {
    pub id: i64,
    pub name: String,
}

/// Fields a caller supplies when creating a user; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub last: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewClass {
    pub name: String,
}

/// The whole store document: both collections, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockData {
    pub users: Vec<User>,
    pub classes: Vec<Class>,
}

impl MockData {
    pub fn user(&self, id: i64) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn class(&self, id: i64) -> Option<&Class> {
        self.classes.iter().find(|c| c.id == id)
    }

    /// One past the highest id in use, so seeds with gaps never collide.
    pub fn next_user_id(&self) -> Result<i64, StoreError> {
        next_id(self.users.iter().map(|u| u.id), "users")
    }

    pub fn next_class_id(&self) -> Result<i64, StoreError> {
        next_id(self.classes.iter().map(|c| c.id), "classes")
    }

    pub fn push_user(&mut self, params: NewUser) -> Result<User, StoreError> {
        let user = User {
            id: self.next_user_id()?,
            name: params.name,
            last: params.last,
        };
        self.users.push(user.clone());
        Ok(user)
    }

    pub fn push_class(&mut self, params: NewClass) -> Result<Class, StoreError> {
        let class = Class {
            id: self.next_class_id()?,
            name: params.name,
        };
        self.classes.push(class.clone());
        Ok(class)
    }
}

fn next_id(ids: impl Iterator<Item = i64>, collection: &'static str) -> Result<i64, StoreError> {
    ids.max()
        .unwrap_or(0)
        .checked_add(1)
        .ok_or(StoreError::IdExhausted { collection })
}
