use std::str::FromStr;

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::db::{Class, MockData, NewClass, NewUser, Store, StoreError, User};

/// Store backed by SQLite. Ids come from `INTEGER PRIMARY KEY`, which picks
/// one past the current maximum just like the file store does.
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Opens (creating if needed) the database at `db_url` and ensures the
    /// tables exist.
    pub async fn connect(db_url: &str) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(db_url)?.create_if_missing(true);

        // An in-memory database exists per connection, so it must stay on one
        // connection that is never recycled.
        let max_connections = if db_url.contains(":memory:") { 1 } else { 5 };
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.create_tables().await?;
        Ok(store)
    }

    async fn create_tables(&self) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                last TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS classes (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl Store for SqliteStore {
    async fn get_users(&self) -> Result<Vec<User>, StoreError> {
        let users = sqlx::query_as::<_, User>("SELECT id, name, last FROM users ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(users)
    }

    async fn get_user(&self, id: i64) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>("SELECT id, name, last FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn create_user(&self, params: NewUser) -> Result<User, StoreError> {
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (name, last) VALUES (?, ?) RETURNING id, name, last",
        )
        .bind(&params.name)
        .bind(&params.last)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(id = user.id, "user created");
        Ok(user)
    }

    async fn get_classes(&self) -> Result<Vec<Class>, StoreError> {
        let classes = sqlx::query_as::<_, Class>("SELECT id, name FROM classes ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(classes)
    }

    async fn get_class(&self, id: i64) -> Result<Option<Class>, StoreError> {
        let class = sqlx::query_as::<_, Class>("SELECT id, name FROM classes WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(class)
    }

    async fn create_class(&self, params: NewClass) -> Result<Class, StoreError> {
        let class = sqlx::query_as::<_, Class>(
            "INSERT INTO classes (name) VALUES (?) RETURNING id, name",
        )
        .bind(&params.name)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(id = class.id, "class created");
        Ok(class)
    }

    async fn reset(&self, data: &MockData) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM users").execute(&mut *tx).await?;
        sqlx::query("DELETE FROM classes").execute(&mut *tx).await?;

        for user in &data.users {
            sqlx::query("INSERT INTO users (id, name, last) VALUES (?, ?, ?)")
                .bind(user.id)
                .bind(&user.name)
                .bind(&user.last)
                .execute(&mut *tx)
                .await?;
        }
        for class in &data.classes {
            sqlx::query("INSERT INTO classes (id, name) VALUES (?, ?)")
                .bind(class.id)
                .bind(&class.name)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(())
    }
}
