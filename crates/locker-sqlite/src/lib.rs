//! SQLite adapter (sqlx).
//!
//! This crate implements the `locker-core` FileStore port over a single
//! `files` relation.

use std::path::Path;

use async_trait::async_trait;
use sqlx::{sqlite::SqliteConnectOptions, SqlitePool};
use tracing::info;

use locker_core::{
    domain::{MediaKind, RecordId, UserId},
    errors::Error,
    store::FileStore,
    Result,
};

const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS files (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        owner_id INTEGER NOT NULL,
        kind TEXT NOT NULL CHECK (kind IN ('document', 'photo', 'video')),
        token TEXT NOT NULL
    )
"#;

const CREATE_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_files_owner_kind ON files(owner_id, kind)";

#[derive(Clone)]
pub struct SqliteFileStore {
    pool: SqlitePool,
}

impl SqliteFileStore {
    /// Open (creating if missing) the database file and ensure the schema.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Opening SQLite store: {}", path.display());

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        let pool = SqlitePool::connect_with(options)
            .await
            .map_err(map_err)?;

        let store = Self { pool };
        store.init().await?;
        Ok(store)
    }

    async fn init(&self) -> Result<()> {
        for statement in [CREATE_TABLE, CREATE_INDEX] {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(map_err)?;
        }
        Ok(())
    }

    #[cfg(test)]
    fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

fn map_err(e: sqlx::Error) -> Error {
    Error::StorageUnavailable(format!("sqlite error: {e}"))
}

#[async_trait]
impl FileStore for SqliteFileStore {
    async fn put(&self, owner: UserId, kind: MediaKind, token: &str) -> Result<RecordId> {
        let res = sqlx::query("INSERT INTO files (owner_id, kind, token) VALUES (?, ?, ?)")
            .bind(owner.0)
            .bind(kind.as_str())
            .bind(token)
            .execute(&self.pool)
            .await
            .map_err(map_err)?;
        Ok(RecordId(res.last_insert_rowid()))
    }

    async fn list(&self, owner: UserId, kind: MediaKind) -> Result<Vec<String>> {
        let rows: Vec<(String,)> =
            sqlx::query_as("SELECT token FROM files WHERE owner_id = ? AND kind = ? ORDER BY id")
                .bind(owner.0)
                .bind(kind.as_str())
                .fetch_all(&self.pool)
                .await
                .map_err(map_err)?;
        Ok(rows.into_iter().map(|(token,)| token).collect())
    }

    async fn delete_all(&self, owner: UserId, kind: MediaKind) -> Result<u64> {
        let res = sqlx::query("DELETE FROM files WHERE owner_id = ? AND kind = ?")
            .bind(owner.0)
            .bind(kind.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_err)?;
        Ok(res.rows_affected())
    }

    async fn delete_one(&self, owner: UserId, kind: MediaKind, token: &str) -> Result<bool> {
        let res = sqlx::query("DELETE FROM files WHERE owner_id = ? AND kind = ? AND token = ?")
            .bind(owner.0)
            .bind(kind.as_str())
            .bind(token)
            .execute(&self.pool)
            .await
            .map_err(map_err)?;
        Ok(res.rows_affected() > 0)
    }
}
