use std::sync::Mutex;

use async_trait::async_trait;

use crate::{
    domain::{FileRecord, MediaKind, RecordId, UserId},
    errors::Error,
    store::FileStore,
    Result,
};

#[derive(Debug, Default)]
struct Inner {
    next_id: i64,
    records: Vec<FileRecord>,
}

/// `FileStore` kept in process memory.
///
/// Same semantics as the SQLite store; used by tests and as a throwaway store.
#[derive(Debug, Default)]
pub struct InMemoryFileStore {
    inner: Mutex<Inner>,
}

impl InMemoryFileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every record, in insertion order.
    #[cfg(test)]
    fn records(&self) -> Result<Vec<FileRecord>> {
        Ok(self.lock()?.records.clone())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|_| Error::StorageUnavailable("in-memory store lock poisoned".to_string()))
    }
}

fn matches(r: &FileRecord, owner: UserId, kind: MediaKind) -> bool {
    r.owner_id == owner && r.kind == kind
}

#[async_trait]
impl FileStore for InMemoryFileStore {
    async fn put(&self, owner: UserId, kind: MediaKind, token: &str) -> Result<RecordId> {
        let mut inner = self.lock()?;
        inner.next_id += 1;
        let id = RecordId(inner.next_id);
        inner.records.push(FileRecord {
            id,
            owner_id: owner,
            kind,
            token: token.to_string(),
        });
        Ok(id)
    }

    async fn list(&self, owner: UserId, kind: MediaKind) -> Result<Vec<String>> {
        let inner = self.lock()?;
        Ok(inner
            .records
            .iter()
            .filter(|r| matches(r, owner, kind))
            .map(|r| r.token.clone())
            .collect())
    }

    async fn delete_all(&self, owner: UserId, kind: MediaKind) -> Result<u64> {
        let mut inner = self.lock()?;
        let before = inner.records.len();
        inner.records.retain(|r| !matches(r, owner, kind));
        Ok((before - inner.records.len()) as u64)
    }

    async fn delete_one(&self, owner: UserId, kind: MediaKind, token: &str) -> Result<bool> {
        let mut inner = self.lock()?;
        let before = inner.records.len();
        inner
            .records
            .retain(|r| !(matches(r, owner, kind) && r.token == token));
        Ok(inner.records.len() < before)
    }
}
