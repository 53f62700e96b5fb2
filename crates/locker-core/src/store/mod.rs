//! Per-owner file-reference store.
//!
//! The store is the only component that touches persistence. Callers never
//! cache what it returns: every read goes back to the store.

use async_trait::async_trait;

use crate::{
    domain::{MediaKind, RecordId, UserId},
    Result,
};

pub mod memory;

/// Hexagonal port for file-reference persistence.
///
/// Each call is a single self-contained transaction, so interleaved calls from
/// different owners never interfere. Every failure is
/// [`Error::StorageUnavailable`](crate::Error::StorageUnavailable).
#[async_trait]
pub trait FileStore: Send + Sync {
    /// Append a new record. Duplicate tokens are stored as separate records.
    async fn put(&self, owner: UserId, kind: MediaKind, token: &str) -> Result<RecordId>;

    /// Tokens for `owner`/`kind` in insertion order; empty when none exist.
    async fn list(&self, owner: UserId, kind: MediaKind) -> Result<Vec<String>>;

    /// Remove every record for `owner`/`kind` and return how many went away.
    async fn delete_all(&self, owner: UserId, kind: MediaKind) -> Result<u64>;

    /// Remove every record matching the full triple. Returns whether anything
    /// was removed.
    async fn delete_one(&self, owner: UserId, kind: MediaKind, token: &str) -> Result<bool>;
}
