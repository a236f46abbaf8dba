//! Repository Layer - Core Traits
//!
//! Defines the abstract interface for the remote record store.
//! Implementations can use Airtable, SQLite, etc.

use async_trait::async_trait;
use zeiglist_core::{DomainResult, StoredRecord};

/// A stored record together with the id the store assigned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedRecord {
    pub id: String,
    pub record: StoredRecord,
}

/// Saved-list record store
///
/// Records are write-once: there is no update or delete.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Store a new record, returning its id
    async fn create(&self, record: &StoredRecord) -> DomainResult<String>;

    /// Find record by ID
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<StoredRecord>>;

    /// List all records
    async fn list(&self) -> DomainResult<Vec<SavedRecord>>;

    /// Cheap connectivity check used at startup
    async fn ping(&self) -> DomainResult<()>;
}
