//! SQLite Record Store
//!
//! Local stand-in for the hosted store; ids are `rec` + a UUID without dashes.

use std::sync::Arc;

use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension, Row};
use tokio::sync::Mutex;
use zeiglist_core::{DomainError, DomainResult, StoredRecord};

use super::traits::{RecordStore, SavedRecord};

/// SQLite-backed record store
pub struct SqliteStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }
}

fn db_err(e: rusqlite::Error) -> DomainError {
    DomainError::Internal(e.to_string())
}

fn row_to_record(row: &Row<'_>) -> rusqlite::Result<StoredRecord> {
    Ok(StoredRecord {
        title: row.get(0)?,
        tasks: row.get(1)?,
        created_at: row.get(2)?,
        event_date_time: row.get(3)?,
    })
}

fn new_record_id() -> String {
    format!("rec{}", uuid::Uuid::new_v4().simple())
}

#[async_trait]
impl RecordStore for SqliteStore {
    async fn create(&self, record: &StoredRecord) -> DomainResult<String> {
        let conn = self.conn.lock().await;
        let id = new_record_id();

        conn.execute(
            "INSERT INTO saved_lists (id, title, tasks, created_at, event_date_time, seq)
             VALUES (?1, ?2, ?3, ?4, ?5, (SELECT COALESCE(MAX(seq), 0) + 1 FROM saved_lists))",
            params![id, record.title, record.tasks, record.created_at, record.event_date_time],
        )
        .map_err(db_err)?;

        Ok(id)
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<StoredRecord>> {
        let conn = self.conn.lock().await;
        conn.query_row(
            "SELECT title, tasks, created_at, event_date_time FROM saved_lists WHERE id = ?1",
            params![id],
            row_to_record,
        )
        .optional()
        .map_err(db_err)
    }

    async fn list(&self) -> DomainResult<Vec<SavedRecord>> {
        let conn = self.conn.lock().await;
        let mut stmt = conn
            .prepare("SELECT title, tasks, created_at, event_date_time, id FROM saved_lists ORDER BY seq")
            .map_err(db_err)?;

        let rows = stmt
            .query_map([], |row| {
                Ok(SavedRecord {
                    id: row.get(4)?,
                    record: row_to_record(row)?,
                })
            })
            .map_err(db_err)?;

        rows.collect::<rusqlite::Result<Vec<_>>>().map_err(db_err)
    }

    async fn ping(&self) -> DomainResult<()> {
        let conn = self.conn.lock().await;
        conn.query_row("SELECT COUNT(*) FROM saved_lists", [], |row| row.get::<_, i64>(0))
            .map(|_| ())
            .map_err(db_err)
    }
}
