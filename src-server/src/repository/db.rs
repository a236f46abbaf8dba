//! Database Connection and Setup
//!
//! Opens the SQLite database and runs migrations.

use std::path::Path;

use rusqlite::Connection;

/// Open (or create) the database at `db_path`; `:memory:` gives a private
/// in-memory database.
pub fn init_db(db_path: &Path) -> Result<Connection, String> {
    let conn = Connection::open(db_path)
        .map_err(|e| format!("Failed to open db {}: {}", db_path.display(), e))?;

    run_migrations(&conn)?;

    Ok(conn)
}

/// Check if a column exists in a table
fn column_exists(conn: &Connection, table: &str, column: &str) -> Result<bool, String> {
    let mut stmt = conn
        .prepare(&format!("PRAGMA table_info({})", table))
        .map_err(|e| e.to_string())?;
    let names = stmt
        .query_map([], |row| row.get::<_, String>(1))
        .map_err(|e| e.to_string())?;
    for name in names {
        if name.map_err(|e| e.to_string())? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Run database migrations
fn run_migrations(conn: &Connection) -> Result<(), String> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS saved_lists (
            id TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            tasks TEXT NOT NULL,
            created_at TEXT NOT NULL
        )",
        [],
    )
    .map_err(|e| e.to_string())?;

    // Countdown support came later
    if !column_exists(conn, "saved_lists", "event_date_time")? {
        conn.execute(
            "ALTER TABLE saved_lists ADD COLUMN event_date_time TEXT NOT NULL DEFAULT ''",
            [],
        )
        .map_err(|e| format!("Failed to add event_date_time: {}", e))?;
    }

    // Insertion order for listing
    if !column_exists(conn, "saved_lists", "seq")? {
        conn.execute("ALTER TABLE saved_lists ADD COLUMN seq INTEGER NOT NULL DEFAULT 0", [])
            .map_err(|e| format!("Failed to add seq: {}", e))?;
    }

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_saved_lists_seq ON saved_lists(seq)",
        [],
    )
    .map_err(|e| e.to_string())?;

    Ok(())
}
