//! Repository Layer
//!
//! Record store abstraction and its implementations.

mod traits;
mod db;
mod sqlite_store;
mod airtable_store;


pub use traits::{RecordStore, SavedRecord};
pub use db::init_db;
pub use sqlite_store::SqliteStore;
pub use airtable_store::AirtableStore;
