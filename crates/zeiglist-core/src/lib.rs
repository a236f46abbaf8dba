//! Zeiglist Core
//!
//! Domain layer shared by the frontend and the server:
//! - task / subtask entities and the ordered list model
//! - progress aggregation
//! - file and remote record schemas
//! - countdown math
//!
//! This crate has no UI or IO dependencies.

mod entity;
mod timestamp;
mod task;
mod list;
mod progress;
mod document;
mod record;
mod countdown;

pub use entity::{move_entry, DomainError, DomainResult, Entry};
pub use timestamp::{format_iso, now, parse_iso, Timestamp};
pub use task::{new_id, Subtask, Task};
pub use list::{ZeigList, DEFAULT_TITLE};
pub use progress::Progress;
pub use document::{download_file_name, parse_upload, sanitize_title, validate_list};
pub use record::{
    SaveListRequest, SaveResponse, SavedList, SavedListSummary, StoredRecord, INVALID_DATA_MESSAGE,
};
pub use countdown::{Countdown, CountdownState, Remaining, DAILY_DEADLINE, TIME_IS_UP};
