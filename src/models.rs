//! Frontend Models
//!
//! Data structures shared with the server through `zeiglist-core`.

pub use zeiglist_core::{
    Countdown, CountdownState, SaveListRequest, SaveResponse, SavedList, SavedListSummary,
    Subtask, Task, ZeigList,
};
