//! Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The active list
//! lives here and is only mutated through the helpers below.

use leptos::prelude::*;
use reactive_stores::Store;
use zeiglist_core::now;

use crate::models::{Task, ZeigList};

/// Application state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct AppState {
    /// The list being edited
    pub list: ZeigList,
    /// Record id once the list was saved to or opened from the server
    pub remote_id: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            list: ZeigList::new(now()),
            remote_id: None,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Swap in a whole list (upload, fetch, or "new list")
pub fn store_replace_list(store: &AppStore, list: ZeigList, remote_id: Option<String>) {
    *store.list().write() = list;
    *store.remote_id().write() = remote_id;
}

pub fn store_set_title(store: &AppStore, title: &str) {
    store.list().write().set_title(title);
}

pub fn store_set_event_date_time(store: &AppStore, value: &str) {
    store.list().write().set_event_date_time(value);
}

pub fn store_add_task(store: &AppStore, text: &str) -> bool {
    store.list().write().add_task(text, now()).is_some()
}

pub fn store_toggle_task(store: &AppStore, task_id: &str) {
    store.list().write().toggle_task(task_id, now());
}

pub fn store_rename_task(store: &AppStore, task_id: &str, text: &str) {
    store.list().write().rename_task(task_id, text);
}

/// Remove a task and its subtasks from the store by ID
pub fn store_delete_task(store: &AppStore, task_id: &str) {
    store.list().write().delete_task(task_id);
}

/// Store a new task order; rejected orders leave the list as it was
pub fn store_reorder_tasks(store: &AppStore, new_order: Vec<Task>) {
    if let Err(e) = store.list().write().reorder_tasks(new_order) {
        web_sys::console::warn_1(&format!("[STORE] reorder rejected: {}", e).into());
    }
}

pub fn store_add_subtask(store: &AppStore, task_id: &str, text: &str) -> bool {
    store.list().write().add_subtask(task_id, text, now()).is_some()
}

pub fn store_toggle_subtask(store: &AppStore, task_id: &str, subtask_id: &str) {
    store.list().write().toggle_subtask(task_id, subtask_id, now());
}

pub fn store_rename_subtask(store: &AppStore, task_id: &str, subtask_id: &str, text: &str) {
    store.list().write().rename_subtask(task_id, subtask_id, text);
}

pub fn store_delete_subtask(store: &AppStore, task_id: &str, subtask_id: &str) {
    store.list().write().delete_subtask(task_id, subtask_id);
}

pub fn store_move_subtask(store: &AppStore, task_id: &str, subtask_id: &str, slot: usize) {
    store.list().write().move_subtask(task_id, subtask_id, slot);
}

pub fn store_set_remote_id(store: &AppStore, remote_id: Option<String>) {
    *store.remote_id().write() = remote_id;
}
