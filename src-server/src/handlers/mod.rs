//! HTTP Handlers
//!
//! Axum handlers for the saved-list API.

mod list_handlers;


pub use list_handlers::{get_saved_list, list_saved_lists, request_base_url, save_list};
