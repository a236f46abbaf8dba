//! Zeiglist Backend
//!
//! Layered architecture:
//! - repository: record store abstraction (Airtable, SQLite)
//! - handlers: axum handlers for the saved-list API
//! - config / error: environment settings and the `{message}` error body
//!
//! Everything that is not an API route is served from the built frontend.

use std::path::Path;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod handlers;
pub mod repository;

use repository::RecordStore;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }
}

/// API routes plus static files with an SPA fallback to `index.html`
pub fn build_router(state: AppState, static_dir: &Path) -> Router {
    let frontend = ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .route("/api/save-to-airtable", post(handlers::save_list))
        .route("/api/saved-lists", get(handlers::list_saved_lists))
        .route("/api/saved-lists/:id", get(handlers::get_saved_list))
        .fallback_service(frontend)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
