//! Saved List Handlers
//!
//! Translates between the browser's JSON and the record store.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{header, HeaderMap};
use axum::Json;
use tracing::{error, info, warn};
use zeiglist_core::{SaveListRequest, SaveResponse, SavedList, SavedListSummary, StoredRecord};

use crate::error::ApiError;
use crate::AppState;

pub const SAVED_MESSAGE: &str = "Data saved to Airtable successfully!";
pub const SAVE_FAILED_MESSAGE: &str = "Failed to save data to Airtable.";
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch data from Airtable.";
pub const NOT_FOUND_MESSAGE: &str = "List not found.";

/// `{scheme}://{host}` as seen by the client
pub fn request_base_url(headers: &HeaderMap) -> String {
    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("http");
    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("localhost");
    format!("{}://{}", scheme, host)
}

/// POST /api/save-to-airtable
pub async fn save_list(
    State(state): State<AppState>,
    payload: Result<Json<SaveListRequest>, JsonRejection>,
) -> Result<Json<SaveResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| {
        warn!(error = %e, "rejected save body");
        ApiError::from(e)
    })?;

    let record = StoredRecord::from_request(request)?;
    let id = state.store.create(&record).await.map_err(|e| {
        error!(error = %e, "failed to save list");
        ApiError::internal(SAVE_FAILED_MESSAGE)
    })?;

    info!(id = %id, title = %record.title, "list saved");
    Ok(Json(SaveResponse {
        message: SAVED_MESSAGE.to_string(),
        id: Some(id),
    }))
}

/// GET /api/saved-lists
pub async fn list_saved_lists(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<SavedListSummary>>, ApiError> {
    let records = state.store.list().await.map_err(|e| {
        error!(error = %e, "failed to list saved lists");
        ApiError::internal(FETCH_FAILED_MESSAGE)
    })?;

    let base_url = request_base_url(&headers);
    let summaries: Vec<_> = records
        .iter()
        .map(|saved| saved.record.summary(&saved.id, &base_url))
        .collect();

    info!(count = summaries.len(), "saved lists fetched");
    Ok(Json(summaries))
}

/// GET /api/saved-lists/:id
pub async fn get_saved_list(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SavedList>, ApiError> {
    let record = state.store.find_by_id(&id).await.map_err(|e| {
        error!(id = %id, error = %e, "failed to fetch saved list");
        ApiError::internal(FETCH_FAILED_MESSAGE)
    })?;

    let Some(record) = record else {
        info!(id = %id, "saved list not found");
        return Err(ApiError::not_found(NOT_FOUND_MESSAGE));
    };

    let list = record.into_saved_list(id).map_err(|e| {
        error!(error = %e, "stored list could not be decoded");
        ApiError::from(e)
    })?;

    info!(id = %list.id, tasks = list.tasks.len(), "saved list fetched");
    Ok(Json(list))
}
