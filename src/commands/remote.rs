//! Remote List Commands
//!
//! Frontend bindings for the record-store proxy. Calls are one-shot: no
//! retry, and a failure leaves the caller's state untouched.

use serde::de::DeserializeOwned;

use crate::models::{SaveListRequest, SaveResponse, SavedList, SavedListSummary, ZeigList};

const SAVE_PATH: &str = "/api/save-to-airtable";
const SAVED_LISTS_PATH: &str = "/api/saved-lists";

/// reqwest on wasm needs absolute URLs
fn api_url(path: &str) -> Result<String, String> {
    let origin = web_sys::window()
        .ok_or("no window")?
        .location()
        .origin()
        .map_err(|e| format!("{:?}", e))?;
    Ok(format!("{}{}", origin, path))
}

/// Read the body, failing on non-2xx with the status detail
async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, String> {
    let status = response.status();
    let raw = response.text().await.map_err(|e| e.to_string())?;
    web_sys::console::log_1(&format!("[REMOTE] {} raw response: {}", status.as_u16(), raw).into());

    if !status.is_success() {
        return Err(format!(
            "Fetch failed: {} - {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("")
        ));
    }
    serde_json::from_str(&raw).map_err(|e| e.to_string())
}

pub async fn save_list(list: &ZeigList) -> Result<SaveResponse, String> {
    let body = SaveListRequest::from_list(list);
    let response = reqwest::Client::new()
        .post(api_url(SAVE_PATH)?)
        .json(&body)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(response).await
}

pub async fn list_saved() -> Result<Vec<SavedListSummary>, String> {
    let response = reqwest::Client::new()
        .get(api_url(SAVED_LISTS_PATH)?)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(response).await
}

/// `Ok(None)` when the server does not know the id
pub async fn fetch_saved(id: &str) -> Result<Option<SavedList>, String> {
    let response = reqwest::Client::new()
        .get(api_url(&format!("{}/{}", SAVED_LISTS_PATH, id))?)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if response.status() == reqwest::StatusCode::NOT_FOUND {
        return Ok(None);
    }
    read_json(response).await.map(Some)
}
