//! Remote Record Schema
//!
//! Translation between the list as the browser sends it and the flat record
//! kept by the store: `tasks` travels as an array but is stored as a JSON
//! string, and `createdAt` is normalized to ISO-8601 UTC.

use serde::{Deserialize, Serialize};

use crate::entity::{DomainError, DomainResult};
use crate::document::validate_list;
use crate::list::{ZeigList, DEFAULT_TITLE};
use crate::task::Task;
use crate::timestamp::{format_iso, parse_iso, Timestamp};

pub const INVALID_DATA_MESSAGE: &str = "Invalid data format.";

/// Body of `POST /api/save-to-airtable`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveListRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tasks: Option<Vec<Task>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_date_time: Option<String>,
}

impl SaveListRequest {
    pub fn from_list(list: &ZeigList) -> Self {
        Self {
            title: Some(list.title.clone()),
            tasks: Some(list.tasks.clone()),
            created_at: Some(format_iso(&list.created_at)),
            event_date_time: Some(list.event_date_time.clone()),
        }
    }
}

/// `{message}` body used for acknowledgements and errors alike.
/// A successful save also reports the id the store assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl SaveResponse {
    pub fn message(message: impl Into<String>) -> Self {
        Self { message: message.into(), id: None }
    }
}

/// Row of `GET /api/saved-lists`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedListSummary {
    pub id: String,
    pub title: String,
    pub created_at: String,
    pub link: String,
}

/// Body of `GET /api/saved-lists/:id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedList {
    pub id: String,
    pub title: String,
    pub tasks: Vec<Task>,
    pub created_at: String,
    #[serde(default)]
    pub event_date_time: String,
}

impl SavedList {
    /// Rebuild an editable list; blank fields fall back to the defaults.
    /// Tasks go through the same checks as an uploaded file.
    pub fn into_list(self, now: Timestamp) -> DomainResult<ZeigList> {
        let list = ZeigList {
            title: if self.title.is_empty() {
                DEFAULT_TITLE.to_string()
            } else {
                self.title
            },
            tasks: self.tasks,
            created_at: parse_iso(&self.created_at).unwrap_or(now),
            event_date_time: self.event_date_time,
        };
        validate_list(&list)?;
        Ok(list)
    }
}

/// Flat record as kept by the record store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredRecord {
    pub title: String,
    /// JSON-encoded task array
    pub tasks: String,
    /// ISO-8601 UTC
    pub created_at: String,
    /// Empty when no countdown is set
    pub event_date_time: String,
}

impl StoredRecord {
    /// Validate a save request and encode it for storage
    pub fn from_request(request: SaveListRequest) -> DomainResult<Self> {
        let invalid = || DomainError::InvalidInput(INVALID_DATA_MESSAGE.to_string());

        let title = request.title.filter(|t| !t.is_empty()).ok_or_else(invalid)?;
        let tasks = request.tasks.ok_or_else(invalid)?;
        let created_at = request
            .created_at
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(invalid)?;
        let created_at = parse_iso(&created_at).map_err(|_| invalid())?;

        let mut check = ZeigList::new(created_at);
        check.tasks = tasks;
        validate_list(&check).map_err(|_| invalid())?;
        let tasks = check.tasks;

        Ok(Self {
            title,
            tasks: serde_json::to_string(&tasks).map_err(|e| DomainError::Internal(e.to_string()))?,
            created_at: format_iso(&created_at),
            event_date_time: request.event_date_time.unwrap_or_default(),
        })
    }

    /// Decode the stored task string back into structured data
    pub fn decode_tasks(&self) -> DomainResult<Vec<Task>> {
        if self.tasks.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&self.tasks)
            .map_err(|e| DomainError::Internal(format!("stored tasks are not valid JSON: {}", e)))
    }

    pub fn into_saved_list(self, id: String) -> DomainResult<SavedList> {
        let tasks = self.decode_tasks()?;
        Ok(SavedList {
            id,
            title: self.title,
            tasks,
            created_at: self.created_at,
            event_date_time: self.event_date_time,
        })
    }

    /// Summary row; `base_url` is `{scheme}://{host}` of the incoming request
    pub fn summary(&self, id: &str, base_url: &str) -> SavedListSummary {
        SavedListSummary {
            id: id.to_string(),
            title: self.title.clone(),
            created_at: self.created_at.clone(),
            link: format!("{}/api/saved-lists/{}", base_url.trim_end_matches('/'), id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timestamp::now;

    fn request(json: &str) -> SaveListRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_from_request_encodes_tasks_as_string() {
        let record = StoredRecord::from_request(request(
            r#"{"title":"T","tasks":[{"id":"a","text":"x","completed":false,"subtasks":[]}],"createdAt":"2024-01-01T00:00:00.000Z"}"#,
        ))
        .unwrap();

        assert_eq!(record.title, "T");
        assert_eq!(record.tasks, r#"[{"id":"a","text":"x","completed":false,"subtasks":[]}]"#);
        assert_eq!(record.created_at, "2024-01-01T00:00:00.000Z");
        assert_eq!(record.event_date_time, "");
    }

    #[test]
    fn test_created_at_normalized() {
        let record = StoredRecord::from_request(request(
            r#"{"title":"T","tasks":[],"createdAt":"2024-06-01T12:00:00+02:00","eventDateTime":"2024-06-02T09:30"}"#,
        ))
        .unwrap();
        assert_eq!(record.created_at, "2024-06-01T10:00:00.000Z");
        assert_eq!(record.event_date_time, "2024-06-02T09:30");
    }

    #[test]
    fn test_missing_fields_rejected() {
        for body in [
            r#"{"tasks":[],"createdAt":"2024-01-01T00:00:00.000Z"}"#,
            r#"{"title":"","tasks":[],"createdAt":"2024-01-01T00:00:00.000Z"}"#,
            r#"{"title":"T","createdAt":"2024-01-01T00:00:00.000Z"}"#,
            r#"{"title":"T","tasks":[]}"#,
        ] {
            let err = StoredRecord::from_request(request(body)).unwrap_err();
            assert_eq!(err, DomainError::InvalidInput(INVALID_DATA_MESSAGE.to_string()));
        }
    }

    #[test]
    fn test_saved_list_decodes_tasks() {
        let mut list = ZeigList::new(now());
        list.add_task("remote", now());
        let record = StoredRecord::from_request(SaveListRequest::from_list(&list)).unwrap();

        let saved = record.into_saved_list("rec1".to_string()).unwrap();
        assert_eq!(saved.id, "rec1");
        assert_eq!(saved.tasks.len(), 1);
        assert_eq!(saved.tasks[0].text, "remote");

        let rebuilt = saved.into_list(now()).unwrap();
        assert_eq!(rebuilt.title, list.title);
        assert_eq!(rebuilt.tasks[0].id, list.tasks[0].id);
    }

    #[test]
    fn test_inconsistent_stored_tasks_rejected_on_load() {
        let record = StoredRecord {
            title: "T".to_string(),
            tasks: r#"[{"id":"a","text":"x","completed":true},{"id":"a","text":"y","completed":false}]"#
                .to_string(),
            created_at: "2024-01-01T00:00:00.000Z".to_string(),
            event_date_time: String::new(),
        };
        let saved = record.into_saved_list("rec2".to_string()).unwrap();
        let err = saved.into_list(now()).unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidInput("task 'a' is completed but has no completedTime".to_string())
        );
    }

    #[test]
    fn test_save_rejects_duplicate_ids() {
        let err = StoredRecord::from_request(request(
            r#"{"title":"T","tasks":[{"id":"a","text":"x","completed":false},{"id":"a","text":"y","completed":false}],"createdAt":"2024-01-01T00:00:00.000Z"}"#,
        ))
        .unwrap_err();
        assert_eq!(err, DomainError::InvalidInput(INVALID_DATA_MESSAGE.to_string()));
    }

    #[test]
    fn test_empty_task_string_decodes_to_empty() {
        let record = StoredRecord {
            title: "T".to_string(),
            tasks: String::new(),
            created_at: "2024-01-01T00:00:00.000Z".to_string(),
            event_date_time: String::new(),
        };
        assert!(record.decode_tasks().unwrap().is_empty());
    }

    #[test]
    fn test_summary_link() {
        let record = StoredRecord {
            title: "T".to_string(),
            tasks: "[]".to_string(),
            created_at: "2024-01-01T00:00:00.000Z".to_string(),
            event_date_time: String::new(),
        };
        let summary = record.summary("rec9", "http://localhost:5001/");
        assert_eq!(summary.link, "http://localhost:5001/api/saved-lists/rec9");
        assert_eq!(summary.title, "T");
    }
}
