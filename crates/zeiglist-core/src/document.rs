//! Local File Documents
//!
//! Upload parsing with strict shape validation, plus the pretty JSON and file
//! name used for downloads.

use std::collections::HashSet;

use serde::Deserialize;

use crate::entity::{DomainError, DomainResult, Entry};
use crate::list::{ZeigList, DEFAULT_TITLE};
use crate::task::Task;
use crate::timestamp::{format_iso, parse_iso, Timestamp};

/// Uploaded document before defaults are applied
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UploadDocument {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    tasks: Option<Vec<Task>>,
    #[serde(default)]
    created_at: Option<String>,
    #[serde(default)]
    event_date_time: Option<String>,
}

/// Parse an uploaded JSON file into a list.
///
/// Missing `title` / `createdAt` / `eventDateTime` fall back to the defaults;
/// a missing `tasks` array or any shape violation rejects the whole file.
pub fn parse_upload(raw: &str, now: Timestamp) -> DomainResult<ZeigList> {
    let value: serde_json::Value = serde_json::from_str(raw)
        .map_err(|e| DomainError::InvalidInput(format!("Failed to parse JSON file: {}", e)))?;
    reject_nested_subtasks(&value)?;
    let doc: UploadDocument = serde_json::from_value(value)
        .map_err(|e| DomainError::InvalidInput(format!("Failed to parse JSON file: {}", e)))?;

    let tasks = doc.tasks.ok_or_else(|| {
        DomainError::InvalidInput("Invalid file format: \"tasks\" array is missing.".to_string())
    })?;

    let created_at = match doc.created_at.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => parse_iso(raw)?,
        _ => now,
    };

    let list = ZeigList {
        title: doc
            .title
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        tasks,
        created_at,
        event_date_time: doc.event_date_time.unwrap_or_default(),
    };
    validate_list(&list)?;
    Ok(list)
}

/// Subtasks are leaves; a `subtasks` key one level down would be dropped by
/// the typed parse, so it rejects the file instead.
fn reject_nested_subtasks(value: &serde_json::Value) -> DomainResult<()> {
    let tasks = value.get("tasks").and_then(|t| t.as_array());
    for task in tasks.into_iter().flatten() {
        let subtasks = task.get("subtasks").and_then(|s| s.as_array());
        for subtask in subtasks.into_iter().flatten() {
            if subtask.get("subtasks").is_some() {
                let id = subtask.get("id").and_then(|i| i.as_str()).unwrap_or_default();
                return Err(DomainError::InvalidInput(format!(
                    "subtask '{}' cannot have subtasks",
                    id
                )));
            }
        }
    }
    Ok(())
}

/// Strict per-entry checks: non-empty unique ids, and `completedTime` present
/// exactly when `completed` is true.
pub fn validate_list(list: &ZeigList) -> DomainResult<()> {
    let mut seen = HashSet::new();
    for task in &list.tasks {
        validate_entry(task, "task", &mut seen)?;
        for subtask in &task.subtasks {
            validate_entry(subtask, "subtask", &mut seen)?;
        }
    }
    Ok(())
}

fn validate_entry<'a, T: Entry>(entry: &'a T, kind: &str, seen: &mut HashSet<&'a str>) -> DomainResult<()> {
    let id = entry.id();
    if id.trim().is_empty() {
        return Err(DomainError::InvalidInput(format!("{} without an id", kind)));
    }
    if !seen.insert(id) {
        return Err(DomainError::InvalidInput(format!("duplicate id '{}'", id)));
    }
    match (entry.completed(), entry.completed_time().is_some()) {
        (true, false) => Err(DomainError::InvalidInput(format!(
            "{} '{}' is completed but has no completedTime",
            kind, id
        ))),
        (false, true) => Err(DomainError::InvalidInput(format!(
            "{} '{}' has a completedTime but is not completed",
            kind, id
        ))),
        _ => Ok(()),
    }
}

impl ZeigList {
    /// Pretty JSON for the downloadable file (two-space indent)
    pub fn to_file_json(&self) -> DomainResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| DomainError::Internal(e.to_string()))
    }
}

/// Keep word characters, whitespace and dashes
pub fn sanitize_title(title: &str) -> String {
    title
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-' || c.is_whitespace())
        .collect()
}

/// `{sanitized title}-{createdAt ISO}.json`
pub fn download_file_name(title: &str, created_at: &Timestamp) -> String {
    format!("{}-{}.json", sanitize_title(title), format_iso(created_at))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timestamp::now;
    use chrono::TimeZone;

    const EXAMPLE: &str = r#"{"title":"T","tasks":[{"id":"a","text":"x","completed":false,"subtasks":[]}],"createdAt":"2024-01-01T00:00:00.000Z"}"#;

    #[test]
    fn test_example_tasks_reserialize_byte_identical() {
        let list = parse_upload(EXAMPLE, now()).unwrap();
        let tasks = serde_json::to_string(&list.tasks).unwrap();
        assert_eq!(tasks, r#"[{"id":"a","text":"x","completed":false,"subtasks":[]}]"#);
        assert_eq!(list.title, "T");
        assert!(list.event_date_time.is_empty());
    }

    #[test]
    fn test_round_trip_preserves_list() {
        let mut list = ZeigList::new(chrono::Utc.with_ymd_and_hms(2024, 3, 4, 5, 6, 7).unwrap());
        list.add_task("one", now());
        list.add_task("two", now());
        let parent = list.tasks[0].id.clone();
        let sub = list.add_subtask(&parent, "child", now()).unwrap();
        list.toggle_subtask(&parent, &sub, now());
        list.toggle_task(&parent, now());
        list.set_event_date_time("2024-12-31T23:59");

        let json = list.to_file_json().unwrap();
        let parsed = parse_upload(&json, now()).unwrap();

        assert_eq!(parsed.tasks.len(), list.tasks.len());
        for (a, b) in parsed.tasks.iter().zip(&list.tasks) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.text, b.text);
            assert_eq!(a.completed, b.completed);
            let sub_ids = |t: &Task| t.subtasks.iter().map(|s| (s.id.clone(), s.completed)).collect::<Vec<_>>();
            assert_eq!(sub_ids(a), sub_ids(b));
        }
        assert_eq!(parsed.created_at, list.created_at);
        assert_eq!(parsed.event_date_time, "2024-12-31T23:59");
    }

    #[test]
    fn test_missing_tasks_rejected() {
        let err = parse_upload(r#"{"title":"T"}"#, now()).unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidInput("Invalid file format: \"tasks\" array is missing.".to_string())
        );
    }

    #[test]
    fn test_not_json_rejected() {
        assert!(matches!(parse_upload("not json", now()), Err(DomainError::InvalidInput(_))));
        assert!(matches!(parse_upload("[]", now()), Err(DomainError::InvalidInput(_))));
    }

    #[test]
    fn test_defaults_applied() {
        let at = now();
        let list = parse_upload(r#"{"tasks":[]}"#, at).unwrap();
        assert_eq!(list.title, DEFAULT_TITLE);
        assert_eq!(list.created_at, at);
        assert_eq!(list.event_date_time, "");
    }

    #[test]
    fn test_completed_without_time_rejected() {
        let raw = r#"{"tasks":[{"id":"a","text":"x","completed":true,"subtasks":[]}]}"#;
        assert!(parse_upload(raw, now()).is_err());
    }

    #[test]
    fn test_time_without_completed_rejected_on_subtask() {
        let raw = r#"{"tasks":[{"id":"a","text":"x","completed":false,"subtasks":[
            {"id":"b","text":"y","completed":false,"completedTime":"2024-01-01T00:00:00.000Z"}
        ]}]}"#;
        assert!(parse_upload(raw, now()).is_err());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let raw = r#"{"tasks":[
            {"id":"a","text":"x","completed":false,"subtasks":[{"id":"a","text":"y","completed":false}]}
        ]}"#;
        assert!(parse_upload(raw, now()).is_err());
    }

    #[test]
    fn test_third_level_rejected() {
        let raw = r#"{"tasks":[{"id":"a","text":"x","completed":false,"subtasks":[
            {"id":"b","text":"y","completed":false,"subtasks":[
                {"id":"c","text":"z","completed":false}
            ]}
        ]}]}"#;
        let err = parse_upload(raw, now()).unwrap_err();
        assert_eq!(err, DomainError::InvalidInput("subtask 'b' cannot have subtasks".to_string()));

        // an empty third level is still a third level
        let raw = r#"{"tasks":[{"id":"a","text":"x","completed":false,"subtasks":[
            {"id":"b","text":"y","completed":false,"subtasks":[]}
        ]}]}"#;
        assert!(parse_upload(raw, now()).is_err());
    }

    #[test]
    fn test_download_file_name_sanitizes_title() {
        let at = chrono::Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(
            download_file_name("Groceries: week #3!", &at),
            "Groceries week 3-2024-01-01T00:00:00.000Z.json"
        );
    }
}
