//! Task and Subtask Entities
//!
//! A task owns an ordered list of subtasks; subtasks have no children.

use serde::{Deserialize, Serialize};

use crate::entity::{remove_entry, replace_entry, reorder_entries, move_entry, DomainResult, Entry};
use crate::timestamp::{iso_millis_option, Timestamp};

/// Fresh unique id for a task or subtask
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// A single-level child item of a task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subtask {
    pub id: String,
    pub text: String,
    pub completed: bool,
    #[serde(default, with = "iso_millis_option", skip_serializing_if = "Option::is_none")]
    pub completed_time: Option<Timestamp>,
    #[serde(default, with = "iso_millis_option", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
}

impl Subtask {
    pub fn new(text: String, now: Timestamp) -> Self {
        Self {
            id: new_id(),
            text,
            completed: false,
            completed_time: None,
            created_at: Some(now),
        }
    }
}

impl Entry for Subtask {
    fn id(&self) -> &str {
        &self.id
    }

    fn completed(&self) -> bool {
        self.completed
    }

    fn completed_time(&self) -> Option<Timestamp> {
        self.completed_time
    }

    fn set_completed(&mut self, completed: bool, now: Timestamp) {
        self.completed = completed;
        self.completed_time = completed.then_some(now);
    }

    fn set_text(&mut self, text: String) {
        self.text = text;
    }
}

/// A top-level checklist item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub text: String,
    pub completed: bool,
    #[serde(default, with = "iso_millis_option", skip_serializing_if = "Option::is_none")]
    pub completed_time: Option<Timestamp>,
    #[serde(default, with = "iso_millis_option", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(default)]
    pub subtasks: Vec<Subtask>,
}

impl Task {
    pub fn new(text: String, now: Timestamp) -> Self {
        Self {
            id: new_id(),
            text,
            completed: false,
            completed_time: None,
            created_at: Some(now),
            subtasks: Vec::new(),
        }
    }

    pub fn subtask(&self, id: &str) -> Option<&Subtask> {
        self.subtasks.iter().find(|s| s.id == id)
    }

    /// Append a subtask. Blank text is ignored.
    pub fn add_subtask(&mut self, text: &str, now: Timestamp) -> Option<&Subtask> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        self.subtasks.push(Subtask::new(text.to_string(), now));
        self.subtasks.last()
    }

    pub fn update_subtask(&mut self, subtask: Subtask) -> bool {
        replace_entry(&mut self.subtasks, subtask)
    }

    pub fn delete_subtask(&mut self, id: &str) -> Option<Subtask> {
        remove_entry(&mut self.subtasks, id)
    }

    pub fn reorder_subtasks(&mut self, new_order: Vec<Subtask>) -> DomainResult<()> {
        reorder_entries(&mut self.subtasks, new_order)
    }

    pub fn move_subtask(&mut self, id: &str, to_index: usize) -> bool {
        move_entry(&mut self.subtasks, id, to_index)
    }

    /// Toggle one subtask; the parent's own completion is left alone.
    pub fn toggle_subtask(&mut self, id: &str, now: Timestamp) -> Option<bool> {
        self.subtasks
            .iter_mut()
            .find(|s| s.id == id)
            .map(|s| s.toggle(now))
    }
}

impl Entry for Task {
    fn id(&self) -> &str {
        &self.id
    }

    fn completed(&self) -> bool {
        self.completed
    }

    fn completed_time(&self) -> Option<Timestamp> {
        self.completed_time
    }

    fn set_completed(&mut self, completed: bool, now: Timestamp) {
        self.completed = completed;
        self.completed_time = completed.then_some(now);
    }

    fn set_text(&mut self, text: String) {
        self.text = text;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timestamp::now;

    #[test]
    fn test_task_creation() {
        let task = Task::new("Write report".to_string(), now());
        assert!(!task.id.is_empty());
        assert!(!task.completed);
        assert!(task.completed_time.is_none());
        assert!(task.created_at.is_some());
        assert!(task.subtasks.is_empty());
    }

    #[test]
    fn test_toggle_sets_and_clears_completed_time() {
        let mut task = Task::new("Ship".to_string(), now());
        assert!(task.toggle(now()));
        assert!(task.completed_time.is_some());
        assert!(!task.toggle(now()));
        assert!(task.completed_time.is_none());
    }

    #[test]
    fn test_subtask_toggle_leaves_parent_alone() {
        let mut task = Task::new("Parent".to_string(), now());
        let sub_id = task.add_subtask("Child", now()).unwrap().id.clone();

        assert_eq!(task.toggle_subtask(&sub_id, now()), Some(true));
        assert!(!task.completed);
        assert!(task.subtask(&sub_id).unwrap().completed_time.is_some());

        task.toggle(now());
        assert_eq!(task.toggle_subtask(&sub_id, now()), Some(false));
        assert!(task.completed);
        assert!(task.subtask(&sub_id).unwrap().completed_time.is_none());
    }

    #[test]
    fn test_blank_subtask_ignored() {
        let mut task = Task::new("Parent".to_string(), now());
        assert!(task.add_subtask("   ", now()).is_none());
        assert!(task.subtasks.is_empty());
    }

    #[test]
    fn test_delete_subtask_keeps_siblings() {
        let mut task = Task::new("Parent".to_string(), now());
        let a = task.add_subtask("a", now()).unwrap().id.clone();
        let b = task.add_subtask("b", now()).unwrap().id.clone();
        let c = task.add_subtask("c", now()).unwrap().id.clone();

        let removed = task.delete_subtask(&b).unwrap();
        assert_eq!(removed.id, b);
        let ids: Vec<_> = task.subtasks.iter().map(|s| s.id.clone()).collect();
        assert_eq!(ids, vec![a, c]);
    }

    #[test]
    fn test_move_subtask_down_and_up() {
        let mut task = Task::new("Parent".to_string(), now());
        for t in ["a", "b", "c"] {
            task.add_subtask(t, now());
        }
        let first = task.subtasks[0].id.clone();

        // drop slot 3 = after the last entry
        assert!(task.move_subtask(&first, 3));
        let texts: Vec<_> = task.subtasks.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["b", "c", "a"]);

        assert!(task.move_subtask(&first, 0));
        let texts: Vec<_> = task.subtasks.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "b", "c"]);

        assert!(!task.move_subtask("missing", 0));
    }

    #[test]
    fn test_reorder_subtasks_rejects_foreign_ids() {
        let mut task = Task::new("Parent".to_string(), now());
        task.add_subtask("a", now());
        let stranger = Subtask::new("x".to_string(), now());

        assert!(task.reorder_subtasks(vec![stranger]).is_err());
        assert_eq!(task.subtasks[0].text, "a");
    }
}
