//! List Model
//!
//! The named, ordered collection of tasks. Order is user-controlled and
//! meaningful; the stored order is whatever the user last arranged.

use serde::{Deserialize, Serialize};

use crate::entity::{move_entry, remove_entry, reorder_entries, replace_entry, DomainError, DomainResult, Entry};
use crate::progress::Progress;
use crate::task::{Subtask, Task};
use crate::timestamp::{iso_millis, Timestamp};

pub const DEFAULT_TITLE: &str = "My Master List";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZeigList {
    pub title: String,
    pub tasks: Vec<Task>,
    #[serde(with = "iso_millis")]
    pub created_at: Timestamp,
    /// Countdown target as a local `YYYY-MM-DDTHH:MM` string, empty when unset
    #[serde(default)]
    pub event_date_time: String,
}

impl ZeigList {
    /// Empty list with the default title
    pub fn new(now: Timestamp) -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            tasks: Vec::new(),
            created_at: now,
            event_date_time: String::new(),
        }
    }

    pub fn progress(&self) -> Progress {
        Progress::of(&self.tasks)
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    fn task_mut(&mut self, id: &str) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    pub fn set_event_date_time(&mut self, value: &str) {
        self.event_date_time = value.trim().to_string();
    }

    // ========================
    // Tasks
    // ========================

    /// Add a task at the front (newest first). Blank text is a no-op.
    pub fn add_task(&mut self, text: &str, now: Timestamp) -> Option<&Task> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        self.tasks.insert(0, Task::new(text.to_string(), now));
        self.tasks.first()
    }

    /// Replace the task with the same id. No-op if it is not in the list.
    pub fn update_task(&mut self, task: Task) -> bool {
        replace_entry(&mut self.tasks, task)
    }

    /// Remove a task together with its subtasks
    pub fn delete_task(&mut self, id: &str) -> Option<Task> {
        remove_entry(&mut self.tasks, id)
    }

    /// Replace the whole task order; must be a permutation of the current tasks
    pub fn reorder_tasks(&mut self, new_order: Vec<Task>) -> DomainResult<()> {
        reorder_entries(&mut self.tasks, new_order)
    }

    pub fn move_task(&mut self, id: &str, to_index: usize) -> bool {
        move_entry(&mut self.tasks, id, to_index)
    }

    pub fn toggle_task(&mut self, id: &str, now: Timestamp) -> Option<bool> {
        self.task_mut(id).map(|t| t.toggle(now))
    }

    /// Set task text. Blank text is ignored.
    pub fn rename_task(&mut self, id: &str, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        match self.task_mut(id) {
            Some(task) => {
                task.set_text(text.to_string());
                true
            }
            None => false,
        }
    }

    // ========================
    // Subtasks
    // ========================

    /// Append a subtask under `task_id`, returning the new subtask id
    pub fn add_subtask(&mut self, task_id: &str, text: &str, now: Timestamp) -> Option<String> {
        self.task_mut(task_id)?
            .add_subtask(text, now)
            .map(|s| s.id.clone())
    }

    pub fn update_subtask(&mut self, task_id: &str, subtask: Subtask) -> bool {
        self.task_mut(task_id)
            .is_some_and(|t| t.update_subtask(subtask))
    }

    pub fn delete_subtask(&mut self, task_id: &str, subtask_id: &str) -> Option<Subtask> {
        self.task_mut(task_id)?.delete_subtask(subtask_id)
    }

    pub fn reorder_subtasks(&mut self, task_id: &str, new_order: Vec<Subtask>) -> DomainResult<()> {
        self.task_mut(task_id)
            .ok_or_else(|| DomainError::NotFound(format!("task {}", task_id)))?
            .reorder_subtasks(new_order)
    }

    pub fn move_subtask(&mut self, task_id: &str, subtask_id: &str, to_index: usize) -> bool {
        self.task_mut(task_id)
            .is_some_and(|t| t.move_subtask(subtask_id, to_index))
    }

    pub fn toggle_subtask(&mut self, task_id: &str, subtask_id: &str, now: Timestamp) -> Option<bool> {
        self.task_mut(task_id)?.toggle_subtask(subtask_id, now)
    }

    pub fn rename_subtask(&mut self, task_id: &str, subtask_id: &str, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        let Some(subtask) = self
            .task_mut(task_id)
            .and_then(|t| t.subtasks.iter_mut().find(|s| s.id == subtask_id))
        else {
            return false;
        };
        subtask.set_text(text.to_string());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timestamp::now;

    fn list_with(texts: &[&str]) -> ZeigList {
        let mut list = ZeigList::new(now());
        for text in texts {
            list.add_task(text, now());
        }
        list
    }

    fn texts(list: &ZeigList) -> Vec<&str> {
        list.tasks.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_new_list_defaults() {
        let list = ZeigList::new(now());
        assert_eq!(list.title, DEFAULT_TITLE);
        assert!(list.tasks.is_empty());
        assert!(list.event_date_time.is_empty());
    }

    #[test]
    fn test_add_task_prepends_and_trims() {
        let list = list_with(&["first", "  second  "]);
        assert_eq!(texts(&list), vec!["second", "first"]);
    }

    #[test]
    fn test_add_blank_task_is_noop() {
        let mut list = ZeigList::new(now());
        assert!(list.add_task("", now()).is_none());
        assert!(list.add_task(" \t\n", now()).is_none());
        assert!(list.tasks.is_empty());
    }

    #[test]
    fn test_update_task_by_id() {
        let mut list = list_with(&["a"]);
        let mut task = list.tasks[0].clone();
        task.text = "changed".to_string();
        assert!(list.update_task(task));
        assert_eq!(list.tasks[0].text, "changed");

        let stranger = Task::new("ghost".to_string(), now());
        assert!(!list.update_task(stranger));
        assert_eq!(list.tasks.len(), 1);
    }

    #[test]
    fn test_delete_task_removes_subtasks() {
        let mut list = list_with(&["keep", "drop"]);
        let drop_id = list.tasks[0].id.clone();
        list.add_subtask(&drop_id, "child", now());
        list.add_subtask(&drop_id, "child 2", now());

        let removed = list.delete_task(&drop_id).unwrap();
        assert_eq!(removed.subtasks.len(), 2);
        assert_eq!(texts(&list), vec!["keep"]);
        assert_eq!(list.progress().total, 1);
    }

    #[test]
    fn test_reorder_tasks_requires_permutation() {
        let mut list = list_with(&["a", "b", "c"]);
        let mut reversed = list.tasks.clone();
        reversed.reverse();
        list.reorder_tasks(reversed).unwrap();
        assert_eq!(texts(&list), vec!["a", "b", "c"]);

        let partial = list.tasks[..2].to_vec();
        assert!(list.reorder_tasks(partial).is_err());
        assert_eq!(list.tasks.len(), 3);
    }

    #[test]
    fn test_move_task() {
        let mut list = list_with(&["c", "b", "a"]);
        let a = list.tasks[0].id.clone();
        assert!(list.move_task(&a, 2));
        assert_eq!(texts(&list), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_toggle_and_rename() {
        let mut list = list_with(&["a"]);
        let id = list.tasks[0].id.clone();

        assert_eq!(list.toggle_task(&id, now()), Some(true));
        assert!(list.tasks[0].completed_time.is_some());
        assert_eq!(list.toggle_task("missing", now()), None);

        assert!(list.rename_task(&id, "  renamed "));
        assert!(!list.rename_task(&id, "   "));
        assert_eq!(list.tasks[0].text, "renamed");
    }

    #[test]
    fn test_subtask_operations_scoped_to_parent() {
        let mut list = list_with(&["one", "two"]);
        let parent = list.tasks[1].id.clone();
        let other = list.tasks[0].id.clone();
        let sub = list.add_subtask(&parent, "child", now()).unwrap();

        assert_eq!(list.toggle_subtask(&other, &sub, now()), None);
        assert_eq!(list.toggle_subtask(&parent, &sub, now()), Some(true));
        assert!(!list.tasks[1].completed);

        assert!(list.rename_subtask(&parent, &sub, "kid"));
        assert_eq!(list.tasks[1].subtasks[0].text, "kid");

        assert!(list.delete_subtask(&other, &sub).is_none());
        assert!(list.delete_subtask(&parent, &sub).is_some());
        assert!(list.tasks[1].subtasks.is_empty());
    }

    #[test]
    fn test_reorder_subtasks_unknown_parent() {
        let mut list = list_with(&["a"]);
        assert!(matches!(
            list.reorder_subtasks("missing", Vec::new()),
            Err(DomainError::NotFound(_))
        ));
    }
}
