//! Core Entity Trait
//!
//! Tasks and subtasks share the same checklist behaviour: an id, a text, and a
//! completion flag paired with a completion timestamp.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::timestamp::Timestamp;

/// A checklist entry (task or subtask)
pub trait Entry: Sized + Clone {
    fn id(&self) -> &str;

    fn completed(&self) -> bool;

    fn completed_time(&self) -> Option<Timestamp>;

    /// Set completion state, keeping `completed_time` in step with `completed`
    fn set_completed(&mut self, completed: bool, now: Timestamp);

    fn set_text(&mut self, text: String);

    /// Flip completion. Returns the new state.
    fn toggle(&mut self, now: Timestamp) -> bool {
        let completed = !self.completed();
        self.set_completed(completed, now);
        completed
    }
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum DomainError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    /// The detail text without the kind prefix
    pub fn message(&self) -> &str {
        match self {
            DomainError::NotFound(m)
            | DomainError::InvalidInput(m)
            | DomainError::Conflict(m)
            | DomainError::Internal(m) => m,
        }
    }
}

// ========================
// Ordered entry helpers
// ========================

/// Replace the entry with the same id. Returns false if no entry matched.
pub(crate) fn replace_entry<T: Entry>(entries: &mut [T], updated: T) -> bool {
    match entries.iter_mut().find(|e| e.id() == updated.id()) {
        Some(slot) => {
            *slot = updated;
            true
        }
        None => false,
    }
}

/// Remove the entry with `id`, returning it
pub(crate) fn remove_entry<T: Entry>(entries: &mut Vec<T>, id: &str) -> Option<T> {
    let index = entries.iter().position(|e| e.id() == id)?;
    Some(entries.remove(index))
}

/// Replace `entries` with `new_order` if it is a permutation of the same ids
pub(crate) fn reorder_entries<T: Entry>(entries: &mut Vec<T>, new_order: Vec<T>) -> DomainResult<()> {
    if new_order.len() != entries.len() {
        return Err(DomainError::InvalidInput(format!(
            "reorder expected {} entries, got {}",
            entries.len(),
            new_order.len()
        )));
    }
    let mut current: Vec<&str> = entries.iter().map(Entry::id).collect();
    let mut proposed: Vec<&str> = new_order.iter().map(Entry::id).collect();
    current.sort_unstable();
    proposed.sort_unstable();
    if current != proposed {
        return Err(DomainError::InvalidInput(
            "reorder must contain exactly the existing entries".to_string(),
        ));
    }
    *entries = new_order;
    Ok(())
}

/// Move the entry `id` so it lands before the entry currently at `to_index`.
///
/// `to_index` counts drop slots in the current order: 0 is before the first
/// entry, `len` is after the last one. Returns false if `id` is unknown.
pub fn move_entry<T: Entry>(entries: &mut Vec<T>, id: &str, to_index: usize) -> bool {
    let Some(from) = entries.iter().position(|e| e.id() == id) else {
        return false;
    };
    let mut to = to_index.min(entries.len());
    if to > from {
        to -= 1;
    }
    let entry = entries.remove(from);
    entries.insert(to, entry);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::Subtask;
    use crate::timestamp::now;

    fn entries(texts: &[&str]) -> Vec<Subtask> {
        texts.iter().map(|t| Subtask::new(t.to_string(), now())).collect()
    }

    fn texts(entries: &[Subtask]) -> Vec<&str> {
        entries.iter().map(|e| e.text.as_str()).collect()
    }

    #[test]
    fn test_move_entry_down_skips_own_slot() {
        let mut list = entries(&["a", "b", "c"]);
        let a = list[0].id.clone();
        // slot 2 sits between b and c
        assert!(move_entry(&mut list, &a, 2));
        assert_eq!(texts(&list), vec!["b", "a", "c"]);

        // the slot right after a row leaves it in place
        assert!(move_entry(&mut list, &a, 2));
        assert_eq!(texts(&list), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_move_entry_up_and_clamp() {
        let mut list = entries(&["a", "b", "c"]);
        let c = list[2].id.clone();
        assert!(move_entry(&mut list, &c, 0));
        assert_eq!(texts(&list), vec!["c", "a", "b"]);

        assert!(move_entry(&mut list, &c, 10));
        assert_eq!(texts(&list), vec!["a", "b", "c"]);
    }
}
