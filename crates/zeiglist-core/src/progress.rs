//! Progress Aggregation
//!
//! A unit is one task or one subtask. Derived on every read, never stored.

use crate::task::Task;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
}

impl Progress {
    pub fn of(tasks: &[Task]) -> Self {
        tasks.iter().fold(Self::default(), |acc, task| {
            let done_subtasks = task.subtasks.iter().filter(|s| s.completed).count();
            Self {
                completed: acc.completed + usize::from(task.completed) + done_subtasks,
                total: acc.total + 1 + task.subtasks.len(),
            }
        })
    }

    /// Completion percentage in `0.0..=100.0`; 0 for an empty list
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        100.0 * self.completed as f64 / self.total as f64
    }

    pub fn rounded_percent(&self) -> u32 {
        self.percent().round() as u32
    }

    /// "1 of 3 Complete"
    pub fn summary(&self) -> String {
        format!("{} of {} Complete", self.completed, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Entry;
    use crate::timestamp::now;

    fn task(done: bool, subtasks: &[bool]) -> Task {
        let mut task = Task::new("t".to_string(), now());
        for (i, sub_done) in subtasks.iter().enumerate() {
            task.add_subtask(&format!("s{}", i), now());
            if *sub_done {
                let id = task.subtasks[i].id.clone();
                task.toggle_subtask(&id, now());
            }
        }
        if done {
            task.toggle(now());
        }
        task
    }

    #[test]
    fn test_empty_list_is_zero() {
        let progress = Progress::of(&[]);
        assert_eq!(progress, Progress { completed: 0, total: 0 });
        assert_eq!(progress.percent(), 0.0);
        assert_eq!(progress.rounded_percent(), 0);
    }

    #[test]
    fn test_units_count_tasks_and_subtasks() {
        let tasks = vec![task(true, &[false, true]), task(false, &[]), task(false, &[true])];
        let progress = Progress::of(&tasks);
        assert_eq!(progress.total, 3 + 3);
        assert_eq!(progress.completed, 3);
        assert!(progress.completed <= progress.total);
    }

    #[test]
    fn test_one_of_three_rounds_to_33() {
        let tasks = vec![task(true, &[]), task(false, &[]), task(false, &[])];
        let progress = Progress::of(&tasks);
        assert!((progress.percent() - 33.333).abs() < 0.01);
        assert_eq!(progress.rounded_percent(), 33);
        assert_eq!(progress.summary(), "1 of 3 Complete");
    }

    #[test]
    fn test_completed_subtask_counts_without_parent() {
        let progress = Progress::of(&[task(false, &[true])]);
        assert_eq!(progress, Progress { completed: 1, total: 2 });
        assert_eq!(progress.rounded_percent(), 50);
    }
}
