//! Task Display Order
//!
//! Helpers for rendering the task list: incomplete tasks first, completed
//! ones after, with the first incomplete task marked as top priority. None of
//! this is stored; dragging writes the displayed order back as the new order.

use zeiglist_core::move_entry;

use crate::models::Task;

#[derive(Clone, Debug, PartialEq)]
pub struct DisplayTask {
    pub task: Task,
    /// First incomplete task
    pub is_top: bool,
}

/// Partition tasks for display, keeping relative order inside each group
pub fn display_order(tasks: &[Task]) -> Vec<DisplayTask> {
    let (open, done): (Vec<&Task>, Vec<&Task>) = tasks.iter().partition(|t| !t.completed);
    open.into_iter()
        .enumerate()
        .map(|(i, task)| DisplayTask { task: task.clone(), is_top: i == 0 })
        .chain(done.into_iter().map(|task| DisplayTask { task: task.clone(), is_top: false }))
        .collect()
}

/// New stored order after dropping `dragged_id` into display `slot`
pub fn reorder_displayed(tasks: &[Task], dragged_id: &str, slot: usize) -> Option<Vec<Task>> {
    let mut order: Vec<Task> = display_order(tasks).into_iter().map(|d| d.task).collect();
    move_entry(&mut order, dragged_id, slot).then_some(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use zeiglist_core::{now, Entry};

    fn make_task(text: &str, completed: bool) -> Task {
        let mut task = Task::new(text.to_string(), now());
        if completed {
            task.toggle(now());
        }
        task
    }

    fn texts(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_display_order_partitions() {
        let tasks = vec![
            make_task("done 1", true),
            make_task("open 1", false),
            make_task("done 2", true),
            make_task("open 2", false),
        ];

        let shown = display_order(&tasks);
        let order: Vec<_> = shown.iter().map(|d| d.task.text.as_str()).collect();
        assert_eq!(order, vec!["open 1", "open 2", "done 1", "done 2"]);
        let tops: Vec<_> = shown.iter().map(|d| d.is_top).collect();
        assert_eq!(tops, vec![true, false, false, false]);
    }

    #[test]
    fn test_no_top_when_everything_done() {
        let tasks = vec![make_task("a", true), make_task("b", true)];
        assert!(display_order(&tasks).iter().all(|d| !d.is_top));
    }

    #[test]
    fn test_reorder_displayed_stores_partitioned_order() {
        let tasks = vec![
            make_task("done", true),
            make_task("a", false),
            make_task("b", false),
        ];
        let b = tasks[2].id.clone();

        // display: [a, b, done]; drop b at slot 0
        let order = reorder_displayed(&tasks, &b, 0).unwrap();
        assert_eq!(texts(&order), vec!["b", "a", "done"]);
    }

    #[test]
    fn test_reorder_displayed_unknown_id() {
        let tasks = vec![make_task("a", false)];
        assert!(reorder_displayed(&tasks, "missing", 0).is_none());
    }
}
