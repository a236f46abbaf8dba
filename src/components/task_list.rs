//! Task List Component
//!
//! Displays tasks in display order with drag-and-drop support.
//! Uses leptos-dragdrop with explicit DropZones between rows; top-level tasks
//! and each task's subtasks are separate scopes.

use leptos::prelude::*;

use crate::components::{DropZone, TaskItem};
use crate::store::{store_move_subtask, store_reorder_tasks, use_app_store, AppStateStoreFields, AppStore};
use crate::tree::{display_order, reorder_displayed};

use leptos_dragdrop::*;

/// `None` is the top-level task scope, `Some(task_id)` that task's subtasks
pub type TaskScope = Option<String>;

pub type TaskDnd = DndSignals<TaskScope, String>;

/// Create the DnD signals once for the whole app and bind the global drop
/// handler. Must run in a scope that outlives every page.
pub fn provide_task_dnd(store: AppStore) {
    let dnd: TaskDnd = create_dnd_signals();

    bind_global_mouseup(dnd, move |source, slot| {
        match source.scope {
            None => {
                web_sys::console::log_1(&format!("[DND] Drop task: dragged={}, slot={}", source.id, slot.index).into());
                let new_order = store.list().with_untracked(|l| reorder_displayed(&l.tasks, &source.id, slot.index));
                if let Some(new_order) = new_order {
                    store_reorder_tasks(&store, new_order);
                }
            }
            Some(task_id) => {
                web_sys::console::log_1(&format!("[DND] Drop subtask: task={}, dragged={}, slot={}", task_id, source.id, slot.index).into());
                store_move_subtask(&store, &task_id, &source.id, slot.index);
            }
        }
    });

    provide_context(dnd);
}

pub fn use_task_dnd() -> TaskDnd {
    expect_context::<TaskDnd>()
}

/// Task list with DnD support
#[component]
pub fn TaskList() -> impl IntoView {
    let store = use_app_store();
    let dnd = use_task_dnd();

    // Task whose subtask input is open
    let (adding_under, set_adding_under) = signal::<Option<String>>(None);

    let rows = move || {
        display_order(&store.list().read().tasks)
            .into_iter()
            .enumerate()
            .collect::<Vec<_>>()
    };

    view! {
        <ul class="task-list">
            // Initial drop zone at top (slot 0)
            <DropZone dnd=dnd scope=None index=0 />

            <For
                each=rows
                key=|(index, row)| {
                    // Every field the row renders, so any change re-renders it
                    (
                        *index,
                        row.is_top,
                        row.task.id.clone(),
                        row.task.text.clone(),
                        row.task.completed,
                        row.task.completed_time,
                        row.task
                            .subtasks
                            .iter()
                            .map(|s| (s.id.clone(), s.text.clone(), s.completed))
                            .collect::<Vec<_>>(),
                    )
                }
                children=move |(index, row)| {
                    view! {
                        <TaskItem
                            row=row
                            adding_under=adding_under
                            set_adding_under=set_adding_under
                        />

                        // Drop zone after this row
                        <DropZone dnd=dnd scope=None index=index + 1 />
                    }
                }
            />
        </ul>
    }
}
