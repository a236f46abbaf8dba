//! Drop Zone Component
//!
//! A horizontal line drop zone between rows for drag-and-drop reordering.

use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::components::{TaskDnd, TaskScope};

/// Drop zone shown between rows of one scope while a row of that scope is dragged
#[component]
pub fn DropZone(
    dnd: TaskDnd,
    /// `None` for top-level tasks, `Some(task_id)` for that task's subtasks
    scope: TaskScope,
    /// Slot index: 0 is before the first row
    index: usize,
) -> impl IntoView {
    let on_mouseenter = make_on_zone_mouseenter(dnd, scope.clone(), index);
    let on_mouseleave = make_on_mouseleave(dnd);

    let zone_class = move || {
        let mut c = String::from("drop-zone");
        if !dnd.is_dragging_in(&scope) { c.push_str(" hidden"); }
        if dnd.is_active_slot(&scope, index) { c.push_str(" active"); }
        c
    };

    view! {
        <div
            class=zone_class
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        />
    }
}
