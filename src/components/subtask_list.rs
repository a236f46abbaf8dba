//! Subtask List Component
//!
//! Ordered subtasks of one task, reorderable within that task only.

use leptos::prelude::*;
use leptos_dragdrop::make_on_mousedown;

use crate::components::{format_local, use_task_dnd, DeleteEntryButton, EntryKind, DropZone, EditableText};
use crate::models::Subtask;
use crate::store::{store_delete_subtask, store_rename_subtask, store_toggle_subtask, use_app_store};

#[component]
pub fn SubtaskList(
    task_id: String,
    subtasks: Vec<Subtask>,
    /// Parent is the top-priority task
    is_top: bool,
) -> impl IntoView {
    let dnd = use_task_dnd();
    let scope = Some(task_id.clone());

    if subtasks.is_empty() {
        return ().into_any();
    }

    let rows = subtasks
        .into_iter()
        .enumerate()
        .map(|(index, subtask)| {
            view! {
                <SubtaskItem task_id=task_id.clone() subtask=subtask is_top=is_top />
                <DropZone dnd=dnd scope=scope.clone() index=index + 1 />
            }
        })
        .collect_view();

    view! {
        <ul class="subtask-list">
            <DropZone dnd=dnd scope=scope.clone() index=0 />
            {rows}
        </ul>
    }
    .into_any()
}

#[component]
fn SubtaskItem(task_id: String, subtask: Subtask, is_top: bool) -> impl IntoView {
    let store = use_app_store();
    let dnd = use_task_dnd();

    let id = subtask.id.clone();
    let completed = subtask.completed;

    let on_mousedown = make_on_mousedown(dnd, Some(task_id.clone()), id.clone());

    let row_class = {
        let id = id.clone();
        move || {
            let mut c = String::from("subtask-item");
            if completed { c.push_str(" completed"); }
            if is_top { c.push_str(" top-priority"); }
            if dnd.is_dragging(&id) { c.push_str(" dragging"); }
            c
        }
    };

    let editable = Signal::derive(move || !completed && !dnd.drag_just_ended_read.get());

    let toggle = {
        let (task_id, id) = (task_id.clone(), id.clone());
        move |_| store_toggle_subtask(&store, &task_id, &id)
    };
    let rename = {
        let (task_id, id) = (task_id.clone(), id.clone());
        Callback::new(move |text: String| store_rename_subtask(&store, &task_id, &id, &text))
    };
    let delete = {
        let (task_id, id) = (task_id.clone(), id.clone());
        Callback::new(move |_: ()| store_delete_subtask(&store, &task_id, &id))
    };

    let completed_on = subtask
        .completed_time
        .map(|at| format!(" (completed on {})", format_local(&at)));

    view! {
        <li class=row_class on:mousedown=on_mousedown>
            <span class="grab-handle">"≡"</span>
            <input type="checkbox" checked=completed on:change=toggle />
            <EditableText
                text=subtask.text.clone()
                editable=editable
                on_commit=rename
                class="subtask-text"
            />
            {completed_on.map(|text| view! { <span class="completed-time">{text}</span> })}
            <DeleteEntryButton kind=EntryKind::Subtask on_delete=delete />
        </li>
    }
}
