//! Task Item Component
//!
//! Individual task row: grab handle, checkbox, editable text, subtasks.

use leptos::prelude::*;
use leptos_dragdrop::make_on_mousedown;

use crate::components::{format_local, use_task_dnd, DeleteEntryButton, EntryKind, EditableText, EntryInput, SubtaskList};
use crate::store::{store_add_subtask, store_delete_task, store_rename_task, store_toggle_task, use_app_store};
use crate::tree::DisplayTask;

/// A single task row in the list
#[component]
pub fn TaskItem(
    row: DisplayTask,
    adding_under: ReadSignal<Option<String>>,
    set_adding_under: WriteSignal<Option<String>>,
) -> impl IntoView {
    let store = use_app_store();
    let dnd = use_task_dnd();

    let DisplayTask { task, is_top } = row;
    let id = task.id.clone();
    let completed = task.completed;

    let on_mousedown = make_on_mousedown(dnd, None, id.clone());

    let row_class = {
        let id = id.clone();
        move || {
            let mut c = String::from("task-item");
            if completed { c.push_str(" completed"); }
            if is_top { c.push_str(" top-priority"); }
            if dnd.is_dragging(&id) { c.push_str(" dragging"); }
            c
        }
    };

    // Completed tasks are frozen; a click that ends a drag is not an edit
    let editable = Signal::derive(move || !completed && !dnd.drag_just_ended_read.get());

    let show_subtask_input = {
        let id = id.clone();
        move || !completed && adding_under.get().as_deref() == Some(id.as_str())
    };

    let toggle = {
        let id = id.clone();
        move |_| store_toggle_task(&store, &id)
    };
    let rename = {
        let id = id.clone();
        Callback::new(move |text: String| store_rename_task(&store, &id, &text))
    };
    let delete = {
        let id = id.clone();
        Callback::new(move |_: ()| store_delete_task(&store, &id))
    };
    let toggle_subtask_input = {
        let id = id.clone();
        move |_| {
            set_adding_under.update(|current| {
                *current = if current.as_deref() == Some(id.as_str()) { None } else { Some(id.clone()) };
            });
        }
    };
    let add_subtask = {
        let id = id.clone();
        Callback::new(move |text: String| {
            store_add_subtask(&store, &id, &text);
        })
    };

    let completed_on = task
        .completed_time
        .map(|at| format!(" (completed on {})", format_local(&at)));

    view! {
        <li class=row_class>
            <div class="task-row" on:mousedown=on_mousedown>
                <span class="grab-handle">"≡"</span>
                <input type="checkbox" class="task-checkbox" checked=completed on:change=toggle />

                <EditableText
                    text=task.text.clone()
                    editable=editable
                    on_commit=rename
                    class="task-text"
                />
                {completed_on.map(|text| view! { <span class="completed-time">{text}</span> })}

                <div class="task-actions">
                    <Show when=move || !completed>
                        <button class="add-subtask-btn" on:click=toggle_subtask_input.clone()>
                            "+ Sub Task"
                        </button>
                    </Show>
                    <DeleteEntryButton kind=EntryKind::Task on_delete=delete />
                </div>
            </div>

            <SubtaskList task_id=id.clone() subtasks=task.subtasks.clone() is_top=is_top />

            <Show when=show_subtask_input.clone()>
                <EntryInput
                    placeholder="Enter sub task..."
                    button_label="Add"
                    class="subtask-input"
                    on_add=add_subtask
                    on_cancel=Callback::new(move |_: ()| set_adding_under.set(None))
                    autofocus=true
                />
            </Show>
        </li>
    }
}
