//! Todo List Page
//!
//! The working list: file controls, clock and countdown, title, progress,
//! and the task list itself.

use leptos::prelude::*;

use crate::components::{
    CountdownDisplay, CurrentTimeDisplay, DateTimePicker, EntryInput, FileControls, ListHeader, ProgressBar,
    TaskList,
};
use crate::store::{store_add_task, use_app_store};

#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_app_store();

    let add_task = Callback::new(move |text: String| {
        store_add_task(&store, &text);
    });

    view! {
        <div class="todo-list">
            <FileControls />

            <CurrentTimeDisplay />
            <DateTimePicker />
            <CountdownDisplay />

            <ListHeader />

            <ProgressBar />

            <EntryInput
                placeholder="Enter a new task"
                button_label="Add Task"
                class="task-input"
                on_add=add_task
            />
            <TaskList />
        </div>
    }
}
