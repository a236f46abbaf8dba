//! Delete Entry Button
//!
//! Trash button that asks before removing a task or a sub task.

use leptos::prelude::*;

/// Which kind of entry a delete button removes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    Task,
    Subtask,
}

impl EntryKind {
    pub fn prompt(self) -> &'static str {
        match self {
            EntryKind::Task => "Delete this task?",
            EntryKind::Subtask => "Delete this sub task?",
        }
    }

    fn button_title(self) -> &'static str {
        match self {
            EntryKind::Task => "Delete task",
            EntryKind::Subtask => "Delete sub task",
        }
    }
}

/// Deletes only after the prompt is answered with "Yes".
/// Escape or "No" puts the trash button back.
#[component]
pub fn DeleteEntryButton(kind: EntryKind, #[prop(into)] on_delete: Callback<()>) -> impl IntoView {
    let (asking, set_asking) = signal(false);

    move || {
        if !asking.get() {
            return view! {
                <button
                    class="delete-btn"
                    title=kind.button_title()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_asking.set(true);
                    }
                >
                    "🗑️"
                </button>
            }
            .into_any();
        }

        view! {
            <span
                class="delete-confirm"
                role="alertdialog"
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Escape" {
                        set_asking.set(false);
                    }
                }
            >
                <span class="delete-confirm-text">{kind.prompt()}</span>
                <button
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_asking.set(false);
                        on_delete.run(());
                    }
                >
                    "Yes"
                </button>
                <button
                    class="cancel-btn"
                    autofocus=true
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_asking.set(false);
                    }
                >
                    "No"
                </button>
            </span>
        }
        .into_any()
    }
}
