//! Editable Text Component
//!
//! Click-to-edit label shared by the list title, tasks and subtasks.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Shows `text` as a label; clicking swaps in an input when `editable`.
/// Enter or blur commits, Escape abandons the edit.
#[component]
pub fn EditableText(
    #[prop(into)] text: Signal<String>,
    #[prop(into)] editable: Signal<bool>,
    #[prop(into)] on_commit: Callback<String>,
    #[prop(optional, into)] class: String,
    /// Render the label as a heading
    #[prop(optional)] heading: bool,
) -> impl IntoView {
    let (is_editing, set_is_editing) = signal(false);
    let (draft, set_draft) = signal(String::new());

    let start_edit = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        if !editable.get_untracked() { return; }
        set_draft.set(text.get_untracked());
        set_is_editing.set(true);
    };

    let commit = move || {
        if !is_editing.get_untracked() { return; }
        set_is_editing.set(false);
        let value = draft.get_untracked();
        let value = value.trim();
        if !value.is_empty() && value != text.get_untracked() {
            on_commit.run(value.to_string());
        }
    };

    let label_class = class.clone();
    let label = move || {
        let class = format!("editable-text {}", label_class);
        if heading {
            view! { <h1 class=class on:click=start_edit>{move || text.get()}</h1> }.into_any()
        } else {
            view! { <span class=class on:click=start_edit>{move || text.get()}</span> }.into_any()
        }
    };

    view! {
        <Show when=move || is_editing.get() fallback=label>
            <input
                type="text"
                class=format!("editable-input {}", class)
                autofocus=true
                prop:value=move || draft.get()
                on:input=move |ev| {
                    if let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) {
                        set_draft.set(input.value());
                    }
                }
                on:blur=move |_| commit()
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    match ev.key().as_str() {
                        "Enter" => commit(),
                        "Escape" => set_is_editing.set(false),
                        _ => {}
                    }
                }
            />
        </Show>
    }
}
