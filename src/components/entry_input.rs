//! Entry Input Component
//!
//! Text field plus button for adding a task or a subtask.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Input row that hands trimmed text to `on_add` and clears itself.
/// Blank input is ignored.
#[component]
pub fn EntryInput(
    #[prop(into)] placeholder: String,
    #[prop(into)] button_label: String,
    #[prop(optional, into)] class: String,
    #[prop(into)] on_add: Callback<String>,
    /// Called on Escape, e.g. to hide a subtask input
    #[prop(optional, into)] on_cancel: Option<Callback<()>>,
    #[prop(optional)] autofocus: bool,
) -> impl IntoView {
    let (new_text, set_new_text) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get();
        let text = text.trim();
        if text.is_empty() { return; }
        on_add.run(text.to_string());
        set_new_text.set(String::new());
    };

    view! {
        <form class=format!("entry-input {}", class) on:submit=submit>
            <input
                type="text"
                placeholder=placeholder
                autofocus=autofocus
                prop:value=move || new_text.get()
                on:input=move |ev| {
                    if let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) {
                        set_new_text.set(input.value());
                    }
                }
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Escape" {
                        if let Some(cancel) = on_cancel {
                            cancel.run(());
                        }
                    }
                }
            />
            <button type="submit">{button_label}</button>
        </form>
    }
}
