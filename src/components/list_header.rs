//! List Header Component
//!
//! Editable title and creation time of the current list.

use leptos::prelude::*;

use crate::components::{format_local, EditableText};
use crate::store::{store_set_title, use_app_store, AppStateStoreFields};

#[component]
pub fn ListHeader() -> impl IntoView {
    let store = use_app_store();

    let title = Signal::derive(move || store.list().read().title.clone());
    let created = move || format_local(&store.list().read().created_at);

    view! {
        <div class="list-header">
            <EditableText
                text=title
                editable=true
                on_commit=Callback::new(move |title: String| store_set_title(&store, &title))
                class="list-title"
                heading=true
            />
            <p class="list-created">"List Created: " {created}</p>
        </div>
    }
}
