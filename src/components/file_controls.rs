//! File Controls Component
//!
//! Upload a list from a JSON file, download it as one, or save it remotely.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use zeiglist_core::{now, parse_upload};

use crate::commands;
use crate::context::use_app_context;
use crate::routes::Page;
use crate::store::{store_replace_list, store_set_remote_id, use_app_store, AppStateStoreFields};

/// Pause before acknowledging a local download
const SAVE_ACK_DELAY_MS: u32 = 500;

#[component]
pub fn FileControls() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();
    let file_input = NodeRef::<html::Input>::new();

    let (is_uploading, set_is_uploading) = signal(false);
    let (is_saving, set_is_saving) = signal(false);
    let (is_saving_remote, set_is_saving_remote) = signal(false);

    let on_file_change = move |_| {
        let Some(input) = file_input.get() else { return };
        let Some(file) = input.files().and_then(|files| files.get(0)) else { return };
        // Reset so picking the same file again still fires change
        input.set_value("");

        set_is_uploading.set(true);
        spawn_local(async move {
            match commands::read_file_text(file).await {
                Ok(raw) => match parse_upload(&raw, now()) {
                    Ok(list) => {
                        web_sys::console::log_1(&format!("[FILES] Uploaded list with {} tasks", list.tasks.len()).into());
                        store_replace_list(&store, list, None);
                        commands::alert("To-Do list uploaded successfully.");
                    }
                    Err(e) => {
                        web_sys::console::error_1(&format!("[FILES] Upload rejected: {}", e).into());
                        commands::alert(e.message());
                    }
                },
                Err(e) => {
                    web_sys::console::error_1(&format!("[FILES] Failed to read file: {}", e).into());
                    commands::alert("Failed to parse JSON file.");
                }
            }
            set_is_uploading.set(false);
        });
    };

    let on_save = move |_| {
        set_is_saving.set(true);
        let result = store.list().with_untracked(commands::download_list);
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(SAVE_ACK_DELAY_MS).await;
            set_is_saving.set(false);
            match result {
                Ok(()) => commands::alert("To-Do list saved successfully."),
                Err(e) => commands::alert(&e),
            }
        });
    };

    let on_save_remote = move |_| {
        let list = store.list().get_untracked();
        set_is_saving_remote.set(true);
        spawn_local(async move {
            match commands::save_list(&list).await {
                Ok(response) => {
                    web_sys::console::log_1(&format!("[REMOTE] Saved, id={:?}", response.id).into());
                    if response.id.is_some() {
                        store_set_remote_id(&store, response.id);
                    }
                    commands::alert(&response.message);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[REMOTE] Save failed: {}", e).into());
                    commands::alert(&e);
                }
            }
            set_is_saving_remote.set(false);
        });
    };

    view! {
        <div class="file-controls">
            <input
                type="file"
                accept="application/json"
                style="display: none;"
                node_ref=file_input
                on:change=on_file_change
            />
            <button
                class="upload-btn"
                disabled=move || is_uploading.get()
                on:click=move |_| {
                    if let Some(input) = file_input.get() {
                        input.click();
                    }
                }
            >
                {move || if is_uploading.get() { "Uploading..." } else { "Upload" }}
            </button>
            <button class="save-btn" disabled=move || is_saving.get() on:click=on_save>
                {move || if is_saving.get() { "Saving..." } else { "Save" }}
            </button>
            <button class="save-remote-btn" disabled=move || is_saving_remote.get() on:click=on_save_remote>
                {move || if is_saving_remote.get() { "Saving to Airtable..." } else { "Save to Airtable" }}
            </button>
            {move || store.remote_id().get().map(|id| {
                let page = Page::SavedList(id.clone());
                view! {
                    <a
                        class="remote-link"
                        href=page.path()
                        on:click=move |ev| {
                            ev.prevent_default();
                            ctx.navigate(page.clone());
                        }
                    >
                        "Saved as " {id}
                    </a>
                }
            })}
        </div>
    }
}
