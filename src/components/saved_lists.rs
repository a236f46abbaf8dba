//! Saved Lists Pages
//!
//! Index of remotely saved lists, and a saved list opened by id.

use leptos::prelude::*;
use leptos::task::spawn_local;
use zeiglist_core::now;

use crate::commands;
use crate::components::{format_local, TodoList};
use crate::context::use_app_context;
use crate::models::SavedListSummary;
use crate::routes::Page;
use crate::store::{store_replace_list, use_app_store};

/// Async load progress for a page
#[derive(Clone, Debug, PartialEq)]
enum LoadState<T> {
    Loading,
    Failed(String),
    NotFound,
    Loaded(T),
}

impl<T> LoadState<Vec<T>> {
    /// An empty index reads the same as a missing one
    fn from_rows(rows: Vec<T>) -> Self {
        if rows.is_empty() {
            LoadState::NotFound
        } else {
            LoadState::Loaded(rows)
        }
    }
}

/// Index of saved lists
#[component]
pub fn SavedListsPage() -> impl IntoView {
    let ctx = use_app_context();
    let (state, set_state) = signal(LoadState::<Vec<SavedListSummary>>::Loading);

    Effect::new(move |_| {
        spawn_local(async move {
            match commands::list_saved().await {
                Ok(lists) => {
                    web_sys::console::log_1(&format!("[SAVED] Loaded {} saved lists", lists.len()).into());
                    set_state.set(LoadState::from_rows(lists));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[SAVED] Error: {}", e).into());
                    set_state.set(LoadState::Failed(e));
                }
            }
        });
    });

    let render_row = move |list: SavedListSummary| {
        let created = zeiglist_core::parse_iso(&list.created_at)
            .map(|at| format_local(&at))
            .unwrap_or_else(|_| list.created_at.clone());
        let id = list.id.clone();
        view! {
            <div class="saved-list-row">
                <div>
                    <h3>{list.title}</h3>
                    <p class="saved-list-created">"Created at: " {created}</p>
                </div>
                <button class="open-btn" on:click=move |_| ctx.navigate(Page::SavedList(id.clone()))>
                    "Open in Zeiglist"
                </button>
            </div>
        }
    };

    view! {
        <div class="saved-lists">
            {move || match state.get() {
                LoadState::Loading => view! { <div>"Loading saved Zeiglists..."</div> }.into_any(),
                LoadState::Failed(e) => view! { <div class="error">"Error: " {e}</div> }.into_any(),
                LoadState::NotFound => view! { <div>"No saved Zeiglists."</div> }.into_any(),
                LoadState::Loaded(lists) => view! {
                    <h2>"Saved Zeiglists"</h2>
                    {lists.into_iter().map(render_row).collect_view()}
                }.into_any(),
            }}
        </div>
    }
}

/// A saved list loaded into the editor
#[component]
pub fn SavedListPage(id: String) -> impl IntoView {
    let store = use_app_store();
    let (state, set_state) = signal(LoadState::<()>::Loading);

    Effect::new(move |_| {
        let id = id.clone();
        spawn_local(async move {
            match commands::fetch_saved(&id).await {
                Ok(Some(saved)) => match saved.into_list(now()) {
                    Ok(list) => {
                        web_sys::console::log_1(&format!("[SAVED] Opened {} with {} tasks", id, list.tasks.len()).into());
                        store_replace_list(&store, list, Some(id));
                        set_state.set(LoadState::Loaded(()));
                    }
                    Err(e) => {
                        web_sys::console::error_1(&format!("[SAVED] Rejected {}: {}", id, e).into());
                        set_state.set(LoadState::Failed(format!("Saved Zeiglist is damaged: {}", e.message())));
                    }
                },
                Ok(None) => set_state.set(LoadState::NotFound),
                Err(e) => {
                    web_sys::console::error_1(&format!("[SAVED] Error: {}", e).into());
                    set_state.set(LoadState::Failed(e));
                }
            }
        });
    });

    move || match state.get() {
        LoadState::Loading => view! { <div>"Loading Zeiglist..."</div> }.into_any(),
        LoadState::Failed(e) => view! { <div class="error">"Error: " {e}</div> }.into_any(),
        LoadState::NotFound => view! { <div>"No data found for this Zeiglist."</div> }.into_any(),
        LoadState::Loaded(()) => view! { <TodoList /> }.into_any(),
    }
}
