//! Zeiglist Frontend App
//!
//! Header plus one of three pages, switched by the current route.

use leptos::prelude::*;
use reactive_stores::Store;
use zeiglist_core::now;

use crate::components::{provide_task_dnd, NavBar, SavedListPage, SavedListsPage, TodoList};
use crate::context::AppContext;
use crate::models::ZeigList;
use crate::routes::{current_page, Page};
use crate::store::{store_replace_list, AppState};

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(AppState::new());
    let (page, set_page) = signal(current_page());

    // Provide context to all children
    let ctx = AppContext::new((page, set_page));
    provide_context(store);
    provide_context(ctx);
    provide_task_dnd(store);
    ctx.bind_popstate();

    // Coming back to "/" starts a fresh list
    Effect::new(move |prev: Option<Page>| {
        let current = page.get();
        web_sys::console::log_1(&format!("[APP] Page: {}", current.path()).into());
        if current == Page::NewList && prev.is_some_and(|p| p != Page::NewList) {
            store_replace_list(&store, ZeigList::new(now()), None);
        }
        current
    });

    view! {
        <div class="app-layout">
            <NavBar />

            <main class="main-content">
                {move || match page.get() {
                    Page::NewList => view! { <TodoList /> }.into_any(),
                    Page::SavedLists => view! { <SavedListsPage /> }.into_any(),
                    Page::SavedList(id) => view! { <SavedListPage id=id /> }.into_any(),
                }}
            </main>
        </div>
    }
}
