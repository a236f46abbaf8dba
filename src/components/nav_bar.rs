//! Navigation Bar Component
//!
//! Persistent header with links between the new-list and saved-list pages.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::routes::Page;

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_app_context();

    // Links keep real hrefs but navigate through the History API
    let link = move |page: Page, label: &'static str, class: &'static str| {
        let href = page.path();
        view! {
            <a
                class=class
                href=href
                on:click=move |ev: web_sys::MouseEvent| {
                    ev.prevent_default();
                    ctx.navigate(page.clone());
                }
            >
                {label}
            </a>
        }
    };

    view! {
        <header class="nav-bar">
            <nav>
                {link(Page::NewList, "Zeiglist", "brand")}
                <div class="nav-links">
                    {link(Page::NewList, "New Zeiglist", "nav-link")}
                    {link(Page::SavedLists, "Saved Zeiglists", "nav-link")}
                </div>
            </nav>
        </header>
    }
}
