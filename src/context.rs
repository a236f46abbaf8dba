//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::routes::{current_page, push_history, Page};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current page - read
    pub page: ReadSignal<Page>,
    /// Current page - write
    set_page: WriteSignal<Page>,
}

impl AppContext {
    pub fn new(page: (ReadSignal<Page>, WriteSignal<Page>)) -> Self {
        Self {
            page: page.0,
            set_page: page.1,
        }
    }

    /// Navigate to a page and record it in the browser history
    pub fn navigate(&self, page: Page) {
        push_history(&page);
        self.set_page.set(page);
    }

    /// Follow back/forward buttons
    pub fn bind_popstate(&self) {
        use wasm_bindgen::closure::Closure;

        let set_page = self.set_page;
        let on_popstate = Closure::<dyn FnMut(web_sys::PopStateEvent)>::new(move |_ev: web_sys::PopStateEvent| {
            set_page.set(current_page());
        });
        if let Some(win) = web_sys::window() {
            let _ = win.add_event_listener_with_callback("popstate", on_popstate.as_ref().unchecked_ref());
        }
        on_popstate.forget();
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
