//! Progress Components
//!
//! Bar and "X of Y Complete" summary, derived from the list on every read.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ProgressBar() -> impl IntoView {
    let store = use_app_store();
    let progress = Memo::new(move |_| store.list().read().progress());

    view! {
        <div class="progress">
            <div class="progress-track">
                <div
                    class="progress-fill"
                    style=move || format!("width: {}%;", progress.get().percent())
                />
            </div>
            <div class="progress-summary">
                <span class="progress-count">{move || progress.get().summary()}</span>
                <span class="progress-percent">{move || format!("{}%", progress.get().rounded_percent())}</span>
            </div>
        </div>
    }
}
