//! Date-Time Picker Component
//!
//! `datetime-local` input bound to the list's event time.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::commands;
use crate::store::{store_set_event_date_time, use_app_store, AppStateStoreFields};

#[component]
pub fn DateTimePicker() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="date-time-picker">
            <input
                type="datetime-local"
                prop:value=move || store.list().read().event_date_time.clone()
                on:input=move |ev| {
                    if let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) {
                        store_set_event_date_time(&store, &input.value());
                    }
                }
            />
            <button on:click=move |_| commands::alert("Event date/time updated!")>"Update"</button>
        </div>
    }
}
