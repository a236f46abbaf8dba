//! Clock Components
//!
//! Local-time helpers and the live current-time readout.

use std::time::Duration;

use chrono::{Local, NaiveDateTime};
use leptos::prelude::*;
use zeiglist_core::Timestamp;

/// Wall-clock time in the browser's zone, the shape `datetime-local` uses
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Human-readable local rendering of a stored timestamp
pub fn format_local(at: &Timestamp) -> String {
    at.with_timezone(&Local)
        .format("%a, %b %-d, %Y, %-I:%M:%S %p (UTC%:z)")
        .to_string()
}

/// IANA zone name reported by the browser, e.g. "Europe/Berlin"
fn time_zone_name() -> Option<String> {
    let format = js_sys::Intl::DateTimeFormat::new(&js_sys::Array::new(), &js_sys::Object::new());
    let options = format.resolved_options();
    js_sys::Reflect::get(&options, &"timeZone".into())
        .ok()
        .and_then(|v| v.as_string())
}

fn current_time_text() -> String {
    let now = Local::now().format("%a, %b %-d, %Y, %-I:%M:%S %p (UTC%:z)").to_string();
    match time_zone_name() {
        Some(zone) => format!("{} {}", now, zone),
        None => now,
    }
}

/// Current local time, refreshed every second
#[component]
pub fn CurrentTimeDisplay() -> impl IntoView {
    let (text, set_text) = signal(current_time_text());

    match set_interval_with_handle(move || set_text.set(current_time_text()), Duration::from_secs(1)) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(e) => web_sys::console::error_1(&format!("[CLOCK] Failed to start ticker: {:?}", e).into()),
    }

    view! {
        <div class="current-time">
            <h2>"Current Time: " <span class="current-time-value">{move || text.get()}</span></h2>
        </div>
    }
}
