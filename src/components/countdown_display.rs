//! Countdown Display Component
//!
//! Ticks once per second toward the list's event time (or the daily
//! deadline) and stops once time is up.

use std::time::Duration;

use chrono::NaiveDateTime;
use leptos::prelude::*;

use crate::components::local_now;
use crate::models::{Countdown, CountdownState};
use crate::store::{use_app_store, AppStateStoreFields};

/// Countdown state for `event_date_time` as seen at `now`
fn state_for(event_date_time: &str, now: NaiveDateTime) -> CountdownState {
    Countdown::for_event(event_date_time, now).state_at(now)
}

#[component]
pub fn CountdownDisplay() -> impl IntoView {
    let store = use_app_store();

    // Only the event time matters, not every task edit
    let event_date_time = Memo::new(move |_| store.list().read().event_date_time.clone());

    let initial = store
        .list()
        .with_untracked(|list| state_for(&list.event_date_time, local_now()));
    let (state, set_state) = signal(initial);
    let ticker = StoredValue::new(None::<IntervalHandle>);

    let stop = move || {
        if let Some(handle) = ticker.get_value() {
            handle.clear();
        }
        ticker.set_value(None);
    };

    // Restart whenever the target changes
    Effect::new(move |_| {
        let countdown = Countdown::for_event(&event_date_time.get(), local_now());
        stop();

        let tick = move || {
            let next = countdown.state_at(local_now());
            set_state.set(next);
            next.is_expired()
        };
        if tick() {
            return;
        }

        match set_interval_with_handle(move || if tick() { stop() }, Duration::from_secs(1)) {
            Ok(handle) => ticker.set_value(Some(handle)),
            Err(e) => web_sys::console::error_1(&format!("[COUNTDOWN] Failed to start ticker: {:?}", e).into()),
        }
    });

    on_cleanup(stop);

    view! {
        <div class=move || if state.get().is_expired() { "countdown expired" } else { "countdown" }>
            {move || state.get().to_string()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap().and_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_first_render_is_not_time_up() {
        assert!(!state_for("", at(9, 0)).is_expired());
        assert!(!state_for("2024-05-02T08:00", at(9, 0)).is_expired());
        assert!(state_for("2024-04-30T08:00", at(9, 0)).is_expired());
    }
}
