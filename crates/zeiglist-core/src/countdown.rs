//! Countdown Timer Math
//!
//! Works on naive local date-times, the same shape a `datetime-local` input
//! produces. The ticking itself lives in the UI.

use std::fmt;

use chrono::{Duration, NaiveDateTime, NaiveTime};

pub const TIME_IS_UP: &str = "Time is up!";

/// Default daily deadline (hour, minute) used when the list has no event time
pub const DAILY_DEADLINE: (u32, u32) = (17, 0);

const EVENT_LAYOUTS: &[&str] = &["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"];

/// Whole units left until the target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Remaining {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Remaining {
    fn from_seconds(total: i64) -> Self {
        Self {
            days: total / 86_400,
            hours: (total / 3_600) % 24,
            minutes: (total / 60) % 60,
            seconds: total % 60,
        }
    }
}

impl fmt::Display for Remaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d {}h {}m {}s", self.days, self.hours, self.minutes, self.seconds)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownState {
    Running(Remaining),
    /// Terminal; the ticker stops here
    Expired,
}

impl CountdownState {
    pub fn is_expired(&self) -> bool {
        matches!(self, CountdownState::Expired)
    }
}

impl fmt::Display for CountdownState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CountdownState::Running(remaining) => remaining.fmt(f),
            CountdownState::Expired => f.write_str(TIME_IS_UP),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    pub target: NaiveDateTime,
}

impl Countdown {
    pub fn new(target: NaiveDateTime) -> Self {
        Self { target }
    }

    /// Target from a list's `eventDateTime`, or the next daily deadline when
    /// it is blank or unparseable
    pub fn for_event(event_date_time: &str, now: NaiveDateTime) -> Self {
        let raw = event_date_time.trim();
        EVENT_LAYOUTS
            .iter()
            .find_map(|layout| NaiveDateTime::parse_from_str(raw, layout).ok())
            .map(Self::new)
            .unwrap_or_else(|| Self::next_daily(now))
    }

    /// Next occurrence of `DAILY_DEADLINE` strictly after `now`
    pub fn next_daily(now: NaiveDateTime) -> Self {
        let (hour, minute) = DAILY_DEADLINE;
        let at = NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN);
        let today = now.date().and_time(at);
        let target = if today > now { today } else { today + Duration::days(1) };
        Self::new(target)
    }

    pub fn state_at(&self, now: NaiveDateTime) -> CountdownState {
        let diff = self.target - now;
        if diff <= Duration::zero() {
            return CountdownState::Expired;
        }
        CountdownState::Running(Remaining::from_seconds(diff.num_seconds()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn test_ten_seconds_out() {
        let now = at(12, 0, 0);
        let countdown = Countdown::new(now + Duration::seconds(10));

        assert_eq!(countdown.state_at(now).to_string(), "0d 0h 0m 10s");
        assert_eq!(countdown.state_at(now + Duration::seconds(1)).to_string(), "0d 0h 0m 9s");
        assert_eq!(
            countdown.state_at(now + Duration::milliseconds(1500)).to_string(),
            "0d 0h 0m 8s"
        );
    }

    #[test]
    fn test_expired_at_and_after_target() {
        let now = at(12, 0, 0);
        let countdown = Countdown::new(now);
        assert!(countdown.state_at(now).is_expired());
        assert_eq!(countdown.state_at(now + Duration::seconds(5)).to_string(), TIME_IS_UP);
    }

    #[test]
    fn test_multi_day_breakdown() {
        let now = at(0, 0, 0);
        let countdown = Countdown::new(now + Duration::seconds(2 * 86_400 + 3 * 3_600 + 4 * 60 + 5));
        assert_eq!(
            countdown.state_at(now),
            CountdownState::Running(Remaining { days: 2, hours: 3, minutes: 4, seconds: 5 })
        );
    }

    #[test]
    fn test_for_event_parses_local_datetime() {
        let countdown = Countdown::for_event("2024-01-02T08:30", at(12, 0, 0));
        assert_eq!(countdown.target, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap().and_hms_opt(8, 30, 0).unwrap());
    }

    #[test]
    fn test_blank_event_uses_next_daily_deadline() {
        let morning = Countdown::for_event("", at(9, 0, 0));
        assert_eq!(morning.target, at(17, 0, 0));

        let evening = Countdown::for_event("not a date", at(17, 0, 0));
        assert_eq!(evening.target, at(17, 0, 0) + Duration::days(1));
    }
}
