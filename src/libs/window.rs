//! Time-window filtering of tasks by creation timestamp.
//!
//! Every window is anchored at the start of day of a reference instant, in
//! the reference's own time zone. The preset windows only bound from below
//! (they always reach up to "now"); a custom window bounds both ends, each
//! inclusive at day granularity.
//!
//! | window | inclusive lower bound                   |
//! |--------|-----------------------------------------|
//! | day    | start of the reference day              |
//! | week   | start of day, 6 days before reference   |
//! | month  | start of day, 29 days before reference  |
//! | year   | start of day, 364 days before reference |
//! | custom | start of `start`, up to end of `end`    |
//!
//! ## Usage
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use eisen::libs::window::{filter, Window};
//!
//! let reference = Utc.with_ymd_and_hms(2024, 3, 10, 15, 0, 0).unwrap();
//! assert_eq!(
//!     Window::Week.lower_bound(&reference),
//!     Utc.with_ymd_and_hms(2024, 3, 4, 0, 0, 0).unwrap()
//! );
//! assert!(filter(&[], &Window::Day, &reference).is_empty());
//! ```

use super::task::Task;
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Window {
    Day,
    Week,
    Month,
    Year,
    Custom { start: NaiveDate, end: NaiveDate },
}

impl Window {
    /// Resolves a window kind by name. Unknown kinds, and `custom` without
    /// both dates, fall back to the week rule.
    pub fn from_kind(kind: &str, range: Option<(NaiveDate, NaiveDate)>) -> Window {
        match kind.trim().to_lowercase().as_str() {
            "day" => Window::Day,
            "week" => Window::Week,
            "month" => Window::Month,
            "year" => Window::Year,
            "custom" => match range {
                Some((start, end)) => Window::Custom { start, end },
                None => {
                    tracing::debug!("custom window without a date range, using week");
                    Window::Week
                }
            },
            other => {
                tracing::debug!(kind = other, "unknown window kind, using week");
                Window::Week
            }
        }
    }

    /// Days subtracted from the reference date for the preset windows.
    fn days_back(&self) -> Option<i64> {
        match self {
            Window::Day => Some(0),
            Window::Week => Some(6),
            Window::Month => Some(29),
            Window::Year => Some(364),
            Window::Custom { .. } => None,
        }
    }

    /// Inclusive lower bound of the window relative to `reference`.
    pub fn lower_bound<Tz: TimeZone>(&self, reference: &DateTime<Tz>) -> DateTime<Utc> {
        let tz = reference.timezone();
        match self {
            Window::Custom { start, .. } => start_of_day(*start, &tz),
            preset => {
                let days = preset.days_back().unwrap_or(0);
                start_of_day(reference.date_naive() - Duration::days(days), &tz)
            }
        }
    }

    /// Exclusive upper bound: the start of the day after `end` for custom
    /// windows, none for the presets.
    pub fn upper_bound<Tz: TimeZone>(&self, reference: &DateTime<Tz>) -> Option<DateTime<Utc>> {
        match self {
            Window::Custom { end, .. } => {
                let tz = reference.timezone();
                end.succ_opt().map(|next| start_of_day(next, &tz))
            }
            _ => None,
        }
    }

    pub fn contains<Tz: TimeZone>(&self, task: &Task, reference: &DateTime<Tz>) -> bool {
        if task.created_at < self.lower_bound(reference) {
            return false;
        }
        match self.upper_bound(reference) {
            Some(upper) => task.created_at < upper,
            None => true,
        }
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Window::Day => f.write_str("day"),
            Window::Week => f.write_str("week"),
            Window::Month => f.write_str("month"),
            Window::Year => f.write_str("year"),
            Window::Custom { start, end } => write!(f, "{} - {}", start, end),
        }
    }
}

/// Returns the tasks of `tasks` created inside `window`, input order kept.
pub fn filter<Tz: TimeZone>(tasks: &[Task], window: &Window, reference: &DateTime<Tz>) -> Vec<Task> {
    let lower = window.lower_bound(reference);
    let upper = window.upper_bound(reference);

    tasks
        .iter()
        .filter(|task| task.created_at >= lower && upper.map_or(true, |upper| task.created_at < upper))
        .cloned()
        .collect()
}

/// Midnight of `date` in `tz`, as a UTC instant. When a DST transition
/// skips midnight, the first valid local hour of the day is used instead.
pub fn start_of_day<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> DateTime<Utc> {
    let midnight = date.and_time(NaiveTime::MIN);
    (0..24)
        .find_map(|hour| {
            tz.from_local_datetime(&(midnight + Duration::hours(hour)))
                .earliest()
        })
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| Utc.from_utc_datetime(&midnight))
}
