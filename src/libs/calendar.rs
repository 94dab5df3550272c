//! Calendar day markings.
//!
//! Each calendar day on which at least one task was created gets one mark:
//! the status of the last task in input order created that day. Marks are
//! for visual highlighting only; counting goes through [`super::stats`].

use super::task::{Task, TaskStatus};
use chrono::{NaiveDate, TimeZone};
use std::collections::BTreeMap;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Builds `YYYY-MM-DD -> status` marks, creation dates taken in `tz`.
pub fn build_marks<Tz: TimeZone>(tasks: &[Task], tz: &Tz) -> BTreeMap<String, TaskStatus> {
    let mut marks = BTreeMap::new();
    for task in tasks {
        // Later tasks overwrite earlier ones on the same day
        marks.insert(created_date(task, tz).format(DATE_FORMAT).to_string(), task.status);
    }
    marks
}

/// Tasks created on `date` in `tz`, input order kept.
pub fn tasks_on<'a, Tz: TimeZone>(tasks: &'a [Task], date: NaiveDate, tz: &Tz) -> Vec<&'a Task> {
    tasks.iter().filter(|task| created_date(task, tz) == date).collect()
}

fn created_date<Tz: TimeZone>(task: &Task, tz: &Tz) -> NaiveDate {
    task.created_at.with_timezone(tz).date_naive()
}
