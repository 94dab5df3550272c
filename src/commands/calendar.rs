use super::open_repository;
use crate::{
    libs::{calendar, messages::Message, view::View},
    msg_info, msg_print,
};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;

#[derive(Debug, Args)]
pub struct CalendarArgs {
    /// List the tasks created on this day (YYYY-MM-DD) instead of the marks
    date: Option<NaiveDate>,
}

pub async fn cmd(args: CalendarArgs) -> Result<()> {
    let repository = open_repository()?;
    let tasks = repository.list().await?;

    match args.date {
        Some(date) => {
            let day: Vec<_> = calendar::tasks_on(&tasks, date, &Local).into_iter().cloned().collect();
            if day.is_empty() {
                msg_info!(Message::NoTasksOnDate(date.to_string()));
                return Ok(());
            }
            msg_print!(Message::TasksOnDateHeader(date.to_string()), true);
            View::tasks(&day);
        }
        None => {
            let marks = calendar::build_marks(&tasks, &Local);
            if marks.is_empty() {
                msg_info!(Message::NoCalendarMarks);
                return Ok(());
            }
            msg_print!(Message::CalendarHeader, true);
            View::calendar(&marks);
        }
    }

    Ok(())
}
