//! `eisen stats`: dashboard counts for a time window.
//!
//! Prints totals, completion rate, the per-quadrant breakdown and the most
//! recently created tasks of the window.

use super::open_repository;
use crate::{
    libs::{messages::Message, stats, view::View, window},
    msg_info, msg_print,
};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;

const RECENT_LIMIT: usize = 5;

#[derive(Debug, Args)]
pub struct StatsArgs {
    /// day, week, month, year or custom
    #[arg(short, long, default_value = "week")]
    window: String,
    /// First day of a custom window (YYYY-MM-DD)
    #[arg(long, requires = "to")]
    from: Option<NaiveDate>,
    /// Last day of a custom window (YYYY-MM-DD)
    #[arg(long, requires = "from")]
    to: Option<NaiveDate>,
}

pub async fn cmd(args: StatsArgs) -> Result<()> {
    let repository = open_repository()?;
    let tasks = repository.list().await?;

    let range = args.from.zip(args.to);
    let window = window::Window::from_kind(&args.window, range);
    let filtered = window::filter(&tasks, &window, &Local::now());

    msg_print!(Message::StatsHeader(window.to_string()), true);
    View::stats(&stats::aggregate(&filtered));

    msg_print!(Message::QuadrantBreakdownHeader, true);
    View::quadrants(&stats::quadrant_breakdown(&filtered));

    let recent = stats::recent(&filtered, RECENT_LIMIT);
    if recent.is_empty() {
        msg_info!(Message::TasksNotFound);
        return Ok(());
    }
    msg_print!(Message::RecentTasksHeader, true);
    View::tasks(&recent);

    Ok(())
}
