use super::calendar::DATE_FORMAT;
use super::stats::{QuadrantSummary, Stats};
use super::task::{Task, TaskStatus};
use chrono::Local;
use prettytable::{row, Table};
use std::collections::BTreeMap;

pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "QUADRANT", "STATUS", "CREATED", "COMPLETED", "TAGS"]);
        for task in tasks {
            table.add_row(row![
                task.id,
                task.title,
                task.quadrant,
                task.status,
                task.created_at.with_timezone(&Local).format(DATE_FORMAT),
                task.completed_at
                    .map(|at| at.with_timezone(&Local).format(DATE_FORMAT).to_string())
                    .unwrap_or_default(),
                task.tags.join(", ")
            ]);
        }
        table.printstd();
    }

    /// Full detail of one task, description included.
    pub fn task(task: &Task) {
        let mut table = Table::new();

        table.add_row(row!["ID", task.id]);
        table.add_row(row!["TITLE", task.title]);
        table.add_row(row!["DESCRIPTION", task.description.as_deref().unwrap_or("")]);
        table.add_row(row!["QUADRANT", task.quadrant]);
        table.add_row(row!["STATUS", task.status]);
        table.add_row(row!["TAGS", task.tags.join(", ")]);
        table.printstd();
    }

    pub fn stats(stats: &Stats) {
        let mut table = Table::new();

        table.add_row(row!["TOTAL", "PENDING", "COMPLETED", "CANCELLED", "RATE"]);
        table.add_row(row![
            stats.total,
            stats.pending,
            stats.completed,
            stats.cancelled,
            format!("{}%", stats.completion_rate)
        ]);
        table.printstd();
    }

    pub fn quadrants(summaries: &[QuadrantSummary]) {
        let mut table = Table::new();

        table.add_row(row!["QUADRANT", "TOTAL", "COMPLETED", "RATE"]);
        for summary in summaries {
            table.add_row(row![
                summary.quadrant,
                summary.total,
                summary.completed,
                format!("{}%", summary.completion_rate)
            ]);
        }
        table.printstd();
    }

    pub fn calendar(marks: &BTreeMap<String, TaskStatus>) {
        let mut table = Table::new();

        table.add_row(row!["DATE", "STATUS"]);
        for (date, status) in marks {
            table.add_row(row![date, status]);
        }
        table.printstd();
    }
}
