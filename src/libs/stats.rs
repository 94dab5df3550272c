//! Dashboard statistics over a (usually window-filtered) task set.
//!
//! ## Completion Rate
//!
//! ```text
//! completion_rate = round_half_up(100 * completed / total)   (total > 0)
//!                 = 0                                         (total = 0)
//! ```
//!
//! The rate is computed in integer arithmetic so 1/2 is exactly 50 and
//! 2/3 is exactly 67.

use super::task::{Quadrant, Task, TaskStatus};
use serde::Serialize;

/// Counts for one task set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub total: usize,
    pub pending: usize,
    pub completed: usize,
    pub cancelled: usize,
    /// Task count per quadrant, indexed by [`Quadrant::index`].
    pub quadrants: [usize; 4],
    /// Whole percentage, 0..=100.
    pub completion_rate: u32,
}

impl Stats {
    pub fn quadrant(&self, quadrant: Quadrant) -> usize {
        self.quadrants[quadrant.index()]
    }
}

/// Completion figures of one quadrant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuadrantSummary {
    pub quadrant: Quadrant,
    pub total: usize,
    pub completed: usize,
    pub completion_rate: u32,
}

/// Reduces `tasks` to [`Stats`] in a single pass.
pub fn aggregate(tasks: &[Task]) -> Stats {
    let mut stats = tasks.iter().fold(Stats::default(), |mut stats, task| {
        stats.total += 1;
        match task.status {
            TaskStatus::Pending => stats.pending += 1,
            TaskStatus::Completed => stats.completed += 1,
            TaskStatus::Cancelled => stats.cancelled += 1,
        }
        stats.quadrants[task.quadrant.index()] += 1;
        stats
    });
    stats.completion_rate = completion_rate(stats.completed, stats.total);
    stats
}

/// Per-quadrant totals and completion rates, in quadrant order.
pub fn quadrant_breakdown(tasks: &[Task]) -> [QuadrantSummary; 4] {
    Quadrant::ALL.map(|quadrant| {
        let (total, completed) = tasks
            .iter()
            .filter(|task| task.quadrant == quadrant)
            .fold((0, 0), |(total, completed), task| (total + 1, completed + usize::from(task.is_completed())));
        QuadrantSummary {
            quadrant,
            total,
            completed,
            completion_rate: completion_rate(completed, total),
        }
    })
}

/// The `limit` most recently created tasks, newest first.
pub fn recent(tasks: &[Task], limit: usize) -> Vec<Task> {
    let mut sorted = tasks.to_vec();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted.truncate(limit);
    sorted
}

pub fn completion_rate(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    // round(100 * c / t) with halves rounded up: floor((200c + t) / 2t)
    ((200 * completed + total) / (2 * total)) as u32
}
