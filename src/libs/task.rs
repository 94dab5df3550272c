//! Task entity and the quadrant/status value types.
//!
//! A task lives in exactly one of the four quadrants of the urgent/important
//! matrix and moves between `pending`, `completed` and `cancelled`. The
//! status mutators on [`Task`] keep `completed_at` in lockstep with the
//! status: it is present if and only if the task is completed.
//!
//! ## Usage
//!
//! ```rust
//! use eisen::libs::task::{Quadrant, TaskDraft};
//!
//! let draft = TaskDraft::new("Prepare demo", None, Quadrant::try_from(1)?, vec![])?;
//! assert_eq!(draft.quadrant, Quadrant::UrgentImportant);
//! # Ok::<(), eisen::libs::error::TaskError>(())
//! ```

use super::error::TaskError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four fixed priority categories.
///
/// Serialized as its number (1..=4), the shape the backend commands use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Quadrant {
    /// Urgent and important.
    UrgentImportant = 1,
    /// Important, not urgent.
    Important = 2,
    /// Urgent, not important.
    Urgent = 3,
    /// Neither urgent nor important.
    Neither = 4,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [Quadrant::UrgentImportant, Quadrant::Important, Quadrant::Urgent, Quadrant::Neither];

    pub fn number(self) -> u8 {
        self as u8
    }

    /// Zero-based position, used to index per-quadrant arrays.
    pub fn index(self) -> usize {
        self as usize - 1
    }
}

impl TryFrom<u8> for Quadrant {
    type Error = TaskError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Quadrant::UrgentImportant),
            2 => Ok(Quadrant::Important),
            3 => Ok(Quadrant::Urgent),
            4 => Ok(Quadrant::Neither),
            other => Err(TaskError::InvalidQuadrant(other)),
        }
    }
}

impl From<Quadrant> for u8 {
    fn from(quadrant: Quadrant) -> Self {
        quadrant.number()
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q{}", self.number())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Pending,
    Completed,
    Cancelled,
}

impl TaskStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Completed => "completed",
            TaskStatus::Cancelled => "cancelled",
        }
    }
}

impl FromStr for TaskStatus {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(TaskStatus::Pending),
            "completed" => Ok(TaskStatus::Completed),
            "cancelled" => Ok(TaskStatus::Cancelled),
            other => Err(TaskError::UnknownStatus(other.to_string())),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A task as held by the backend and mirrored in the repository cache.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub quadrant: Quadrant,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    pub status: TaskStatus,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Task {
    /// Materializes a draft into a pending task. Only backends call this:
    /// they own id and creation-time assignment.
    pub fn from_draft(id: String, draft: TaskDraft, created_at: DateTime<Utc>) -> Self {
        Task {
            id,
            title: draft.title,
            description: draft.description,
            quadrant: draft.quadrant,
            created_at,
            completed_at: None,
            status: TaskStatus::Pending,
            tags: draft.tags,
        }
    }

    /// Marks the task completed. An already completed task keeps its
    /// original completion time.
    pub fn complete(&mut self, at: DateTime<Utc>) {
        if self.status != TaskStatus::Completed {
            self.status = TaskStatus::Completed;
            self.completed_at = Some(at);
        }
    }

    pub fn cancel(&mut self) {
        self.status = TaskStatus::Cancelled;
        self.completed_at = None;
    }

    pub fn reopen(&mut self) {
        self.status = TaskStatus::Pending;
        self.completed_at = None;
    }

    pub fn apply_status(&mut self, status: TaskStatus, at: DateTime<Utc>) {
        match status {
            TaskStatus::Completed => self.complete(at),
            TaskStatus::Cancelled => self.cancel(),
            TaskStatus::Pending => self.reopen(),
        }
    }

    /// Replaces every editable field from `patch`; `id` and `created_at`
    /// are never touched.
    pub fn apply_patch(&mut self, patch: &TaskPatch, at: DateTime<Utc>) {
        self.title = patch.title.clone();
        self.description = patch.description.clone();
        self.quadrant = patch.quadrant;
        self.tags = patch.tags.clone();
        self.apply_status(patch.status, at);
    }

    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }
}

/// Input of the create command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskDraft {
    pub title: String,
    pub description: Option<String>,
    pub quadrant: Quadrant,
    pub tags: Vec<String>,
}

impl TaskDraft {
    pub fn new(title: &str, description: Option<&str>, quadrant: Quadrant, tags: Vec<String>) -> Result<Self, TaskError> {
        Ok(TaskDraft {
            title: validate_title(title)?,
            description: normalize_description(description),
            quadrant,
            tags,
        })
    }
}

/// Full replacement input of the update command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskPatch {
    pub title: String,
    pub description: Option<String>,
    pub quadrant: Quadrant,
    pub status: TaskStatus,
    pub tags: Vec<String>,
}

impl TaskPatch {
    pub fn new(
        title: &str,
        description: Option<&str>,
        quadrant: Quadrant,
        status: TaskStatus,
        tags: Vec<String>,
    ) -> Result<Self, TaskError> {
        Ok(TaskPatch {
            title: validate_title(title)?,
            description: normalize_description(description),
            quadrant,
            status,
            tags,
        })
    }
}

impl From<&Task> for TaskPatch {
    fn from(task: &Task) -> Self {
        TaskPatch {
            title: task.title.clone(),
            description: task.description.clone(),
            quadrant: task.quadrant,
            status: task.status,
            tags: task.tags.clone(),
        }
    }
}

/// Splits comma-separated tag input. Order and duplicates are kept.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

fn validate_title(title: &str) -> Result<String, TaskError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(TaskError::EmptyTitle);
    }
    Ok(title.to_string())
}

fn normalize_description(description: Option<&str>) -> Option<String> {
    description.map(str::trim).filter(|d| !d.is_empty()).map(str::to_string)
}
