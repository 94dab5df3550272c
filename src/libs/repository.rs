//! Task repository: the client-side cache over a [`TaskBackend`].
//!
//! The cache is a read-through, write-invalidate view of the backend. It is
//! never patched locally: every successful mutation is followed by a full
//! `get_tasks` reload whose result replaces the whole collection, so fields
//! the backend computes (ids, creation and completion times) are always the
//! backend's own.
//!
//! ## Failure Semantics
//!
//! - **Load failure**: production mode returns
//!   [`RepositoryError::LoadFailed`] and leaves the cache as it was;
//!   development mode warns and substitutes [`fallback_tasks`].
//! - **Mutation failure**: returns [`RepositoryError::MutationFailed`]; no
//!   reload happens and the cache keeps its last known-good state.
//!
//! Callers must await each mutation (and its reload) before issuing the
//! next one; the repository does not serialize overlapping mutations.

use super::config::ExecutionMode;
use super::error::RepositoryError;
use super::messages::Message;
use super::task::{Quadrant, Task, TaskDraft, TaskPatch, TaskStatus};
use crate::api::TaskBackend;
use crate::msg_warning;
use chrono::{DateTime, TimeZone, Utc};
use parking_lot::RwLock;

pub struct TaskRepository<B> {
    backend: B,
    mode: ExecutionMode,
    cache: RwLock<Vec<Task>>,
}

impl<B: TaskBackend> TaskRepository<B> {
    pub fn new(backend: B, mode: ExecutionMode) -> Self {
        Self {
            backend,
            mode,
            cache: RwLock::new(Vec::new()),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Snapshot of the cached collection.
    pub fn tasks(&self) -> Vec<Task> {
        self.cache.read().clone()
    }

    pub fn find(&self, id: &str) -> Option<Task> {
        self.cache.read().iter().find(|task| task.id == id).cloned()
    }

    /// Fetches the full task list and replaces the cache with it.
    pub async fn list(&self) -> Result<Vec<Task>, RepositoryError> {
        match self.backend.get_tasks().await {
            Ok(tasks) => {
                tracing::debug!(count = tasks.len(), "task cache reloaded");
                self.replace(tasks.clone());
                Ok(tasks)
            }
            Err(e) => match self.mode {
                ExecutionMode::Development => {
                    msg_warning!(Message::DataLoadFallback(e.to_string()));
                    let tasks = fallback_tasks();
                    self.replace(tasks.clone());
                    Ok(tasks)
                }
                ExecutionMode::Production => {
                    tracing::warn!(error = %e, "failed to load tasks");
                    Err(RepositoryError::LoadFailed(e))
                }
            },
        }
    }

    /// Same as [`Self::list`]; named for the mutate-then-reload call sites.
    pub async fn reload(&self) -> Result<Vec<Task>, RepositoryError> {
        self.list().await
    }

    pub async fn create(&self, draft: &TaskDraft) -> Result<Vec<Task>, RepositoryError> {
        self.backend
            .create_task(draft)
            .await
            .map_err(|cause| mutation_failed("create", cause))?;
        self.reload().await
    }

    pub async fn update(&self, id: &str, patch: &TaskPatch) -> Result<Vec<Task>, RepositoryError> {
        self.backend
            .update_task(id, patch)
            .await
            .map_err(|cause| mutation_failed("update", cause))?;
        self.reload().await
    }

    pub async fn delete(&self, id: &str) -> Result<Vec<Task>, RepositoryError> {
        self.backend
            .delete_task(id)
            .await
            .map_err(|cause| mutation_failed("delete", cause))?;
        self.reload().await
    }

    pub async fn complete(&self, id: &str) -> Result<Vec<Task>, RepositoryError> {
        self.backend
            .complete_task(id)
            .await
            .map_err(|cause| mutation_failed("complete", cause))?;
        self.reload().await
    }

    /// Cancels a cached task through a full update.
    pub async fn cancel(&self, id: &str) -> Result<Vec<Task>, RepositoryError> {
        let task = self.find(id).ok_or_else(|| RepositoryError::NotFound(id.to_string()))?;
        let mut patch = TaskPatch::from(&task);
        patch.status = TaskStatus::Cancelled;
        self.update(id, &patch).await
    }

    fn replace(&self, tasks: Vec<Task>) {
        *self.cache.write() = tasks;
    }
}

fn mutation_failed(operation: &'static str, cause: anyhow::Error) -> RepositoryError {
    tracing::warn!(operation, error = %cause, "task mutation failed");
    RepositoryError::MutationFailed { operation, cause }
}

/// Fixed sample data substituted for a failed load in development mode.
pub fn fallback_tasks() -> Vec<Task> {
    vec![
        sample(
            "1",
            "Finish project report",
            "Write the Q1 project progress report",
            Quadrant::UrgentImportant,
            at(2023, 1, 1, 10, 0),
            Some(at(2023, 1, 2, 15, 30)),
            TaskStatus::Completed,
            &["work", "docs"],
        ),
        sample(
            "2",
            "Learn new React features",
            "Study the React 18 APIs",
            Quadrant::Important,
            at(2023, 1, 3, 9, 0),
            None,
            TaskStatus::Pending,
            &["learning", "tech"],
        ),
        sample(
            "3",
            "Reply to emails",
            "Answer customer questions about product features",
            Quadrant::Urgent,
            at(2023, 1, 4, 11, 0),
            Some(at(2023, 1, 4, 11, 30)),
            TaskStatus::Completed,
            &["work", "communication"],
        ),
        sample(
            "4",
            "Browse social media",
            "Catch up on Twitter and LinkedIn",
            Quadrant::Neither,
            at(2023, 1, 5, 20, 0),
            None,
            TaskStatus::Cancelled,
            &["leisure"],
        ),
        sample(
            "5",
            "Prepare customer demo",
            "Build the product demo for next week's meeting",
            Quadrant::UrgentImportant,
            at(2023, 1, 6, 14, 0),
            None,
            TaskStatus::Pending,
            &["work", "demo"],
        ),
        sample(
            "6",
            "Workout",
            "30 minutes of cardio and strength training",
            Quadrant::Important,
            at(2023, 1, 7, 18, 0),
            Some(at(2023, 1, 7, 19, 0)),
            TaskStatus::Completed,
            &["health"],
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn sample(
    id: &str,
    title: &str,
    description: &str,
    quadrant: Quadrant,
    created_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
    status: TaskStatus,
    tags: &[&str],
) -> Task {
    Task {
        id: id.to_string(),
        title: title.to_string(),
        description: Some(description.to_string()),
        quadrant,
        created_at,
        completed_at,
        status,
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
    }
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}
