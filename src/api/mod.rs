//! Backend seams and their adapters.
//!
//! The engine talks to two external collaborators through traits defined
//! here, so the repository and the report controller can run against the
//! local SQLite store in the CLI and against hand-written mocks in tests.
//!
//! ## Features
//!
//! - **TaskBackend**: the five task commands (`get_tasks`, `create_task`,
//!   `update_task`, `delete_task`, `complete_task`)
//! - **ReportGenerator**: the `generate_report` call that turns a prompt
//!   into report text
//! - **Adapters**: [`local::LocalBackend`] (SQLite), [`openai::OpenAi`]
//!   (chat completions), [`gitlab::GitLab`] (issue import)
//!
//! ## Usage
//!
//! ```rust,no_run
//! use eisen::api::{local::LocalBackend, TaskBackend};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let backend = LocalBackend::new()?;
//! let tasks = backend.get_tasks().await?;
//! println!("{} tasks", tasks.len());
//! # Ok(())
//! # }
//! ```

use crate::libs::task::{Task, TaskDraft, TaskPatch};
use anyhow::Result;

pub mod gitlab;
pub mod local;
pub mod openai;

pub use gitlab::GitLabConfig;

/// Command contract of the task persistence backend.
///
/// Mutating commands return nothing: callers reload through
/// [`TaskBackend::get_tasks`] to observe backend-assigned fields such as
/// ids and completion times.
#[allow(async_fn_in_trait)]
pub trait TaskBackend {
    /// Returns every task known to the backend.
    async fn get_tasks(&self) -> Result<Vec<Task>>;

    /// Creates a pending task; the backend assigns `id` and `created_at`.
    async fn create_task(&self, draft: &TaskDraft) -> Result<()>;

    /// Replaces the editable fields of task `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if no task with `id` exists.
    async fn update_task(&self, id: &str, patch: &TaskPatch) -> Result<()>;

    async fn delete_task(&self, id: &str) -> Result<()>;

    /// Marks task `id` completed and stamps its completion time.
    async fn complete_task(&self, id: &str) -> Result<()>;
}

/// The external report-generation call.
#[allow(async_fn_in_trait)]
pub trait ReportGenerator {
    /// Sends `prompt` to `model` using `api_key` and returns the report text.
    async fn generate_report(&self, api_key: &str, model: &str, prompt: &str) -> Result<String>;
}
