//! Typed errors of the task engine.
//!
//! Adapters and commands work with `anyhow::Result`; the engine modules
//! (task model, repository, report controller) expose these enums so callers
//! can tell a precondition failure from a backend failure.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("quadrant must be between 1 and 4, got {0}")]
    InvalidQuadrant(u8),
    #[error("unknown task status: {0}")]
    UnknownStatus(String),
    #[error("task title cannot be empty")]
    EmptyTitle,
}

#[derive(Debug, Error)]
pub enum RepositoryError {
    /// `get_tasks` failed and no fallback applies.
    #[error("Data load failed: {0}")]
    LoadFailed(anyhow::Error),
    /// A mutating command was rejected; the cache is unchanged.
    #[error("Operation failed ({operation}): {cause}")]
    MutationFailed { operation: &'static str, cause: anyhow::Error },
    #[error("Task not found: {0}")]
    NotFound(String),
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Select a date range before generating a report")]
    MissingRange,
    #[error("Configure an API key before generating a report")]
    MissingCredential,
    #[error("A report is already being generated")]
    Busy,
    /// Fetch or generation failed. The held artifact is left as it was.
    #[error("Report generation failed: {0}")]
    Failed(anyhow::Error),
    #[error("Generate a report first")]
    NoArtifact,
    #[error("Failed to save report: {0}")]
    Io(#[from] std::io::Error),
}
