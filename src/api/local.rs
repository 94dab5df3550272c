//! SQLite-backed [`TaskBackend`].
//!
//! Handles the task commands in-process: ids are UUID v4 strings, creation
//! and completion times are stamped here, and status changes go through
//! [`Task::apply_status`] so completion times stay consistent.

use super::TaskBackend;
use crate::db::db::Db;
use crate::db::tasks::Tasks;
use crate::libs::task::{Task, TaskDraft, TaskPatch};
use anyhow::{anyhow, Result};
use chrono::Utc;
use parking_lot::Mutex;
use std::path::Path;
use uuid::Uuid;

pub struct LocalBackend {
    store: Mutex<Tasks>,
}

impl LocalBackend {
    /// Opens the database in the application data directory.
    pub fn new() -> Result<Self> {
        Ok(Self::with_store(Tasks::new()?))
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::with_store(Tasks::with_db(Db::open(path)?)?))
    }

    pub fn with_store(store: Tasks) -> Self {
        Self { store: Mutex::new(store) }
    }

    /// Stores already materialized tasks (from an importer) unchanged.
    /// Tasks whose id is already present are skipped. Returns the number
    /// of tasks inserted.
    pub fn import(&self, tasks: &[Task]) -> Result<usize> {
        let mut store = self.store.lock();
        let mut inserted = 0;
        for task in tasks {
            if store.get_by_id(&task.id)?.is_some() {
                tracing::debug!(id = %task.id, "skipping already imported task");
                continue;
            }
            store.insert(task)?;
            inserted += 1;
        }
        Ok(inserted)
    }

    fn modify(&self, id: &str, change: impl FnOnce(&mut Task)) -> Result<()> {
        let mut store = self.store.lock();
        let mut task = store.get_by_id(id)?.ok_or_else(|| anyhow!("task {} not found", id))?;
        change(&mut task);
        store.update(&task)?;
        Ok(())
    }
}

impl TaskBackend for LocalBackend {
    async fn get_tasks(&self) -> Result<Vec<Task>> {
        self.store.lock().fetch()
    }

    async fn create_task(&self, draft: &TaskDraft) -> Result<()> {
        let task = Task::from_draft(Uuid::new_v4().to_string(), draft.clone(), Utc::now());
        tracing::debug!(id = %task.id, "creating task");
        self.store.lock().insert(&task)
    }

    async fn update_task(&self, id: &str, patch: &TaskPatch) -> Result<()> {
        self.modify(id, |task| task.apply_patch(patch, Utc::now()))
    }

    async fn delete_task(&self, id: &str) -> Result<()> {
        match self.store.lock().delete(id)? {
            0 => Err(anyhow!("task {} not found", id)),
            _ => Ok(()),
        }
    }

    async fn complete_task(&self, id: &str) -> Result<()> {
        self.modify(id, |task| task.complete(Utc::now()))
    }
}
