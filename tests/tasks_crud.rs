#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use eisen::api::local::LocalBackend;
    use eisen::api::TaskBackend;
    use eisen::db::db::Db;
    use eisen::db::tasks::Tasks;
    use eisen::libs::task::{Quadrant, Task, TaskDraft, TaskPatch, TaskStatus};
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, AsyncTestContext};

    struct TaskTestContext {
        _temp_dir: TempDir,
        db_path: PathBuf,
    }

    impl AsyncTestContext for TaskTestContext {
        async fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db_path = temp_dir.path().join("eisen.db");
            TaskTestContext {
                _temp_dir: temp_dir,
                db_path,
            }
        }
    }

    fn stored_task(id: &str) -> Task {
        Task {
            id: id.to_string(),
            title: "Stored".to_string(),
            description: Some("with description".to_string()),
            quadrant: Quadrant::Urgent,
            created_at: Utc.with_ymd_and_hms(2024, 1, 15, 8, 30, 0).unwrap(),
            completed_at: Some(Utc.with_ymd_and_hms(2024, 1, 16, 9, 0, 0).unwrap()),
            status: TaskStatus::Completed,
            tags: vec!["a".to_string(), "b".to_string()],
        }
    }

    #[test]
    fn test_store_round_trip() {
        let mut tasks = Tasks::with_db(Db::in_memory().unwrap()).unwrap();
        let task = stored_task("x");
        tasks.insert(&task).unwrap();

        assert_eq!(tasks.get_by_id("x").unwrap(), Some(task.clone()));
        assert_eq!(tasks.fetch().unwrap(), vec![task]);
        assert!(tasks.get_by_id("y").unwrap().is_none());
    }

    #[test]
    fn test_store_update_and_delete() {
        let mut tasks = Tasks::with_db(Db::in_memory().unwrap()).unwrap();
        let mut task = stored_task("x");
        tasks.insert(&task).unwrap();

        task.title = "Renamed".to_string();
        task.reopen();
        task.tags.clear();
        assert_eq!(tasks.update(&task).unwrap(), 1);

        let updated = tasks.get_by_id("x").unwrap().unwrap();
        assert_eq!(updated.title, "Renamed");
        assert_eq!(updated.status, TaskStatus::Pending);
        assert!(updated.completed_at.is_none());
        assert!(updated.tags.is_empty());

        assert_eq!(tasks.delete("x").unwrap(), 1);
        assert_eq!(tasks.delete("x").unwrap(), 0);
        assert!(tasks.fetch().unwrap().is_empty());
    }

    #[test_context(TaskTestContext)]
    #[tokio::test]
    async fn test_local_backend_lifecycle(ctx: &mut TaskTestContext) {
        let backend = LocalBackend::open(&ctx.db_path).unwrap();

        let draft = TaskDraft::new("Write changelog", Some("for 1.0"), Quadrant::Important, vec!["docs".to_string()]).unwrap();
        backend.create_task(&draft).await.unwrap();

        let tasks = backend.get_tasks().await.unwrap();
        assert_eq!(tasks.len(), 1);
        let id = tasks[0].id.clone();
        assert_eq!(id.len(), 36);
        assert_eq!(tasks[0].status, TaskStatus::Pending);
        assert!(tasks[0].completed_at.is_none());

        backend.complete_task(&id).await.unwrap();
        let completed = backend.get_tasks().await.unwrap().remove(0);
        assert_eq!(completed.status, TaskStatus::Completed);
        assert!(completed.completed_at.is_some());

        let mut patch = TaskPatch::from(&completed);
        patch.status = TaskStatus::Cancelled;
        backend.update_task(&id, &patch).await.unwrap();
        let cancelled = backend.get_tasks().await.unwrap().remove(0);
        assert_eq!(cancelled.status, TaskStatus::Cancelled);
        assert!(cancelled.completed_at.is_none());
        assert_eq!(cancelled.created_at, tasks[0].created_at);

        backend.delete_task(&id).await.unwrap();
        assert!(backend.get_tasks().await.unwrap().is_empty());
    }

    #[test_context(TaskTestContext)]
    #[tokio::test]
    async fn test_local_backend_unknown_id(ctx: &mut TaskTestContext) {
        let backend = LocalBackend::open(&ctx.db_path).unwrap();

        assert!(backend.complete_task("missing").await.is_err());
        assert!(backend.delete_task("missing").await.is_err());
        let patch = TaskPatch::from(&stored_task("missing"));
        assert!(backend.update_task("missing", &patch).await.is_err());
    }

    #[test_context(TaskTestContext)]
    #[tokio::test]
    async fn test_import_skips_existing(ctx: &mut TaskTestContext) {
        let backend = LocalBackend::open(&ctx.db_path).unwrap();
        let imported = vec![stored_task("gitlab-7-1"), stored_task("gitlab-7-2")];

        assert_eq!(backend.import(&imported).unwrap(), 2);
        assert_eq!(backend.import(&imported).unwrap(), 0);

        let tasks = backend.get_tasks().await.unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].created_at, imported[0].created_at);
    }

    #[test_context(TaskTestContext)]
    #[tokio::test]
    async fn test_data_survives_reopen(ctx: &mut TaskTestContext) {
        {
            let backend = LocalBackend::open(&ctx.db_path).unwrap();
            let draft = TaskDraft::new("Persisted", None, Quadrant::Neither, vec![]).unwrap();
            backend.create_task(&draft).await.unwrap();
        }

        let backend = LocalBackend::open(&ctx.db_path).unwrap();
        let tasks = backend.get_tasks().await.unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "Persisted");
        assert!(tasks[0].description.is_none());
    }
}
