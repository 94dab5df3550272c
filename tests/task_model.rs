#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use eisen::libs::task::{parse_tags, Quadrant, Task, TaskDraft, TaskPatch, TaskStatus};

    fn task() -> Task {
        let draft = TaskDraft::new("Write tests", Some("unit"), Quadrant::Important, vec![]).unwrap();
        Task::from_draft("1".to_string(), draft, Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap())
    }

    #[test]
    fn test_quadrant_range() {
        assert!(Quadrant::try_from(0).is_err());
        assert!(Quadrant::try_from(5).is_err());
        assert_eq!(Quadrant::try_from(3).unwrap(), Quadrant::Urgent);
        assert_eq!(Quadrant::Neither.index(), 3);
    }

    #[test]
    fn test_completed_at_tracks_status() {
        let mut task = task();
        assert_eq!(task.status, TaskStatus::Pending);
        assert!(task.completed_at.is_none());

        let done_at = Utc.with_ymd_and_hms(2024, 1, 2, 10, 0, 0).unwrap();
        task.complete(done_at);
        assert_eq!(task.completed_at, Some(done_at));

        // Completing again keeps the first completion time
        task.complete(Utc.with_ymd_and_hms(2024, 1, 3, 10, 0, 0).unwrap());
        assert_eq!(task.completed_at, Some(done_at));

        task.cancel();
        assert!(task.completed_at.is_none());

        task.apply_status(TaskStatus::Completed, done_at);
        assert!(task.completed_at.is_some());
        task.reopen();
        assert_eq!(task.status, TaskStatus::Pending);
        assert!(task.completed_at.is_none());
    }

    #[test]
    fn test_patch_keeps_identity() {
        let mut task = task();
        let created_at = task.created_at;
        let patch = TaskPatch::new("Renamed", None, Quadrant::Neither, TaskStatus::Cancelled, vec!["x".into()]).unwrap();
        task.apply_patch(&patch, Utc::now());

        assert_eq!(task.id, "1");
        assert_eq!(task.created_at, created_at);
        assert_eq!(task.title, "Renamed");
        assert_eq!(task.description, None);
        assert_eq!(task.quadrant, Quadrant::Neither);
        assert_eq!(task.status, TaskStatus::Cancelled);
        assert!(task.completed_at.is_none());
    }

    #[test]
    fn test_blank_input_normalized() {
        assert!(TaskDraft::new("   ", None, Quadrant::Neither, vec![]).is_err());

        let draft = TaskDraft::new("  Title ", Some("  "), Quadrant::Neither, vec![]).unwrap();
        assert_eq!(draft.title, "Title");
        assert_eq!(draft.description, None);
    }

    #[test]
    fn test_parse_tags() {
        assert_eq!(parse_tags("work, docs,,work "), vec!["work", "docs", "work"]);
        assert!(parse_tags("").is_empty());
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!("Completed".parse::<TaskStatus>().unwrap(), TaskStatus::Completed);
        assert!("done".parse::<TaskStatus>().is_err());
    }

    #[test]
    fn test_wire_shape() {
        let json = serde_json::to_value(task()).unwrap();
        assert_eq!(json["quadrant"], 2);
        assert_eq!(json["status"], "pending");
        assert!(json.get("createdAt").is_some());
        assert!(json.get("completedAt").is_none());

        let parsed: Task = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, task());

        let bad = serde_json::json!({
            "id": "x", "title": "t", "quadrant": 7,
            "createdAt": "2024-01-01T00:00:00Z", "status": "pending"
        });
        assert!(serde_json::from_value::<Task>(bad).is_err());
    }
}
