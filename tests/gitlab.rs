#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use eisen::api::gitlab::{issue_to_task, next_page, quadrant_from_labels, Issue};
    use eisen::libs::task::{Quadrant, TaskStatus};

    fn labels(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn issue(json: &str) -> Issue {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_quadrant_from_labels() {
        assert_eq!(quadrant_from_labels(&labels(&["重要紧急"])), Quadrant::UrgentImportant);
        assert_eq!(quadrant_from_labels(&labels(&["Important", "Urgent"])), Quadrant::UrgentImportant);
        assert_eq!(quadrant_from_labels(&labels(&["priority::important"])), Quadrant::Important);
        assert_eq!(quadrant_from_labels(&labels(&["紧急"])), Quadrant::Urgent);
        assert_eq!(quadrant_from_labels(&labels(&["bug", "backend"])), Quadrant::Neither);
        assert_eq!(quadrant_from_labels(&[]), Quadrant::Neither);
    }

    #[test]
    fn test_closed_issue_becomes_completed_task() {
        let issue = issue(
            r#"{
                "id": 9001,
                "iid": 12,
                "title": "Crash on startup",
                "description": "Stack trace attached",
                "state": "closed",
                "labels": ["urgent", "bug"],
                "created_at": "2024-02-01T10:00:00.000Z",
                "closed_at": "2024-02-03T16:20:00.000Z"
            }"#,
        );
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();

        let task = issue_to_task("42", &issue, now);
        assert_eq!(task.id, "gitlab-42-12");
        assert_eq!(task.title, "Crash on startup");
        assert_eq!(task.quadrant, Quadrant::Urgent);
        assert_eq!(task.status, TaskStatus::Completed);
        assert_eq!(task.created_at, Utc.with_ymd_and_hms(2024, 2, 1, 10, 0, 0).unwrap());
        assert_eq!(task.completed_at, Some(Utc.with_ymd_and_hms(2024, 2, 3, 16, 20, 0).unwrap()));
        assert_eq!(task.tags, vec!["urgent", "bug"]);
    }

    #[test]
    fn test_open_issue_becomes_pending_task() {
        let issue = issue(
            r#"{
                "iid": 3,
                "title": "Add dark mode",
                "description": "",
                "state": "opened",
                "labels": [],
                "created_at": "2024-02-01T10:00:00Z",
                "closed_at": null
            }"#,
        );
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();

        let task = issue_to_task("group%2Fproject", &issue, now);
        assert_eq!(task.status, TaskStatus::Pending);
        assert!(task.completed_at.is_none());
        assert!(task.description.is_none());
        assert_eq!(task.quadrant, Quadrant::Neither);
    }

    #[test]
    fn test_closed_without_timestamp_uses_import_time() {
        let issue = issue(
            r#"{
                "iid": 5,
                "title": "Old issue",
                "description": null,
                "state": "closed",
                "created_at": "2023-01-01T00:00:00Z",
                "closed_at": null
            }"#,
        );
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();

        let task = issue_to_task("1", &issue, now);
        assert_eq!(task.completed_at, Some(now));
    }

    #[test]
    fn test_next_page_header() {
        assert_eq!(next_page(Some("2")), Some(2));
        assert_eq!(next_page(Some(" 14 ")), Some(14));
        // Last page: GitLab sends the header with an empty value
        assert_eq!(next_page(Some("")), None);
        assert_eq!(next_page(None), None);
        assert_eq!(next_page(Some("abc")), None);
    }
}
