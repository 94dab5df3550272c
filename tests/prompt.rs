#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use eisen::libs::prompt::{build_prompt, format_task, Language, ReportType};
    use eisen::libs::task::{Quadrant, Task, TaskStatus};

    fn tasks() -> Vec<Task> {
        vec![
            Task {
                id: "1".to_string(),
                title: "Ship release".to_string(),
                description: Some("Tag and publish 1.2".to_string()),
                quadrant: Quadrant::UrgentImportant,
                created_at: Utc.with_ymd_and_hms(2024, 2, 1, 9, 5, 0).unwrap(),
                completed_at: Some(Utc.with_ymd_and_hms(2024, 2, 1, 17, 45, 30).unwrap()),
                status: TaskStatus::Completed,
                tags: vec!["work".to_string()],
            },
            Task {
                id: "2".to_string(),
                title: "Plan roadmap".to_string(),
                description: None,
                quadrant: Quadrant::Important,
                created_at: Utc.with_ymd_and_hms(2024, 2, 2, 10, 0, 0).unwrap(),
                completed_at: None,
                status: TaskStatus::Pending,
                tags: vec![],
            },
        ]
    }

    #[test]
    fn test_build_prompt_is_pure() {
        let tasks = tasks();
        let first = build_prompt(&tasks, ReportType::Weekly, Language::English, &Utc);
        let second = build_prompt(&tasks, ReportType::Weekly, Language::English, &Utc);
        assert_eq!(first, second);
    }

    #[test]
    fn test_prompt_contains_every_task() {
        let prompt = build_prompt(&tasks(), ReportType::Monthly, Language::English, &Utc);
        assert!(prompt.contains("monthly work report"));
        assert!(prompt.contains("- Task: Ship release"));
        assert!(prompt.contains("- Task: Plan roadmap"));
        assert!(prompt.contains("Quadrant: urgent & important"));
        assert!(prompt.contains("Status: In progress"));
        assert!(prompt.contains("Created: 2024-02-01 09:05"));
        assert!(prompt.contains("Completed: 2024-02-01 17:45"));
    }

    #[test]
    fn test_task_block_layout() {
        let block = format_task(&tasks()[0], Language::English, &Utc);
        assert_eq!(
            block,
            "- Task: Ship release\n  \
             Description: Tag and publish 1.2\n  \
             Quadrant: urgent & important\n  \
             Status: Completed\n  \
             Created: 2024-02-01 09:05\n  \
             Completed: 2024-02-01 17:45"
        );
    }

    #[test]
    fn test_absent_fields_are_omitted() {
        let block = format_task(&tasks()[1], Language::English, &Utc);
        assert!(!block.contains("Description"));
        assert!(!block.contains("Completed:"));
        assert_eq!(block.lines().count(), 4);
    }

    #[test]
    fn test_chinese_labels() {
        let prompt = build_prompt(&tasks(), ReportType::Daily, Language::Chinese, &Utc);
        assert!(prompt.contains("日工作报告"));
        assert!(prompt.contains("- 任务: Ship release"));
        assert!(prompt.contains("象限: 重要且紧急"));
        assert!(prompt.contains("状态: 已完成"));
        assert!(prompt.contains("状态: 进行中"));
    }

    #[test]
    fn test_blocks_separated_by_blank_line() {
        let prompt = build_prompt(&tasks(), ReportType::Weekly, Language::English, &Utc);
        assert!(prompt.contains("Completed: 2024-02-01 17:45\n\n- Task: Plan roadmap"));
    }

    #[test]
    fn test_language_parse() {
        assert_eq!("zh".parse::<Language>().unwrap(), Language::Chinese);
        assert_eq!("English".parse::<Language>().unwrap(), Language::English);
        assert!("fr".parse::<Language>().is_err());
        assert_eq!(Language::default(), Language::English);
    }
}
