//! Text of every [`Message`] variant.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let s = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(title) => format!("Task '{}' created", title),
            Message::TaskUpdated(title) => format!("Task '{}' updated", title),
            Message::TaskDeleted(title) => format!("Task '{}' deleted", title),
            Message::TaskCompleted(title) => format!("Task '{}' completed", title),
            Message::TaskCancelled(title) => format!("Task '{}' cancelled", title),
            Message::TaskNotFound(id) => format!("Task with ID {} not found", id),
            Message::AmbiguousTaskId(id) => format!("ID prefix '{}' matches more than one task", id),
            Message::TasksNotFound => "Tasks not found".to_string(),
            Message::TasksHeader => "TASKS".to_string(),
            Message::RecentTasksHeader => "RECENT TASKS".to_string(),
            Message::ConfirmDeleteTask(title) => format!("Delete task '{}'?", title),
            Message::DeletionCancelled => "Deletion cancelled".to_string(),
            Message::NoChangesDetected => "No changes detected".to_string(),
            Message::PromptTaskTitle => "Enter task title".to_string(),
            Message::PromptTaskDescription => "Enter description (optional)".to_string(),
            Message::PromptTaskQuadrant => "Select quadrant".to_string(),
            Message::PromptTaskTags => "Enter tags, comma separated (optional)".to_string(),
            Message::PromptTaskStatus => "Select status".to_string(),

            // === DATA MESSAGES ===
            Message::DataLoadFallback(error) => {
                format!("Failed to load tasks ({}), showing sample data instead", error)
            }

            // === STATISTICS MESSAGES ===
            Message::StatsHeader(window) => format!("STATISTICS ({})", window),
            Message::QuadrantBreakdownHeader => "BY QUADRANT".to_string(),

            // === CALENDAR MESSAGES ===
            Message::CalendarHeader => "CALENDAR".to_string(),
            Message::NoCalendarMarks => "No days with tasks".to_string(),
            Message::TasksOnDateHeader(date) => format!("TASKS ON {}", date),
            Message::NoTasksOnDate(date) => format!("No tasks on {}", date),

            // === REPORT MESSAGES ===
            Message::ReportGenerating(report_type) => format!("Generating {} report...", report_type),
            Message::ReportGenerated(count) => format!("Report generated from {} tasks", count),
            Message::ReportHeader(range) => format!("REPORT {}", range),
            Message::NoTasksInRange(range) => format!("No tasks in {}, nothing to report", range),
            Message::ReportSaved(path) => format!("Report saved to {}", path),
            Message::ReportGenerationFailed(error) => format!("Report generation failed: {}", error),
            Message::MissingRange => "Select a start and end date for a custom report".to_string(),
            Message::MissingCredential => "API key is not configured. Run 'eisen init' to set it".to_string(),
            Message::ReportBusy => "A report is already being generated".to_string(),

            // === CONFIG MESSAGES ===
            Message::ConfigSaved => "Configuration saved".to_string(),
            Message::ConfigDeleted => "Configuration deleted".to_string(),
            Message::ConfigModuleReport => "AI report settings".to_string(),
            Message::ConfigModuleGitLab => "GitLab settings".to_string(),
            Message::GitlabConfigMissing => "GitLab is not configured. Run 'eisen init' to set it".to_string(),
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptApiKey => "Enter API key".to_string(),
            Message::PromptModel => "Select model".to_string(),
            Message::PromptLanguage => "Select report language".to_string(),
            Message::PromptApiUrl => "Enter API URL".to_string(),
            Message::PromptGitlabToken => "Enter GitLab private token".to_string(),
            Message::PromptGitlabUrl => "Enter GitLab API URL".to_string(),

            // === IMPORT MESSAGES ===
            Message::ImportingIssues(project) => format!("Importing issues from project {}...", project),
            Message::ImportedTasks { imported, skipped } => {
                format!("Imported {} tasks ({} already present)", imported, skipped)
            }
            Message::GitlabFetchFailed(error) => format!("Failed to fetch GitLab issues: {}", error),
        };
        write!(f, "{}", s)
    }
}
