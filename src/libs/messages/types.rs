//! Message variants used across the application.
//!
//! Variants carry the dynamic parts of a message (titles, ids, paths) as
//! data; the text itself is produced by the `Display` implementation.

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(String),
    TaskUpdated(String),
    TaskDeleted(String),
    TaskCompleted(String),
    TaskCancelled(String),
    TaskNotFound(String),
    AmbiguousTaskId(String),
    TasksNotFound,
    TasksHeader,
    RecentTasksHeader,
    ConfirmDeleteTask(String),
    DeletionCancelled,
    NoChangesDetected,
    PromptTaskTitle,
    PromptTaskDescription,
    PromptTaskQuadrant,
    PromptTaskTags,
    PromptTaskStatus,

    // === DATA MESSAGES ===
    DataLoadFallback(String),

    // === STATISTICS MESSAGES ===
    StatsHeader(String),
    QuadrantBreakdownHeader,

    // === CALENDAR MESSAGES ===
    CalendarHeader,
    NoCalendarMarks,
    TasksOnDateHeader(String),
    NoTasksOnDate(String),

    // === REPORT MESSAGES ===
    ReportGenerating(String),
    ReportGenerated(usize),
    ReportHeader(String),
    NoTasksInRange(String),
    ReportSaved(String),
    ReportGenerationFailed(String),
    MissingRange,
    MissingCredential,
    ReportBusy,

    // === CONFIG MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigModuleReport,
    ConfigModuleGitLab,
    GitlabConfigMissing,
    PromptSelectModules,
    PromptApiKey,
    PromptModel,
    PromptLanguage,
    PromptApiUrl,
    PromptGitlabToken,
    PromptGitlabUrl,

    // === IMPORT MESSAGES ===
    ImportingIssues(String),
    ImportedTasks { imported: usize, skipped: usize },
    GitlabFetchFailed(String),
}
