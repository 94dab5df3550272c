//! Report prompt construction.
//!
//! Turns a filtered task set into the text sent to the report-generation
//! backend. The output depends only on its inputs (no clock reads, no
//! randomness), so identical task lists always produce byte-identical
//! prompts.
//!
//! ## Prompt Layout
//!
//! ```text
//! <preamble naming the period and the five requested sections>
//!
//! - Task: Ship release
//!   Description: Tag and publish 1.2
//!   Quadrant: urgent & important
//!   Status: Completed
//!   Created: 2024-01-08 09:30
//!   Completed: 2024-01-08 17:05
//!
//! - Task: ...
//!
//! <closing line asking for the configured language>
//! ```
//!
//! Empty task sets never reach this module: the report controller handles
//! them one level up.

use super::task::{Quadrant, Task, TaskStatus};
use chrono::TimeZone;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportType {
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Custom,
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReportType::Daily => "daily",
            ReportType::Weekly => "weekly",
            ReportType::Monthly => "monthly",
            ReportType::Yearly => "yearly",
            ReportType::Custom => "custom",
        };
        f.write_str(name)
    }
}

/// Language of the labels in the prompt and of the requested report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en", alias = "english")]
    English,
    #[serde(rename = "zh", alias = "chinese")]
    Chinese,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Chinese => "zh",
        }
    }

    pub fn quadrant_name(self, quadrant: Quadrant) -> &'static str {
        match (self, quadrant) {
            (Language::English, Quadrant::UrgentImportant) => "urgent & important",
            (Language::English, Quadrant::Important) => "important, not urgent",
            (Language::English, Quadrant::Urgent) => "urgent, not important",
            (Language::English, Quadrant::Neither) => "neither",
            (Language::Chinese, Quadrant::UrgentImportant) => "重要且紧急",
            (Language::Chinese, Quadrant::Important) => "重要但不紧急",
            (Language::Chinese, Quadrant::Urgent) => "紧急但不重要",
            (Language::Chinese, Quadrant::Neither) => "既不重要也不紧急",
        }
    }

    pub fn status_label(self, status: TaskStatus) -> &'static str {
        match (self, status) {
            (Language::English, TaskStatus::Pending) => "In progress",
            (Language::English, TaskStatus::Completed) => "Completed",
            (Language::English, TaskStatus::Cancelled) => "Cancelled",
            (Language::Chinese, TaskStatus::Pending) => "进行中",
            (Language::Chinese, TaskStatus::Completed) => "已完成",
            (Language::Chinese, TaskStatus::Cancelled) => "已取消",
        }
    }

    fn period(self, report_type: ReportType) -> &'static str {
        match (self, report_type) {
            (Language::English, ReportType::Daily) => "daily",
            (Language::English, ReportType::Weekly) => "weekly",
            (Language::English, ReportType::Monthly) => "monthly",
            (Language::English, ReportType::Yearly) => "yearly",
            (Language::English, ReportType::Custom) => "custom-period",
            (Language::Chinese, ReportType::Daily) => "日",
            (Language::Chinese, ReportType::Weekly) => "周",
            (Language::Chinese, ReportType::Monthly) => "月",
            (Language::Chinese, ReportType::Yearly) => "年",
            (Language::Chinese, ReportType::Custom) => "自定义时间段",
        }
    }

    fn labels(self) -> Labels {
        match self {
            Language::English => Labels {
                task: "Task",
                description: "Description",
                quadrant: "Quadrant",
                status: "Status",
                created: "Created",
                completed: "Completed",
            },
            Language::Chinese => Labels {
                task: "任务",
                description: "描述",
                quadrant: "象限",
                status: "状态",
                created: "创建时间",
                completed: "完成时间",
            },
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "zh" | "chinese" => Ok(Language::Chinese),
            other => Err(format!("unsupported language: {}", other)),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

struct Labels {
    task: &'static str,
    description: &'static str,
    quadrant: &'static str,
    status: &'static str,
    created: &'static str,
    completed: &'static str,
}

/// Renders one task block. Times are shown in `tz` at minute precision.
pub fn format_task<Tz: TimeZone>(task: &Task, language: Language, tz: &Tz) -> String
where
    Tz::Offset: fmt::Display,
{
    let labels = language.labels();
    let mut lines = vec![format!("- {}: {}", labels.task, task.title)];

    if let Some(description) = task.description.as_deref().filter(|d| !d.trim().is_empty()) {
        lines.push(format!("  {}: {}", labels.description, description));
    }
    lines.push(format!("  {}: {}", labels.quadrant, language.quadrant_name(task.quadrant)));
    lines.push(format!("  {}: {}", labels.status, language.status_label(task.status)));
    lines.push(format!(
        "  {}: {}",
        labels.created,
        task.created_at.with_timezone(tz).format(TIMESTAMP_FORMAT)
    ));
    if let Some(completed_at) = task.completed_at {
        lines.push(format!(
            "  {}: {}",
            labels.completed,
            completed_at.with_timezone(tz).format(TIMESTAMP_FORMAT)
        ));
    }

    lines.join("\n")
}

/// Builds the full generation prompt for `tasks`.
pub fn build_prompt<Tz: TimeZone>(tasks: &[Task], report_type: ReportType, language: Language, tz: &Tz) -> String
where
    Tz::Offset: fmt::Display,
{
    let blocks = tasks
        .iter()
        .map(|task| format_task(task, language, tz))
        .collect::<Vec<_>>()
        .join("\n\n");
    let period = language.period(report_type);

    match language {
        Language::English => format!(
            "Based on the task list below, write a detailed {period} work report. The report should include:\n\
             \n\
             1. Overall summary of the work\n\
             2. Task completion by quadrant\n\
             3. Efficiency analysis\n\
             4. Time management suggestions\n\
             5. Priorities for the next period\n\
             \n\
             Tasks:\n\
             {blocks}\n\
             \n\
             Write the report in English, in a professional and concise tone with a clear structure."
        ),
        Language::Chinese => format!(
            "请根据以下任务列表，生成一份详细的{period}工作报告。报告应包括：\n\
             \n\
             1. 总体工作概述\n\
             2. 按四象限分类的任务完成情况\n\
             3. 工作效率分析\n\
             4. 时间管理建议\n\
             5. 下一阶段工作重点建议\n\
             \n\
             任务列表：\n\
             {blocks}\n\
             \n\
             请用中文撰写，语言专业简洁，格式清晰。"
        ),
    }
}
