//! GitLab issue importer.
//!
//! Fetches every issue of a project (open and closed), following GitLab's
//! `x-next-page` header across pages, and converts each one into a
//! [`Task`]:
//!
//! - the quadrant comes from the issue labels: a label mentioning
//!   "important" / "重要" marks importance, one mentioning "urgent" / "紧急"
//!   marks urgency
//! - closed issues become completed tasks, completed at `closed_at`
//! - `created_at` is kept from the issue
//!
//! Imported ids are `gitlab-<project>-<iid>`, so importing the same project
//! twice does not duplicate tasks.

use crate::libs::config::ConfigModule;
use crate::libs::messages::Message;
use crate::libs::task::{Quadrant, Task, TaskStatus};
use crate::msg_print;
use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use dialoguer::{theme::ColorfulTheme, Input};
use reqwest::Client;
use serde::{Deserialize, Serialize};

const IMPORTANT_LABELS: [&str; 2] = ["important", "重要"];
const URGENT_LABELS: [&str; 2] = ["urgent", "紧急"];
const PER_PAGE: &str = "100";
const NEXT_PAGE_HEADER: &str = "x-next-page";

#[derive(Debug)]
pub struct GitLab {
    client: Client,
    config: GitLabConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Issue {
    pub iid: u64,
    pub title: String,
    pub description: Option<String>,
    pub state: String,
    #[serde(default)]
    pub labels: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
}

impl GitLab {
    pub fn new(config: &GitLabConfig) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
        }
    }

    /// Fetches all issues of `project_id` and converts them to tasks.
    pub async fn import_issues(&self, project_id: &str) -> Result<Vec<Task>> {
        let project_id = project_id.trim();
        if project_id.is_empty() {
            return Err(anyhow!("GitLab project id must not be empty"));
        }

        let issues = self.get_issues(project_id).await?;
        tracing::debug!(project_id, count = issues.len(), "fetched GitLab issues");

        let now = Utc::now();
        Ok(issues.iter().map(|issue| issue_to_task(project_id, issue, now)).collect())
    }

    async fn get_issues(&self, project_id: &str) -> Result<Vec<Issue>> {
        let url = format!(
            "{}/api/v4/projects/{}/issues",
            self.config.api_url.trim_end_matches('/'),
            project_id
        );

        let mut issues = Vec::new();
        let mut page = 1u32;
        loop {
            let response = self
                .client
                .get(&url)
                .header("PRIVATE-TOKEN", &self.config.access_token)
                .query(&[("state", "all"), ("per_page", PER_PAGE), ("page", page.to_string().as_str())])
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(anyhow!("GitLab API returned {}: {}", status, body));
            }

            let next = next_page(
                response
                    .headers()
                    .get(NEXT_PAGE_HEADER)
                    .and_then(|value| value.to_str().ok()),
            );
            issues.extend(response.json::<Vec<Issue>>().await?);
            tracing::debug!(page, total = issues.len(), "fetched GitLab issue page");

            match next {
                Some(next) if next > page => page = next,
                _ => break,
            }
        }

        Ok(issues)
    }
}

/// Page number carried by an `x-next-page` header value. GitLab sends an
/// empty value on the last page.
pub fn next_page(header: Option<&str>) -> Option<u32> {
    header.map(str::trim).filter(|value| !value.is_empty())?.parse().ok()
}

/// Quadrant implied by a set of issue labels (case-insensitive substring
/// match). Importance and urgency may come from different labels.
pub fn quadrant_from_labels(labels: &[String]) -> Quadrant {
    let mentions = |keywords: &[&str]| {
        labels.iter().any(|label| {
            let label = label.to_lowercase();
            keywords.iter().any(|keyword| label.contains(keyword))
        })
    };

    match (mentions(&IMPORTANT_LABELS), mentions(&URGENT_LABELS)) {
        (true, true) => Quadrant::UrgentImportant,
        (true, false) => Quadrant::Important,
        (false, true) => Quadrant::Urgent,
        (false, false) => Quadrant::Neither,
    }
}

/// Converts one issue; `now` stands in for a missing `closed_at`.
pub fn issue_to_task(project_id: &str, issue: &Issue, now: DateTime<Utc>) -> Task {
    let closed = issue.state == "closed";
    Task {
        id: format!("gitlab-{}-{}", project_id, issue.iid),
        title: issue.title.clone(),
        description: issue.description.clone().filter(|d| !d.trim().is_empty()),
        quadrant: quadrant_from_labels(&issue.labels),
        created_at: issue.created_at,
        completed_at: closed.then(|| issue.closed_at.unwrap_or(now)),
        status: if closed { TaskStatus::Completed } else { TaskStatus::Pending },
        tags: issue.labels.clone(),
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GitLabConfig {
    pub access_token: String,
    pub api_url: String,
}

impl GitLabConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "gitlab".to_string(),
            name: "GitLab".to_string(),
        }
    }

    pub fn init(config: &Option<GitLabConfig>) -> Result<Self> {
        let config = config.clone().unwrap_or(Self {
            access_token: "".to_string(),
            api_url: "https://gitlab.com".to_string(),
        });

        msg_print!(Message::ConfigModuleGitLab);

        Ok(Self {
            access_token: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptGitlabToken.to_string())
                .default(config.access_token)
                .interact_text()?,
            api_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptGitlabUrl.to_string())
                .default(config.api_url)
                .interact_text()?,
        })
    }
}
