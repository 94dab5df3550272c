//! `eisen import <project>`: pulls GitLab issues into the local store.
//!
//! Issues already imported (same project and issue number) are skipped, so
//! the command can be re-run to pick up new issues.

use crate::{
    api::{gitlab::GitLab, local::LocalBackend},
    libs::{config::Config, messages::Message},
    msg_bail_anyhow, msg_error_anyhow, msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// GitLab project id or URL-encoded path
    project_id: String,
}

pub async fn cmd(args: ImportArgs) -> Result<()> {
    let config = Config::read()?;
    let gitlab_config = config
        .gitlab
        .ok_or_else(|| msg_error_anyhow!(Message::GitlabConfigMissing))?;

    msg_info!(Message::ImportingIssues(args.project_id.clone()));
    let tasks = match GitLab::new(&gitlab_config).import_issues(&args.project_id).await {
        Ok(tasks) => tasks,
        Err(e) => msg_bail_anyhow!(Message::GitlabFetchFailed(e.to_string())),
    };

    let imported = LocalBackend::new()?.import(&tasks)?;
    msg_success!(Message::ImportedTasks {
        imported,
        skipped: tasks.len() - imported,
    });
    Ok(())
}
