//! Task commands: `add`, `list`, `edit`, `done`, `cancel`, `delete`.
//!
//! Every command goes through the [`TaskRepository`], so each successful
//! mutation is followed by a reload before anything is printed. Task ids
//! may be abbreviated to any unique prefix.
//!
//! ## Usage
//!
//! ```bash
//! eisen add "Write release notes" -q 1 -t work,docs
//! eisen list --quadrant 1 --status pending
//! eisen edit 3f2a --title "Write the release notes"
//! eisen done 3f2a
//! eisen delete 3f2a --yes
//! ```

use super::open_repository;
use crate::{
    api::local::LocalBackend,
    libs::{
        messages::Message,
        prompt::Language,
        repository::TaskRepository,
        stats,
        task::{parse_tags, Quadrant, Task, TaskDraft, TaskPatch, TaskStatus},
        view::View,
    },
    msg_bail_anyhow, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

const RECENT_LIMIT: usize = 5;
const STATUSES: [TaskStatus; 3] = [TaskStatus::Pending, TaskStatus::Completed, TaskStatus::Cancelled];

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task title; prompted for when omitted
    title: Option<String>,
    #[arg(short, long)]
    description: Option<String>,
    /// 1 urgent & important, 2 important, 3 urgent, 4 neither
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=4))]
    quadrant: Option<u8>,
    /// Comma-separated tags
    #[arg(short, long)]
    tags: Option<String>,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=4))]
    quadrant: Option<u8>,
    #[arg(short, long)]
    status: Option<TaskStatus>,
    /// Only the most recently created tasks
    #[arg(short, long)]
    recent: bool,
}

#[derive(Debug, Args)]
pub struct EditArgs {
    id: String,
    #[arg(long)]
    title: Option<String>,
    #[arg(short, long)]
    description: Option<String>,
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=4))]
    quadrant: Option<u8>,
    #[arg(short, long)]
    status: Option<TaskStatus>,
    #[arg(short, long)]
    tags: Option<String>,
}

#[derive(Debug, Args)]
pub struct IdArgs {
    id: String,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    id: String,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub async fn add(args: AddArgs) -> Result<()> {
    let repository = open_repository()?;

    let draft = match args.title {
        Some(title) => TaskDraft::new(
            &title,
            args.description.as_deref(),
            match args.quadrant {
                Some(quadrant) => Quadrant::try_from(quadrant)?,
                None => Quadrant::Neither,
            },
            args.tags.as_deref().map(parse_tags).unwrap_or_default(),
        )?,
        None => prompt_draft()?,
    };

    repository.create(&draft).await?;
    msg_success!(Message::TaskCreated(draft.title));
    Ok(())
}

pub async fn list(args: ListArgs) -> Result<()> {
    let repository = open_repository()?;
    let mut tasks = repository.list().await?;

    if let Some(quadrant) = args.quadrant {
        let quadrant = Quadrant::try_from(quadrant)?;
        tasks.retain(|task| task.quadrant == quadrant);
    }
    if let Some(status) = args.status {
        tasks.retain(|task| task.status == status);
    }

    let (header, tasks) = if args.recent {
        (Message::RecentTasksHeader, stats::recent(&tasks, RECENT_LIMIT))
    } else {
        (Message::TasksHeader, tasks)
    };

    if tasks.is_empty() {
        msg_info!(Message::TasksNotFound);
        return Ok(());
    }

    msg_print!(header, true);
    View::tasks(&tasks);
    Ok(())
}

pub async fn edit(args: EditArgs) -> Result<()> {
    let repository = open_repository()?;
    repository.list().await?;
    let task = find_task(&repository, &args.id)?;
    let current = TaskPatch::from(&task);

    let interactive = args.title.is_none()
        && args.description.is_none()
        && args.quadrant.is_none()
        && args.status.is_none()
        && args.tags.is_none();

    let patch = if interactive {
        View::task(&task);
        prompt_patch(&current)?
    } else {
        TaskPatch::new(
            args.title.as_deref().unwrap_or(&current.title),
            args.description.as_deref().or(current.description.as_deref()),
            match args.quadrant {
                Some(quadrant) => Quadrant::try_from(quadrant)?,
                None => current.quadrant,
            },
            args.status.unwrap_or(current.status),
            args.tags.as_deref().map(parse_tags).unwrap_or_else(|| current.tags.clone()),
        )?
    };

    if patch == current {
        msg_info!(Message::NoChangesDetected);
        return Ok(());
    }

    repository.update(&task.id, &patch).await?;
    msg_success!(Message::TaskUpdated(patch.title));
    Ok(())
}

pub async fn done(args: IdArgs) -> Result<()> {
    let repository = open_repository()?;
    repository.list().await?;
    let task = find_task(&repository, &args.id)?;

    repository.complete(&task.id).await?;
    msg_success!(Message::TaskCompleted(task.title));
    Ok(())
}

pub async fn cancel(args: IdArgs) -> Result<()> {
    let repository = open_repository()?;
    repository.list().await?;
    let task = find_task(&repository, &args.id)?;

    repository.cancel(&task.id).await?;
    msg_success!(Message::TaskCancelled(task.title));
    Ok(())
}

pub async fn delete(args: DeleteArgs) -> Result<()> {
    let repository = open_repository()?;
    repository.list().await?;
    let task = find_task(&repository, &args.id)?;

    if !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTask(task.title.clone()).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::DeletionCancelled);
            return Ok(());
        }
    }

    repository.delete(&task.id).await?;
    msg_success!(Message::TaskDeleted(task.title));
    Ok(())
}

/// Looks a cached task up by full id, or by a prefix matching exactly one id.
pub fn find_task(repository: &TaskRepository<LocalBackend>, id: &str) -> Result<Task> {
    if let Some(task) = repository.find(id) {
        return Ok(task);
    }

    let mut matches = repository.tasks().into_iter().filter(|task| task.id.starts_with(id));
    match (matches.next(), matches.next()) {
        (Some(task), None) => Ok(task),
        (Some(_), Some(_)) => msg_bail_anyhow!(Message::AmbiguousTaskId(id.to_string())),
        _ => msg_bail_anyhow!(Message::TaskNotFound(id.to_string())),
    }
}

fn prompt_draft() -> Result<TaskDraft> {
    let title: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskTitle.to_string())
        .interact_text()?;
    let description: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskDescription.to_string())
        .allow_empty(true)
        .interact_text()?;
    let quadrant = select_quadrant(Quadrant::Neither)?;
    let tags: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskTags.to_string())
        .allow_empty(true)
        .interact_text()?;

    Ok(TaskDraft::new(&title, Some(&description), quadrant, parse_tags(&tags))?)
}

fn prompt_patch(current: &TaskPatch) -> Result<TaskPatch> {
    let title: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskTitle.to_string())
        .default(current.title.clone())
        .interact_text()?;
    let description: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskDescription.to_string())
        .default(current.description.clone().unwrap_or_default())
        .allow_empty(true)
        .interact_text()?;
    let quadrant = select_quadrant(current.quadrant)?;
    let status = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskStatus.to_string())
        .items(&STATUSES.iter().map(|status| status.as_str()).collect::<Vec<_>>())
        .default(STATUSES.iter().position(|status| *status == current.status).unwrap_or(0))
        .interact()?;
    let tags: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskTags.to_string())
        .default(current.tags.join(", "))
        .allow_empty(true)
        .interact_text()?;

    Ok(TaskPatch::new(
        &title,
        Some(&description),
        quadrant,
        STATUSES[status],
        parse_tags(&tags),
    )?)
}

fn select_quadrant(current: Quadrant) -> Result<Quadrant> {
    let language = Language::default();
    let items: Vec<String> = Quadrant::ALL
        .iter()
        .map(|quadrant| format!("{} {}", quadrant, language.quadrant_name(*quadrant)))
        .collect();

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskQuadrant.to_string())
        .items(&items)
        .default(current.index())
        .interact()?;

    Ok(Quadrant::ALL[selection])
}
