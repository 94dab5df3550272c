//! Command-line interface.
//!
//! Each subcommand lives in its own module with a clap `Args` struct and an
//! entry function; [`Cli::menu`] parses the arguments and dispatches.
//!
//! ## Commands
//!
//! - **init**: configuration wizard (report API, GitLab)
//! - **add** / **list** / **edit** / **done** / **cancel** / **delete**: task management
//! - **stats**: counts and completion rates for a time window
//! - **calendar**: per-day status marks, or the tasks of one day
//! - **report**: AI-generated work report for a period
//! - **import**: GitLab issues as tasks

pub mod calendar;
pub mod import;
pub mod init;
pub mod report;
pub mod stats;
pub mod task;

use crate::api::local::LocalBackend;
use crate::libs::config::ExecutionMode;
use crate::libs::repository::TaskRepository;
use crate::msg_debug;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Create a task")]
    Add(task::AddArgs),
    #[command(about = "List tasks")]
    List(task::ListArgs),
    #[command(about = "Edit a task")]
    Edit(task::EditArgs),
    #[command(about = "Mark a task completed")]
    Done(task::IdArgs),
    #[command(about = "Cancel a task")]
    Cancel(task::IdArgs),
    #[command(about = "Delete a task")]
    Delete(task::DeleteArgs),
    #[command(about = "Show task statistics")]
    Stats(stats::StatsArgs),
    #[command(about = "Show calendar marks")]
    Calendar(calendar::CalendarArgs),
    #[command(about = "Generate a work report")]
    Report(report::ReportArgs),
    #[command(about = "Import GitLab issues as tasks", arg_required_else_help = true)]
    Import(import::ImportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Add(args) => task::add(args).await,
            Commands::List(args) => task::list(args).await,
            Commands::Edit(args) => task::edit(args).await,
            Commands::Done(args) => task::done(args).await,
            Commands::Cancel(args) => task::cancel(args).await,
            Commands::Delete(args) => task::delete(args).await,
            Commands::Stats(args) => stats::cmd(args).await,
            Commands::Calendar(args) => calendar::cmd(args).await,
            Commands::Report(args) => report::cmd(args).await,
            Commands::Import(args) => import::cmd(args).await,
        }
    }
}

/// Repository over the local store, in the mode selected by `EISEN_MODE`.
pub fn open_repository() -> Result<TaskRepository<LocalBackend>> {
    let mode = ExecutionMode::from_env();
    msg_debug!(format!("execution mode: {:?}", mode));
    Ok(TaskRepository::new(LocalBackend::new()?, mode))
}
