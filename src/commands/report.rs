//! `eisen report`: generates a work report from the tasks of a period.
//!
//! The report text is printed to the terminal; `--save` also writes it to
//! `report_<YYYYMMDD>-<YYYYMMDD>.txt` in `--dir` (current directory by
//! default).
//!
//! ## Usage
//!
//! ```bash
//! eisen report                      # weekly (last 7 days)
//! eisen report monthly --save
//! eisen report custom --from 2024-03-01 --to 2024-03-15
//! ```

use super::open_repository;
use crate::{
    api::openai::OpenAi,
    libs::{
        config::Config,
        error::ReportError,
        messages::Message,
        prompt::ReportType,
        report::{ReportController, ReportOutcome, ReportRequest},
    },
    msg_bail_anyhow, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ReportArgs {
    #[arg(value_enum, default_value_t = ReportType::Weekly)]
    report_type: ReportType,
    /// First day of a custom report (YYYY-MM-DD)
    #[arg(long)]
    from: Option<NaiveDate>,
    /// Last day of a custom report (YYYY-MM-DD)
    #[arg(long)]
    to: Option<NaiveDate>,
    /// Write the report to a text file
    #[arg(short, long)]
    save: bool,
    /// Directory for --save
    #[arg(short, long, default_value = ".")]
    dir: PathBuf,
}

pub async fn cmd(args: ReportArgs) -> Result<()> {
    let config = Config::read()?.report_or_default();
    let controller = ReportController::new(config.clone(), OpenAi::new(&config.api_url));
    let repository = open_repository()?;

    let request = match args.report_type {
        ReportType::Custom => ReportRequest::custom(args.from, args.to),
        report_type => ReportRequest::new(report_type),
    };

    msg_info!(Message::ReportGenerating(request.report_type.to_string()));
    let now = Local::now();
    let report = match controller.generate(&repository, &request, &now).await {
        Ok(ReportOutcome::Generated(report)) => report,
        Ok(ReportOutcome::Empty) => {
            let range = request
                .resolve(now.date_naive())
                .map(|(range, _)| range.to_string())
                .unwrap_or_default();
            msg_info!(Message::NoTasksInRange(range));
            return Ok(());
        }
        Err(e) => msg_bail_anyhow!(error_message(e)),
    };

    let range = report.range.map(|range| range.to_string()).unwrap_or_default();
    msg_print!(Message::ReportHeader(range), true);
    println!("{}", report.text);
    msg_success!(Message::ReportGenerated(report.task_count), true);

    if args.save {
        let path = controller.download(&args.dir, now.date_naive())?;
        msg_success!(Message::ReportSaved(path.display().to_string()));
    }

    Ok(())
}

fn error_message(error: ReportError) -> Message {
    match error {
        ReportError::MissingRange => Message::MissingRange,
        ReportError::MissingCredential => Message::MissingCredential,
        ReportError::Busy => Message::ReportBusy,
        other => Message::ReportGenerationFailed(other.to_string()),
    }
}
