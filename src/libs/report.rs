//! Report lifecycle: fetch → filter → prompt → generate → display/download.
//!
//! [`ReportController`] owns the report configuration, the generator and the
//! held artifact. One `generate` call walks the state machine
//!
//! ```text
//!            generate()
//!   Idle ───────────────▶ Loading ──┬──▶ Success   (artifact replaced)
//!    ▲                              ├──▶ Error     (artifact kept)
//!    └──────── empty task set ──────┘
//! ```
//!
//! Guards run before any transition and before any backend call: the date
//! range must resolve and an API key must be configured. A second call
//! while one is in flight on the same controller is refused with
//! [`ReportError::Busy`]. Nothing is retried automatically.

use super::config::ReportConfig;
use super::error::ReportError;
use super::prompt::{build_prompt, ReportType};
use super::repository::TaskRepository;
use super::window::{self, Window};
use crate::api::{ReportGenerator, TaskBackend};
use chrono::{DateTime, Duration, NaiveDate, TimeZone};
use parking_lot::Mutex;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

pub const FILE_DATE_FORMAT: &str = "%Y%m%d";

/// Inclusive calendar date range a report covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// `YYYYMMDD-YYYYMMDD`, used in download file names.
    pub fn stamp(&self) -> String {
        format!("{}-{}", self.start.format(FILE_DATE_FORMAT), self.end.format(FILE_DATE_FORMAT))
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}

/// What the user asked for: a report type plus, for custom reports, the
/// selected dates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRequest {
    pub report_type: ReportType,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl ReportRequest {
    pub fn new(report_type: ReportType) -> Self {
        Self {
            report_type,
            start: None,
            end: None,
        }
    }

    pub fn custom(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self {
            report_type: ReportType::Custom,
            start,
            end,
        }
    }

    /// Resolves the covered range and the filter window relative to
    /// `today`. Custom requests without both dates, or with `start` after
    /// `end`, do not resolve.
    pub fn resolve(&self, today: NaiveDate) -> Option<(DateRange, Window)> {
        let preset = |days: i64, window: Window| {
            Some((
                DateRange {
                    start: today - Duration::days(days),
                    end: today,
                },
                window,
            ))
        };

        match self.report_type {
            ReportType::Daily => preset(0, Window::Day),
            ReportType::Weekly => preset(6, Window::Week),
            ReportType::Monthly => preset(29, Window::Month),
            ReportType::Yearly => preset(364, Window::Year),
            ReportType::Custom => match (self.start, self.end) {
                (Some(start), Some(end)) if start <= end => Some((DateRange { start, end }, Window::Custom { start, end })),
                _ => None,
            },
        }
    }
}

/// A generated report held for display and download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub text: String,
    pub report_type: ReportType,
    pub range: Option<DateRange>,
    /// Number of tasks the prompt was built from.
    pub task_count: usize,
}

impl Report {
    pub fn file_name(&self, today: NaiveDate) -> String {
        report_file_name(self.range.as_ref(), today)
    }
}

/// `report_<YYYYMMDD>-<YYYYMMDD>.txt`, or `report_<YYYYMMDD>.txt` for
/// `today` when no range applies.
pub fn report_file_name(range: Option<&DateRange>, today: NaiveDate) -> String {
    let stamp = match range {
        Some(range) => range.stamp(),
        None => today.format(FILE_DATE_FORMAT).to_string(),
    };
    format!("report_{}.txt", stamp)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportState {
    Idle,
    Loading,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportOutcome {
    Generated(Report),
    /// No task fell inside the range; nothing was sent to the generator.
    Empty,
}

pub struct ReportController<G> {
    config: ReportConfig,
    generator: G,
    state: Mutex<ReportState>,
    artifact: Mutex<Option<Report>>,
    busy: AtomicBool,
}

impl<G: ReportGenerator> ReportController<G> {
    pub fn new(config: ReportConfig, generator: G) -> Self {
        Self {
            config,
            generator,
            state: Mutex::new(ReportState::Idle),
            artifact: Mutex::new(None),
            busy: AtomicBool::new(false),
        }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    pub fn state(&self) -> ReportState {
        *self.state.lock()
    }

    pub fn artifact(&self) -> Option<Report> {
        self.artifact.lock().clone()
    }

    pub fn can_download(&self) -> bool {
        self.artifact.lock().is_some()
    }

    /// Runs one generation attempt for `request`, with `reference` as "now".
    ///
    /// # Errors
    ///
    /// - [`ReportError::MissingRange`] / [`ReportError::MissingCredential`]:
    ///   precondition failures, raised before any backend call
    /// - [`ReportError::Busy`]: another generation is in flight
    /// - [`ReportError::Failed`]: the task fetch or the generation call
    ///   failed; the previous artifact is kept
    pub async fn generate<B, Tz>(
        &self,
        repository: &TaskRepository<B>,
        request: &ReportRequest,
        reference: &DateTime<Tz>,
    ) -> Result<ReportOutcome, ReportError>
    where
        B: TaskBackend,
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let (range, window) = request.resolve(reference.date_naive()).ok_or(ReportError::MissingRange)?;
        if self.config.api_key.trim().is_empty() {
            return Err(ReportError::MissingCredential);
        }
        let _guard = BusyGuard::acquire(&self.busy, &self.state).ok_or(ReportError::Busy)?;

        self.set_state(ReportState::Loading);
        tracing::info!(report_type = %request.report_type, range = %range, "generating report");

        let tasks = match repository.list().await {
            Ok(tasks) => tasks,
            Err(e) => {
                self.set_state(ReportState::Error);
                return Err(ReportError::Failed(e.into()));
            }
        };

        let filtered = window::filter(&tasks, &window, reference);
        if filtered.is_empty() {
            tracing::info!(range = %range, "no tasks in range, skipping generation");
            self.set_state(ReportState::Idle);
            return Ok(ReportOutcome::Empty);
        }

        let prompt = build_prompt(&filtered, request.report_type, self.config.language, &reference.timezone());
        tracing::debug!(tasks = filtered.len(), prompt_len = prompt.len(), "prompt built");

        match self
            .generator
            .generate_report(&self.config.api_key, &self.config.model, &prompt)
            .await
        {
            Ok(text) => {
                let report = Report {
                    text,
                    report_type: request.report_type,
                    range: Some(range),
                    task_count: filtered.len(),
                };
                *self.artifact.lock() = Some(report.clone());
                self.set_state(ReportState::Success);
                Ok(ReportOutcome::Generated(report))
            }
            Err(e) => {
                tracing::warn!(error = %e, "report generation failed");
                self.set_state(ReportState::Error);
                Err(ReportError::Failed(e))
            }
        }
    }

    /// Writes the held artifact into `dir` and returns the file path.
    pub fn download(&self, dir: &Path, today: NaiveDate) -> Result<PathBuf, ReportError> {
        let report = self.artifact().ok_or(ReportError::NoArtifact)?;
        let path = dir.join(report.file_name(today));
        fs::write(&path, report.text.as_bytes())?;
        Ok(path)
    }

    fn set_state(&self, state: ReportState) {
        *self.state.lock() = state;
    }
}

/// Holds the single-flight flag for one generation attempt. Dropping it,
/// including when the generating future is dropped mid-flight, releases
/// the flag and leaves no controller stuck in `Loading`.
struct BusyGuard<'a> {
    busy: &'a AtomicBool,
    state: &'a Mutex<ReportState>,
}

impl<'a> BusyGuard<'a> {
    fn acquire(busy: &'a AtomicBool, state: &'a Mutex<ReportState>) -> Option<Self> {
        busy.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire).ok()?;
        Some(Self { busy, state })
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        let mut state = self.state.lock();
        if *state == ReportState::Loading {
            *state = ReportState::Idle;
        }
        self.busy.store(false, Ordering::Release);
    }
}
