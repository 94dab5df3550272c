//! Configuration management for the eisen application.
//!
//! Handles the report-generation settings consumed by the report controller,
//! the GitLab importer settings, and the execution mode that decides whether
//! a failed task load may fall back to sample data.
//!
//! ## Configuration Structure
//!
//! - **Report Config**: API key, model, report language and API endpoint
//! - **GitLab Config**: GitLab access token and instance URL
//!
//! Both modules are optional; a missing module simply disables the feature
//! that needs it.
//!
//! ## Storage
//!
//! The configuration is a pretty-printed JSON file (`config.json`) in the
//! platform application data directory resolved by [`DataStorage`]. A
//! missing file is not an error: [`Config::read`] returns the defaults.
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use eisen::libs::config::Config;
//!
//! let config = Config::read()?;
//! if let Some(report) = &config.report {
//!     println!("Model: {}", report.model);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::prompt::Language;
use crate::api::gitlab::GitLabConfig;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect, Select};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Environment variable selecting the execution mode.
pub const MODE_ENV_VAR: &str = "EISEN_MODE";

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1";

/// Models offered by the setup wizard. Any other model id can still be
/// written to the config file by hand.
pub const KNOWN_MODELS: [&str; 2] = ["gpt-3.5-turbo", "gpt-4"];

/// Represents a configurable module in the application.
///
/// Used during interactive setup to list the modules the user can pick.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    /// Unique identifier for the module used in configuration routing
    pub key: String,
    /// Display name shown to users during interactive setup
    pub name: String,
}

/// Whether the application runs against real data only, or may substitute
/// sample data when the task load fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExecutionMode {
    #[default]
    Production,
    Development,
}

impl ExecutionMode {
    /// Reads [`MODE_ENV_VAR`]: `development` or `dev` selects development,
    /// anything else (or nothing) production.
    pub fn from_env() -> Self {
        match env::var(MODE_ENV_VAR) {
            Ok(value) => Self::parse(&value),
            Err(_) => ExecutionMode::Production,
        }
    }

    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "development" | "dev" => ExecutionMode::Development,
            _ => ExecutionMode::Production,
        }
    }
}

/// Settings of the report-generation backend.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ReportConfig {
    /// API credential; generation is refused while it is blank.
    #[serde(default)]
    pub api_key: String,

    /// Model identifier passed through to the generation call.
    #[serde(default = "default_model")]
    pub model: String,

    /// Language of the prompt labels and of the requested report.
    #[serde(default)]
    pub language: Language,

    /// Base URL of the OpenAI-compatible API, without `/chat/completions`.
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            api_key: String::new(),
            model: default_model(),
            language: Language::default(),
            api_url: default_api_url(),
        }
    }
}

impl ReportConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "report".to_string(),
            name: "AI Report".to_string(),
        }
    }

    /// Interactive setup of the report module, pre-filled from `config`.
    pub fn init(config: &Option<ReportConfig>) -> Result<Self> {
        let config = config.clone().unwrap_or_default();
        msg_print!(Message::ConfigModuleReport);

        let api_key: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptApiKey.to_string())
            .default(config.api_key)
            .interact_text()?;

        let mut models: Vec<String> = KNOWN_MODELS.iter().map(|m| m.to_string()).collect();
        if !models.contains(&config.model) {
            models.push(config.model.clone());
        }
        let current = models.iter().position(|m| *m == config.model).unwrap_or(0);
        let model = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptModel.to_string())
            .items(&models)
            .default(current)
            .interact()?;

        let languages = [Language::English, Language::Chinese];
        let language = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptLanguage.to_string())
            .items(&languages.iter().map(|l| l.code()).collect::<Vec<_>>())
            .default(languages.iter().position(|l| *l == config.language).unwrap_or(0))
            .interact()?;

        let api_url: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptApiUrl.to_string())
            .default(config.api_url)
            .interact_text()?;

        Ok(Self {
            api_key,
            model: models[model].clone(),
            language: languages[language],
            api_url,
        })
    }
}

/// Root configuration object.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    /// Report generation settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<ReportConfig>,

    /// GitLab issue import settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gitlab: Option<GitLabConfig>,
}

impl Config {
    /// Reads configuration from the filesystem.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file exists but cannot be read
    /// or parsed. A missing file yields the default configuration.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the configuration as pretty-printed JSON, replacing any
    /// existing file.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file if present.
    pub fn delete() -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if config_file_path.exists() {
            fs::remove_file(config_file_path)?;
        }
        Ok(())
    }

    /// Report settings, or defaults (blank API key) when unconfigured.
    pub fn report_or_default(&self) -> ReportConfig {
        self.report.clone().unwrap_or_default()
    }

    /// Runs the interactive configuration wizard.
    ///
    /// Existing values are loaded first and offered as defaults; the user
    /// picks which modules to (re)configure.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![ReportConfig::module(), GitLabConfig::module()];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "report" => config.report = Some(ReportConfig::init(&config.report)?),
                "gitlab" => config.gitlab = Some(GitLabConfig::init(&config.gitlab)?),
                _ => {}
            }
        }

        Ok(config)
    }
}
