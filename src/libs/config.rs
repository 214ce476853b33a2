//! Configuration management for ttrack.
//!
//! The configuration is a small JSON document. By default it lives in the
//! platform data directory (see [`DataStorage`]); `--config <file>` or the
//! `TT_CONFIG_FILE` environment variable point at another file.
//!
//! ## Fields
//!
//! - **timefile**: path of the time log. Defaults to `timetrack.txt` in the
//!   data directory.
//! - **hookdir**: working directory for hook commands. Defaults to `hooks/`
//!   in the data directory.
//! - **log_level**: tracing filter used when `RUST_LOG` is not set.
//! - **log_file**: write diagnostics to this file instead of stderr.
//! - **hooks**: named shell commands, see [`crate::libs::hooks`].
//!
//! ## Placeholders
//!
//! `timefile` and `hookdir` may contain `{tt_year}`, `{tt_month}` and
//! `{tt_day}`, which expand to the current date. This makes it easy to keep
//! one log per month:
//!
//! ```json
//! {
//!   "timefile": "~/time/{tt_year}/{tt_month}.txt",
//!   "log_level": "warn",
//!   "hooks": { "post-add-01-commit": "git commit -qam 'time log'" }
//! }
//! ```
//!
//! A missing configuration file is not an error; the defaults are used.

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const DEFAULT_TIMEFILE_NAME: &str = "timetrack.txt";
pub const DEFAULT_HOOKDIR_NAME: &str = "hooks";
pub const DEFAULT_LOG_LEVEL: &str = "warn";
/// Environment variable that overrides the configuration file path.
pub const CONFIG_ENV: &str = "TT_CONFIG_FILE";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timefile: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hookdir: Option<String>,

    pub log_level: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<String>,

    /// Hook name to shell command. Names are matched by prefix and run in
    /// name order.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub hooks: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            timefile: None,
            hookdir: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_file: None,
            hooks: BTreeMap::new(),
        }
    }
}

/// Expands date placeholders and a leading `~/` in a configured path.
pub fn expand_path(template: &str, today: NaiveDate) -> PathBuf {
    let expanded = template
        .replace("{tt_year}", &today.format("%Y").to_string())
        .replace("{tt_month}", &today.format("%m").to_string())
        .replace("{tt_day}", &today.format("%d").to_string());

    match (expanded.strip_prefix("~/"), env::var_os("HOME")) {
        (Some(rest), Some(home)) => PathBuf::from(home).join(rest),
        _ => PathBuf::from(expanded),
    }
}

fn default_in_data_dir(name: &str) -> String {
    DataStorage::new().base_path().join(name).display().to_string()
}

impl Config {
    /// Location of the configuration file in the data directory.
    pub fn default_path() -> Result<PathBuf> {
        DataStorage::new().get_path(CONFIG_FILE_NAME)
    }

    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            debug!("no configuration at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: Config =
            serde_json::from_str(&config_str)
                .with_context(|| format!("failed to parse {}", path.display()))?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let config_file = File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file, if present.
    pub fn delete(path: &Path) -> Result<bool> {
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(path).with_context(|| format!("failed to remove {}", path.display()))?;
        Ok(true)
    }

    /// Resolved time log path, without touching the file system.
    pub fn timefile(&self, today: NaiveDate) -> PathBuf {
        match &self.timefile {
            Some(template) => expand_path(template, today),
            None => DataStorage::new().base_path().join(DEFAULT_TIMEFILE_NAME),
        }
    }

    /// Resolved hook directory, without touching the file system.
    pub fn hookdir(&self, today: NaiveDate) -> PathBuf {
        match &self.hookdir {
            Some(template) => expand_path(template, today),
            None => DataStorage::new().base_path().join(DEFAULT_HOOKDIR_NAME),
        }
    }

    /// Resolves the time log path and creates it (and its parents) when
    /// missing.
    pub fn timefile_path(&self, today: NaiveDate) -> Result<PathBuf> {
        let timefile = self.timefile(today);
        if let Some(parent) = timefile.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&timefile)
            .with_context(|| format!("failed to create {}", timefile.display()))?;
        Ok(timefile)
    }

    /// Resolves the hook directory and creates it when missing.
    pub fn hookdir_path(&self, today: NaiveDate) -> Result<PathBuf> {
        let hookdir = self.hookdir(today);
        fs::create_dir_all(&hookdir)
            .with_context(|| format!("failed to create {}", hookdir.display()))?;
        Ok(hookdir)
    }

    /// Interactive setup, starting from the configuration at `path`.
    pub fn init(path: &Path) -> Result<Self> {
        let mut config = Self::read_from(path).unwrap_or_default();
        let theme = ColorfulTheme::default();

        msg_print!(Message::ConfigWizardHeader(path.display().to_string()), true);

        let default_timefile = config
            .timefile
            .clone()
            .unwrap_or_else(|| default_in_data_dir(DEFAULT_TIMEFILE_NAME));
        let timefile: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptTimefile.to_string())
            .default(default_timefile)
            .interact_text()?;
        config.timefile = Some(timefile);

        let default_hookdir = config
            .hookdir
            .clone()
            .unwrap_or_else(|| default_in_data_dir(DEFAULT_HOOKDIR_NAME));
        let hookdir: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptHookdir.to_string())
            .default(default_hookdir)
            .interact_text()?;
        config.hookdir = Some(hookdir);

        config.log_level = Input::with_theme(&theme)
            .with_prompt(Message::PromptLogLevel.to_string())
            .default(config.log_level.clone())
            .interact_text()?;

        Ok(config)
    }
}
