//! Command-line interface.
//!
//! Every subcommand lives in its own module with an `*Args` struct and a
//! `cmd` function. [`Cli::menu`] parses arguments, loads the configuration,
//! sets up logging and dispatches.
//!
//! ## Commands
//!
//! - `add` (`a`): append an entry to the time log
//! - `summary` (`ls`, `list`): print entries and totals for a timespan
//! - `edit`: open the time log in an editor, then print today's summary
//! - `info`: show resolved paths
//! - `init`: interactive configuration, or `--delete` to remove it

pub mod add;
pub mod edit;
pub mod info;
pub mod init;
pub mod summary;

use crate::libs::config::{Config, CONFIG_ENV};
use crate::libs::hooks::{run_hooks, HookEvent, HookRun};
use crate::libs::logging;
use crate::timelog::TimeLog;
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(
        about = "Add an entry to the time log",
        visible_alias = "a",
        arg_required_else_help = true
    )]
    Add(add::AddArgs),
    #[command(about = "Summarize entries for a timespan", visible_aliases = ["ls", "list"])]
    Summary(summary::SummaryArgs),
    #[command(about = "Open the time log in an editor")]
    Edit(edit::EditArgs),
    #[command(about = "Show configuration and file locations")]
    Info,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    /// Configuration file to use instead of the default one
    #[arg(short, long, global = true, env = CONFIG_ENV)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Everything a command needs from its environment.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub config_path: PathBuf,
    pub config: Config,
    pub today: NaiveDate,
}

impl AppContext {
    pub fn load(config_path: Option<PathBuf>) -> Result<Self> {
        let config_path = match config_path {
            Some(path) => path,
            None => Config::default_path()?,
        };
        let config = Config::read_from(&config_path)?;
        Ok(Self {
            config_path,
            config,
            today: Local::now().date_naive(),
        })
    }

    /// Path of the configured time log, created empty if needed. Nothing is
    /// parsed.
    pub fn timefile(&self) -> Result<PathBuf> {
        let path = self.config.timefile_path(self.today)?;
        debug!("using time log {}", path.display());
        Ok(path)
    }

    /// Opens and parses the configured time log.
    pub fn open_log(&self) -> Result<TimeLog> {
        Ok(TimeLog::open(self.timefile()?)?)
    }

    pub fn hooks(&self, event: HookEvent) -> Result<Vec<HookRun>> {
        if self.config.hooks.is_empty() {
            return Ok(Vec::new());
        }
        let hookdir = self.config.hookdir_path(self.today)?;
        Ok(run_hooks(&self.config.hooks, event, &hookdir))
    }
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        let context = AppContext::load(cli.config)?;
        logging::init(&context.config)?;
        debug!("configuration loaded from {}", context.config_path.display());

        match cli.command {
            Commands::Init(args) => init::cmd(args, &context),
            Commands::Add(args) => add::cmd(args, &context),
            Commands::Summary(args) => summary::cmd(args, &context),
            Commands::Edit(args) => edit::cmd(args, &context),
            Commands::Info => info::cmd(&context),
        }
    }
}
