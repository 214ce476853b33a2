//! Configuration initialization command.
//!
//! Runs an interactive wizard that asks for the time log location, the hook
//! directory and the log level, then writes the configuration file. With
//! `--delete` the configuration file is removed instead.

use super::AppContext;
use crate::{
    libs::{config::Config, messages::Message},
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Remove the existing configuration instead of creating a new one
    #[arg(short, long)]
    delete: bool,
}

pub fn cmd(init_args: InitArgs, context: &AppContext) -> Result<()> {
    let path = context.config_path.as_path();
    let shown = path.display().to_string();

    if init_args.delete {
        if Config::delete(path)? {
            msg_success!(Message::ConfigDeleted(shown));
        } else {
            msg_info!(Message::ConfigNotFound(shown));
        }
        return Ok(());
    }

    let config = Config::init(path)?;
    config.save_to(path)?;
    // Create the configured locations up front so `edit` and hooks find them.
    config.timefile_path(context.today)?;
    config.hookdir_path(context.today)?;

    msg_success!(Message::ConfigSaved(shown));
    Ok(())
}
