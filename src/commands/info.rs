use super::AppContext;
use crate::{libs::messages::Message, msg_print};
use anyhow::Result;

pub fn cmd(context: &AppContext) -> Result<()> {
    msg_print!(Message::InfoConfigFile(context.config_path.display().to_string()));
    msg_print!(Message::InfoTimefile(context.config.timefile(context.today).display().to_string()));
    msg_print!(Message::InfoHookdir(context.config.hookdir(context.today).display().to_string()));
    Ok(())
}
