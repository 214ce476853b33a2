//! Shell hooks around `add` and `edit`.
//!
//! Hooks are configured as a name-to-command map. For an event, every hook
//! whose name starts with the event prefix runs, in name order, through the
//! platform shell with the hook directory as working directory:
//!
//! ```json
//! "hooks": {
//!   "post-add-01-sync": "git add -A && git commit -qm 'time log'",
//!   "pre-edit": "git pull -q"
//! }
//! ```
//!
//! A failing hook is reported but never aborts the command that fired it.

use crate::libs::messages::Message;
use crate::msg_warning;
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::process::Command;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookEvent {
    PostAdd,
    PreEdit,
    PostEdit,
}

impl HookEvent {
    pub fn prefix(self) -> &'static str {
        match self {
            HookEvent::PostAdd => "post-add",
            HookEvent::PreEdit => "pre-edit",
            HookEvent::PostEdit => "post-edit",
        }
    }
}

impl fmt::Display for HookEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// Result of one hook invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookRun {
    pub name: String,
    pub success: bool,
}

/// Hooks registered for `event`, in the order they run.
pub fn matching_hooks(hooks: &BTreeMap<String, String>, event: HookEvent) -> Vec<(&str, &str)> {
    hooks
        .iter()
        .filter(|(name, _)| name.starts_with(event.prefix()))
        .map(|(name, command)| (name.as_str(), command.as_str()))
        .collect()
}

fn shell(command: &str) -> Command {
    if cfg!(windows) {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", command]);
        cmd
    } else {
        let mut cmd = Command::new("sh");
        cmd.args(["-c", command]);
        cmd
    }
}

pub fn run_hooks(hooks: &BTreeMap<String, String>, event: HookEvent, cwd: &Path) -> Vec<HookRun> {
    matching_hooks(hooks, event)
        .into_iter()
        .map(|(name, command)| {
            debug!("running hook {} in {}: {}", name, cwd.display(), command);
            let success = match shell(command).current_dir(cwd).status() {
                Ok(status) if status.success() => true,
                Ok(status) => {
                    warn!("hook {} exited with {}", name, status);
                    msg_warning!(Message::HookFailed(name.to_string(), status.to_string()));
                    false
                }
                Err(e) => {
                    warn!("hook {} could not be started: {}", name, e);
                    msg_warning!(Message::HookFailed(name.to_string(), e.to_string()));
                    false
                }
            };
            HookRun {
                name: name.to_string(),
                success,
            }
        })
        .collect()
}
