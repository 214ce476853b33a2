use super::{summary, AppContext};
use crate::{
    libs::{hooks::HookEvent, messages::Message},
    msg_bail_anyhow, msg_debug, msg_error, msg_print,
    timelog::TimeLog,
};
use anyhow::{Context, Result};
use clap::Args;
use std::io;
use std::process::Command;
use tracing::info;

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Editor command; may include arguments, e.g. "code --wait"
    #[arg(short, long, env = "EDITOR")]
    editor: Option<String>,
}

pub fn cmd(edit_args: EditArgs, context: &AppContext) -> Result<()> {
    let editor = match edit_args.editor.as_deref().map(str::trim) {
        Some(editor) if !editor.is_empty() => editor.to_string(),
        _ => msg_bail_anyhow!(Message::EditorNotSet),
    };

    // Only resolve the path: a log that no longer parses must stay editable.
    let timefile = context.timefile()?;
    context.hooks(HookEvent::PreEdit)?;

    let mut parts = editor.split_whitespace();
    let program = parts.next().unwrap_or_default();
    info!("opening {} with {}", timefile.display(), editor);
    let status = Command::new(program)
        .args(parts)
        .arg(&timefile)
        .status()
        .with_context(|| format!("failed to start editor '{}'", editor))?;
    if !status.success() {
        msg_error!(Message::EditorFailed(status.to_string()));
    }

    context.hooks(HookEvent::PostEdit)?;

    let log = match TimeLog::open(&timefile) {
        Ok(log) => log,
        Err(e) => msg_bail_anyhow!(Message::TimeLogParseFailed(e.to_string())),
    };
    msg_debug!(format!("{} entries after edit", log.dataset().entries().len()));

    let args = summary::SummaryArgs::for_today();
    msg_print!(Message::SummaryHeader("today".to_string()), true);
    let mut stdout = io::stdout().lock();
    if !summary::render(&log, &args, context.today, &mut stdout)? {
        msg_print!(Message::NoEntriesFound("today".to_string()));
    }
    Ok(())
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::libs::config::Config;
    use chrono::NaiveDate;
    use std::fs;

    fn context_for(timefile: &std::path::Path) -> AppContext {
        AppContext {
            config_path: timefile.with_file_name("config.json"),
            config: Config {
                timefile: Some(timefile.display().to_string()),
                ..Default::default()
            },
            today: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
        }
    }

    #[test]
    fn opens_editor_on_a_malformed_log() {
        let dir = tempfile::tempdir().unwrap();
        let timefile = dir.path().join("time.txt");
        let fixed = dir.path().join("fixed.txt");
        fs::write(&timefile, "2024-03-04 oops broken\n").unwrap();
        fs::write(&fixed, "2024-03-04 1h repaired\n").unwrap();

        // `cp <fixed> <timefile>` stands in for the user repairing the line.
        let args = EditArgs {
            editor: Some(format!("cp {}", fixed.display())),
        };
        cmd(args, &context_for(&timefile)).unwrap();

        assert_eq!(fs::read_to_string(&timefile).unwrap(), "2024-03-04 1h repaired\n");
    }

    #[test]
    fn reports_a_log_still_malformed_after_editing() {
        let dir = tempfile::tempdir().unwrap();
        let timefile = dir.path().join("time.txt");
        fs::write(&timefile, "2024-03-04 oops broken\n").unwrap();

        let args = EditArgs {
            editor: Some("true".to_string()),
        };
        let err = cmd(args, &context_for(&timefile)).unwrap_err();
        assert!(err.to_string().contains("unrecognized duration 'oops'"));
    }
}
