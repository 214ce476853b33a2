use super::AppContext;
use crate::{
    libs::{
        entry::{BillableFlag, DoneFlag},
        hooks::HookEvent,
        messages::Message,
    },
    msg_success,
    timelog::{EntryLine, TimeLog},
};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Entry text; may contain one +project and one @context tag
    #[arg(required = true)]
    text: Vec<String>,

    /// Time spent, e.g. 1h15m, ... or 09:00-10:30
    #[arg(short, long)]
    time: String,

    /// Mark the entry as done
    #[arg(short, long)]
    done: bool,

    /// Mark the entry as billable
    #[arg(short, long)]
    billable: bool,

    /// Date of the entry (YYYY-MM-DD), defaults to today
    #[arg(long)]
    date: Option<NaiveDate>,
}

impl AddArgs {
    pub fn to_line(&self, today: NaiveDate) -> String {
        EntryLine::new(self.date.unwrap_or(today), &self.time)
            .done(self.done.then_some(DoneFlag::Done))
            .billable(self.billable.then_some(BillableFlag::Dollar))
            .text(self.text.iter().cloned())
            .build()
    }
}

/// Appends the entry as typed. The log is not parsed here; a malformed line
/// is reported by the next `summary`.
pub fn cmd(add_args: AddArgs, context: &AppContext) -> Result<()> {
    let line = add_args.to_line(context.today);
    TimeLog::append_to(&context.timefile()?, &line)?;
    msg_success!(Message::EntryAdded(line));

    context.hooks(HookEvent::PostAdd)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::config::Config;
    use clap::Parser;
    use std::fs;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(flatten)]
        args: AddArgs,
    }

    fn context_for(timefile: &std::path::Path) -> AppContext {
        AppContext {
            config_path: timefile.with_file_name("config.json"),
            config: Config {
                timefile: Some(timefile.display().to_string()),
                ..Default::default()
            },
            today: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
        }
    }

    #[test]
    fn builds_line_from_flags() {
        let cli = TestCli::parse_from([
            "tt", "-d", "-b", "-t", "1h", "--date", "2024-03-04", "fix", "bug", "+acme",
        ]);
        let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        assert_eq!(cli.args.to_line(today), "x $ 2024-03-04 1h fix bug +acme");
    }

    #[test]
    fn defaults_to_today_without_flags() {
        let cli = TestCli::parse_from(["tt", "-t", "..", "standup"]);
        let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        assert_eq!(cli.args.to_line(today), "2024-03-10 .. standup");
    }

    #[test]
    fn appends_to_a_log_with_a_malformed_line() {
        let dir = tempfile::tempdir().unwrap();
        let timefile = dir.path().join("time.txt");
        fs::write(&timefile, "2024-03-04 oops broken\n").unwrap();

        let cli = TestCli::parse_from(["tt", "-t", "30m", "standup"]);
        cmd(cli.args, &context_for(&timefile)).unwrap();

        assert_eq!(
            fs::read_to_string(&timefile).unwrap(),
            "2024-03-04 oops broken\n2024-03-10 30m standup\n"
        );
    }

    #[test]
    fn writes_an_unparsable_duration_as_typed() {
        let dir = tempfile::tempdir().unwrap();
        let timefile = dir.path().join("time.txt");

        let cli = TestCli::parse_from(["tt", "-t", "soon", "later"]);
        cmd(cli.args, &context_for(&timefile)).unwrap();

        assert_eq!(fs::read_to_string(&timefile).unwrap(), "2024-03-10 soon later\n");
        assert!(TimeLog::open(&timefile).is_err());
    }
}
