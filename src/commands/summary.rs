use super::AppContext;
use crate::{
    libs::{
        messages::Message,
        query::FilterOptions,
        summary::{summarize, Grouping},
        timespan::Timespan,
        view::View,
    },
    msg_info, msg_print,
    timelog::TimeLog,
};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use std::io::{self, Write};

#[derive(Debug, Args)]
pub struct SummaryArgs {
    /// all, today, yesterday, week, month, YYYY-MM-DD or YYYY-MM-DD..YYYY-MM-DD
    #[arg(default_value = "today")]
    timespan: Timespan,

    /// Bucket entries by day or by ISO week
    #[arg(short, long, value_enum, default_value_t = Grouping::Day)]
    group: Grouping,

    /// Only entries of this project (the leading + is optional)
    #[arg(long)]
    project: Option<String>,

    /// Only entries in this context (the leading @ is optional)
    #[arg(long)]
    context: Option<String>,

    /// Only entries whose text contains this, ignoring case
    #[arg(long)]
    text: Option<String>,
}

fn with_sigil(tag: Option<&str>, sigil: char) -> Option<String> {
    tag.map(str::trim).filter(|tag| !tag.is_empty()).map(|tag| {
        if tag.starts_with(sigil) {
            tag.to_string()
        } else {
            format!("{}{}", sigil, tag)
        }
    })
}

impl SummaryArgs {
    pub fn for_today() -> Self {
        Self {
            timespan: Timespan::Today,
            group: Grouping::Day,
            project: None,
            context: None,
            text: None,
        }
    }

    pub fn filter_options(&self, today: NaiveDate) -> FilterOptions {
        FilterOptions {
            date_range: self.timespan.date_range(today),
            project: with_sigil(self.project.as_deref(), '+'),
            context: with_sigil(self.context.as_deref(), '@'),
            text: self.text.clone().filter(|text| !text.is_empty()),
        }
    }
}

/// Renders the summary of `log` into `out`. Returns `false` when nothing
/// matched.
pub fn render<W: Write>(
    log: &TimeLog,
    args: &SummaryArgs,
    today: NaiveDate,
    out: &mut W,
) -> Result<bool> {
    let groups = summarize(log.dataset(), &args.filter_options(today), args.group);
    if groups.is_empty() {
        return Ok(false);
    }
    View::summary(&groups, out)?;
    Ok(true)
}

pub fn cmd(summary_args: SummaryArgs, context: &AppContext) -> Result<()> {
    let log = context.open_log()?;
    msg_print!(Message::SummaryHeader(summary_args.timespan.to_string()), true);

    let mut stdout = io::stdout().lock();
    if !render(&log, &summary_args, context.today, &mut stdout)? {
        msg_info!(Message::NoEntriesFound(summary_args.timespan.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adds_missing_sigils() {
        assert_eq!(with_sigil(Some("acme"), '+').as_deref(), Some("+acme"));
        assert_eq!(with_sigil(Some("+acme"), '+').as_deref(), Some("+acme"));
        assert_eq!(with_sigil(Some("office"), '@').as_deref(), Some("@office"));
        assert_eq!(with_sigil(Some("  "), '@'), None);
        assert_eq!(with_sigil(None, '+'), None);
    }

    #[test]
    fn today_covers_a_single_day() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 6).unwrap();
        let options = SummaryArgs::for_today().filter_options(today);
        assert_eq!(options.date_range, Some((today, today)));
        assert!(options.project.is_none());
    }
}
