//! Context-aware file parser.
//!
//! The log is read line by line while a small [`ParseContext`] is threaded
//! from one line to the next. Each line goes through [`step`], a pure
//! transition `(context, line) -> (context, outcome)`:
//!
//! ```text
//! 2024-03-04                 opens a date block (no record)
//!   >09:00                   clock-in for 2024-03-04
//!   x $ 1h review +acme      entry dated 2024-03-04
//!   <17:30                   clock-out for 2024-03-04
//! * 30m follow-up            not indented: block closed, `*` = previous date
//! // comment                 ignored, as are blank lines
//! ```
//!
//! Indentation scopes the ambient date: the first line that does not start
//! with [`BLOCK_INDENT`] ends the block. Any malformed line aborts the parse.

use super::error::{ErrorKind, Result, TimeLogError};
use super::line::{is_workday_mark, parse_bare_date, parse_workday_mark, tokenize_line};
use crate::libs::entry::{LogDataset, Record, SourceLocation, TimeEntry, WorkdayMark};
use chrono::NaiveDate;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Prefix that keeps a line inside the current date block.
pub const BLOCK_INDENT: &str = "  ";
pub const COMMENT_MARKER: &str = "//";

/// State carried from one line to the next.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseContext {
    /// Date of the enclosing date block, if any.
    pub current_date: Option<NaiveDate>,
    /// Date of the last record, used to resolve `*`.
    pub last_entry_date: Option<NaiveDate>,
}

impl ParseContext {
    pub fn in_date_block(&self) -> bool {
        self.current_date.is_some()
    }
}

/// What a single line turned into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// Blank or comment line.
    Skipped,
    /// A bare date line that opened a date block.
    OpenedDate(NaiveDate),
    Record(Record),
}

/// Processes one physical line.
pub fn step(
    mut context: ParseContext,
    line: &str,
    location: &SourceLocation,
) -> Result<(ParseContext, LineOutcome)> {
    let fail = |kind: ErrorKind| TimeLogError::parse(location.clone(), kind);
    let trimmed = line.trim();

    if trimmed.is_empty() || trimmed.starts_with(COMMENT_MARKER) {
        return Ok((context, LineOutcome::Skipped));
    }

    if let Some(date) = parse_bare_date(trimmed) {
        context.current_date = Some(date);
        return Ok((context, LineOutcome::OpenedDate(date)));
    }

    if !line.starts_with(BLOCK_INDENT) {
        context.current_date = None;
    }

    if is_workday_mark(line) {
        let date = context
            .current_date
            .ok_or_else(|| fail(ErrorKind::WorkdayMarkOutsideDateContext))?;
        let (kind, time) = parse_workday_mark(line).map_err(fail)?;
        context.last_entry_date = Some(date);
        let mark = WorkdayMark {
            location: location.clone(),
            date,
            time,
            kind,
        };
        return Ok((context, LineOutcome::Record(Record::Mark(mark))));
    }

    let draft = tokenize_line(trimmed, &context).map_err(fail)?;
    context.last_entry_date = Some(draft.date);
    let entry = TimeEntry {
        location: location.clone(),
        done: draft.done,
        billable: draft.billable,
        date: draft.date,
        time: draft.time,
        text: draft.text,
    };
    Ok((context, LineOutcome::Record(Record::Entry(entry))))
}

/// Parses the full text of a log. `path` is only used for locations.
pub fn parse_str(text: &str, path: &Path) -> Result<LogDataset> {
    let mut context = ParseContext::default();
    let mut dataset = LogDataset::default();

    for (index, line) in text.lines().enumerate() {
        let location = SourceLocation::new(path, index + 1);
        let (next, outcome) = step(context, line, &location)?;
        context = next;
        if let LineOutcome::Record(record) = outcome {
            dataset.push(record);
        }
    }

    debug!(
        "parsed {}: {} entries, {} workdays",
        path.display(),
        dataset.entries().len(),
        dataset.workdays().len()
    );
    Ok(dataset)
}

pub fn parse_file(path: &Path) -> Result<LogDataset> {
    let text = fs::read_to_string(path).map_err(|e| TimeLogError::io(path, e))?;
    parse_str(&text, path)
}
