//! Line tokenizer.
//!
//! An entry line is read left to right, each step consuming a prefix and
//! handing the rest to the next one:
//!
//! ```text
//! [done] [billable] [DATE | *] DURATION TEXT
//! ```
//!
//! The flag and date steps share one signature, [`PrefixParser`]. A step
//! that does not match returns no value and leaves the input untouched;
//! only steps that cannot be skipped turn a mismatch into an [`ErrorKind`].

use super::duration::{parse_duration, TimeSpent};
use super::error::ErrorKind;
use super::file::ParseContext;
use crate::libs::entry::{BillableFlag, DoneFlag, MarkKind};
use crate::libs::formatter::{DATE_FORMAT, TIME_FORMAT};
use chrono::{NaiveDate, NaiveTime};

/// Shorthand for "same date as the previous entry".
pub const DATE_SHORTHAND: char = '*';

/// Outcome of one prefix step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scan<'a, T> {
    pub value: Option<T>,
    pub rest: &'a str,
}

impl<'a, T> Scan<'a, T> {
    fn matched(value: T, rest: &'a str) -> Self {
        Self { value: Some(value), rest }
    }

    fn unmatched(rest: &'a str) -> Self {
        Self { value: None, rest }
    }
}

/// The shape every prefix step of the line grammar implements.
pub type PrefixParser<T> = for<'a> fn(&'a str) -> Scan<'a, T>;

/// An entry line broken into its fields, before a location is attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDraft {
    pub done: Option<DoneFlag>,
    pub billable: Option<BillableFlag>,
    pub date: NaiveDate,
    pub time: TimeSpent,
    pub text: String,
}

/// Consumes exactly one character and keeps it when `glyph` recognizes it.
fn parse_flag<'a, T>(line: &'a str, glyph: fn(char) -> Option<T>) -> Scan<'a, T> {
    let mut chars = line.chars();
    match chars.next().and_then(glyph) {
        Some(flag) => Scan::matched(flag, chars.as_str().trim()),
        None => Scan::unmatched(line),
    }
}

pub fn parse_done(line: &str) -> Scan<'_, DoneFlag> {
    parse_flag(line, DoneFlag::from_glyph)
}

pub fn parse_billable(line: &str) -> Scan<'_, BillableFlag> {
    parse_flag(line, BillableFlag::from_glyph)
}

/// Reads a leading `YYYY-MM-DD` token.
pub fn parse_date(line: &str) -> Scan<'_, NaiveDate> {
    let (token, rest) = split_token(line);
    match NaiveDate::parse_from_str(token, DATE_FORMAT) {
        Ok(date) => Scan::matched(date, rest.trim()),
        Err(_) => Scan::unmatched(line),
    }
}

/// The date when `line` consists of nothing but a date token.
pub fn parse_bare_date(line: &str) -> Option<NaiveDate> {
    let scan = parse_date(line.trim());
    match scan.value {
        Some(date) if scan.rest.is_empty() => Some(date),
        _ => None,
    }
}

fn split_token(line: &str) -> (&str, &str) {
    line.split_once(char::is_whitespace).unwrap_or((line, ""))
}

/// Resolves the date step: `*` or a literal date.
fn parse_date_or_shorthand<'a>(
    line: &'a str,
    context: &ParseContext,
) -> Result<(NaiveDate, &'a str), ErrorKind> {
    let line = line.trim_start();
    if let Some(rest) = line.strip_prefix(DATE_SHORTHAND) {
        let date = context.last_entry_date.ok_or(ErrorKind::DateShorthandWithoutPriorEntry)?;
        return Ok((date, rest.trim_start()));
    }
    let scan = parse_date(line);
    scan.value.map(|date| (date, scan.rest)).ok_or(ErrorKind::MalformedDate)
}

/// Tokenizes a trimmed entry line.
///
/// When `context` carries an ambient date the date step is skipped and that
/// date is used instead.
pub fn tokenize_line(line: &str, context: &ParseContext) -> Result<EntryDraft, ErrorKind> {
    let done: PrefixParser<DoneFlag> = parse_done;
    let billable: PrefixParser<BillableFlag> = parse_billable;

    let done = done(line);
    let billable = billable(done.rest);
    let (date, rest) = match context.current_date {
        Some(date) => (date, billable.rest),
        None => parse_date_or_shorthand(billable.rest, context)?,
    };

    let (token, rest) = split_token(rest.trim_start());
    let time = parse_duration(token)?;

    Ok(EntryDraft {
        done: done.value,
        billable: billable.value,
        date,
        time,
        text: rest.trim().to_string(),
    })
}

/// Whether `line` is an indented clock-in/clock-out mark.
pub fn is_workday_mark(line: &str) -> bool {
    line.strip_prefix(super::file::BLOCK_INDENT)
        .and_then(|rest| rest.chars().next())
        .and_then(MarkKind::from_glyph)
        .is_some()
}

/// Parses `>HH:MM` or `<HH:MM` (surrounding whitespace allowed).
pub fn parse_workday_mark(line: &str) -> Result<(MarkKind, NaiveTime), ErrorKind> {
    let line = line.trim();
    let mut chars = line.chars();
    let kind = chars
        .next()
        .and_then(MarkKind::from_glyph)
        .ok_or_else(|| ErrorKind::MalformedClockTime(line.to_string()))?;
    let clock = chars.as_str().trim();
    let time = NaiveTime::parse_from_str(clock, TIME_FORMAT)
        .map_err(|_| ErrorKind::MalformedClockTime(clock.to_string()))?;
    Ok((kind, time))
}
