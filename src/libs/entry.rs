//! Structured records recovered from the time log.
//!
//! A log file yields two kinds of records:
//!
//! - [`TimeEntry`]: one logged unit of work, with optional done/billable
//!   flags, a resolved date, the time spent and free text.
//! - [`WorkdayMark`]: a clock-in (`>`) or clock-out (`<`) nested under a
//!   date block.
//!
//! [`LogDataset`] keeps them in two separate containers: entries in file
//! order, and marks grouped per date (also in file order).
//!
//! ## Tags
//!
//! Project (`+word`) and context (`@word`) tags are not stored; they are
//! derived from the entry text on demand. A tag only counts when it starts
//! the text or follows a space, so `mail@example.org` or `abc+abc` never
//! match.

use crate::libs::formatter::DATE_FORMAT;
use crate::timelog::duration::TimeSpent;
use chrono::{NaiveDate, NaiveTime};
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::sync::OnceLock;

/// Where a record was read from. Provenance only.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SourceLocation {
    pub file: PathBuf,
    /// 1-based line number.
    pub line: usize,
}

impl SourceLocation {
    pub fn new(file: impl Into<PathBuf>, line: usize) -> Self {
        Self { file: file.into(), line }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file.display(), self.line)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoneFlag {
    Done,
    NotDone,
}

impl DoneFlag {
    pub fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            'x' => Some(DoneFlag::Done),
            '_' => Some(DoneFlag::NotDone),
            _ => None,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            DoneFlag::Done => 'x',
            DoneFlag::NotDone => '_',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillableFlag {
    /// `$`
    Dollar,
    /// `€`
    Euro,
    /// `-`
    NonBillable,
}

impl BillableFlag {
    pub fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '$' => Some(BillableFlag::Dollar),
            '€' => Some(BillableFlag::Euro),
            '-' => Some(BillableFlag::NonBillable),
            _ => None,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            BillableFlag::Dollar => '$',
            BillableFlag::Euro => '€',
            BillableFlag::NonBillable => '-',
        }
    }

    pub fn is_billable(self) -> bool {
        !matches!(self, BillableFlag::NonBillable)
    }
}

fn project_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?:^| )(\+\w+)").expect("project tag pattern is valid"))
}

fn context_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?:^| )(@\w+)").expect("context tag pattern is valid"))
}

/// First `+project` tag in `text`, including the `+`.
pub fn find_project(text: &str) -> Option<&str> {
    project_pattern().captures(text).and_then(|caps| caps.get(1)).map(|m| m.as_str())
}

/// First `@context` tag in `text`, including the `@`.
pub fn find_context(text: &str) -> Option<&str> {
    context_pattern().captures(text).and_then(|caps| caps.get(1)).map(|m| m.as_str())
}

/// One logged unit of work.
///
/// Equality ignores [`SourceLocation`]: two entries are equal when they
/// record the same work, wherever they were read from.
#[derive(Debug, Clone)]
pub struct TimeEntry {
    pub location: SourceLocation,
    pub done: Option<DoneFlag>,
    pub billable: Option<BillableFlag>,
    pub date: NaiveDate,
    pub time: TimeSpent,
    pub text: String,
}

impl PartialEq for TimeEntry {
    fn eq(&self, other: &Self) -> bool {
        self.done == other.done
            && self.billable == other.billable
            && self.date == other.date
            && self.time == other.time
            && self.text == other.text
    }
}

impl Eq for TimeEntry {}

impl TimeEntry {
    pub fn project(&self) -> Option<&str> {
        find_project(&self.text)
    }

    pub fn context(&self) -> Option<&str> {
        find_context(&self.text)
    }

    pub fn has_project(&self) -> bool {
        self.project().is_some()
    }

    pub fn has_context(&self) -> bool {
        self.context().is_some()
    }

    pub fn is_done(&self) -> bool {
        self.done == Some(DoneFlag::Done)
    }

    pub fn is_billable(&self) -> bool {
        self.billable.is_some_and(BillableFlag::is_billable)
    }

    /// Serializes the entry back into the log line grammar.
    ///
    /// Unspecified flags are left out, so parsing the result yields an
    /// equal entry.
    pub fn to_line(&self) -> String {
        let mut parts: Vec<String> = Vec::with_capacity(5);
        if let Some(done) = self.done {
            parts.push(done.glyph().to_string());
        }
        if let Some(billable) = self.billable {
            parts.push(billable.glyph().to_string());
        }
        parts.push(self.date.format(DATE_FORMAT).to_string());
        parts.push(self.time.raw.clone());
        if !self.text.is_empty() {
            parts.push(self.text.clone());
        }
        parts.join(" ")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkKind {
    Start,
    End,
}

impl MarkKind {
    pub fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '>' => Some(MarkKind::Start),
            '<' => Some(MarkKind::End),
            _ => None,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            MarkKind::Start => '>',
            MarkKind::End => '<',
        }
    }
}

/// A clock-in or clock-out event inside a date block.
#[derive(Debug, Clone)]
pub struct WorkdayMark {
    pub location: SourceLocation,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub kind: MarkKind,
}

impl PartialEq for WorkdayMark {
    fn eq(&self, other: &Self) -> bool {
        self.date == other.date && self.time == other.time && self.kind == other.kind
    }
}

impl Eq for WorkdayMark {}

/// Any record a single log line can produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Entry(TimeEntry),
    Mark(WorkdayMark),
}


/// The result of parsing one log file.
///
/// Immutable once parsing completes; a reload builds a new dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogDataset {
    entries: Vec<TimeEntry>,
    workdays: BTreeMap<NaiveDate, Vec<WorkdayMark>>,
}

impl LogDataset {
    pub(crate) fn push(&mut self, record: Record) {
        match record {
            Record::Entry(entry) => self.entries.push(entry),
            Record::Mark(mark) => self.workdays.entry(mark.date).or_default().push(mark),
        }
    }

    /// Entries in file order.
    pub fn entries(&self) -> &[TimeEntry] {
        &self.entries
    }

    /// Workday marks per date, each list in file order.
    pub fn workdays(&self) -> &BTreeMap<NaiveDate, Vec<WorkdayMark>> {
        &self.workdays
    }

    pub fn marks_on(&self, date: NaiveDate) -> &[WorkdayMark] {
        self.workdays.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.workdays.is_empty()
    }
}
