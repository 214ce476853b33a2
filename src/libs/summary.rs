//! Grouping and aggregation for summaries.
//!
//! Entries are bucketed by day or by ISO week. Inside a bucket they keep the
//! order they have in the log; buckets themselves are ordered by key.
//!
//! Each bucket exposes three totals:
//!
//! - **overall**: sum of all entry durations
//! - **billable**: sum of durations of entries flagged `$` or `€`
//! - **worked**: clock-in/clock-out spans of the bucket's workdays
//!
//! ## Workday pairing
//!
//! Marks of one date are walked in order. A start opens a span and the next
//! end closes it. An end without an open span is ignored, and a repeated
//! start moves the open span to the later time. A span left open at the end
//! (the day is still running) adds nothing and is reported through
//! [`WorkedTime::open_since`].

use crate::libs::entry::{LogDataset, MarkKind, TimeEntry, WorkdayMark};
use crate::libs::formatter::DATE_FORMAT;
use crate::libs::query::{filter_entries, FilterOptions};
use chrono::{Datelike, Duration, NaiveDate, NaiveTime};
use clap::ValueEnum;
use std::collections::BTreeMap;
use std::fmt;

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Grouping {
    #[default]
    Day,
    Week,
}

impl Grouping {
    pub fn key(self, date: NaiveDate) -> GroupKey {
        match self {
            Grouping::Day => GroupKey::Day(date),
            Grouping::Week => {
                let week = date.iso_week();
                GroupKey::Week {
                    year: week.year(),
                    week: week.week(),
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GroupKey {
    Day(NaiveDate),
    Week { year: i32, week: u32 },
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupKey::Day(date) => write!(f, "{}", date.format(DATE_FORMAT)),
            GroupKey::Week { year, week } => write!(f, "{}-W{:02}", year, week),
        }
    }
}

/// Worked time of one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkedTime {
    pub worked: Duration,
    /// Start of a span that was never closed.
    pub open_since: Option<NaiveTime>,
}

impl WorkedTime {
    pub fn is_open(&self) -> bool {
        self.open_since.is_some()
    }
}

pub fn worked_time(marks: &[WorkdayMark]) -> WorkedTime {
    let mut worked = Duration::zero();
    let mut open: Option<NaiveTime> = None;

    for mark in marks {
        match mark.kind {
            MarkKind::Start => open = Some(mark.time),
            MarkKind::End => {
                if let Some(start) = open.take() {
                    if mark.time > start {
                        worked = saturating_sum([worked, mark.time - start]);
                    }
                }
            }
        }
    }

    WorkedTime { worked, open_since: open }
}

/// Adds up durations, saturating at [`Duration::MAX`] instead of overflowing.
pub fn saturating_sum(durations: impl IntoIterator<Item = Duration>) -> Duration {
    durations
        .into_iter()
        .try_fold(Duration::zero(), |acc, duration| acc.checked_add(&duration))
        .unwrap_or(Duration::MAX)
}

pub fn total_time<'a>(entries: impl IntoIterator<Item = &'a TimeEntry>) -> Duration {
    saturating_sum(entries.into_iter().map(|entry| entry.time.time))
}

pub fn billable_time<'a>(entries: impl IntoIterator<Item = &'a TimeEntry>) -> Duration {
    total_time(entries.into_iter().filter(|entry| entry.is_billable()))
}

/// Workday marks of one date with their paired total.
#[derive(Debug, Clone)]
pub struct DaySheet<'a> {
    pub date: NaiveDate,
    pub marks: &'a [WorkdayMark],
    pub worked: WorkedTime,
}

#[derive(Debug, Clone)]
pub struct SummaryGroup<'a> {
    pub key: GroupKey,
    pub entries: Vec<&'a TimeEntry>,
    pub workdays: Vec<DaySheet<'a>>,
}

impl<'a> SummaryGroup<'a> {
    fn new(key: GroupKey) -> Self {
        Self {
            key,
            entries: Vec::new(),
            workdays: Vec::new(),
        }
    }

    pub fn overall(&self) -> Duration {
        total_time(self.entries.iter().copied())
    }

    pub fn billable(&self) -> Duration {
        billable_time(self.entries.iter().copied())
    }

    pub fn worked(&self) -> Duration {
        saturating_sum(self.workdays.iter().map(|day| day.worked.worked))
    }

    pub fn is_open(&self) -> bool {
        self.workdays.iter().any(|day| day.worked.is_open())
    }
}

/// Buckets the entries that pass `options`, plus the workdays inside its
/// date range.
pub fn summarize<'a>(
    dataset: &'a LogDataset,
    options: &FilterOptions,
    grouping: Grouping,
) -> Vec<SummaryGroup<'a>> {
    let mut groups: BTreeMap<GroupKey, SummaryGroup<'a>> = BTreeMap::new();

    for entry in filter_entries(dataset, options) {
        let key = grouping.key(entry.date);
        groups.entry(key).or_insert_with(|| SummaryGroup::new(key)).entries.push(entry);
    }

    for (date, marks) in dataset.workdays_in(options.date_range) {
        let key = grouping.key(date);
        groups.entry(key).or_insert_with(|| SummaryGroup::new(key)).workdays.push(DaySheet {
            date,
            marks,
            worked: worked_time(marks),
        });
    }

    groups.into_values().collect()
}
