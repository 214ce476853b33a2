//! Filtering over a parsed [`LogDataset`].
//!
//! All filter options are optional and combined with AND. Filtering never
//! fails; options that exclude everything simply produce nothing.

use crate::libs::entry::{LogDataset, TimeEntry, WorkdayMark};
use chrono::NaiveDate;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    /// Inclusive `(start, end)` range.
    pub date_range: Option<(NaiveDate, NaiveDate)>,
    /// Exact project tag, e.g. `+acme`.
    pub project: Option<String>,
    /// Exact context tag, e.g. `@office`.
    pub context: Option<String>,
    /// Case-insensitive substring of the entry text.
    pub text: Option<String>,
}

impl FilterOptions {
    pub fn in_range(&self, date: NaiveDate) -> bool {
        self.date_range.map_or(true, |(start, end)| start <= date && date <= end)
    }

    pub fn matches(&self, entry: &TimeEntry) -> bool {
        if !self.in_range(entry.date) {
            return false;
        }
        if let Some(project) = &self.project {
            if entry.project() != Some(project.as_str()) {
                return false;
            }
        }
        if let Some(context) = &self.context {
            if entry.context() != Some(context.as_str()) {
                return false;
            }
        }
        if let Some(text) = &self.text {
            if !entry.text.to_lowercase().contains(&text.to_lowercase()) {
                return false;
            }
        }
        true
    }
}

/// Entries matching `options`, lazily and in file order.
pub fn filter_entries<'a, 'o>(
    dataset: &'a LogDataset,
    options: &'o FilterOptions,
) -> impl Iterator<Item = &'a TimeEntry> + 'o
where
    'a: 'o,
{
    dataset.entries().iter().filter(move |entry| options.matches(entry))
}

impl LogDataset {
    /// Workday marks of every date inside `range` (all dates when `None`).
    pub fn workdays_in(
        &self,
        range: Option<(NaiveDate, NaiveDate)>,
    ) -> impl Iterator<Item = (NaiveDate, &[WorkdayMark])> + '_ {
        self.workdays()
            .iter()
            .filter(move |(date, _)| {
                range.map_or(true, |(start, end)| start <= **date && **date <= end)
            })
            .map(|(date, marks)| (*date, marks.as_slice()))
    }
}
