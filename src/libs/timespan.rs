//! Named time spans accepted by `summary`.
//!
//! | Input                        | Range                         |
//! |------------------------------|-------------------------------|
//! | `all`, `al`, `a`             | everything                    |
//! | `today`, `to`, `t`           | today                         |
//! | `yesterday`, `yes`, `ye`, `y`| yesterday                     |
//! | `week`, `we`, `w`            | Monday of this week to today  |
//! | `month`, `mo`, `m`           | first of this month to today  |
//! | `2024-03-04`                 | that day                      |
//! | `2024-03-01..2024-03-15`     | inclusive range               |

use crate::libs::formatter::DATE_FORMAT;
use chrono::{Datelike, Duration, NaiveDate};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Timespan {
    All,
    #[default]
    Today,
    Yesterday,
    Week,
    Month,
    Day(NaiveDate),
    Range(NaiveDate, NaiveDate),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimespanError {
    #[error(
        "unknown timespan '{0}' (expected all, today, yesterday, week, month, \
         YYYY-MM-DD or YYYY-MM-DD..YYYY-MM-DD)"
    )]
    Unknown(String),
    #[error("timespan '{0}' ends before it starts")]
    Reversed(String),
}

impl FromStr for Timespan {
    type Err = TimespanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let timespan = match s.to_lowercase().as_str() {
            "all" | "al" | "a" => Timespan::All,
            "today" | "to" | "t" => Timespan::Today,
            "yesterday" | "yes" | "ye" | "y" => Timespan::Yesterday,
            "week" | "we" | "w" => Timespan::Week,
            "month" | "mo" | "m" => Timespan::Month,
            _ => return parse_dates(s),
        };
        Ok(timespan)
    }
}

fn parse_dates(s: &str) -> Result<Timespan, TimespanError> {
    let date = |value: &str| {
        NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
            .map_err(|_| TimespanError::Unknown(s.to_string()))
    };
    match s.split_once("..") {
        Some((start, end)) => {
            let (start, end) = (date(start)?, date(end)?);
            if end < start {
                return Err(TimespanError::Reversed(s.to_string()));
            }
            Ok(Timespan::Range(start, end))
        }
        None => Ok(Timespan::Day(date(s)?)),
    }
}

impl Timespan {
    /// Inclusive date range relative to `today`; `None` means unbounded.
    pub fn date_range(self, today: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
        match self {
            Timespan::All => None,
            Timespan::Today => Some((today, today)),
            Timespan::Yesterday => {
                let yesterday = today - Duration::days(1);
                Some((yesterday, yesterday))
            }
            Timespan::Week => {
                let monday = today - Duration::days(today.weekday().num_days_from_monday() as i64);
                Some((monday, today))
            }
            Timespan::Month => Some((today.with_day(1).unwrap_or(today), today)),
            Timespan::Day(date) => Some((date, date)),
            Timespan::Range(start, end) => Some((start, end)),
        }
    }
}

impl fmt::Display for Timespan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Timespan::All => write!(f, "all"),
            Timespan::Today => write!(f, "today"),
            Timespan::Yesterday => write!(f, "yesterday"),
            Timespan::Week => write!(f, "week"),
            Timespan::Month => write!(f, "month"),
            Timespan::Day(date) => write!(f, "{}", date.format(DATE_FORMAT)),
            Timespan::Range(start, end) => {
                write!(f, "{}..{}", start.format(DATE_FORMAT), end.format(DATE_FORMAT))
            }
        }
    }
}
