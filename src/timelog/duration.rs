//! Duration lexer.
//!
//! Turns the duration token of an entry line into elapsed time. Forms are
//! tried in this order:
//!
//! 1. compound units: `1h15m`, `2h`, `45m` (any number of `<int><unit>` pairs)
//! 2. dotted tally: `..` (every dot is fifteen minutes)
//! 3. time range: `13:00-13:20` (end minus start, end must be later)
//!
//! The raw token is kept next to the computed value so entries can be
//! written back exactly as they were typed.

use super::error::ErrorKind;
use crate::libs::formatter::{format_duration, TIME_FORMAT};
use chrono::{Duration, NaiveTime};
use regex::Regex;
use std::sync::OnceLock;

/// Minutes represented by one dot of a tally.
pub const TALLY_QUANTUM_MINUTES: i64 = 15;

/// Time spent on an entry together with the token it was parsed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSpent {
    pub raw: String,
    pub time: Duration,
}

impl TimeSpent {
    pub fn new(raw: impl Into<String>, time: Duration) -> Self {
        Self { raw: raw.into(), time }
    }

    /// Canonical compact form, e.g. `1h15m`.
    pub fn format(&self) -> String {
        format_duration(&self.time)
    }
}

fn compound_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(?:\d+[hm])+$").expect("compound duration pattern is valid")
    })
}

fn unit_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(\d+)([hm])").expect("duration unit pattern is valid"))
}

fn range_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(\d{2}:\d{2})-(\d{2}:\d{2})$").expect("time range pattern is valid")
    })
}

pub fn parse_duration(token: &str) -> Result<TimeSpent, ErrorKind> {
    if token.is_empty() {
        return Err(ErrorKind::MissingDuration);
    }
    if let Some(time) = parse_compound(token)? {
        return Ok(TimeSpent::new(token, time));
    }
    if let Some(time) = parse_tally(token) {
        return Ok(TimeSpent::new(token, time));
    }
    if let Some(time) = parse_range(token)? {
        return Ok(TimeSpent::new(token, time));
    }
    Err(ErrorKind::UnrecognizedDuration(token.to_string()))
}

fn parse_compound(token: &str) -> Result<Option<Duration>, ErrorKind> {
    if !compound_pattern().is_match(token) {
        return Ok(None);
    }
    let mut total = Duration::zero();
    for caps in unit_pattern().captures_iter(token) {
        let amount: i64 = caps[1]
            .parse()
            .map_err(|_| ErrorKind::UnrecognizedDuration(token.to_string()))?;
        let part = match &caps[2] {
            "h" => Duration::try_hours(amount),
            _ => Duration::try_minutes(amount),
        };
        total = part
            .and_then(|part| total.checked_add(&part))
            .ok_or_else(|| ErrorKind::UnrecognizedDuration(token.to_string()))?;
    }
    Ok(Some(total))
}

fn parse_tally(token: &str) -> Option<Duration> {
    if token.is_empty() || !token.chars().all(|c| c == '.') {
        return None;
    }
    Some(Duration::minutes(TALLY_QUANTUM_MINUTES * token.len() as i64))
}

fn parse_range(token: &str) -> Result<Option<Duration>, ErrorKind> {
    let Some(caps) = range_pattern().captures(token) else {
        return Ok(None);
    };
    let unrecognized = || ErrorKind::UnrecognizedDuration(token.to_string());
    let start = NaiveTime::parse_from_str(&caps[1], TIME_FORMAT).map_err(|_| unrecognized())?;
    let end = NaiveTime::parse_from_str(&caps[2], TIME_FORMAT).map_err(|_| unrecognized())?;
    if end <= start {
        return Err(ErrorKind::NegativeDurationRange(token.to_string()));
    }
    Ok(Some(end - start))
}
