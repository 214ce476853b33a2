//! Date and duration formatting shared by the parser and the views.
//!
//! Durations use the same compact form the log accepts, so whatever is
//! printed can be typed back in:
//!
//! - 1 hour 15 minutes → "1h15m"
//! - 2 hours → "2h"
//! - 45 minutes → "45m"
//! - zero or negative → "0m"
//!
//! Seconds are dropped.
//!
//! ## Examples
//!
//! ```rust
//! use ttrack::libs::formatter::format_duration;
//! use chrono::Duration;
//!
//! assert_eq!(format_duration(&Duration::minutes(75)), "1h15m");
//! assert_eq!(format_duration(&Duration::hours(2)), "2h");
//! assert_eq!(format_duration(&Duration::hours(-1)), "0m");
//! ```

use chrono::Duration;

/// Date format used in the log and on the command line.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Clock format of workday marks and time ranges.
pub const TIME_FORMAT: &str = "%H:%M";

/// Formats a duration as `XhYm`, `Xh` or `Ym`.
///
/// Negative durations are clamped to zero.
pub fn format_duration(duration: &Duration) -> String {
    let minutes = duration.num_minutes().max(0);
    let (hours, mins) = (minutes / 60, minutes % 60);

    match (hours, mins) {
        (0, mins) => format!("{}m", mins),
        (hours, 0) => format!("{}h", hours),
        (hours, mins) => format!("{}h{}m", hours, mins),
    }
}
