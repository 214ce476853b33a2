//! Core library modules for ttrack.
//!
//! ## Features
//!
//! - **Data Model**: time entries, workday marks and the parsed dataset
//! - **Querying**: filters, day/week grouping, billable and worked totals
//! - **Infrastructure**: configuration, data directory, logging, hooks
//! - **User Interface**: summary tables, duration formatting, messages
//!
//! ## Usage
//!
//! ```rust
//! use std::path::Path;
//! use ttrack::libs::query::FilterOptions;
//! use ttrack::libs::summary::{summarize, Grouping};
//! use ttrack::timelog::file::parse_str;
//!
//! let dataset = parse_str("$ 2024-03-04 1h review +acme\n", Path::new("time.txt")).unwrap();
//! let groups = summarize(&dataset, &FilterOptions::default(), Grouping::Day);
//! assert_eq!(groups.len(), 1);
//! assert_eq!(groups[0].billable(), chrono::Duration::hours(1));
//! ```

pub mod config;
pub mod data_storage;
pub mod entry;
pub mod formatter;
pub mod hooks;
pub mod logging;
pub mod messages;
pub mod query;
pub mod summary;
pub mod timespan;
pub mod view;
