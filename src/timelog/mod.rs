//! Plain-text storage layer.
//!
//! Reads the append-only time log into a [`LogDataset`] and appends new
//! lines to it. There is no other persistence: the text file is the single
//! source of truth and every read parses it from scratch.
//!
//! ## Modules
//!
//! - [`duration`]: the duration token lexer
//! - [`line`]: flags, date and duration of a single entry line
//! - [`file`]: the line-to-line state machine over a whole file
//! - [`repository`]: open/reload/append around a log file path
//! - [`error`]: error kinds and located parse errors
//!
//! ## Usage
//!
//! ```rust
//! use std::path::Path;
//! use ttrack::timelog::file::parse_str;
//!
//! let log = "2024-03-04\n  >09:00\n  x $ 1h15m review +acme\n  <17:30\n";
//! let dataset = parse_str(log, Path::new("time.txt")).unwrap();
//! assert_eq!(dataset.entries().len(), 1);
//! assert_eq!(dataset.entries()[0].project(), Some("+acme"));
//! ```
//!
//! [`LogDataset`]: crate::libs::entry::LogDataset

pub mod duration;
pub mod error;
pub mod file;
pub mod line;
pub mod repository;

pub use error::{ErrorKind, TimeLogError};
pub use repository::{EntryLine, TimeLog};
