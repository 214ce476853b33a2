//! Error types for reading the time log.
//!
//! Parsing is fail-fast: the first malformed line aborts the whole file and
//! the error carries the file and line it came from. Line-level steps report
//! a bare [`ErrorKind`]; the file parser attaches the [`SourceLocation`].

use crate::libs::entry::SourceLocation;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// What went wrong on a single line, without location.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    #[error("missing or malformed date")]
    MalformedDate,
    #[error("unrecognized duration '{0}'")]
    UnrecognizedDuration(String),
    #[error("missing duration")]
    MissingDuration,
    #[error("time range '{0}' does not end after it starts")]
    NegativeDurationRange(String),
    #[error("date shorthand '*' used with no prior entry")]
    DateShorthandWithoutPriorEntry,
    #[error("workday mark outside of a date context")]
    WorkdayMarkOutsideDateContext,
    #[error("malformed clock time '{0}'")]
    MalformedClockTime(String),
}

#[derive(Debug, Error)]
pub enum TimeLogError {
    #[error("{location}: {kind}")]
    Parse { location: SourceLocation, kind: ErrorKind },
    #[error("failed to access time log {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl TimeLogError {
    pub fn parse(location: SourceLocation, kind: ErrorKind) -> Self {
        TimeLogError::Parse { location, kind }
    }

    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        TimeLogError::Io { path: path.into(), source }
    }

    /// The line-level cause, if this is a parse failure.
    pub fn kind(&self) -> Option<&ErrorKind> {
        match self {
            TimeLogError::Parse { kind, .. } => Some(kind),
            TimeLogError::Io { .. } => None,
        }
    }

    pub fn location(&self) -> Option<&SourceLocation> {
        match self {
            TimeLogError::Parse { location, .. } => Some(location),
            TimeLogError::Io { .. } => None,
        }
    }
}

/// Convenience alias for results that carry a located error.
pub type Result<T> = std::result::Result<T, TimeLogError>;
