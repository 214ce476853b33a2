use super::error::{Result, TimeLogError};
use super::file::parse_file;
use crate::libs::entry::{BillableFlag, DoneFlag, LogDataset};
use crate::libs::formatter::DATE_FORMAT;
use chrono::NaiveDate;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// The time log file together with its last parsed contents.
pub struct TimeLog {
    path: PathBuf,
    dataset: LogDataset,
}

impl TimeLog {
    /// Opens and parses the log at `path`.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let dataset = parse_file(&path)?;
        Ok(TimeLog { path, dataset })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn dataset(&self) -> &LogDataset {
        &self.dataset
    }

    /// Re-reads the file, replacing the previous dataset as a whole.
    ///
    /// On error the previous dataset is left untouched.
    pub fn reload(&mut self) -> Result<()> {
        self.dataset = parse_file(&self.path)?;
        debug!("reloaded {}", self.path.display());
        Ok(())
    }

    /// Appends one pre-formatted line. The line is not validated; a bad
    /// line shows up on the next parse.
    pub fn append(&self, line: &str) -> Result<()> {
        Self::append_to(&self.path, line)
    }

    /// Appends to the log at `path` without parsing it first, so a log that
    /// already holds a malformed line still accepts new ones.
    pub fn append_to(path: &Path, line: &str) -> Result<()> {
        let io_err = |e: std::io::Error| TimeLogError::io(path, e);
        let needs_separator = match fs::read(path) {
            Ok(bytes) => bytes.last().is_some_and(|b| *b != b'\n'),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => false,
            Err(e) => return Err(io_err(e)),
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(io_err)?;
        if needs_separator {
            writeln!(file).map_err(io_err)?;
        }
        writeln!(file, "{}", line.trim()).map_err(io_err)?;
        info!("appended to {}: {}", path.display(), line.trim());
        Ok(())
    }
}

/// Builds a line in the log grammar from loose parts.
#[derive(Debug, Clone)]
pub struct EntryLine {
    done: Option<DoneFlag>,
    billable: Option<BillableFlag>,
    date: NaiveDate,
    time: String,
    text: Vec<String>,
}

impl EntryLine {
    pub fn new(date: NaiveDate, time: impl Into<String>) -> Self {
        Self {
            done: None,
            billable: None,
            date,
            time: time.into(),
            text: Vec::new(),
        }
    }

    pub fn done(mut self, done: Option<DoneFlag>) -> Self {
        self.done = done;
        self
    }

    pub fn billable(mut self, billable: Option<BillableFlag>) -> Self {
        self.billable = billable;
        self
    }

    pub fn text<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.text.extend(words.into_iter().map(Into::into));
        self
    }

    pub fn build(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if let Some(done) = self.done {
            parts.push(done.glyph().to_string());
        }
        if let Some(billable) = self.billable {
            parts.push(billable.glyph().to_string());
        }
        parts.push(self.date.format(DATE_FORMAT).to_string());
        parts.push(self.time.trim().to_string());
        parts.extend(
            self.text
                .iter()
                .map(|word| word.trim().to_string())
                .filter(|word| !word.is_empty()),
        );
        parts.join(" ")
    }
}
