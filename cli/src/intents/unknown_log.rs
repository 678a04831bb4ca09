//! # Unknown Query Log
//!
//! File: cli/src/intents/unknown_log.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Every utterance that matches no intent is recorded so the catalog can be
//! improved later. The sink is an injected dependency rather than global
//! state: the responder only sees the `UnknownQueryLog` trait.
//!
//! Implementations:
//! - `FileUnknownLog`: append-only text file, one timestamped line per query
//! - `MemoryUnknownLog`: keeps records in memory (tests, embedding)
//! - `NullUnknownLog`: drops records (`[unknown_log] enabled = false`)
//!
//! ## Record format
//!
//! ```text
//! 2024-05-01 14:03:22,417 - Unknown query: where is my parrot
//! ```
//!
//! Line breaks inside the query are escaped so one record is always one line.
//!
use crate::common::fs::io;
use crate::core::error::Result;
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use tracing::debug;

/// One unmatched utterance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownQuery {
    pub timestamp: DateTime<Local>,
    /// The original, un-normalized text.
    pub text: String,
}

impl UnknownQuery {
    /// Stamps `text` with the current local time.
    pub fn now(text: &str) -> Self {
        Self {
            timestamp: Local::now(),
            text: text.to_string(),
        }
    }

    /// Renders the record as a single log line (no trailing newline).
    pub fn to_line(&self) -> String {
        let escaped = self
            .text
            .replace('\\', "\\\\")
            .replace('\r', "\\r")
            .replace('\n', "\\n");
        format!(
            "{} - Unknown query: {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S,%3f"),
            escaped
        )
    }
}

/// Append-only destination for unknown queries.
pub trait UnknownQueryLog {
    fn append(&mut self, entry: &UnknownQuery) -> Result<()>;
}

impl<T: UnknownQueryLog + ?Sized> UnknownQueryLog for &mut T {
    fn append(&mut self, entry: &UnknownQuery) -> Result<()> {
        (**self).append(entry)
    }
}

impl<T: UnknownQueryLog + ?Sized> UnknownQueryLog for Box<T> {
    fn append(&mut self, entry: &UnknownQuery) -> Result<()> {
        (**self).append(entry)
    }
}

/// Appends records to a plain text file.
#[derive(Debug, Clone)]
pub struct FileUnknownLog {
    path: PathBuf,
}

impl FileUnknownLog {
    /// The file (and its directory) is created lazily on the first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl UnknownQueryLog for FileUnknownLog {
    fn append(&mut self, entry: &UnknownQuery) -> Result<()> {
        io::append_line_to_file(&self.path, &entry.to_line())?;
        debug!("Recorded unknown query in {}", self.path.display());
        Ok(())
    }
}

/// Keeps records in memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryUnknownLog {
    entries: Vec<UnknownQuery>,
}

impl MemoryUnknownLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[UnknownQuery] {
        &self.entries
    }
}

impl UnknownQueryLog for MemoryUnknownLog {
    fn append(&mut self, entry: &UnknownQuery) -> Result<()> {
        self.entries.push(entry.clone());
        Ok(())
    }
}

/// Discards every record.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullUnknownLog;

impl UnknownQueryLog for NullUnknownLog {
    fn append(&mut self, _entry: &UnknownQuery) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::tempdir;

    fn fixed(text: &str) -> UnknownQuery {
        UnknownQuery {
            timestamp: Local.with_ymd_and_hms(2024, 5, 1, 14, 3, 22).unwrap(),
            text: text.to_string(),
        }
    }

    #[test]
    fn test_line_format() {
        assert_eq!(
            fixed("where is my parrot").to_line(),
            "2024-05-01 14:03:22,000 - Unknown query: where is my parrot"
        );
    }

    #[test]
    fn test_line_format_empty_text() {
        assert_eq!(
            fixed("").to_line(),
            "2024-05-01 14:03:22,000 - Unknown query: "
        );
    }

    #[test]
    fn test_line_breaks_are_escaped() {
        let line = fixed("one\ntwo\r\nthree").to_line();
        assert!(!line.contains('\n'));
        assert!(line.ends_with("one\\ntwo\\r\\nthree"));
    }

    #[test]
    fn test_file_log_appends_one_line_per_entry() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("nested/unknowns.log");
        let mut log = FileUnknownLog::new(&path);

        log.append(&fixed("asdkjasd"))?;
        log.append(&fixed(""))?;

        let content = io::read_file_to_string(&path)?;
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("Unknown query: asdkjasd"));
        assert!(lines[1].ends_with("Unknown query: "));
        Ok(())
    }

    #[test]
    fn test_memory_log_through_mut_ref() -> Result<()> {
        fn record<L: UnknownQueryLog>(mut log: L) -> Result<()> {
            log.append(&UnknownQuery::now("huh"))
        }

        let mut memory = MemoryUnknownLog::new();
        record(&mut memory)?;
        assert_eq!(memory.entries().len(), 1);
        assert_eq!(memory.entries()[0].text, "huh");
        Ok(())
    }

    #[test]
    fn test_null_log_accepts_everything() {
        let mut log: Box<dyn UnknownQueryLog> = Box::new(NullUnknownLog);
        assert!(log.append(&UnknownQuery::now("anything")).is_ok());
    }
}
