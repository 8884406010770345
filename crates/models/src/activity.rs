use std::fmt;
use chrono::{DateTime, Utc};

use crate::item::ItemName;

/// One timestamped line of the per-run activity log.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogEntry {
    pub at: DateTime<Utc>,
    pub message: String,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.at, self.message)
    }
}

/// Append-only, in-memory record of `add` operations. Never persisted.
#[derive(Clone, Debug, Default)]
pub struct ActivityLog {
    entries: Vec<LogEntry>,
}

impl ActivityLog {
    pub fn new() -> Self { Self::default() }

    /// Append an "Added" line and return a copy of it.
    pub fn record_added(&mut self, item: &ItemName, quantity: i64) -> LogEntry {
        let entry = LogEntry { at: Utc::now(), message: format!("Added {quantity} of {item}") };
        self.entries.push(entry.clone());
        entry
    }

    pub fn entries(&self) -> &[LogEntry] { &self.entries }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}
