//! Bounded, append-only log of human-readable playground events.

use std::collections::VecDeque;
use std::fmt;

use chrono::Local;

pub const LOG_CAPACITY: usize = 50;
const TIMESTAMP_FORMAT: &str = "%H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LogEntryId(u64);

impl fmt::Display for LogEntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "log-{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub id: LogEntryId,
    pub timestamp: String,
    pub message: String,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.timestamp, self.message)
    }
}

/// Source of display timestamps for new entries.
pub trait LogClock {
    fn timestamp(&self) -> String;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LocalClock;

impl LogClock for LocalClock {
    fn timestamp(&self) -> String {
        Local::now().format(TIMESTAMP_FORMAT).to_string()
    }
}

pub struct LogSink {
    entries: VecDeque<LogEntry>,
    next_id: u64,
    clock: Box<dyn LogClock>,
}

impl LogSink {
    pub fn new() -> Self {
        Self::with_clock(Box::new(LocalClock))
    }

    pub fn with_clock(clock: Box<dyn LogClock>) -> Self {
        Self {
            entries: VecDeque::with_capacity(LOG_CAPACITY),
            next_id: 0,
            clock,
        }
    }

    pub fn record(&mut self, message: impl Into<String>) -> LogEntryId {
        let message = message.into();
        tracing::info!(target: "susplay::console", "{message}");

        let id = LogEntryId(self.next_id);
        self.next_id += 1;
        self.entries.push_back(LogEntry {
            id,
            timestamp: self.clock.timestamp(),
            message,
        });
        while self.entries.len() > LOG_CAPACITY {
            self.entries.pop_front();
        }

        id
    }

    /// Entries oldest first.
    pub fn entries(&self) -> std::collections::vec_deque::Iter<'_, LogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.back()
    }

    /// Entries recorded after `id`, oldest first.
    pub fn since(&self, id: Option<LogEntryId>) -> impl Iterator<Item = &LogEntry> {
        self.entries
            .iter()
            .filter(move |entry| id.map_or(true, |id| entry.id > id))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for LogSink {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LogSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogSink")
            .field("entries", &self.entries)
            .field("next_id", &self.next_id)
            .finish_non_exhaustive()
    }
}
