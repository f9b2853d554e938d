//! # Structured Logging
//!
//! Structured log entries for the host controller.
//!
//! ## Philosophy
//!
//! Logging is explicit and structured, not text-based or printf-style.
//! The host records every dispatch and every caught failure as an entry
//! in a bounded buffer that tests can inspect.

use avs_types::SessionId;
use std::collections::VecDeque;

/// Maximum number of entries retained by a [`LogBuffer`]
const MAX_LOG_HISTORY: usize = 256;

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Debug information
    Debug,
    /// Informational messages
    Info,
    /// Warnings
    Warn,
    /// Errors
    Error,
}

/// A structured log entry
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Log level
    pub level: LogLevel,
    /// Panel session the entry relates to (if any)
    pub session: Option<SessionId>,
    /// Log message
    pub message: String,
    /// Structured fields
    pub fields: Vec<(String, String)>,
}

impl LogEntry {
    /// Creates a new log entry
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            session: None,
            message: message.into(),
            fields: Vec::new(),
        }
    }

    /// Sets the related session
    pub fn with_session(mut self, session: SessionId) -> Self {
        self.session = Some(session);
        self
    }

    /// Adds a field to the log entry
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((key.into(), value.into()));
        self
    }
}

/// Bounded in-memory log buffer
///
/// Oldest entries are dropped once the buffer is full.
#[derive(Debug, Default)]
pub struct LogBuffer {
    entries: VecDeque<LogEntry>,
}

impl LogBuffer {
    /// Creates an empty log buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an entry, evicting the oldest when full
    pub fn record(&mut self, entry: LogEntry) {
        if self.entries.len() >= MAX_LOG_HISTORY {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Returns all retained entries, oldest first
    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// Returns retained entries at or above the given level
    pub fn at_least(&self, level: LogLevel) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().filter(move |e| e.level >= level)
    }

    /// Returns the number of retained entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Error);
    }

    #[test]
    fn test_entry_builder() {
        let session = SessionId::new();
        let entry = LogEntry::new(LogLevel::Info, "dispatch")
            .with_session(session)
            .with_field("command", "savePairs");

        assert_eq!(entry.level, LogLevel::Info);
        assert_eq!(entry.session, Some(session));
        assert_eq!(entry.fields, vec![("command".to_string(), "savePairs".to_string())]);
    }

    #[test]
    fn test_buffer_records_in_order() {
        let mut buffer = LogBuffer::new();
        buffer.record(LogEntry::new(LogLevel::Info, "first"));
        buffer.record(LogEntry::new(LogLevel::Error, "second"));

        let messages: Vec<&str> = buffer.entries().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["first", "second"]);
    }

    #[test]
    fn test_buffer_filter_by_level() {
        let mut buffer = LogBuffer::new();
        buffer.record(LogEntry::new(LogLevel::Debug, "noise"));
        buffer.record(LogEntry::new(LogLevel::Error, "boom"));

        let errors: Vec<&str> = buffer
            .at_least(LogLevel::Warn)
            .map(|e| e.message.as_str())
            .collect();
        assert_eq!(errors, vec!["boom"]);
    }

    #[test]
    fn test_buffer_evicts_oldest() {
        let mut buffer = LogBuffer::new();
        for i in 0..(MAX_LOG_HISTORY + 10) {
            buffer.record(LogEntry::new(LogLevel::Info, format!("entry {i}")));
        }
        assert_eq!(buffer.len(), MAX_LOG_HISTORY);
        assert_eq!(buffer.entries().next().unwrap().message, "entry 10");
    }
}
