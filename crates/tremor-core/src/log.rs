//! Bounded simulation log buffer.
//!
//! The driver appends lifecycle and periodic entries during a run; the
//! buffer keeps the most recent [`LOG_CAPACITY`](crate::constants::LOG_CAPACITY)
//! entries and evicts the oldest beyond that. Entries are stamped with
//! simulated time, so a replayed run produces identical logs.

use std::collections::VecDeque;
use std::fmt;

/// Severity of a log entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    /// Routine progress (periodic amplitude summaries, stop notices).
    Info,
    /// Run lifecycle transitions (start).
    Event,
    /// Degraded-but-running conditions.
    Warning,
    /// Failures surfaced to observers.
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Event => write!(f, "EVENT"),
            Self::Warning => write!(f, "WARNING"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

/// One log entry, stamped with simulated time.
#[derive(Clone, Debug, PartialEq)]
pub struct LogEntry {
    /// Simulated time at which the entry was emitted, seconds.
    pub sim_time: f64,
    /// Severity.
    pub level: LogLevel,
    /// Human-readable message.
    pub message: String,
}

/// A bounded FIFO of log entries, oldest evicted first.
#[derive(Clone, Debug)]
pub struct LogBuffer {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

impl LogBuffer {
    /// Create an empty buffer holding at most `capacity` entries.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "LogBuffer capacity must be at least 1");
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append an entry, evicting the oldest if at capacity.
    pub fn push(&mut self, sim_time: f64, level: LogLevel, message: impl Into<String>) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(LogEntry {
            sim_time,
            level,
            message: message.into(),
        });
    }

    /// The last `limit` entries in emission order (newest last).
    pub fn recent(&self, limit: usize) -> Vec<LogEntry> {
        let skip = self.entries.len().saturating_sub(limit);
        self.entries.iter().skip(skip).cloned().collect()
    }

    /// Number of retained entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of retained entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop all entries. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_recent_ordering() {
        let mut buf = LogBuffer::new(10);
        buf.push(0.0, LogLevel::Event, "start");
        buf.push(5.0, LogLevel::Info, "amp");
        buf.push(60.0, LogLevel::Info, "done");

        let recent = buf.recent(2);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].message, "amp");
        assert_eq!(recent[1].message, "done");
    }

    #[test]
    fn evicts_oldest_at_capacity() {
        let mut buf = LogBuffer::new(3);
        for i in 0..5 {
            buf.push(i as f64, LogLevel::Info, format!("m{i}"));
        }
        assert_eq!(buf.len(), 3);
        let all = buf.recent(10);
        assert_eq!(all[0].message, "m2");
        assert_eq!(all[2].message, "m4");
    }

    #[test]
    fn recent_with_large_limit_returns_all() {
        let mut buf = LogBuffer::new(5);
        buf.push(0.0, LogLevel::Info, "only");
        assert_eq!(buf.recent(100).len(), 1);
    }

    #[test]
    #[should_panic(expected = "capacity")]
    fn zero_capacity_panics() {
        let _ = LogBuffer::new(0);
    }
}
