//! Computation tape
//!
//! Every successful `=` (or chained operator) leaves one line on a bounded
//! tape so a front end can show what was computed during the session.

use super::number::number_to_string;
use super::operations::Operation;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// A single computation on the tape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Left operand as it was entered
    pub lhs: String,
    /// The operation applied
    pub operation: Operation,
    /// Right operand as it was entered
    pub rhs: String,
    /// The computed result
    pub result: f64,
}

impl HistoryEntry {
    /// Creates a new history entry
    #[must_use]
    pub fn new(lhs: impl Into<String>, operation: Operation, rhs: impl Into<String>, result: f64) -> Self {
        Self {
            lhs: lhs.into(),
            operation,
            rhs: rhs.into(),
            result,
        }
    }

    /// Returns the expression part, e.g. `6 ÷ 3`
    #[must_use]
    pub fn expression(&self) -> String {
        format!("{} {} {}", self.lhs, self.operation, self.rhs)
    }

    /// Returns a formatted display string, e.g. `6 ÷ 3 = 2`
    #[must_use]
    pub fn display(&self) -> String {
        format!("{} = {}", self.expression(), number_to_string(self.result))
    }
}

/// Bounded computation tape
///
/// Oldest entries are dropped once `max_entries` is reached.
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    max_entries: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Default maximum tape length
    pub const DEFAULT_MAX_ENTRIES: usize = 100;

    /// Creates a new history with default capacity
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_MAX_ENTRIES)
    }

    /// Creates a history with custom maximum size
    #[must_use]
    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(max_entries.min(Self::DEFAULT_MAX_ENTRIES)),
            max_entries,
        }
    }

    /// Adds an entry, evicting the oldest one when full
    pub fn push(&mut self, entry: HistoryEntry) {
        if self.max_entries == 0 {
            return;
        }
        if self.entries.len() >= self.max_entries {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Returns the number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the history is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the maximum number of entries
    #[must_use]
    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Clears all history entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns an iterator over the entries (oldest first)
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Returns the most recent entry
    #[must_use]
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    /// Returns the entry at the given index (0 = oldest)
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    /// Serializes the tape to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.entries)
    }

    /// Exports the tape one computation per line
    #[must_use]
    pub fn export_formatted(&self) -> String {
        self.entries
            .iter()
            .map(HistoryEntry::display)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
