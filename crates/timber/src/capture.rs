//! Test support utilities
//!
//! This module provides a dispatcher that captures records during tests.
//! It's only available when the `test-support` feature is enabled.

use crate::{Dispatcher, Level, OwnedRecord, Record, TimberConfig, format};
use parking_lot::Mutex;
use std::sync::Arc;

/// A dispatcher that captures all records in memory for testing
#[derive(Clone, Debug)]
pub struct CaptureDispatcher {
    records: Arc<Mutex<Vec<OwnedRecord>>>,
    lines: Arc<Mutex<String>>,
    min_level: Level,
}

impl CaptureDispatcher {
    /// Create a new capture dispatcher
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
            lines: Arc::new(Mutex::new(String::new())),
            min_level: Level::Trace,
        }
    }

    /// Create with a specific level
    pub fn with_level(mut self, level: Level) -> Self {
        self.min_level = level;
        self
    }

    /// All captured records, oldest first
    pub fn records(&self) -> Vec<OwnedRecord> {
        self.records.lock().clone()
    }

    /// Captured records produced by the logger called `name`
    pub fn records_for(&self, name: &str) -> Vec<OwnedRecord> {
        self.records
            .lock()
            .iter()
            .filter(|record| record.logger == name)
            .cloned()
            .collect()
    }

    /// Get all captured output, rendered one record per line
    pub fn logs(&self) -> String {
        self.lines.lock().clone()
    }

    /// Clear captured records
    pub fn clear(&self) {
        self.records.lock().clear();
        self.lines.lock().clear();
    }

    /// Check if logs contain a specific string
    pub fn contains(&self, text: &str) -> bool {
        self.lines.lock().contains(text)
    }
}

impl Default for CaptureDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatcher for CaptureDispatcher {
    fn dispatch(&self, record: Record<'_>) {
        let line = format::render(&record, &TimberConfig::default());
        {
            let mut lines = self.lines.lock();
            lines.push_str(&line);
            lines.push('\n');
        }
        self.records.lock().push(record.to_owned());
    }

    fn flush(&self) {
        // No-op for in-memory dispatcher
    }

    #[inline(always)]
    fn is_enabled(&self, level: Level) -> bool {
        level >= self.min_level && level.is_enabled_static()
    }
}
