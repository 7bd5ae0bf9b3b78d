//! Test support utilities
//!
//! This module provides a root logger that captures every forwarded record
//! in memory. It's only available when the `test-support` feature is enabled.

use crate::interpolate::interpolate;
use crate::{LevelSet, Record, Result, RootLogger};
use std::sync::{Arc, Mutex};

/// A root logger that captures all records in memory for testing
#[derive(Clone)]
pub struct CaptureLogger {
    records: Arc<Mutex<Vec<Record>>>,
    closed: Arc<Mutex<Vec<Option<String>>>>,
    levels: Option<Arc<LevelSet>>,
}

impl CaptureLogger {
    /// Create a new capture logger declaring the npm levels
    pub fn new() -> Self {
        Self::with_levels(LevelSet::npm())
    }

    /// Create with a specific level set
    pub fn with_levels(levels: LevelSet) -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
            closed: Arc::new(Mutex::new(Vec::new())),
            levels: Some(Arc::new(levels)),
        }
    }

    /// Create a logger that declares no levels at all
    pub fn without_levels() -> Self {
        Self {
            levels: None,
            ..Self::new()
        }
    }

    /// Get all captured records
    pub fn records(&self) -> Vec<Record> {
        self.records.lock().unwrap().clone()
    }

    /// The most recent record, if any
    pub fn last(&self) -> Option<Record> {
        self.records.lock().unwrap().last().cloned()
    }

    /// Number of captured records
    pub fn count(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    /// Captured messages with placeholders rendered
    pub fn messages(&self) -> Vec<String> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .map(|record| interpolate(&record.name, &record.args))
            .collect()
    }

    /// Clear captured records
    pub fn clear(&self) {
        self.records.lock().unwrap().clear();
    }

    /// Check if any rendered message contains a specific string
    pub fn contains(&self, text: &str) -> bool {
        self.messages().iter().any(|message| message.contains(text))
    }

    /// Ids passed to `close`, in call order
    pub fn closed(&self) -> Vec<Option<String>> {
        self.closed.lock().unwrap().clone()
    }
}

impl Default for CaptureLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl RootLogger for CaptureLogger {
    fn log(&self, record: Record) -> Result<()> {
        record.complete(Ok(()));
        if let Ok(mut records) = self.records.lock() {
            records.push(record);
        }
        Ok(())
    }

    fn levels(&self) -> Option<Arc<LevelSet>> {
        self.levels.clone()
    }

    fn close(&self, id: Option<&str>) -> Result<()> {
        if let Ok(mut closed) = self.closed.lock() {
            closed.push(id.map(ToOwned::to_owned));
        }
        Ok(())
    }
}
