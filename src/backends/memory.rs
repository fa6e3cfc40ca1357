//! In-memory capturing backend
//!
//! Records everything it receives; used by the test suites and useful for
//! embedders that want to assert on logging output. Messages arrive fully
//! expanded, never containing placeholder tokens.

use crate::core::{ErrorValue, LogLevel, Logger, LoggerFactory};
use parking_lot::Mutex;
use std::sync::Arc;

/// One captured logging call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedRecord {
    pub level: LogLevel,
    pub message: String,
    /// Rendered cause text, when the call carried one
    pub cause: Option<String>,
}

#[derive(Clone)]
pub struct MemoryLogger {
    name: String,
    min_level: LogLevel,
    records: Arc<Mutex<Vec<CapturedRecord>>>,
}

impl MemoryLogger {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_min_level(name, LogLevel::Trace)
    }

    pub fn with_min_level(name: impl Into<String>, min_level: LogLevel) -> Self {
        Self {
            name: name.into(),
            min_level,
            records: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Snapshot of the captured records
    pub fn records(&self) -> Vec<CapturedRecord> {
        self.records.lock().clone()
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl Logger for MemoryLogger {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    fn log(&self, level: LogLevel, message: &str) {
        if !self.is_enabled(level) {
            return;
        }
        self.records.lock().push(CapturedRecord {
            level,
            message: message.to_string(),
            cause: None,
        });
    }

    fn log_cause(&self, level: LogLevel, message: &str, cause: &ErrorValue) {
        if !self.is_enabled(level) {
            return;
        }
        self.records.lock().push(CapturedRecord {
            level,
            message: message.to_string(),
            cause: Some(cause.to_string()),
        });
    }
}

/// Factory handing out clones of shared memory loggers, one per name
pub struct MemoryLoggerFactory {
    loggers: Mutex<Vec<MemoryLogger>>,
    min_level: LogLevel,
}

impl MemoryLoggerFactory {
    pub fn new() -> Self {
        Self {
            loggers: Mutex::new(Vec::new()),
            min_level: LogLevel::Trace,
        }
    }

    #[must_use]
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// The shared logger for `name`, creating it on first use
    pub fn logger(&self, name: &str) -> MemoryLogger {
        let mut loggers = self.loggers.lock();
        if let Some(logger) = loggers.iter().find(|l| l.name == name) {
            return logger.clone();
        }
        let logger = MemoryLogger::with_min_level(name, self.min_level);
        loggers.push(logger.clone());
        logger
    }
}

impl Default for MemoryLoggerFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerFactory for MemoryLoggerFactory {
    fn new_logger(&self, name: &str) -> Arc<dyn Logger> {
        Arc::new(self.logger(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captures_in_order() {
        let logger = MemoryLogger::new("mem");
        logger.info("first");
        logger.error("second");

        let records = logger.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].message, "first");
        assert_eq!(records[1].level, LogLevel::Error);
    }

    #[test]
    fn test_min_level_filters() {
        let logger = MemoryLogger::with_min_level("mem", LogLevel::Error);
        logger.info("dropped");
        logger.error("kept");
        assert_eq!(logger.records().len(), 1);
    }

    #[test]
    fn test_clear_resets_captured_records() {
        let logger = MemoryLogger::new("mem");
        logger.info("before");
        logger.clear();
        assert!(logger.records().is_empty());

        logger.info("after");
        let records = logger.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].message, "after");
    }

    #[test]
    fn test_factory_shares_logger_by_name() {
        let factory = MemoryLoggerFactory::new();
        factory.new_logger("a").info("via handle");

        let direct = factory.logger("a");
        assert_eq!(direct.records().len(), 1);
        assert!(factory.logger("b").records().is_empty());
    }
}
