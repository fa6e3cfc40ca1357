//! Bridge backend forwarding to the `log` crate's global dispatcher
//!
//! Preferred when the host application already routes the `log` facade
//! somewhere; probing fails when the global dispatcher is absent or disabled
//! so that factory initialization can fall back to the console backend.

use crate::core::{ErrorValue, LogError, LogLevel, Logger, LoggerFactory, Result};
use std::sync::Arc;

use super::console::render_cause_chain;

fn to_log_level(level: LogLevel) -> log::Level {
    match level {
        LogLevel::Trace => log::Level::Trace,
        LogLevel::Debug => log::Level::Debug,
        LogLevel::Info => log::Level::Info,
        LogLevel::Warn => log::Level::Warn,
        LogLevel::Error => log::Level::Error,
    }
}

pub struct BridgeLogger {
    name: String,
}

impl BridgeLogger {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    fn forward(&self, level: LogLevel, message: &str) {
        log::logger().log(
            &log::Record::builder()
                .args(format_args!("{message}"))
                .level(to_log_level(level))
                .target(&self.name)
                .build(),
        );
    }
}

impl Logger for BridgeLogger {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_enabled(&self, level: LogLevel) -> bool {
        log::logger().enabled(
            &log::Metadata::builder()
                .level(to_log_level(level))
                .target(&self.name)
                .build(),
        )
    }

    fn log(&self, level: LogLevel, message: &str) {
        self.forward(level, message);
    }

    fn log_cause(&self, level: LogLevel, message: &str, cause: &ErrorValue) {
        let mut full = message.to_string();
        full.push_str(&render_cause_chain(cause));
        self.forward(level, &full);
    }
}

pub struct BridgeLoggerFactory;

impl BridgeLoggerFactory {
    /// Probe the global dispatcher; unavailable when nothing is installed
    /// (the default no-op dispatcher reports a max level of `Off`).
    pub fn probe() -> Result<Self> {
        if log::max_level() == log::LevelFilter::Off {
            return Err(LogError::backend_unavailable(
                "bridge",
                "global log dispatcher is absent or disabled",
            ));
        }
        Ok(Self)
    }
}

impl LoggerFactory for BridgeLoggerFactory {
    fn new_logger(&self, name: &str) -> Arc<dyn Logger> {
        Arc::new(BridgeLogger::new(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_mapping_is_total() {
        for level in LogLevel::all() {
            assert_eq!(to_log_level(level).as_str().to_uppercase(), level.to_str());
        }
    }

    #[test]
    fn test_probe_fails_without_dispatcher() {
        // No global dispatcher is installed in the test binary, so the max
        // level stays at its default of Off.
        assert!(BridgeLoggerFactory::probe().is_err());
    }

    #[test]
    fn test_logger_carries_name() {
        let logger = BridgeLoggerFactory.new_logger("bridge::test");
        assert_eq!(logger.name(), "bridge::test");
    }
}
