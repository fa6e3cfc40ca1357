//! Console backend, the always-available fallback
//!
//! Writes `[timestamp] [LEVEL] name - message` lines, routing `Error` to
//! stderr and everything else to stdout. A cause is emitted as a `Caused by:`
//! chain walking the error's sources.

use crate::core::{ErrorValue, LogLevel, Logger, LoggerFactory};
use chrono::Utc;
use colored::Colorize;
use std::sync::Arc;

/// Environment variable consulted for the default minimum level
pub const LEVEL_ENV_VAR: &str = "LOGFACADE_LEVEL";

pub struct ConsoleLogger {
    name: String,
    min_level: LogLevel,
    use_colors: bool,
}

impl ConsoleLogger {
    pub fn new(name: impl Into<String>, min_level: LogLevel, use_colors: bool) -> Self {
        Self {
            name: name.into(),
            min_level,
            use_colors,
        }
    }

    fn format_line(&self, level: LogLevel, message: &str) -> String {
        let level_str = if self.use_colors {
            format!("{:5}", level.to_str())
                .color(level.color_code())
                .to_string()
        } else {
            format!("{:5}", level.to_str())
        };

        let timestamp = Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ");
        format!("[{}] [{}] {} - {}", timestamp, level_str, self.name, message)
    }

    fn emit(&self, level: LogLevel, line: &str) {
        match level {
            LogLevel::Error => eprintln!("{}", line),
            _ => println!("{}", line),
        }
    }
}

impl Logger for ConsoleLogger {
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
        self.emit(level, &self.format_line(level, message));
    }

    fn log_cause(&self, level: LogLevel, message: &str, cause: &ErrorValue) {
        if !self.is_enabled(level) {
            return;
        }
        let mut line = self.format_line(level, message);
        line.push_str(&render_cause_chain(cause));
        self.emit(level, &line);
    }
}

/// `Caused by:` chain for an error and its sources
pub(crate) fn render_cause_chain(cause: &ErrorValue) -> String {
    let mut out = format!("\nCaused by: {}", cause);
    let mut source = cause.source();
    while let Some(err) = source {
        out.push_str(&format!("\nCaused by: {}", err));
        source = err.source();
    }
    out
}

pub struct ConsoleLoggerFactory {
    min_level: LogLevel,
    use_colors: bool,
}

impl ConsoleLoggerFactory {
    /// Default minimum level comes from `LOGFACADE_LEVEL` when set and valid
    pub fn new() -> Self {
        let min_level = std::env::var(LEVEL_ENV_VAR)
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or_default();
        Self {
            min_level,
            use_colors: true,
        }
    }

    #[must_use]
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }
}

impl Default for ConsoleLoggerFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerFactory for ConsoleLoggerFactory {
    fn new_logger(&self, name: &str) -> Arc<dyn Logger> {
        Arc::new(ConsoleLogger::new(name, self.min_level, self.use_colors))
    }
}
