//! Logger facade
//!
//! [`Logger`] is the contract every backend implements: the per-level
//! enabled-check and the two primitive logging operations, message-only and
//! message-with-cause. The template forms are provided methods that expand
//! the pattern through the formatter before the backend ever sees it, so a
//! backend only ever receives final text.

use super::factory::get_logger;
use super::format::format_message;
use super::level::LogLevel;
use super::value::{ErrorValue, LogValue};
use serde::de::{Deserializer, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

pub trait Logger: Send + Sync {
    /// Logical name this logger was registered under
    fn name(&self) -> &str;

    fn is_enabled(&self, level: LogLevel) -> bool;

    fn log(&self, level: LogLevel, message: &str);

    fn log_cause(&self, level: LogLevel, message: &str, cause: &ErrorValue);

    /// Expand a pattern against arguments and log the result.
    ///
    /// A trailing error-kind argument left unconsumed by the placeholders is
    /// routed as the cause.
    fn log_fmt(&self, level: LogLevel, pattern: &str, args: Vec<LogValue>) {
        if !self.is_enabled(level) {
            return;
        }
        let formatted = format_message(Some(pattern), Some(args));
        let message = formatted.message.as_deref().unwrap_or(pattern);
        match &formatted.cause {
            Some(cause) => self.log_cause(level, message, cause),
            None => self.log(level, message),
        }
    }

    #[inline]
    fn trace(&self, message: &str) {
        self.log(LogLevel::Trace, message);
    }

    #[inline]
    fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message);
    }

    #[inline]
    fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    #[inline]
    fn trace_cause(&self, message: &str, cause: &ErrorValue) {
        self.log_cause(LogLevel::Trace, message, cause);
    }

    #[inline]
    fn debug_cause(&self, message: &str, cause: &ErrorValue) {
        self.log_cause(LogLevel::Debug, message, cause);
    }

    #[inline]
    fn info_cause(&self, message: &str, cause: &ErrorValue) {
        self.log_cause(LogLevel::Info, message, cause);
    }

    #[inline]
    fn warn_cause(&self, message: &str, cause: &ErrorValue) {
        self.log_cause(LogLevel::Warn, message, cause);
    }

    #[inline]
    fn error_cause(&self, message: &str, cause: &ErrorValue) {
        self.log_cause(LogLevel::Error, message, cause);
    }

    #[inline]
    fn trace_fmt(&self, pattern: &str, args: Vec<LogValue>) {
        self.log_fmt(LogLevel::Trace, pattern, args);
    }

    #[inline]
    fn debug_fmt(&self, pattern: &str, args: Vec<LogValue>) {
        self.log_fmt(LogLevel::Debug, pattern, args);
    }

    #[inline]
    fn info_fmt(&self, pattern: &str, args: Vec<LogValue>) {
        self.log_fmt(LogLevel::Info, pattern, args);
    }

    #[inline]
    fn warn_fmt(&self, pattern: &str, args: Vec<LogValue>) {
        self.log_fmt(LogLevel::Warn, pattern, args);
    }

    #[inline]
    fn error_fmt(&self, pattern: &str, args: Vec<LogValue>) {
        self.log_fmt(LogLevel::Error, pattern, args);
    }
}

/// Cheap cloneable handle to a logger resolved through the active factory.
///
/// Handles are stable identifiers, not serialized state: serializing writes
/// only the logical name, and deserializing resolves a live logger for that
/// name via the factory active at reconstitution time.
#[derive(Clone)]
pub struct LoggerHandle {
    inner: Arc<dyn Logger>,
}

impl LoggerHandle {
    /// Resolve a handle for `name` through the active factory
    pub fn named(name: &str) -> Self {
        Self {
            inner: get_logger(name),
        }
    }

    /// Wrap an existing logger
    pub fn from_logger(logger: Arc<dyn Logger>) -> Self {
        Self { inner: logger }
    }
}

impl Deref for LoggerHandle {
    type Target = dyn Logger;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl fmt::Debug for LoggerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LoggerHandle({})", self.inner.name())
    }
}

impl Serialize for LoggerHandle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.inner.name())
    }
}

impl<'de> Deserialize<'de> for LoggerHandle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct NameVisitor;

        impl<'de> Visitor<'de> for NameVisitor {
            type Value = LoggerHandle;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a logger name")
            }

            fn visit_str<E: serde::de::Error>(self, name: &str) -> Result<Self::Value, E> {
                Ok(LoggerHandle::named(name))
            }
        }

        deserializer.deserialize_str(NameVisitor)
    }
}
