//! Logging macros for ergonomic call sites
//!
//! Extra arguments are converted with `LogValue::from` and expanded by the
//! message-templating engine, so `{}` placeholders, `\{}` escapes and
//! trailing-cause extraction all behave exactly as in the facade methods.
//!
//! # Examples
//!
//! ```
//! use logfacade::prelude::*;
//! use logfacade::info;
//!
//! let logger = LoggerHandle::named("app");
//!
//! // Message only
//! info!(logger, "server started");
//!
//! // With template arguments
//! let port = 8080u32;
//! info!(logger, "listening on port {}", port);
//! ```

/// Log a message at an explicit level.
///
/// # Examples
///
/// ```
/// # use logfacade::prelude::*;
/// # let logger = LoggerHandle::named("app");
/// use logfacade::log;
/// log!(logger, LogLevel::Info, "simple message");
/// log!(logger, LogLevel::Error, "error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $pattern:expr) => {
        $logger.log($level, $pattern)
    };
    ($logger:expr, $level:expr, $pattern:expr, $($arg:expr),+ $(,)?) => {
        $logger.log_fmt($level, $pattern, vec![$($crate::LogValue::from($arg)),+])
    };
}

/// Log a trace-level message.
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}
