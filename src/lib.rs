//! # Logfacade
//!
//! A pluggable logging facade with slf4j-style message templating and
//! swappable backends.
//!
//! ## Features
//!
//! - **Message templating**: `{}` placeholders with `\{}` escapes, recursive
//!   cycle-safe rendering of nested sequences, trailing-cause extraction
//! - **Pluggable backends**: a process-wide factory selects the backend once
//!   at startup and can be replaced at runtime
//! - **Thread safe**: the templating engine is pure; backend selection is a
//!   single atomically-published reference

pub mod backends;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::backends::{ConsoleLoggerFactory, MemoryLogger, MemoryLoggerFactory};
    pub use crate::core::{
        default_factory, format_message, get_logger, render_value, set_default_factory, ErrorValue,
        FormattedMessage, LogError, LogLevel, LogValue, Logger, LoggerFactory, LoggerHandle,
        Result, SharedSeq, ToText,
    };
}

pub use crate::backends::{
    BridgeLogger, BridgeLoggerFactory, CapturedRecord, ConsoleLogger, ConsoleLoggerFactory,
    MemoryLogger, MemoryLoggerFactory,
};
pub use crate::core::{
    default_factory, format_message, format_one, format_two, get_logger, render_value,
    set_default_factory, ErrorValue, FormattedMessage, LogError, LogLevel, LogValue, Logger,
    LoggerFactory, LoggerHandle, Result, SharedSeq, ToText, DELIM_START, DELIM_STR,
    FAILED_CONVERSION,
};
