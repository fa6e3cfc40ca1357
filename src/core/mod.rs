//! Core facade types: levels, values, the templating engine, and the factory

pub mod error;
pub mod factory;
pub mod format;
pub mod level;
pub mod logger;
pub mod render;
pub mod value;

pub use error::{LogError, Result};
pub use factory::{default_factory, get_logger, set_default_factory, LoggerFactory};
pub use format::{format_message, format_one, format_two, FormattedMessage, DELIM_START, DELIM_STR};
pub use level::LogLevel;
pub use logger::{Logger, LoggerHandle};
pub use render::{render_value, FAILED_CONVERSION};
pub use value::{ErrorValue, LogValue, SharedSeq, ToText};
