//! Concrete logging backends

pub mod bridge;
pub mod console;
pub mod memory;

pub use bridge::{BridgeLogger, BridgeLoggerFactory};
pub use console::{ConsoleLogger, ConsoleLoggerFactory};
pub use memory::{CapturedRecord, MemoryLogger, MemoryLoggerFactory};
