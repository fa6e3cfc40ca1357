//! Backend factory selection
//!
//! A process-wide factory slot decides which concrete backend serves new
//! loggers. The slot is lazily filled at first access: the `log`-crate bridge
//! is preferred, and if it is unavailable the always-available console
//! backend is used instead. The slot can be replaced at runtime (for tests
//! or embedding); readers clone the published `Arc` and never hold the lock
//! across logging calls.

use super::logger::Logger;
use crate::backends::bridge::BridgeLoggerFactory;
use crate::backends::console::ConsoleLoggerFactory;
use parking_lot::RwLock;
use std::sync::Arc;

pub trait LoggerFactory: Send + Sync {
    /// Construct (or look up) a logger for a logical name
    fn new_logger(&self, name: &str) -> Arc<dyn Logger>;
}

static DEFAULT_FACTORY: RwLock<Option<Arc<dyn LoggerFactory>>> = RwLock::new(None);

/// Build the initial factory, falling back deterministically.
///
/// Failure to construct the preferred backend is never surfaced to callers.
fn build_default_factory() -> (Arc<dyn LoggerFactory>, &'static str) {
    match BridgeLoggerFactory::probe() {
        Ok(factory) => (
            Arc::new(factory),
            "using the log crate dispatcher as the default logging backend",
        ),
        Err(_) => (
            Arc::new(ConsoleLoggerFactory::new()),
            "using the console backend as the default logging backend",
        ),
    }
}

/// The currently active factory, initializing it on first access.
///
/// The backend is built and the announce line emitted outside the slot lock:
/// the announcement goes through the backend itself, which may re-enter
/// lookups (a host `log` dispatcher calling back into the facade must not
/// deadlock first use). The slot is published before announcing so a
/// re-entrant lookup observes the chosen factory instead of building again.
pub fn default_factory() -> Arc<dyn LoggerFactory> {
    if let Some(factory) = DEFAULT_FACTORY.read().as_ref() {
        return Arc::clone(factory);
    }
    let (candidate, announcement) = build_default_factory();
    let (factory, installed) = {
        let mut slot = DEFAULT_FACTORY.write();
        match slot.as_ref() {
            Some(existing) => (Arc::clone(existing), false),
            None => {
                *slot = Some(Arc::clone(&candidate));
                (candidate, true)
            }
        }
    };
    if installed {
        factory.new_logger(module_path!()).debug(announcement);
    }
    factory
}

/// Replace the active factory; subsequent lookups observe the new one
pub fn set_default_factory(factory: Arc<dyn LoggerFactory>) {
    *DEFAULT_FACTORY.write() = Some(factory);
}

/// Look up a logger for `name` through the active factory
pub fn get_logger(name: &str) -> Arc<dyn Logger> {
    default_factory().new_logger(name)
}
