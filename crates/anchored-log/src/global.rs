use std::{ptr, sync::{Arc, LazyLock}};

use parking_lot::RwLock;

use crate::args::Arg;
use crate::logger::{DefaultLogger, Logger};


static DEFAULT_LOGGER: LazyLock<Arc<DefaultLogger>>
    = LazyLock::new(|| Arc::new(DefaultLogger::stderr()));

/// Starts out as the default logger, so there is never a moment at which no logger is installed.
///
/// Readers only hold the lock long enough to clone the `Arc`, so a `Logger` may itself call
/// [`set_logger`] without deadlocking.
static GLOBAL_LOGGER: LazyLock<RwLock<Arc<dyn Logger>>>
    = LazyLock::new(|| RwLock::new(shared_default_logger()));

fn shared_default_logger() -> Arc<dyn Logger> {
    let default: Arc<DefaultLogger> = Arc::clone(&*DEFAULT_LOGGER);
    default
}

/// The logger which is installed globally until [`set_logger`] is called, and which
/// [`use_default_logger`] reinstalls.
#[must_use]
pub fn default_logger() -> &'static DefaultLogger {
    &DEFAULT_LOGGER
}

/// Replace the global logger, returning the logger it replaces.
///
/// Any [`Logger`] is accepted, including [`NopLogger`] to silence logging.
///
/// This is intended to be called once, while a program is starting up. Calling it while other
/// threads are logging is sound, but which logger receives their messages is then unspecified.
///
/// [`NopLogger`]: crate::NopLogger
pub fn set_logger<L: Logger + 'static>(logger: L) -> Arc<dyn Logger> {
    set_shared_logger(Arc::new(logger))
}

/// Replace the global logger with a logger that may be shared with other owners, returning the
/// logger it replaces.
///
/// See [`set_logger`].
pub fn set_shared_logger(logger: Arc<dyn Logger>) -> Arc<dyn Logger> {
    let mut global = GLOBAL_LOGGER.write();
    std::mem::replace(&mut *global, logger)
}

/// Reinstall the default logger as the global logger.
///
/// Calling this more than once in a row has no further effect.
pub fn use_default_logger() {
    drop(set_shared_logger(shared_default_logger()));
}

/// Whether the global logger is currently the [default logger](default_logger).
#[must_use]
pub fn uses_default_logger() -> bool {
    let current = global_logger();
    ptr::addr_eq(Arc::as_ptr(&current), Arc::as_ptr(&*DEFAULT_LOGGER))
}

/// A snapshot of the global logger.
///
/// The returned logger is not affected by later calls to [`set_logger`].
#[must_use]
pub fn global_logger() -> Arc<dyn Logger> {
    Arc::clone(&*GLOBAL_LOGGER.read())
}

/// Log an error message to the global logger.
pub fn errorf(format: &str, args: &[Arg<'_>]) {
    global_logger().errorf(format, args);
}

/// Log an informational message to the global logger.
pub fn infof(format: &str, args: &[Arg<'_>]) {
    global_logger().infof(format, args);
}

/// Log a warning message to the global logger.
pub fn warningf(format: &str, args: &[Arg<'_>]) {
    global_logger().warningf(format, args);
}
