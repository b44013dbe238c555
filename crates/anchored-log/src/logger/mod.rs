mod dyn_impls;
mod file_logger;
mod filtered;
mod level;
mod nop_logger;
mod text_logger;
mod tracing_logger;


pub use self::{
    file_logger::{FileLogger, INFO_LOG_FILE, OLD_INFO_LOG_FILE},
    filtered::Filtered,
    level::{Level, LevelFilter},
    nop_logger::NopLogger,
    text_logger::{DEFAULT_PREFIX, DefaultLogger, TextLogger},
    tracing_logger::TracingLogger,
};


use std::fmt::Debug;

use crate::args::Arg;


/// Receives human-readable diagnostic messages about what a database is doing.
///
/// Note that this has nothing to do with write-ahead logs; these messages are purely for
/// diagnostic or debugging purposes, not for database-critical purposes.
///
/// Each severity has its own channel. A message is a printf-style template together with the
/// arguments it refers to, passed through untouched; rendering it (for instance with
/// [`sprintf`]) is up to the `Logger`, which may skip the work entirely for messages it drops.
///
/// Logging never fails from the caller's point of view. A `Logger` whose sink fails must swallow
/// the error.
///
/// Writes to a `Logger` are not wrapped in, for instance, a `BufWriter`; any buffering must be
/// performed by the `Logger` itself.
///
/// [`sprintf`]: crate::sprintf
pub trait Logger: Debug + Send + Sync {
    fn errorf(&self, format: &str, args: &[Arg<'_>]);

    fn infof(&self, format: &str, args: &[Arg<'_>]);

    fn warningf(&self, format: &str, args: &[Arg<'_>]);

    /// Log to the channel of the given `level`.
    fn log(&self, level: Level, format: &str, args: &[Arg<'_>]) {
        match level {
            Level::Error   => self.errorf(format, args),
            Level::Warning => self.warningf(format, args),
            Level::Info    => self.infof(format, args),
        }
    }
}
