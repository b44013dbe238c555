//! Diagnostic logging for anchored databases, without tying them to one logging implementation.
//!
//! Messages are printf-style templates with [`Arg`]uments, sent through one of three severity
//! channels of a [`Logger`]: [`errorf`], [`warningf`] and [`infof`] (or the macros of the same
//! names).
//!
//! By default, messages go to a process-wide logger, which starts out as a [`DefaultLogger`]
//! writing timestamped lines to standard error:
//!
//! ```text
//! anchored 2025/06/01 12:00:00 INFO: opened 4 tables
//! ```
//!
//! [`set_logger`] replaces the global logger (for instance, with [`NopLogger`] to silence
//! output, or [`TracingLogger`] to forward messages to `tracing`), and [`use_default_logger`]
//! restores the default. A database's [`Options`] may also carry its own logger, which then
//! receives all of that database's messages instead of the global logger.
//!
//! ```
//! use anchored_log::{Options, TextLogger, infof, warningf};
//!
//! infof!("job %s done in %dms", "build", 42);
//!
//! let options = Options::new()
//!     .with_logger(TextLogger::new("db-1 ", std::io::stdout()));
//! warningf!(options, "retrying compaction of level %d", 2);
//! ```

mod args;
mod error;
mod global;
mod handle;
mod macros;
mod options;

pub mod logger;
pub mod printf;


pub use self::{
    args::{Arg, AsArg, DebugText, OwnedArg},
    error::LogFileError,
    global::{
        default_logger, errorf, global_logger, infof, set_logger, set_shared_logger,
        use_default_logger, uses_default_logger, warningf,
    },
    handle::LogHandle,
    logger::{
        DefaultLogger, FileLogger, Filtered, Level, LevelFilter, Logger,
        NopLogger, TextLogger, TracingLogger,
    },
    options::Options,
    printf::sprintf,
};
