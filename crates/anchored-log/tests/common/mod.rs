#![allow(dead_code, reason = "Each test binary uses a different subset of these helpers.")]

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use anchored_log::{Arg, Level, Logger, OwnedArg};


/// One call received by a [`RecordingLogger`].
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub level:  Level,
    pub format: String,
    pub args:   Vec<OwnedArg>,
}

impl Call {
    pub fn new(level: Level, format: &str, args: Vec<OwnedArg>) -> Self {
        Self {
            level,
            format: format.to_owned(),
            args,
        }
    }
}

/// Records every call it receives, without rendering anything.
#[derive(Debug, Default, Clone)]
pub struct RecordingLogger {
    calls: Arc<Mutex<Vec<Call>>>,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    pub fn num_calls(&self) -> usize {
        self.calls.lock().len()
    }

    fn record(&self, level: Level, format: &str, args: &[Arg<'_>]) {
        let args = args.iter().map(Arg::to_owned_arg).collect();
        self.calls.lock().push(Call::new(level, format, args));
    }
}

impl Logger for RecordingLogger {
    fn errorf(&self, format: &str, args: &[Arg<'_>]) {
        self.record(Level::Error, format, args);
    }

    fn infof(&self, format: &str, args: &[Arg<'_>]) {
        self.record(Level::Info, format, args);
    }

    fn warningf(&self, format: &str, args: &[Arg<'_>]) {
        self.record(Level::Warning, format, args);
    }
}

static GLOBAL_LOGGER_LOCK: Mutex<()> = Mutex::new(());

/// The global logger is shared by every test in a test binary, so tests which touch it must
/// hold this guard.
pub fn lock_global_logger() -> MutexGuard<'static, ()> {
    GLOBAL_LOGGER_LOCK.lock()
}
