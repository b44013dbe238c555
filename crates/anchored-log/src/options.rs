use std::sync::Arc;

use crate::{args::Arg, global, handle::LogHandle};
use crate::logger::Logger;


/// The logging settings of one database instance.
///
/// If `logger` is `Some`, every message logged through these options goes to that logger, and
/// the global logger never sees it. Otherwise, messages go to whichever logger is globally
/// installed at the time of the call.
///
/// This lets several databases in one process each send diagnostics somewhere different, while
/// sharing the global logger when they don't care.
#[derive(Default, Debug, Clone)]
pub struct Options {
    pub logger: Option<Arc<dyn Logger>>,
}

impl Options {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_logger<L: Logger + 'static>(self, logger: L) -> Self {
        self.with_shared_logger(Arc::new(logger))
    }

    #[must_use]
    pub fn with_shared_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = Some(logger);
        self
    }

    /// A handle which routes messages the same way these options do, for components which
    /// are constructed from the options but do not keep them.
    #[must_use]
    pub fn log_handle(&self) -> LogHandle {
        LogHandle::from(self.logger.clone())
    }

    /// Log an error message to the logger in these options, or to the global logger if there is
    /// none.
    pub fn errorf(&self, format: &str, args: &[Arg<'_>]) {
        if let Some(logger) = &self.logger {
            logger.errorf(format, args);
        } else {
            global::errorf(format, args);
        }
    }

    /// Like [`Options::errorf`], but for informational messages.
    pub fn infof(&self, format: &str, args: &[Arg<'_>]) {
        if let Some(logger) = &self.logger {
            logger.infof(format, args);
        } else {
            global::infof(format, args);
        }
    }

    /// Like [`Options::errorf`], but for warning messages.
    pub fn warningf(&self, format: &str, args: &[Arg<'_>]) {
        if let Some(logger) = &self.logger {
            logger.warningf(format, args);
        } else {
            global::warningf(format, args);
        }
    }
}

impl Logger for Options {
    #[inline]
    fn errorf(&self, format: &str, args: &[Arg<'_>]) {
        Self::errorf(self, format, args);
    }

    #[inline]
    fn infof(&self, format: &str, args: &[Arg<'_>]) {
        Self::infof(self, format, args);
    }

    #[inline]
    fn warningf(&self, format: &str, args: &[Arg<'_>]) {
        Self::warningf(self, format, args);
    }
}


#[cfg(test)]
mod tests {
    use crate::args::AsArg as _;
    use crate::logger::TextLogger;
    use super::*;


    #[test]
    fn override_receives_messages() {
        let sink = Arc::new(TextLogger::new("", Vec::new()).without_timestamps());
        let options = Options::new().with_shared_logger(Arc::clone(&sink) as Arc<dyn Logger>);

        options.errorf("level %d corrupt", &[3_u8.as_arg()]);
        options.warningf("slow", &[]);
        options.infof("done", &[]);

        let written = sink.with_sink(|bytes| String::from_utf8(bytes.clone()).unwrap());
        assert_eq!(written, "ERROR: level 3 corrupt\nWARNING: slow\nINFO: done\n");
    }

    #[test]
    fn handle_follows_override() {
        assert!(Options::new().log_handle().is_global());
        assert!(!Options::new().with_logger(crate::NopLogger).log_handle().is_global());
    }
}
