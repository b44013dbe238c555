use tracing::Level;

use crate::{args::Arg, printf::sprintf};
use super::Logger;


/// Forwards messages to [`tracing`], as events at the `ERROR`, `WARN` and `INFO` levels.
///
/// Messages are only rendered if a subscriber is interested in them.
#[derive(Default, Debug, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn errorf(&self, format: &str, args: &[Arg<'_>]) {
        if tracing::enabled!(Level::ERROR) {
            let msg = sprintf(format, args);
            tracing::event!(Level::ERROR, "{msg}");
        }
    }

    fn infof(&self, format: &str, args: &[Arg<'_>]) {
        if tracing::enabled!(Level::INFO) {
            let msg = sprintf(format, args);
            tracing::event!(Level::INFO, "{msg}");
        }
    }

    fn warningf(&self, format: &str, args: &[Arg<'_>]) {
        if tracing::enabled!(Level::WARN) {
            let msg = sprintf(format, args);
            tracing::event!(Level::WARN, "{msg}");
        }
    }
}


#[cfg(test)]
mod tests {
    use crate::args::AsArg as _;
    use super::*;


    /// Without a subscriber installed, every event is disabled, and nothing should break.
    #[test]
    fn logs_without_subscriber() {
        let logger = TracingLogger;
        logger.errorf("error %d", &[1_i32.as_arg()]);
        logger.warningf("warning %s", &["x".as_arg()]);
        logger.infof("info %v", &[true.as_arg()]);
        logger.log(crate::Level::Info, "info", &[]);
    }
}
