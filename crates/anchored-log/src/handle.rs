use std::sync::Arc;

use crate::{args::Arg, global};
use crate::logger::{Level, Logger};


/// A cheaply cloneable route to a logger, for threading through the components of a database.
///
/// `LogHandle::Global` resolves the global logger at the time of each call, so it follows
/// later calls to [`set_logger`]. `LogHandle::Scoped` always uses its own logger.
///
/// [`set_logger`]: crate::set_logger
#[derive(Default, Debug, Clone)]
pub enum LogHandle {
    #[default]
    Global,
    Scoped(Arc<dyn Logger>),
}

impl LogHandle {
    #[inline]
    #[must_use]
    pub fn scoped<L: Logger + 'static>(logger: L) -> Self {
        Self::Scoped(Arc::new(logger))
    }

    /// The logger which a call made right now would reach.
    #[must_use]
    pub fn resolve(&self) -> Arc<dyn Logger> {
        match self {
            Self::Global         => global::global_logger(),
            Self::Scoped(logger) => Arc::clone(logger),
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_global(&self) -> bool {
        matches!(self, Self::Global)
    }
}

impl From<Option<Arc<dyn Logger>>> for LogHandle {
    #[inline]
    fn from(logger: Option<Arc<dyn Logger>>) -> Self {
        logger.map_or(Self::Global, Self::Scoped)
    }
}

impl Logger for LogHandle {
    fn errorf(&self, format: &str, args: &[Arg<'_>]) {
        match self {
            Self::Global         => global::errorf(format, args),
            Self::Scoped(logger) => logger.errorf(format, args),
        }
    }

    fn infof(&self, format: &str, args: &[Arg<'_>]) {
        match self {
            Self::Global         => global::infof(format, args),
            Self::Scoped(logger) => logger.infof(format, args),
        }
    }

    fn warningf(&self, format: &str, args: &[Arg<'_>]) {
        match self {
            Self::Global         => global::warningf(format, args),
            Self::Scoped(logger) => logger.warningf(format, args),
        }
    }

    fn log(&self, level: Level, format: &str, args: &[Arg<'_>]) {
        match self {
            Self::Global         => global::global_logger().log(level, format, args),
            Self::Scoped(logger) => logger.log(level, format, args),
        }
    }
}
