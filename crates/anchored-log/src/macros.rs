/// Log an error message.
///
/// `errorf!("format", args...)` logs to the global logger, and
/// `errorf!(target, "format", args...)` logs to `target`, which may be any [`Logger`]
/// (including [`Options`] and [`LogHandle`]). Each argument is passed by reference through
/// [`AsArg`]; nothing is rendered unless the receiving logger renders it.
///
/// ```
/// use anchored_log::{Options, NopLogger, errorf};
///
/// errorf!("could not open %s: %v", "000005.ldb", "permission denied");
///
/// let options = Options::new().with_logger(NopLogger);
/// errorf!(options, "silenced %d", 1);
/// ```
///
/// [`Logger`]: crate::Logger
/// [`Options`]: crate::Options
/// [`LogHandle`]: crate::LogHandle
/// [`AsArg`]: crate::AsArg
#[macro_export]
macro_rules! errorf {
    ($format:literal $(, $arg:expr)* $(,)?) => {
        $crate::errorf($format, &[$($crate::AsArg::as_arg(&$arg)),*])
    };
    ($target:expr, $format:literal $(, $arg:expr)* $(,)?) => {
        $crate::Logger::errorf(&$target, $format, &[$($crate::AsArg::as_arg(&$arg)),*])
    };
}

/// Log an informational message. See [`errorf!`] for the accepted forms.
#[macro_export]
macro_rules! infof {
    ($format:literal $(, $arg:expr)* $(,)?) => {
        $crate::infof($format, &[$($crate::AsArg::as_arg(&$arg)),*])
    };
    ($target:expr, $format:literal $(, $arg:expr)* $(,)?) => {
        $crate::Logger::infof(&$target, $format, &[$($crate::AsArg::as_arg(&$arg)),*])
    };
}

/// Log a warning message. See [`errorf!`] for the accepted forms.
#[macro_export]
macro_rules! warningf {
    ($format:literal $(, $arg:expr)* $(,)?) => {
        $crate::warningf($format, &[$($crate::AsArg::as_arg(&$arg)),*])
    };
    ($target:expr, $format:literal $(, $arg:expr)* $(,)?) => {
        $crate::Logger::warningf(&$target, $format, &[$($crate::AsArg::as_arg(&$arg)),*])
    };
}
