use std::fmt::{Display, Formatter, Result as FmtResult};

use tracing::level_filters::LevelFilter as TracingLevelFilter;


/// The severity of a diagnostic message.
///
/// A greater `Level`, with respect to [`Ord`], indicates a more verbose (less important) message.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum Level {
    /// A very serious error.
    Error,
    /// A hazardous situation.
    Warning,
    /// Useful information.
    Info,
}

impl Level {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error   => "ERROR",
            Self::Warning => "WARNING",
            Self::Info    => "INFO",
        }
    }

    /// The literal tag which text loggers put in front of a message of this level.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Error   => "ERROR: ",
            Self::Warning => "WARNING: ",
            Self::Info    => "INFO: ",
        }
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl From<Level> for tracing::Level {
    fn from(level: Level) -> Self {
        match level {
            Level::Error   => Self::ERROR,
            Level::Warning => Self::WARN,
            Level::Info    => Self::INFO,
        }
    }
}

/// The most verbose [`Level`] of message to let through.
///
/// A greater `LevelFilter`, with respect to [`Ord`], indicates a greater verbosity level.
#[derive(Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum LevelFilter {
    /// Let nothing through.
    Off,
    /// Only messages which describe very serious errors.
    Error,
    /// Messages which describe hazardous situations or very serious errors.
    Warning,
    /// Messages which describe useful information, hazardous situations,
    /// or very serious errors.
    #[default]
    Info,
}

impl LevelFilter {
    #[inline]
    #[must_use]
    pub fn allows(self, level: Level) -> bool {
        Self::from(level) <= self
    }
}

impl From<Level> for LevelFilter {
    fn from(level: Level) -> Self {
        match level {
            Level::Error   => Self::Error,
            Level::Warning => Self::Warning,
            Level::Info    => Self::Info,
        }
    }
}

impl From<LevelFilter> for TracingLevelFilter {
    fn from(level_filter: LevelFilter) -> Self {
        match level_filter {
            LevelFilter::Off     => Self::OFF,
            LevelFilter::Error   => Self::ERROR,
            LevelFilter::Warning => Self::WARN,
            LevelFilter::Info    => Self::INFO,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;


    #[test]
    fn filters_let_through_less_verbose_levels() {
        assert!(LevelFilter::Info.allows(Level::Info));
        assert!(LevelFilter::Info.allows(Level::Error));
        assert!(LevelFilter::Warning.allows(Level::Error));
        assert!(LevelFilter::Warning.allows(Level::Warning));
        assert!(!LevelFilter::Warning.allows(Level::Info));
        assert!(!LevelFilter::Error.allows(Level::Warning));

        for level in [Level::Error, Level::Warning, Level::Info] {
            assert!(!LevelFilter::Off.allows(level));
        }
    }

    #[test]
    fn default_filter_lets_everything_through() {
        assert_eq!(LevelFilter::default(), LevelFilter::Info);
    }

    #[test]
    fn tracing_conversions_keep_verbosity() {
        assert_eq!(TracingLevelFilter::from(LevelFilter::Off), TracingLevelFilter::OFF);
        assert_eq!(TracingLevelFilter::from(LevelFilter::Warning), TracingLevelFilter::WARN);
        assert_eq!(tracing::Level::from(Level::Warning), tracing::Level::WARN);
    }

    #[test]
    fn tags() {
        assert_eq!(Level::Error.tag(), "ERROR: ");
        assert_eq!(Level::Info.tag(), "INFO: ");
        assert_eq!(Level::Warning.tag(), "WARNING: ");
        assert_eq!(Level::Warning.to_string(), "WARNING");
    }
}
