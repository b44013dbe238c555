use crate::args::Arg;
use super::{Level, LevelFilter, Logger};


/// Drops messages more verbose than a [`LevelFilter`] before they reach the inner logger.
#[derive(Debug, Clone, Copy)]
pub struct Filtered<L> {
    inner:  L,
    filter: LevelFilter,
}

impl<L: Logger> Filtered<L> {
    #[inline]
    #[must_use]
    pub const fn new(inner: L, filter: LevelFilter) -> Self {
        Self { inner, filter }
    }

    #[inline]
    #[must_use]
    pub const fn filter(&self) -> LevelFilter {
        self.filter
    }

    #[inline]
    #[must_use]
    pub const fn inner(&self) -> &L {
        &self.inner
    }

    #[inline]
    #[must_use]
    pub fn into_inner(self) -> L {
        self.inner
    }
}

impl<L: Logger> Logger for Filtered<L> {
    fn errorf(&self, format: &str, args: &[Arg<'_>]) {
        if self.filter.allows(Level::Error) {
            self.inner.errorf(format, args);
        }
    }

    fn infof(&self, format: &str, args: &[Arg<'_>]) {
        if self.filter.allows(Level::Info) {
            self.inner.infof(format, args);
        }
    }

    fn warningf(&self, format: &str, args: &[Arg<'_>]) {
        if self.filter.allows(Level::Warning) {
            self.inner.warningf(format, args);
        }
    }
}


#[cfg(test)]
mod tests {
    use crate::logger::TextLogger;
    use super::*;


    fn filtered_output(filter: LevelFilter) -> String {
        let logger = Filtered::new(TextLogger::new("", Vec::new()).without_timestamps(), filter);

        logger.errorf("e", &[]);
        logger.warningf("w", &[]);
        logger.infof("i", &[]);

        let bytes = logger.into_inner().into_inner();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn filters_by_level() {
        assert_eq!(filtered_output(LevelFilter::Info), "ERROR: e\nWARNING: w\nINFO: i\n");
        assert_eq!(filtered_output(LevelFilter::Warning), "ERROR: e\nWARNING: w\n");
        assert_eq!(filtered_output(LevelFilter::Error), "ERROR: e\n");
        assert_eq!(filtered_output(LevelFilter::Off), "");
    }

    #[test]
    fn log_respects_filter() {
        let logger = Filtered::new(
            TextLogger::new("", Vec::<u8>::new()).without_timestamps(),
            LevelFilter::Error,
        );
        logger.log(Level::Info, "dropped", &[]);
        logger.log(Level::Error, "kept", &[]);
        assert_eq!(logger.filter(), LevelFilter::Error);
        assert_eq!(logger.inner().with_sink(|sink| sink.clone()), b"ERROR: kept\n");
    }
}
