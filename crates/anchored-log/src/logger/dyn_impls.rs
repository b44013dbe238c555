use std::sync::Arc;

use crate::args::Arg;
use super::{Level, Logger};


impl<L: Logger + ?Sized> Logger for &L {
    fn errorf(&self, format: &str, args: &[Arg<'_>]) {
        L::errorf(self, format, args);
    }

    fn infof(&self, format: &str, args: &[Arg<'_>]) {
        L::infof(self, format, args);
    }

    fn warningf(&self, format: &str, args: &[Arg<'_>]) {
        L::warningf(self, format, args);
    }

    fn log(&self, level: Level, format: &str, args: &[Arg<'_>]) {
        L::log(self, level, format, args);
    }
}

impl<L: Logger + ?Sized> Logger for Box<L> {
    fn errorf(&self, format: &str, args: &[Arg<'_>]) {
        L::errorf(self, format, args);
    }

    fn infof(&self, format: &str, args: &[Arg<'_>]) {
        L::infof(self, format, args);
    }

    fn warningf(&self, format: &str, args: &[Arg<'_>]) {
        L::warningf(self, format, args);
    }

    fn log(&self, level: Level, format: &str, args: &[Arg<'_>]) {
        L::log(self, level, format, args);
    }
}

impl<L: Logger + ?Sized> Logger for Arc<L> {
    fn errorf(&self, format: &str, args: &[Arg<'_>]) {
        L::errorf(self, format, args);
    }

    fn infof(&self, format: &str, args: &[Arg<'_>]) {
        L::infof(self, format, args);
    }

    fn warningf(&self, format: &str, args: &[Arg<'_>]) {
        L::warningf(self, format, args);
    }

    fn log(&self, level: Level, format: &str, args: &[Arg<'_>]) {
        L::log(self, level, format, args);
    }
}
