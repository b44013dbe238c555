use crate::args::Arg;
use super::Logger;


/// Discards every message. Installing it silences logging entirely.
#[derive(Default, Debug, Clone, Copy)]
pub struct NopLogger;

impl Logger for NopLogger {
    #[inline]
    fn errorf(&self, _format: &str, _args: &[Arg<'_>]) {}

    #[inline]
    fn infof(&self, _format: &str, _args: &[Arg<'_>]) {}

    #[inline]
    fn warningf(&self, _format: &str, _args: &[Arg<'_>]) {}
}
