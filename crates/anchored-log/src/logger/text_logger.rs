use std::io::{self, Stderr, Write};
use std::fmt::{Debug, Formatter, Result as FmtResult};

use parking_lot::Mutex;
use time::{OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description};

use crate::{args::Arg, printf};
use super::{Level, Logger};


/// The prefix which the default logger writes at the start of each line.
pub const DEFAULT_PREFIX: &str = "anchored ";

const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>]
    = format_description!("[year]/[month]/[day] [hour]:[minute]:[second]");

/// The logger installed globally until something else is: a [`TextLogger`] writing to
/// standard error.
pub type DefaultLogger = TextLogger<Stderr>;

/// Writes one line of text per message to a sink.
///
/// Each line is laid out as
/// `{prefix}{YYYY/MM/DD HH:MM:SS} {LEVEL}: {message}`, followed by a newline unless the message
/// already ends with one. The timestamp uses the local time if the local UTC offset can be
/// determined, and UTC otherwise; it can be turned off with [`TextLogger::without_timestamps`].
///
/// Every line is written and flushed before the logging call returns. A failed write is not
/// retried; it is reported as a `tracing` event at the `DEBUG` level, and the line is lost.
pub struct TextLogger<W> {
    prefix:     Box<str>,
    timestamps: bool,
    sink:       Mutex<W>,
}

impl DefaultLogger {
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(DEFAULT_PREFIX, io::stderr())
    }
}

impl<W> TextLogger<W> {
    #[must_use]
    pub fn new<P: Into<Box<str>>>(prefix: P, sink: W) -> Self {
        Self {
            prefix:     prefix.into(),
            timestamps: true,
            sink:       Mutex::new(sink),
        }
    }

    #[must_use]
    pub fn without_timestamps(mut self) -> Self {
        self.timestamps = false;
        self
    }

    #[inline]
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    #[inline]
    #[must_use]
    pub const fn timestamps(&self) -> bool {
        self.timestamps
    }

    /// Run `f` with exclusive access to the sink.
    ///
    /// # Potential Deadlocks
    /// `f` must not log to `self`.
    pub fn with_sink<R, F: FnOnce(&mut W) -> R>(&self, f: F) -> R {
        f(&mut self.sink.lock())
    }

    #[must_use]
    pub fn into_inner(self) -> W {
        self.sink.into_inner()
    }

    /// The exact line which logging this message at `level` would currently write.
    #[must_use]
    pub fn render(&self, level: Level, format: &str, args: &[Arg<'_>]) -> String {
        let tag = level.tag();
        let mut line = String::with_capacity(self.prefix.len() + 20 + tag.len() + format.len() + 1);

        line.push_str(&self.prefix);
        if self.timestamps {
            if let Some(timestamp) = timestamp() {
                line.push_str(&timestamp);
                line.push(' ');
            }
        }
        line.push_str(tag);
        printf::append(&mut line, format, args);

        if !line.ends_with('\n') {
            line.push('\n');
        }
        line
    }
}

impl<W: Write> TextLogger<W> {
    fn write_line(&self, level: Level, format: &str, args: &[Arg<'_>]) {
        let line = self.render(level, format, args);
        let mut sink = self.sink.lock();

        // If writing the line fails, don't bother to flush
        let err = sink
            .write_all(line.as_bytes()).err()
            .or_else(|| sink.flush().err());

        if let Some(err) = err {
            tracing::event!(tracing::Level::DEBUG, "TextLogger could not write a log line: {err}");
        }
    }
}

impl<W> Debug for TextLogger<W> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "TextLogger (prefix {:?}, timestamps {})",
            self.prefix,
            if self.timestamps { "on" } else { "off" },
        )
    }
}

impl<W: Write + Send> Logger for TextLogger<W> {
    fn errorf(&self, format: &str, args: &[Arg<'_>]) {
        self.write_line(Level::Error, format, args);
    }

    fn infof(&self, format: &str, args: &[Arg<'_>]) {
        self.write_line(Level::Info, format, args);
    }

    fn warningf(&self, format: &str, args: &[Arg<'_>]) {
        self.write_line(Level::Warning, format, args);
    }
}

fn timestamp() -> Option<String> {
    // `now_local` fails whenever the offset cannot be determined soundly,
    // which includes most multithreaded programs on Unix.
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    now.format(TIMESTAMP_FORMAT).ok()
}
