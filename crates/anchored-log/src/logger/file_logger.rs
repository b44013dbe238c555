use std::{fs, io::ErrorKind};
use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    fs::File,
    io::BufWriter,
    path::Path,
};

use crate::{args::Arg, error::LogFileError};
use super::{DEFAULT_PREFIX, Level, Logger, TextLogger};


/// The name of the info log file inside a database directory.
pub const INFO_LOG_FILE: &str = "LOG";
/// The name which the previous info log file is moved to.
pub const OLD_INFO_LOG_FILE: &str = "LOG.old";

/// A [`TextLogger`] writing to the `LOG` file of a database directory.
///
/// Matching the behavior of LevelDB-style databases, creating a `FileLogger` moves the previous
/// `LOG` file (if one exists) to `LOG.old`, replacing any older `LOG.old`, and then starts a
/// fresh `LOG` file.
pub struct FileLogger {
    logfile_path: Box<Path>,
    inner:        TextLogger<BufWriter<File>>,
}

impl FileLogger {
    /// Start a new `LOG` file in `directory`, using the default line prefix.
    ///
    /// The directory must already exist.
    pub fn create_in(directory: &Path) -> Result<Self, LogFileError> {
        Self::create_in_with_prefix(directory, DEFAULT_PREFIX)
    }

    /// Start a new `LOG` file in `directory`, beginning each line with `prefix`.
    ///
    /// The directory must already exist.
    pub fn create_in_with_prefix<P: Into<Box<str>>>(
        directory: &Path,
        prefix:    P,
    ) -> Result<Self, LogFileError> {
        let logfile_path = directory.join(INFO_LOG_FILE);

        match fs::metadata(&logfile_path) {
            Ok(_) => {
                fs::rename(&logfile_path, directory.join(OLD_INFO_LOG_FILE))
                    .map_err(LogFileError::Rename)?;
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {}
            Err(err) => return Err(LogFileError::Metadata(err)),
        }

        let logfile = File::create(&logfile_path).map_err(LogFileError::Create)?;

        Ok(Self {
            logfile_path: logfile_path.into_boxed_path(),
            inner:        TextLogger::new(prefix, BufWriter::new(logfile)),
        })
    }

    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.logfile_path
    }

    /// The exact line which logging this message at `level` would currently write.
    #[must_use]
    pub fn render(&self, level: Level, format: &str, args: &[Arg<'_>]) -> String {
        self.inner.render(level, format, args)
    }
}

impl Debug for FileLogger {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "FileLogger writing to path {:?}", self.logfile_path)
    }
}

impl Logger for FileLogger {
    fn errorf(&self, format: &str, args: &[Arg<'_>]) {
        self.inner.errorf(format, args);
    }

    fn infof(&self, format: &str, args: &[Arg<'_>]) {
        self.inner.infof(format, args);
    }

    fn warningf(&self, format: &str, args: &[Arg<'_>]) {
        self.inner.warningf(format, args);
    }
}
