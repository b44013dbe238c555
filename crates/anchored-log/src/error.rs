use std::io::Error as IoError;

use thiserror::Error;


/// An error while setting up the `LOG` file of a [`FileLogger`].
///
/// [`FileLogger`]: crate::FileLogger
#[derive(Error, Debug)]
pub enum LogFileError {
    #[error("could not check for a previous `LOG` file: {0}")]
    Metadata(IoError),
    #[error("could not move the previous `LOG` file to `LOG.old`: {0}")]
    Rename(IoError),
    #[error("could not create the `LOG` file: {0}")]
    Create(IoError),
}
