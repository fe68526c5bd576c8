//! Errors surfaced to the command line.

use std::io;
use std::path::PathBuf;

use tailor_fmt::FormatError;
use thiserror::Error;

use crate::loader::LoadError;

/// Anything that makes a command exit with status 1.
#[derive(Debug, Error)]
pub enum CliError {
    /// Bad arguments; the message says what was expected.
    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("cannot write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl CliError {
    pub(crate) fn usage(message: impl Into<String>) -> Self {
        CliError::Usage(message.into())
    }
}
