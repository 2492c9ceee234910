use std::path::PathBuf;

use derive_from_env::FromEnvError;
use thiserror::Error;

use crate::target::Target;

/// Errors raised while building a [`Logger`](crate::Logger).
///
/// Emitting records never fails; only construction does.
#[derive(Error, Debug)]
pub enum LogError {
    /// The log file could not be opened for append.
    #[error("failed to open log file {}: {source}", .path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file-backed target was requested without a log file path.
    #[error("target {target} requires a log file path")]
    MissingPath { target: Target },

    #[error("unknown severity: {0:?}")]
    UnknownSeverity(String),

    #[error("unknown target: {0:?}")]
    UnknownTarget(String),

    /// The `LVLOG_*` environment could not be read.
    #[error("invalid environment configuration: {0}")]
    Env(#[from] FromEnvError),
}
