use std::{io, path::PathBuf};

use thiserror::Error;

use crate::log::log_level::Severity;

/// Errors raised inside the logging core.
///
/// None of these ever reach a caller of [`Dispatcher::log`](crate::log::dispatcher::Dispatcher::log):
/// the fire-and-forget entry points report them once on stderr and degrade.
#[derive(Debug, Error)]
pub enum LogError {
    #[error("cannot open log file {}: {source}", path.display())]
    OpenSink {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("root marker {marker:?} not found in working directory {}", cwd.display())]
    RootMarkerNotFound { marker: String, cwd: PathBuf },
    #[error("cannot read current working directory: {0}")]
    CurrentDir(#[source] io::Error),
    #[error("invalid severity mask {0}")]
    InvalidMask(String),
    #[error("unknown external log level code {0}")]
    UnknownLevelCode(i32),
    #[error("severity {0:?} has no external log level")]
    UnmappedSeverity(Severity),
    #[error("error reading file {}: {source}", path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("the process-wide dispatcher is already initialized")]
    AlreadyInitialized,
}
