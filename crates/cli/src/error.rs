use std::{io, num::ParseIntError, path::PathBuf};

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors that abort a profiling session.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown machine type '{0}'. Only x86_64 and arm64 are recognized.")]
    UnsupportedArchitecture(String),

    #[error("Unsupported OS '{0}'. Only Linux and Darwin are recognized.")]
    UnsupportedOs(String),

    #[error("{binary} not found on $PATH. Try installing v8 using the system package manager.")]
    ReferenceEngineNotFound { binary: String },

    #[error("Can't find {} ({reason})", .path.display())]
    MissingArtifact { path: PathBuf, reason: String },

    #[error("failed to locate {helper} ({hint})")]
    HelperLookupFailed {
        helper: &'static str,
        hint: &'static str,
        #[source]
        source: Box<Error>,
    },

    #[error("failed to spawn `{command}`")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("`{command}` exited with {status}\n stdout: {stdout:?}\n stderr: {stderr:?}")]
    CommandFailed { command: String, status: String, stdout: String, stderr: String },

    #[error("failed to remove {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write the report")]
    Report(#[source] io::Error),

    #[error("invalid tick report for {name}")]
    TickLog {
        name: String,
        #[source]
        source: TickLogError,
    },
}

/// Errors produced while reading the tick processor's summary report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TickLogError {
    #[error("no `[Summary]:` section in the tick processor output")]
    MissingSummary,

    #[error("no JavaScript row in the `[Summary]:` section")]
    NoJavaScriptRow,

    #[error("invalid tick count '{value}' in the JavaScript row")]
    InvalidTickCount {
        value: String,
        #[source]
        source: ParseIntError,
    },
}
