//! Error types for relo
//!
//! Uses `thiserror` for library errors. `ParseError` is the closed set of
//! ways a command line can be rejected; `ReloError` covers the driver's
//! fallible work around it.

use std::path::PathBuf;
use thiserror::Error;

use crate::signal::Signal;

/// Result type alias for relo operations
pub type ReloResult<T> = Result<T, ReloError>;

/// Exit code for command lines that cannot be parsed (same as clap)
pub const USAGE_EXIT_CODE: u8 = 2;

/// Why a command line was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Nothing follows `--`, or there is no `--` at all
    #[error("no command given - expected `-- <command> [args...]` after the files to watch")]
    NoCommandGiven,

    /// Only flags (or nothing) before `--`
    #[error("no files given to watch")]
    NoWatchesGiven,

    /// `-s`/`--signal` named a signal outside the accepted set
    #[error("invalid signal '{value}' - expected one of {}", Signal::expected())]
    InvalidSignalGiven { value: String },

    /// `-s`/`--signal` was the last token before `--`
    #[error("missing value for '{flag}' - expected one of {}", Signal::expected())]
    MissingSignalValue { flag: String },

    /// A dash-prefixed token before `--` that is not a known flag
    #[error("unknown flag '{flag}'")]
    UnknownFlag { flag: String },
}

impl ParseError {
    /// Process exit code the driver should use for this error
    pub fn exit_code(&self) -> u8 {
        USAGE_EXIT_CODE
    }
}

/// Main error type for relo operations
#[derive(Error, Debug)]
pub enum ReloError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file exists but is not valid
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Command line rejected
    #[error(transparent)]
    Parse(#[from] ParseError),
}
