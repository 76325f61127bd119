//! Run-time errors
//!
//! Errors of every layer are converted to [`RunError`] at this crate's
//! boundary:
//!
//! - **descstat-core**: `StatError`
//! - **descstat-config**: `ConfError`
//! - **descstat-cli-core**: `anyhow::Result`
//!
//! [`ResultExt`] does the conversion for any error type that implements
//! `Display`.

use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunReason {
    Conf,
    Input,
    Stat,
    Io,
}

impl fmt::Display for RunReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RunReason::Conf => "conf",
            RunReason::Input => "input",
            RunReason::Stat => "stat",
            RunReason::Io => "io",
        };
        f.write_str(name)
    }
}

impl RunReason {
    pub fn to_err(self, detail: impl Into<String>) -> RunError {
        RunError {
            reason: self,
            detail: detail.into(),
        }
    }
}

#[derive(Debug, Error)]
#[error("[{reason}] {detail}")]
pub struct RunError {
    reason: RunReason,
    detail: String,
}

impl RunError {
    pub fn reason(&self) -> RunReason {
        self.reason
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }
}

pub type RunResult<T> = Result<T, RunError>;

/// Converts any `Result` with a displayable error into a [`RunResult`].
pub trait ResultExt<T, E> {
    /// Prefixes the error with `context`.
    fn to_run_err(self, reason: RunReason, context: &str) -> RunResult<T>;
}

impl<T, E: fmt::Display> ResultExt<T, E> for Result<T, E> {
    fn to_run_err(self, reason: RunReason, context: &str) -> RunResult<T> {
        self.map_err(|e| reason.to_err(format!("{}: {:#}", context, e)))
    }
}
