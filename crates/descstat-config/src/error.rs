use std::path::PathBuf;

use thiserror::Error;

pub type ConfResult<T> = Result<T, ConfError>;

#[derive(Debug, Error)]
pub enum ConfError {
    #[error("cannot read {kind} config file {path:?}: {source}")]
    Io {
        kind: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid {kind} config: {source}")]
    Parse {
        kind: &'static str,
        #[source]
        source: toml::de::Error,
    },
    #[error("{kind} config validation failed: {message}")]
    Validation { kind: &'static str, message: String },
}

impl ConfError {
    pub fn validation(kind: &'static str, message: impl Into<String>) -> Self {
        ConfError::Validation {
            kind,
            message: message.into(),
        }
    }
}
