//! Shared config loading: read the file, parse it, validate it.

use std::path::Path;

use crate::error::{ConfError, ConfResult};

/// Loading steps common to every config type.
pub trait ConfigLoader: Sized {
    /// Name used in error messages.
    fn config_type_name() -> &'static str;

    /// Reads `path`, parses it with `load_from_str` and runs `validate`.
    ///
    /// # Errors
    /// - the file is missing or unreadable
    /// - the TOML does not parse
    /// - validation fails
    fn load_from_path(path: &Path) -> ConfResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfError::Io {
            kind: Self::config_type_name(),
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::load_from_str(&content)?;
        config.validate()?;
        log::debug!("loaded {} config from {:?}", Self::config_type_name(), path);
        Ok(config)
    }

    /// Parses `content` without validating it.
    fn load_from_str(content: &str) -> ConfResult<Self>;

    /// Checks the parsed values; accepts everything by default.
    fn validate(&self) -> ConfResult<()> {
        Ok(())
    }
}
