//! Configuration for descstat.
//!
//! The configuration is a single TOML file (`descstat.toml` by default).
//! Every section is optional; see [`StatConf`] for the defaults.

pub mod error;
pub mod loader;
mod types;

pub use error::{ConfError, ConfResult};
pub use loader::ConfigLoader;
pub use types::{LogConf, LogLevel, OutputConf, OutputFormat, StatConf, StatsConf, VariableConf};
