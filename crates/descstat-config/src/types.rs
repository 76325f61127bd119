use std::collections::HashSet;
use std::path::Path;

use derive_getters::Getters;
use descstat_core::ModePolicy;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::error::{ConfError, ConfResult};
use crate::loader::ConfigLoader;

const MAX_DECIMALS: usize = 10;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Table,
    Json,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConf {
    pub format: OutputFormat,
    /// Decimal places for numeric statistics.
    pub decimals: usize,
}

impl Default for OutputConf {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            decimals: 2,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsConf {
    pub mode_policy: ModePolicy,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConf {
    pub level: LogLevel,
}

/// A measured quantity the user is asked about, e.g. delivery time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableConf {
    pub name: String,
    /// Default column in file mode; prompted for when absent.
    #[serde(default)]
    pub column: Option<String>,
}

impl VariableConf {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            column: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
#[serde(default)]
pub struct StatConf {
    output: OutputConf,
    stats: StatsConf,
    log: LogConf,
    variables: Vec<VariableConf>,
}

impl Default for StatConf {
    fn default() -> Self {
        Self {
            output: OutputConf::default(),
            stats: StatsConf::default(),
            log: LogConf::default(),
            variables: vec![
                VariableConf::new("Delivery time (min)"),
                VariableConf::new("Product temperature (°C)"),
            ],
        }
    }
}

impl StatConf {
    pub const DEFAULT_FILE: &'static str = "descstat.toml";

    /// Loads `path` when given (it must exist), else `descstat.toml` under
    /// `work_dir` when present, else the built-in defaults.
    pub fn resolve(path: Option<&Path>, work_dir: &Path) -> ConfResult<Self> {
        if let Some(path) = path {
            return Self::load_from_path(path);
        }
        let default_path = work_dir.join(Self::DEFAULT_FILE);
        if default_path.is_file() {
            Self::load_from_path(&default_path)
        } else {
            log::debug!("no {} found, using defaults", Self::DEFAULT_FILE);
            Ok(Self::default())
        }
    }

    pub fn output_mut(&mut self) -> &mut OutputConf {
        &mut self.output
    }

    pub fn stats_mut(&mut self) -> &mut StatsConf {
        &mut self.stats
    }

    pub fn log_mut(&mut self) -> &mut LogConf {
        &mut self.log
    }
}

impl ConfigLoader for StatConf {
    fn config_type_name() -> &'static str {
        "descstat"
    }

    fn load_from_str(content: &str) -> ConfResult<Self> {
        toml::from_str(content).map_err(|source| ConfError::Parse {
            kind: Self::config_type_name(),
            source,
        })
    }

    fn validate(&self) -> ConfResult<()> {
        let kind = Self::config_type_name();
        if self.output.decimals > MAX_DECIMALS {
            return Err(ConfError::validation(
                kind,
                format!(
                    "output.decimals must be at most {} (got {})",
                    MAX_DECIMALS, self.output.decimals
                ),
            ));
        }
        if self.variables.is_empty() {
            return Err(ConfError::validation(
                kind,
                "at least one [[variables]] entry is required",
            ));
        }
        let mut seen = HashSet::new();
        for var in &self.variables {
            let name = var.name.trim();
            if name.is_empty() {
                return Err(ConfError::validation(kind, "variable name must not be empty"));
            }
            if !seen.insert(name) {
                return Err(ConfError::validation(
                    kind,
                    format!("duplicate variable name '{}'", name),
                ));
            }
        }
        Ok(())
    }
}
