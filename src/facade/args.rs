use clap::{Args, Parser, ValueEnum};
use descstat_config::{ConfigLoader, LogLevel, OutputFormat, StatConf};
use descstat_core::ModePolicy;
use std::env;
use std::path::PathBuf;

use crate::error::{ResultExt, RunReason, RunResult};

#[derive(Parser, Debug)]
// `-V/--version` prints the version
#[command(
    name = "descstat",
    version,
    about = "Descriptive statistics for numeric samples"
)]
pub enum DescStatCli {
    /// Type the values of each variable on one line
    #[command(name = "manual")]
    Manual(ManualArgs),

    /// Read the variables from columns of a CSV or Excel file
    #[command(name = "file")]
    File(FileArgs),

    /// Show the arithmetic of mean, median, mode and range step by step
    #[command(name = "walkthrough")]
    Walkthrough(WalkthroughArgs),
}

impl DescStatCli {
    pub fn common(&self) -> &CommonArgs {
        match self {
            DescStatCli::Manual(args) => &args.common,
            DescStatCli::File(args) => &args.common,
            DescStatCli::Walkthrough(args) => &args.common,
        }
    }
}

/// Log presets mapped onto levels.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogProfile {
    /// debug
    Dev,
    /// info
    Int,
    /// warn
    Prod,
}

impl LogProfile {
    pub fn level(self) -> LogLevel {
        match self {
            LogProfile::Dev => LogLevel::Debug,
            LogProfile::Int => LogLevel::Info,
            LogProfile::Prod => LogLevel::Warn,
        }
    }
}

#[derive(Args, Debug, Default)]
pub struct CommonArgs {
    /// Config file; defaults to ./descstat.toml when present
    #[clap(long = "conf")]
    pub conf: Option<PathBuf>,
    /// Output format: text, table, json
    #[clap(short = 'f', long = "format")]
    pub format: Option<OutputFormat>,
    /// Decimal places for numbers (default 2)
    #[clap(short = 'd', long = "decimals")]
    pub decimals: Option<usize>,
    /// Mode tie policy: strict, first_encountered
    #[clap(long = "mode-policy")]
    pub mode_policy: Option<ModePolicy>,
    /// Log profile: dev/int/prod (override [log].level)
    #[clap(long = "log-profile", value_enum)]
    pub log_profile: Option<LogProfile>,
}

impl CommonArgs {
    /// Loads the config and applies the command-line overrides on top.
    pub fn completion_conf(&self) -> RunResult<StatConf> {
        let work_dir =
            env::current_dir().to_run_err(RunReason::Io, "cannot get current directory")?;
        let mut conf = StatConf::resolve(self.conf.as_deref(), &work_dir)
            .to_run_err(RunReason::Conf, "cannot load configuration")?;
        self.apply(&mut conf)?;
        Ok(conf)
    }

    pub fn apply(&self, conf: &mut StatConf) -> RunResult<()> {
        if let Some(format) = self.format {
            conf.output_mut().format = format;
        }
        if let Some(decimals) = self.decimals {
            conf.output_mut().decimals = decimals;
        }
        if let Some(policy) = self.mode_policy {
            conf.stats_mut().mode_policy = policy;
        }
        if let Some(profile) = self.log_profile {
            conf.log_mut().level = profile.level();
        }
        conf.validate()
            .to_run_err(RunReason::Conf, "invalid command-line options")
    }
}

#[derive(Args, Debug, Default)]
pub struct ManualArgs {
    #[clap(flatten)]
    pub common: CommonArgs,
    /// Values for the next variable, e.g. --values "30 35 40"; skips its prompt
    #[clap(long = "values", allow_hyphen_values = true)]
    pub values: Vec<String>,
}

#[derive(Args, Debug)]
pub struct FileArgs {
    #[clap(flatten)]
    pub common: CommonArgs,
    /// CSV (.csv) or Excel (.xlsx/.xls) file
    pub path: PathBuf,
    /// Column of the next variable; prompted for when omitted
    #[clap(short = 'c', long = "column")]
    pub columns: Vec<String>,
    /// Rows shown in the preview
    #[clap(long = "preview-rows", default_value_t = 5)]
    pub preview_rows: usize,
}

#[derive(Args, Debug, Default)]
pub struct WalkthroughArgs {
    #[clap(flatten)]
    pub common: CommonArgs,
    /// Values to walk through (default: 25 28 30 32 35 40)
    #[clap(allow_hyphen_values = true, allow_negative_numbers = true)]
    pub values: Vec<String>,
}
