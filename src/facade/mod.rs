//! Command-line facade: argument parsing, logging setup and command dispatch.

pub mod args;
mod logging;
mod run;

pub use args::{CommonArgs, DescStatCli, LogProfile};
pub use logging::{init_logging, set_log_level};
pub use run::{DEFAULT_WALKTHROUGH, execute};

use crate::error::RunResult;

/// Sets up logging, resolves the config and runs `cli` on stdin/stdout.
pub fn run_cli(cli: DescStatCli) -> RunResult<()> {
    let common = cli.common();
    init_logging(common.log_profile.map(LogProfile::level).unwrap_or_default());
    let conf = common.completion_conf()?;
    set_log_level(conf.log().level);
    log::debug!("effective config: {:?}", conf);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    execute(
        &cli,
        &conf,
        &mut stdin.lock(),
        &mut stdout.lock(),
        &mut stderr.lock(),
    )
}
