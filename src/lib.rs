pub mod error;
pub mod facade;

pub use error::{ResultExt, RunError, RunReason, RunResult};
pub use facade::{DescStatCli, execute, run_cli};
