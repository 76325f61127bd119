use clap::Parser;
use descstat::{DescStatCli, run_cli};

fn main() {
    let cli = DescStatCli::parse();
    if let Err(e) = run_cli(cli) {
        eprintln!("descstat: {}", e);
        std::process::exit(1);
    }
}
