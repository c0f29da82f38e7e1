//! CLI entry point for running movement trials on a configured board

use clap::Parser;
use tileboard::io::cli::{Cli, TrialRunner};

fn main() -> tileboard::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let runner = TrialRunner::new(cli);
    runner.process()
}
