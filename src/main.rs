//! CLI entry point for perfect-maze grid generation

use clap::Parser;
use mazegrid::io::cli::{Cli, CommandRunner};

fn main() -> mazegrid::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    let mut runner = CommandRunner::new(cli);
    runner.run(&mut std::io::stdout().lock())
}
