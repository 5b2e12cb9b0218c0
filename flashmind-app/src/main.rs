mod cli;
mod logging;
mod paths;
pub mod api;
pub mod tui;

use anyhow::Result;
use clap::Parser;
use tokio::runtime::Runtime;

use cli::commands::run_cli;
use cli::opts::{Cli, Command};

fn main() -> Result<()> {
    let args = Cli::parse();

    // stderr output would tear the alternate screen
    let level = match args.cmd {
        Command::Tui => "warn",
        _ => "info",
    };
    logging::init(level);

    let rt = Runtime::new()?;
    rt.block_on(run_cli(args))
}
