mod calendar_cmd;
mod cli;
mod config;
mod convert;
mod day_cmd;
mod glyph_cmd;
mod logging;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Calendar(args) => calendar_cmd::run(args),
        Command::Day(args) => day_cmd::run(args),
        Command::Glyph(args) => glyph_cmd::run(args),
    }
}
