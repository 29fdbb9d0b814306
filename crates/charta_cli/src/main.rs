mod angle_cmd;
mod cli;
mod config;
mod logging;
mod time_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = config::load(cli.config.as_deref())?;
    match cli.command {
        Command::Jd(args) => time_cmd::jd(args, &config),
        Command::Date(args) => time_cmd::date(args, &config),
        Command::Now(args) => time_cmd::now(args, &config),
        Command::Noon(args) => time_cmd::noon(args, &config),
        Command::Tz(args) => time_cmd::tz(args),
        Command::Dms(args) => angle_cmd::dms(args, &config),
        Command::ParseDms(args) => angle_cmd::parse_dms(args),
    }
}
