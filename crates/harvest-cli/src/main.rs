//! Harvest calendar CLI.

use clap::Parser;
use harvest_cli::logging::init_logging;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command};
use crate::commands::{run_classify, run_normalize, run_period, run_roles};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    if let Err(error) = init_logging(&cli.log_config()) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Classify(args) => report(run_classify(&args)),
        Command::Normalize(args) => match run_normalize(&args) {
            Ok(has_reviews) => i32::from(has_reviews && args.fail_on_review),
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Period(args) => report(run_period(&args)),
        Command::Roles => report(run_roles()),
    };
    std::process::exit(exit_code);
}

fn report(result: anyhow::Result<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    }
}
