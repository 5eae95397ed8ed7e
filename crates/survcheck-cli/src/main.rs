//! survcheck CLI - consistency checker for linked NSFG survey files.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check {
            resp_dct,
            resp_dat,
            preg_dct,
            preg_dat,
            expect_rows,
            expect_single,
            max_rows,
            json,
        } => commands::check::run(
            resp_dct,
            resp_dat,
            preg_dct,
            preg_dat,
            expect_rows,
            expect_single,
            max_rows,
            json,
            cli.verbose,
        ),

        Commands::Inspect { dct, dat, json } => {
            commands::inspect::run(dct, dat, json, cli.verbose)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
