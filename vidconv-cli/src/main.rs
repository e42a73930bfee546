// vidconv-cli/src/main.rs
//
// Binary entry point: initializes logging, parses arguments, runs the
// convert flow, and maps any failure to a non-zero exit code.

use clap::Parser;
use env_logger::Env;
use std::process;

mod cli;
mod commands;
mod output;

fn main() {
    // RUST_LOG overrides the default 'info' filter
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let args = cli::Cli::parse();

    if let Err(e) = commands::convert::run_convert(&args) {
        output::print_error(&e.to_string());
        process::exit(1);
    }
}
