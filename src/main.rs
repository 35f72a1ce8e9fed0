//! Minimal integer calculator CLI.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! error propagation and user-facing messages.

mod cli;

use arith::constants;
use arith::demo;
use arith::logging;

use std::process;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use cli::args::Cli;

fn main() {
    if let Err(err) = run() {
        cli::print_error(&err);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let _cli = Cli::parse();
    logging::init();
    info!(version = constants::VERSION, "starting {}", constants::APP_NAME);

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    demo::run(&mut handle)
}
