//! Clap argument types.

use clap::Parser;

/// Print the results of a fixed set of integer calculations.
#[derive(Parser, Debug)]
#[command(
    name = arith::constants::APP_NAME,
    version = arith::constants::VERSION,
    about = super::ABOUT,
    after_help = "ENVIRONMENT:\n    ARITH_LOG=debug    Enable debug logging on stderr",
)]
pub struct Cli {}
