//! CLI command definitions and error reporting.

pub mod args;

/// One-line description shown in `--help`.
pub const ABOUT: &str = "Print the results of a fixed set of integer calculations.";

/// Print a top-level error to stderr, with the full context chain.
pub fn print_error(err: &anyhow::Error) {
    use colored::Colorize;
    eprintln!("{} {err:#}", "Error:".red().bold());
}
