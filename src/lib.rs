//! Minimal integer calculator (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod calculator;
pub mod constants;
pub mod demo;
pub mod logging;
pub mod models;
pub mod output;
