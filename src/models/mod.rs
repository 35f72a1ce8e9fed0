//! Shared types used across all modules.
//!
//! Other modules import operation and result types from here rather
//! than reaching into each other's internals.

pub mod operation;

pub use operation::{Evaluation, Operation};
