//! Output renderers.

pub mod plain;

use crate::models::Evaluation;

/// Trait for rendering evaluated steps to an output format.
pub trait OutputRenderer {
    /// Render evaluations to a string.
    fn render(&self, evaluations: &[Evaluation]) -> String;
}
