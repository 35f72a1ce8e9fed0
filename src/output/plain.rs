//! Plain renderer: one `Label: value` line per evaluation.
//!
//! No colors, so output can be compared byte for byte.

use crate::models::Evaluation;
use crate::output::OutputRenderer;

/// Plain-text output renderer.
pub struct PlainRenderer;

impl OutputRenderer for PlainRenderer {
    fn render(&self, evaluations: &[Evaluation]) -> String {
        let mut output = String::new();
        for eval in evaluations {
            output.push_str(&format!("{}: {}\n", eval.label(), eval.value));
        }
        output
    }
}
