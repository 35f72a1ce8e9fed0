//! Fixed demonstration run: evaluate four steps and print them.

use std::io::Write;

use anyhow::{Context, Result};
use tracing::debug;

use crate::calculator::CalcError;
use crate::models::{Evaluation, Operation};
use crate::output::OutputRenderer;
use crate::output::plain::PlainRenderer;

/// Steps evaluated by the binary, in output order.
pub const DEMO_STEPS: [(Operation, i64, i64); 4] = [
    (Operation::Add, 10, 5),
    (Operation::Subtract, 10, 5),
    (Operation::Max, 10, 5),
    (Operation::Divide, 10, 5),
];

/// Evaluate `steps` in order, stopping at the first failure.
pub fn evaluate(steps: &[(Operation, i64, i64)]) -> Result<Vec<Evaluation>, CalcError> {
    steps
        .iter()
        .map(|&(operation, lhs, rhs)| {
            let eval = Evaluation::compute(operation, lhs, rhs)?;
            debug!(%operation, lhs, rhs, value = eval.value, "evaluated step");
            Ok(eval)
        })
        .collect()
}

/// Evaluate [`DEMO_STEPS`] and write the rendered result to `out`.
///
/// Nothing is written if any step fails.
pub fn run(out: &mut impl Write) -> Result<()> {
    run_steps(&DEMO_STEPS, out)
}

fn run_steps(steps: &[(Operation, i64, i64)], out: &mut impl Write) -> Result<()> {
    let evaluations = evaluate(steps).context("calculation failed")?;
    let rendered = PlainRenderer.render(&evaluations);
    out.write_all(rendered.as_bytes())
        .context("failed to write output")?;
    out.flush().context("failed to flush output")?;
    Ok(())
}
