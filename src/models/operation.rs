//! Calculator operations and their evaluated results.

use crate::calculator::{self, CalcError};

/// A binary calculator operation.
///
/// `Display` yields the label used in output (`Add`, `Subtract`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum Operation {
    Add,
    Subtract,
    Max,
    Divide,
}

impl Operation {
    /// Apply this operation to the given operands.
    pub fn apply(self, lhs: i64, rhs: i64) -> Result<i64, CalcError> {
        match self {
            Operation::Add => Ok(calculator::add(lhs, rhs)),
            Operation::Subtract => Ok(calculator::subtract(lhs, rhs)),
            Operation::Max => Ok(calculator::max(lhs, rhs)),
            Operation::Divide => calculator::divide(lhs, rhs),
        }
    }
}

/// One completed step: an operation, its operands, and the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub operation: Operation,
    pub lhs: i64,
    pub rhs: i64,
    pub value: i64,
}

impl Evaluation {
    /// Evaluate `operation` on `lhs` and `rhs`.
    pub fn compute(operation: Operation, lhs: i64, rhs: i64) -> Result<Self, CalcError> {
        let value = operation.apply(lhs, rhs)?;
        Ok(Self {
            operation,
            lhs,
            rhs,
            value,
        })
    }

    /// Output label for this step.
    pub fn label(&self) -> String {
        self.operation.to_string()
    }
}
