//! Binary matrix operations selectable by name

use core::str::FromStr;

use crate::{Result, SparseMatrix, SpmatError};

/// Arithmetic operation between two sparse matrices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
}

impl Operation {
    /// All operations, in the order they are offered to users
    pub const ALL: [Operation; 3] = [Operation::Add, Operation::Subtract, Operation::Multiply];

    /// Name accepted by [`FromStr`]
    pub const fn name(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
        }
    }

    /// Apply the operation to `lhs` and `rhs`, producing a new matrix
    pub fn apply(&self, lhs: &SparseMatrix, rhs: &SparseMatrix) -> Result<SparseMatrix> {
        match self {
            Operation::Add => lhs.add(rhs),
            Operation::Subtract => lhs.subtract(rhs),
            Operation::Multiply => lhs.multiply(rhs),
        }
    }
}

impl FromStr for Operation {
    type Err = SpmatError;

    fn from_str(s: &str) -> Result<Self> {
        Operation::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or(SpmatError::InvalidOperation)
    }
}

impl core::fmt::Display for Operation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
