//! Dense text rendering of sparse matrices

use core::fmt;

use crate::{MatrixAccess, SparseMatrix};

/// Dense `rows x cols` view of a matrix implementing [`fmt::Display`]
///
/// Each row is written on its own line, values separated by `separator`.
/// Every cell is read through [`MatrixAccess::get_element`], so stored
/// entries outside the dimensions never appear.
#[derive(Debug, Clone, Copy)]
pub struct DenseGrid<M> {
    matrix: M,
    separator: &'static str,
    trailing_separator: bool,
}

impl<M: MatrixAccess> DenseGrid<M> {
    pub fn new(matrix: M) -> Self {
        Self {
            matrix,
            separator: " ",
            trailing_separator: false,
        }
    }

    /// Set the string written between adjacent values
    pub fn with_separator(mut self, separator: &'static str) -> Self {
        self.separator = separator;
        self
    }

    /// Also write the separator after the last value of each row
    pub fn with_trailing_separator(mut self, trailing: bool) -> Self {
        self.trailing_separator = trailing;
        self
    }
}

impl<M: MatrixAccess> fmt::Display for DenseGrid<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (rows, cols) = self.matrix.dimensions();
        for row in 0..rows {
            for col in 0..cols {
                if col > 0 {
                    f.write_str(self.separator)?;
                }
                write!(f, "{}", self.matrix.get_element(row, col))?;
            }
            if self.trailing_separator && cols > 0 {
                f.write_str(self.separator)?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

impl SparseMatrix {
    /// Dense grid view of this matrix
    pub fn dense(&self) -> DenseGrid<&Self> {
        DenseGrid::new(self)
    }
}

impl fmt::Display for SparseMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.dense(), f)
    }
}
