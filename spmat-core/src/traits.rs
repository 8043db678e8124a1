//! Read-only matrix access trait

/// Format-agnostic read access to an integer matrix
///
/// Implementors report a value for every coordinate; coordinates with no
/// stored entry read as zero.
pub trait MatrixAccess {
    /// Get the value at the specified position
    fn get_element(&self, row: usize, col: usize) -> i64;

    /// Get matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Get number of stored elements
    fn nnz(&self) -> usize;
}

impl<M: MatrixAccess + ?Sized> MatrixAccess for &M {
    fn get_element(&self, row: usize, col: usize) -> i64 {
        (**self).get_element(row, col)
    }

    fn dimensions(&self) -> (usize, usize) {
        (**self).dimensions()
    }

    fn nnz(&self) -> usize {
        (**self).nnz()
    }
}
