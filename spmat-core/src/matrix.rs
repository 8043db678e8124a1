//! Coordinate-list sparse matrix
//!
//! Entries are kept in insertion order together with a coordinate index, so
//! point reads and writes are O(1) expected while iteration stays
//! deterministic. A coordinate that has no stored entry reads as zero.

use alloc::vec::Vec;
use core::str::FromStr;

use hashbrown::HashMap;

use crate::parsing::{parse_entry_line, parse_header_line};
use crate::{Entry, FormatErrorKind, MatrixAccess, Operation, Result, SpmatError};

/// Sparse integer matrix with fixed dimensions
#[derive(Debug, Clone, Default)]
pub struct SparseMatrix {
    rows: usize,
    cols: usize,
    entries: Vec<Entry>,
    /// Coordinate -> position in `entries`
    index: HashMap<(usize, usize), usize>,
}

impl SparseMatrix {
    /// Create an empty `rows x cols` matrix
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Parse a matrix from its text representation
    ///
    /// The first two lines must be `rows=<int>` and `cols=<int>`; every
    /// following line must be an entry `(<row>,<col>,<value>)`. Entries are
    /// applied in order through [`set`](Self::set), so a coordinate listed
    /// twice keeps the later value.
    pub fn parse(text: &str) -> Result<Self> {
        // `lines` leaves a bare '\r' on a final line with no '\n'
        let mut lines = text.lines().map(|line| line.trim_end_matches('\r'));

        let rows_line = lines
            .next()
            .ok_or(SpmatError::format(1, FormatErrorKind::MissingHeader))?;
        let rows = parse_header_line(rows_line, "rows=", 1)?;

        let cols_line = lines
            .next()
            .ok_or(SpmatError::format(2, FormatErrorKind::MissingHeader))?;
        let cols = parse_header_line(cols_line, "cols=", 2)?;

        let mut matrix = Self::new(rows, cols);
        for (offset, line) in lines.enumerate() {
            let entry = parse_entry_line(line, offset + 3)?;
            matrix.set(entry.row, entry.col, entry.value);
        }

        Ok(matrix)
    }

    /// Build a matrix from triples, applied in order through `set`
    pub fn from_entries<I, E>(rows: usize, cols: usize, entries: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Entry>,
    {
        let mut matrix = Self::new(rows, cols);
        for entry in entries {
            let entry = entry.into();
            matrix.set(entry.row, entry.col, entry.value);
        }
        matrix
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Matrix dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of stored entries, explicit zeros included
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stored entries in insertion order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Value at `(row, col)`, or 0 when nothing is stored there
    ///
    /// No bounds check is made against the matrix dimensions.
    pub fn get(&self, row: usize, col: usize) -> i64 {
        self.index
            .get(&(row, col))
            .map_or(0, |&pos| self.entries[pos].value)
    }

    /// Store `value` at `(row, col)`, overwriting any existing entry in place
    ///
    /// Zero is stored explicitly rather than removing the entry.
    pub fn set(&mut self, row: usize, col: usize, value: i64) {
        match self.index.get(&(row, col)) {
            Some(&pos) => self.entries[pos].value = value,
            None => {
                self.index.insert((row, col), self.entries.len());
                self.entries.push(Entry::new(row, col, value));
            }
        }
    }

    /// Element-wise sum of two equally shaped matrices
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.combine(other, Operation::Add, i64::checked_add)
    }

    /// Element-wise difference of two equally shaped matrices
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        self.combine(other, Operation::Subtract, i64::checked_sub)
    }

    /// Matrix product `self * other`
    ///
    /// Only stored entries are visited: every entry `(i, k)` of `self` meets
    /// the entries of `other` in row `k`, so the cost follows the number of
    /// matching pairs rather than the dense shape.
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            return Err(self.mismatch(other, Operation::Multiply));
        }

        let mut by_row: HashMap<usize, Vec<&Entry>> = HashMap::new();
        for entry in &other.entries {
            by_row.entry(entry.row).or_default().push(entry);
        }

        // Cells are summed in i128 so that only the final value must fit i64
        let mut cells: Vec<((usize, usize), i128)> = Vec::new();
        let mut slots: HashMap<(usize, usize), usize> = HashMap::new();
        for lhs in &self.entries {
            let Some(rhs_row) = by_row.get(&lhs.col) else {
                continue;
            };
            for rhs in rhs_row {
                let coords = (lhs.row, rhs.col);
                let slot = *slots.entry(coords).or_insert_with(|| {
                    cells.push((coords, 0));
                    cells.len() - 1
                });
                let product = i128::from(lhs.value) * i128::from(rhs.value);
                let sum = &mut cells[slot].1;
                *sum = sum
                    .checked_add(product)
                    .ok_or(SpmatError::ArithmeticOverflow)?;
            }
        }

        let mut result = Self::new(self.rows, other.cols);
        for ((row, col), sum) in cells {
            let value = i64::try_from(sum).map_err(|_| SpmatError::ArithmeticOverflow)?;
            result.set(row, col, value);
        }

        Ok(result)
    }

    /// Copy `self` into a fresh matrix, then fold in each entry of `other`
    fn combine(
        &self,
        other: &Self,
        operation: Operation,
        op: fn(i64, i64) -> Option<i64>,
    ) -> Result<Self> {
        if self.dimensions() != other.dimensions() {
            return Err(self.mismatch(other, operation));
        }

        let mut result = Self::new(self.rows, self.cols);
        for entry in &self.entries {
            result.set(entry.row, entry.col, entry.value);
        }
        for entry in &other.entries {
            let value = op(result.get(entry.row, entry.col), entry.value)
                .ok_or(SpmatError::ArithmeticOverflow)?;
            result.set(entry.row, entry.col, value);
        }

        Ok(result)
    }

    fn mismatch(&self, other: &Self, operation: Operation) -> SpmatError {
        SpmatError::DimensionMismatch {
            operation,
            lhs: self.dimensions(),
            rhs: other.dimensions(),
        }
    }
}

impl FromStr for SparseMatrix {
    type Err = SpmatError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl MatrixAccess for SparseMatrix {
    fn get_element(&self, row: usize, col: usize) -> i64 {
        self.get(row, col)
    }

    fn dimensions(&self) -> (usize, usize) {
        SparseMatrix::dimensions(self)
    }

    fn nnz(&self) -> usize {
        SparseMatrix::nnz(self)
    }
}

/// Two matrices are equal when they have the same shape and read the same
/// value at every coordinate; storage order and explicit zeros are ignored.
impl PartialEq for SparseMatrix {
    fn eq(&self, other: &Self) -> bool {
        self.dimensions() == other.dimensions()
            && self
                .entries
                .iter()
                .all(|e| other.get(e.row, e.col) == e.value)
            && other
                .entries
                .iter()
                .all(|e| self.get(e.row, e.col) == e.value)
    }
}

impl Eq for SparseMatrix {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_matrix(rng: &mut StdRng, rows: usize, cols: usize, nnz: usize) -> SparseMatrix {
        let mut matrix = SparseMatrix::new(rows, cols);
        for _ in 0..nnz {
            let row = rng.gen_range(0..rows);
            let col = rng.gen_range(0..cols);
            matrix.set(row, col, rng.gen_range(-50..=50));
        }
        matrix
    }

    #[test]
    fn test_parse_example() {
        let m = SparseMatrix::parse("rows=2\ncols=2\n(0,0,5)\n(1,1,-3)\n").unwrap();
        assert_eq!(m.dimensions(), (2, 2));
        assert_eq!(m.get(0, 0), 5);
        assert_eq!(m.get(1, 1), -3);
        assert_eq!(m.get(0, 1), 0);
        assert_eq!(m.get(1, 0), 0);
        assert_eq!(m.to_string(), "5 0\n0 -3\n");
    }

    #[test]
    fn test_parse_header_only() {
        let m: SparseMatrix = "rows=3\ncols=4".parse().unwrap();
        assert_eq!(m.dimensions(), (3, 4));
        assert!(m.is_empty());
    }

    #[test]
    fn test_parse_crlf() {
        let m = SparseMatrix::parse("rows=1\r\ncols=2\r\n(0,1,7)\r\n").unwrap();
        assert_eq!(m.get(0, 1), 7);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            SparseMatrix::parse("rows:2\ncols=2\n"),
            Err(SpmatError::format(1, FormatErrorKind::BadHeader))
        );
        assert_eq!(
            SparseMatrix::parse("rows=2\n"),
            Err(SpmatError::format(2, FormatErrorKind::MissingHeader))
        );
        assert_eq!(
            SparseMatrix::parse(""),
            Err(SpmatError::format(1, FormatErrorKind::MissingHeader))
        );
        assert_eq!(
            SparseMatrix::parse("rows=2\ncols=2\n(0,0,1)\n\n(1,1,1)\n"),
            Err(SpmatError::format(4, FormatErrorKind::BadEntry))
        );
        assert_eq!(
            SparseMatrix::parse("cols=2\nrows=2\n"),
            Err(SpmatError::format(1, FormatErrorKind::BadHeader))
        );
    }

    #[test]
    fn test_parse_duplicate_last_wins() {
        let m = SparseMatrix::parse("rows=2\ncols=2\n(0,0,1)\n(0,0,9)\n").unwrap();
        assert_eq!(m.get(0, 0), 9);
        assert_eq!(m.nnz(), 1);

        let sum = m.add(&SparseMatrix::new(2, 2)).unwrap();
        assert_eq!(sum.get(0, 0), 9);
    }

    #[test]
    fn test_parse_out_of_range_entry_not_printed() {
        let m = SparseMatrix::parse("rows=1\ncols=1\n(0,0,2)\n(5,5,3)\n").unwrap();
        assert_eq!(m.get(5, 5), 3);
        assert_eq!(m.to_string(), "2\n");
    }

    #[test]
    fn test_get_set() {
        let mut m = SparseMatrix::new(3, 3);
        assert_eq!(m.get(2, 2), 0);
        assert_eq!(m.get(100, 100), 0);

        m.set(1, 2, 42);
        assert_eq!(m.get(1, 2), 42);
        m.set(1, 2, -1);
        assert_eq!(m.get(1, 2), -1);
        assert_eq!(m.nnz(), 1);

        m.set(0, 0, 0);
        assert_eq!(m.get(0, 0), 0);
        assert_eq!(m.nnz(), 2);
        assert_eq!(m.entries(), &[Entry::new(1, 2, -1), Entry::new(0, 0, 0)]);
    }

    #[test]
    fn test_add_subtract() {
        let a = SparseMatrix::from_entries(2, 2, [(0, 0, 1), (0, 1, 2), (1, 1, 4)]);
        let b = SparseMatrix::from_entries(2, 2, [(0, 0, 10), (1, 0, 3)]);

        let sum = a.add(&b).unwrap();
        assert_eq!(sum.to_string(), "11 2\n3 4\n");

        let diff = a.subtract(&b).unwrap();
        assert_eq!(diff.to_string(), "-9 2\n-3 4\n");

        // operands untouched
        assert_eq!(a.get(0, 0), 1);
        assert_eq!(b.get(0, 0), 10);
    }

    #[test]
    fn test_dimension_mismatch() {
        let a = SparseMatrix::new(2, 3);
        let b = SparseMatrix::new(3, 2);
        assert_eq!(
            a.add(&b),
            Err(SpmatError::DimensionMismatch {
                operation: Operation::Add,
                lhs: (2, 3),
                rhs: (3, 2),
            })
        );
        assert!(matches!(
            a.subtract(&b),
            Err(SpmatError::DimensionMismatch { .. })
        ));

        let c = SparseMatrix::new(4, 2);
        assert_eq!(
            a.multiply(&c),
            Err(SpmatError::DimensionMismatch {
                operation: Operation::Multiply,
                lhs: (2, 3),
                rhs: (4, 2),
            })
        );
    }

    #[test]
    fn test_multiply() {
        // [1 0 2]   [1 0]   [7  8]
        // [0 3 0] x [0 2] = [0  6]
        //           [3 4]
        let a = SparseMatrix::from_entries(2, 3, [(0, 0, 1), (0, 2, 2), (1, 1, 3)]);
        let b = SparseMatrix::from_entries(3, 2, [(0, 0, 1), (1, 1, 2), (2, 0, 3), (2, 1, 4)]);

        let product = a.multiply(&b).unwrap();
        assert_eq!(product.dimensions(), (2, 2));
        assert_eq!(product.to_string(), "7 8\n0 6\n");
    }

    #[test]
    fn test_multiply_explicit_zero_contributes_nothing() {
        let a = SparseMatrix::from_entries(1, 1, [(0, 0, 0)]);
        let b = SparseMatrix::from_entries(1, 1, [(0, 0, 5)]);
        let product = a.multiply(&b).unwrap();
        assert_eq!(product.get(0, 0), 0);
    }

    #[test]
    fn test_overflow() {
        let a = SparseMatrix::from_entries(1, 1, [(0, 0, i64::MAX)]);
        let b = SparseMatrix::from_entries(1, 1, [(0, 0, 1)]);
        assert_eq!(a.add(&b), Err(SpmatError::ArithmeticOverflow));
        assert_eq!(
            SparseMatrix::from_entries(1, 1, [(0, 0, i64::MIN)]).subtract(&b),
            Err(SpmatError::ArithmeticOverflow)
        );
        assert_eq!(
            a.multiply(&SparseMatrix::from_entries(1, 1, [(0, 0, 2)])),
            Err(SpmatError::ArithmeticOverflow)
        );
    }

    #[test]
    fn test_multiply_partial_sum_may_exceed_i64() {
        // [MAX 1 -1] x [1 1 1]^T = MAX, although MAX + 1 is passed on the way
        let a = SparseMatrix::from_entries(1, 3, [(0, 0, i64::MAX), (0, 1, 1), (0, 2, -1)]);
        let b = SparseMatrix::from_entries(3, 1, [(0, 0, 1), (1, 0, 1), (2, 0, 1)]);
        let product = a.multiply(&b).unwrap();
        assert_eq!(product.get(0, 0), i64::MAX);

        let c = SparseMatrix::from_entries(1, 2, [(0, 0, i64::MIN), (0, 1, i64::MIN)]);
        let d = SparseMatrix::from_entries(2, 1, [(0, 0, -1), (1, 0, 1)]);
        assert_eq!(c.multiply(&d).unwrap().get(0, 0), 0);
    }

    #[test]
    fn test_parse_bare_carriage_return() {
        let m = SparseMatrix::parse("rows=2\rcols=2\r").unwrap_err();
        assert_eq!(m, SpmatError::format(1, FormatErrorKind::BadHeader));

        let m = SparseMatrix::parse("rows=1\ncols=2\r").unwrap();
        assert_eq!(m.dimensions(), (1, 2));
        let m = SparseMatrix::parse("rows=1\r\ncols=2\r\n(0,1,4)\r").unwrap();
        assert_eq!(m.get(0, 1), 4);
    }

    #[test]
    fn test_equality_ignores_explicit_zeros() {
        let a = SparseMatrix::from_entries(2, 2, [(0, 0, 1), (1, 1, 0)]);
        let b = SparseMatrix::from_entries(2, 2, [(0, 0, 1)]);
        assert_eq!(a, b);
        assert_ne!(a, SparseMatrix::from_entries(2, 3, [(0, 0, 1)]));
    }

    #[test]
    fn test_add_matches_pointwise_sum() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let a = random_matrix(&mut rng, 6, 5, 12);
            let b = random_matrix(&mut rng, 6, 5, 12);
            let sum = a.add(&b).unwrap();
            let restored = a.subtract(&b).unwrap().add(&b).unwrap();
            for r in 0..6 {
                for c in 0..5 {
                    assert_eq!(sum.get(r, c), a.get(r, c) + b.get(r, c));
                    assert_eq!(restored.get(r, c), a.get(r, c));
                }
            }
        }
    }

    #[test]
    fn test_multiply_matches_dense_product() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..20 {
            let a = random_matrix(&mut rng, 4, 6, 10);
            let b = random_matrix(&mut rng, 6, 3, 10);
            let product = a.multiply(&b).unwrap();
            assert_eq!(product.dimensions(), (4, 3));
            for i in 0..4 {
                for j in 0..3 {
                    let expected: i64 = (0..6).map(|k| a.get(i, k) * b.get(k, j)).sum();
                    assert_eq!(product.get(i, j), expected);
                }
            }
        }
    }
}
