//! Stored matrix entry

/// A single explicitly stored `(row, col, value)` triple
///
/// Coordinates are not checked against the owning matrix's dimensions, and
/// `value` may be zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry {
    pub row: usize,
    pub col: usize,
    pub value: i64,
}

impl Entry {
    pub const fn new(row: usize, col: usize, value: i64) -> Self {
        Self { row, col, value }
    }

    /// Coordinate pair used as the storage key
    pub const fn coords(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Whether the entry lies inside a `rows x cols` grid
    pub const fn in_bounds(&self, rows: usize, cols: usize) -> bool {
        self.row < rows && self.col < cols
    }
}

impl From<(usize, usize, i64)> for Entry {
    fn from((row, col, value): (usize, usize, i64)) -> Self {
        Self::new(row, col, value)
    }
}

impl core::fmt::Display for Entry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({},{},{})", self.row, self.col, self.value)
    }
}
