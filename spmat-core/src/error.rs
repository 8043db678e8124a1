//! Error types for sparse matrix operations

use crate::Operation;

/// Reason a line of matrix text was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatErrorKind {
    /// Input ended before the `rows=`/`cols=` header was complete
    MissingHeader,
    /// Header line does not match `rows=<int>` or `cols=<int>`
    BadHeader,
    /// Entry line does not match `(<row>,<col>,<value>)`
    BadEntry,
    /// Entry line names a negative row or column
    NegativeIndex,
}

impl core::fmt::Display for FormatErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            FormatErrorKind::MissingHeader => "missing dimension header",
            FormatErrorKind::BadHeader => "malformed dimension header",
            FormatErrorKind::BadEntry => "malformed entry",
            FormatErrorKind::NegativeIndex => "negative entry index",
        };
        write!(f, "{msg}")
    }
}

/// Errors that can occur while loading or combining sparse matrices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpmatError {
    /// Matrix source could not be opened or read
    Io,
    /// Matrix text does not follow the input format
    Format {
        /// 1-based line number of the offending line
        line: usize,
        reason: FormatErrorKind,
    },
    /// Operand shapes are incompatible for the requested operation
    DimensionMismatch {
        operation: Operation,
        lhs: (usize, usize),
        rhs: (usize, usize),
    },
    /// Operation name is not `add`, `subtract` or `multiply`
    InvalidOperation,
    /// Result value does not fit in an `i64`
    ArithmeticOverflow,
}

impl SpmatError {
    /// Shorthand for a format error at `line`
    pub const fn format(line: usize, reason: FormatErrorKind) -> Self {
        SpmatError::Format { line, reason }
    }
}

impl core::fmt::Display for SpmatError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SpmatError::Io => write!(f, "Unable to open file"),
            SpmatError::Format { line, reason } => {
                write!(f, "Input file has wrong format (line {line}: {reason})")
            }
            SpmatError::DimensionMismatch { operation, lhs, rhs } => {
                let verb = match operation {
                    Operation::Multiply => "are not compatible for",
                    Operation::Add | Operation::Subtract => "do not match for",
                };
                write!(
                    f,
                    "Matrix dimensions {verb} {operation} ({}x{} vs {}x{})",
                    lhs.0, lhs.1, rhs.0, rhs.1
                )
            }
            SpmatError::InvalidOperation => write!(f, "Invalid operation"),
            SpmatError::ArithmeticOverflow => write!(f, "Arithmetic overflow in matrix value"),
        }
    }
}

impl core::error::Error for SpmatError {}

/// Result type for sparse matrix operations
pub type Result<T> = core::result::Result<T, SpmatError>;
