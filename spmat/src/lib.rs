//! spmat - coordinate-list sparse matrix arithmetic
//!
//! This library loads sparse integer matrices from their text form, combines
//! them with `add`, `subtract` or `multiply`, and renders the result as a
//! dense grid or JSON.
//!
//! ## Architecture
//!
//! - **spmat-core**: the matrix type, text format parser and arithmetic (no I/O)
//! - **spmat**: file loading, output configuration and the `spmat` binary
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use spmat::{read_matrix, Operation};
//!
//! fn example() -> anyhow::Result<()> {
//!     let lhs = read_matrix("a.txt")?;
//!     let rhs = read_matrix("b.txt")?;
//!
//!     let product = Operation::Multiply.apply(&lhs, &rhs)?;
//!     print!("{product}");
//!     Ok(())
//! }
//! ```

// Re-export core abstractions
pub use spmat_core::{
    DenseGrid, Entry, FormatErrorKind, MatrixAccess, Operation, Result, SparseMatrix, SpmatError,
};

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod prompt;
pub mod reader;

pub use config::{OutputFormat, RenderConfig};
pub use error::LoadError;
pub use output::write_matrix;
pub use reader::{read_matrix, read_matrix_from};
