#![no_std]

//! spmat core - coordinate-list sparse integer matrices
//!
//! This crate provides the sparse matrix type, its text format parser and
//! the element-wise and matrix-product arithmetic. It performs no I/O; file
//! handling lives in the `spmat` crate.

extern crate alloc;

pub mod entry;
pub mod error;
pub mod matrix;
pub mod operation;
pub mod parsing;
pub mod render;
pub mod traits;

pub use entry::Entry;
pub use error::*;
pub use matrix::SparseMatrix;
pub use operation::Operation;
pub use parsing::{parse_entry_line, parse_header_line};
pub use render::DenseGrid;
pub use traits::MatrixAccess;
