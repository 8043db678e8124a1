//! Writing result matrices

use std::io::{self, Write};

use spmat_core::SparseMatrix;

use crate::{OutputFormat, RenderConfig};

/// Write `matrix` to `out` as described by `config`
pub fn write_matrix<W: Write>(
    mut out: W,
    matrix: &SparseMatrix,
    config: &RenderConfig,
) -> io::Result<()> {
    if config.header {
        writeln!(out, "Result:")?;
    }

    match config.format {
        OutputFormat::Dense => {
            let grid = matrix
                .dense()
                .with_trailing_separator(config.trailing_separator);
            write!(out, "{grid}")?;
        }
        #[cfg(feature = "serde")]
        OutputFormat::Json => write_json(&mut out, matrix)?,
    }

    out.flush()
}

#[cfg(feature = "serde")]
fn write_json<W: Write>(out: &mut W, matrix: &SparseMatrix) -> io::Result<()> {
    use spmat_core::Entry;

    #[derive(serde::Serialize)]
    struct JsonMatrix<'a> {
        rows: usize,
        cols: usize,
        entries: Vec<&'a Entry>,
    }

    let (rows, cols) = matrix.dimensions();
    let doc = JsonMatrix {
        rows,
        cols,
        entries: matrix
            .entries()
            .iter()
            .filter(|e| e.in_bounds(rows, cols))
            .collect(),
    };

    serde_json::to_writer(&mut *out, &doc)?;
    writeln!(out)
}
