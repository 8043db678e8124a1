//! Loading matrices from files and readers

use std::fs::File;
use std::io::Read;
use std::path::Path;

use spmat_core::SparseMatrix;
use tracing::debug;

use crate::LoadError;

/// Read and parse the matrix stored at `path`
///
/// The file is opened, read to the end and closed before parsing starts.
/// Failure to open or read it is reported as [`LoadError::Io`]; malformed
/// contents as [`LoadError::Matrix`].
pub fn read_matrix<P: AsRef<Path>>(path: P) -> Result<SparseMatrix, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_matrix_from(file, path)
}

/// Read and parse a matrix from any reader
///
/// `origin` names the source in error messages. Bytes that are not valid
/// UTF-8 are replaced before parsing, so they surface as a format error on
/// the line that contains them.
pub fn read_matrix_from<R: Read, P: AsRef<Path>>(
    mut reader: R,
    origin: P,
) -> Result<SparseMatrix, LoadError> {
    let origin = origin.as_ref();

    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|source| LoadError::Io {
            path: origin.to_path_buf(),
            source,
        })?;

    let text = String::from_utf8_lossy(&bytes);
    let matrix = SparseMatrix::parse(&text).map_err(|source| LoadError::Matrix {
        path: origin.to_path_buf(),
        source,
    })?;

    let (rows, cols) = matrix.dimensions();
    debug!(
        "Loaded {}: {rows}x{cols} with {} entries",
        origin.display(),
        matrix.nnz()
    );

    Ok(matrix)
}
