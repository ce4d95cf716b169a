use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use log::debug;

use crate::math::error::MatrixError;
use crate::math::matrix::Matrix;

/// Serializes a matrix to a binary container at `path`, creating or
/// truncating the file. The container holds the shape plus the flat
/// row-major value sequence; round-tripping through [`load_matrix`] is
/// bit-exact for every `f64`, finite or not.
pub fn save_matrix<P: AsRef<Path>>(matrix: &Matrix, path: P) -> Result<(), MatrixError> {
    debug!(
        "saving {}x{} matrix to {}",
        matrix.height(),
        matrix.width(),
        path.as_ref().display()
    );
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    bincode::serialize_into(writer, matrix)?;
    Ok(())
}

/// Deserializes a matrix previously written by [`save_matrix`]. A container
/// whose recorded shape disagrees with its stored value count is rejected.
pub fn load_matrix<P: AsRef<Path>>(path: P) -> Result<Matrix, MatrixError> {
    let file = File::open(&path)?;
    let reader = BufReader::new(file);
    let matrix: Matrix = bincode::deserialize_from(reader)?;

    let expected = matrix.height() * matrix.width();
    if matrix.height() == 0 || matrix.width() == 0 || matrix.as_slice().len() != expected {
        return Err(MatrixError::LengthMismatch {
            expected,
            found: matrix.as_slice().len(),
        });
    }
    debug!(
        "loaded {}x{} matrix from {}",
        matrix.height(),
        matrix.width(),
        path.as_ref().display()
    );
    Ok(matrix)
}

/// Serializes a bare one-dimensional array to a binary container.
pub fn save_array<P: AsRef<Path>>(values: &[f64], path: P) -> Result<(), MatrixError> {
    debug!(
        "saving {}-element array to {}",
        values.len(),
        path.as_ref().display()
    );
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    bincode::serialize_into(writer, values)?;
    Ok(())
}

/// Deserializes an array previously written by [`save_array`].
pub fn load_array<P: AsRef<Path>>(path: P) -> Result<Vec<f64>, MatrixError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let values = bincode::deserialize_from(reader)?;
    Ok(values)
}
