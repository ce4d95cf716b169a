use std::fmt;
use std::ops::{Index, IndexMut};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::math::error::MatrixError;
use crate::math::parallel;

/// A dense two-dimensional grid of `f64` values stored row-major in a single
/// contiguous buffer.
///
/// Both dimensions are strictly positive and fixed for the lifetime of the
/// value. Every operation returns a freshly allocated matrix; operands are
/// never mutated and results never alias their inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    height: usize,
    width: usize,
    data: Vec<f64>,
}

impl Matrix {
    pub fn zeros(height: usize, width: usize) -> Matrix {
        assert!(
            height > 0 && width > 0,
            "matrix dimensions must be positive, got {}x{}",
            height,
            width
        );
        Matrix {
            height,
            width,
            data: vec![0.0; height * width],
        }
    }

    /// Adopts a flat row-major buffer without copying it.
    pub fn from_vec(height: usize, width: usize, data: Vec<f64>) -> Result<Matrix, MatrixError> {
        assert!(
            height > 0 && width > 0,
            "matrix dimensions must be positive, got {}x{}",
            height,
            width
        );
        if data.len() != height * width {
            return Err(MatrixError::LengthMismatch {
                expected: height * width,
                found: data.len(),
            });
        }
        Ok(Matrix {
            height,
            width,
            data,
        })
    }

    /// Flattens a nested grid of rows. Every row must have the same length.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Matrix, MatrixError> {
        assert!(!rows.is_empty(), "matrix must have at least one row");
        let width = rows[0].len();
        assert!(width > 0, "matrix rows must not be empty");
        for row in &rows {
            if row.len() != width {
                return Err(MatrixError::LengthMismatch {
                    expected: width,
                    found: row.len(),
                });
            }
        }
        let height = rows.len();
        let data = rows.into_iter().flatten().collect();
        Ok(Matrix {
            height,
            width,
            data,
        })
    }

    /// Wraps a one-dimensional buffer as a single-row (1xN) matrix.
    pub fn from_row(row: Vec<f64>) -> Matrix {
        assert!(!row.is_empty(), "matrix rows must not be empty");
        Matrix {
            height: 1,
            width: row.len(),
            data: row,
        }
    }

    /// Fills a new matrix with values drawn uniformly from `[0, 1)`.
    pub fn random(rng: &mut impl Rng, height: usize, width: usize) -> Matrix {
        let mut m = Matrix::zeros(height, width);
        for cell in &mut m.data {
            *cell = rng.gen::<f64>();
        }
        m
    }

    /// Weight initialization: values drawn uniformly from
    /// `-1/sqrt(width) .. 1/sqrt(width)`, so the range shrinks as the
    /// fan-in grows.
    pub fn random_scaled(rng: &mut impl Rng, height: usize, width: usize) -> Matrix {
        let bound = 1.0 / (width as f64).sqrt();
        let mut m = Matrix::zeros(height, width);
        for cell in &mut m.data {
            *cell = rng.gen::<f64>() * (2.0 * bound) - bound;
        }
        m
    }

    pub fn identity(size: usize) -> Matrix {
        let mut m = Matrix::zeros(size, size);
        for i in 0..size {
            m.data[i * size + i] = 1.0;
        }
        m
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Checked cell read for indices that come from external calculation.
    pub fn get(&self, row: usize, col: usize) -> Result<f64, MatrixError> {
        if row < self.height && col < self.width {
            Ok(self.data[row * self.width + col])
        } else {
            Err(self.out_of_bounds(row, col))
        }
    }

    /// Checked cell write for indices that come from external calculation.
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<(), MatrixError> {
        if row < self.height && col < self.width {
            self.data[row * self.width + col] = value;
            Ok(())
        } else {
            Err(self.out_of_bounds(row, col))
        }
    }

    fn out_of_bounds(&self, row: usize, col: usize) -> MatrixError {
        MatrixError::IndexOutOfBounds {
            row,
            col,
            height: self.height,
            width: self.width,
        }
    }

    pub fn row(&self, row: usize) -> &[f64] {
        assert!(
            row < self.height,
            "row {} out of bounds for {}x{} matrix",
            row,
            self.height,
            self.width
        );
        &self.data[row * self.width..(row + 1) * self.width]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Consumes the matrix, returning its row-major buffer.
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    fn zip_with<F>(&self, rhs: &Matrix, f: F) -> Result<Matrix, MatrixError>
    where
        F: Fn(f64, f64) -> f64 + Sync,
    {
        if self.height != rhs.height || self.width != rhs.width {
            return Err(MatrixError::ShapeMismatch {
                left: (self.height, self.width),
                right: (rhs.height, rhs.width),
            });
        }
        let mut out = Matrix::zeros(self.height, self.width);
        parallel::fill(&mut out, |row, col| f(self[(row, col)], rhs[(row, col)]));
        Ok(out)
    }

    /// Elementwise sum of two same-shape matrices.
    pub fn add(&self, rhs: &Matrix) -> Result<Matrix, MatrixError> {
        self.zip_with(rhs, |a, b| a + b)
    }

    /// Elementwise difference of two same-shape matrices.
    pub fn sub(&self, rhs: &Matrix) -> Result<Matrix, MatrixError> {
        self.zip_with(rhs, |a, b| a - b)
    }

    /// Elementwise (Hadamard) product of two same-shape matrices. For the
    /// standard matrix product see [`dot`](crate::math::dot::dot).
    pub fn mul(&self, rhs: &Matrix) -> Result<Matrix, MatrixError> {
        self.zip_with(rhs, |a, b| a * b)
    }

    /// Elementwise quotient of two same-shape matrices. Division by a zero
    /// cell yields `inf`/`NaN` per IEEE-754; it is never an error.
    pub fn div(&self, rhs: &Matrix) -> Result<Matrix, MatrixError> {
        self.zip_with(rhs, |a, b| a / b)
    }

    pub fn add_scalar(&self, value: f64) -> Matrix {
        parallel::map(self, |x| x + value)
    }

    pub fn sub_scalar(&self, value: f64) -> Matrix {
        parallel::map(self, |x| x - value)
    }

    pub fn mul_scalar(&self, value: f64) -> Matrix {
        parallel::map(self, |x| x * value)
    }

    /// Divides every cell by `value`. Dividing by `0.0` yields `inf`/`NaN`
    /// per IEEE-754; it is never an error.
    pub fn div_scalar(&self, value: f64) -> Matrix {
        parallel::map(self, |x| x / value)
    }

    /// Smallest value in the matrix. Each row computes a local minimum in
    /// parallel and the per-row results are merged once all rows finish.
    pub fn min(&self) -> f64 {
        parallel::reduce_rows(
            self,
            f64::INFINITY,
            |row| row.iter().copied().fold(f64::INFINITY, f64::min),
            f64::min,
        )
    }

    /// Largest value in the matrix, via the same fan-in as [`Matrix::min`].
    pub fn max(&self) -> f64 {
        parallel::reduce_rows(
            self,
            f64::NEG_INFINITY,
            |row| row.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            f64::max,
        )
    }

    /// Returns the `width x height` matrix with `out[j, i] = self[i, j]`.
    pub fn transpose(&self) -> Matrix {
        let mut out = Matrix::zeros(self.width, self.height);
        parallel::fill(&mut out, |row, col| self[(col, row)]);
        out
    }

    /// Elementwise equality within an absolute tolerance; shapes must match.
    pub fn approx_eq(&self, other: &Matrix, tolerance: f64) -> bool {
        self.height == other.height
            && self.width == other.width
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| (a - b).abs() <= tolerance)
    }
}

/// Subtracts every cell from `value`, i.e. the `scalar - matrix` operand
/// order. The commutative orders are covered by [`Matrix::add_scalar`] and
/// [`Matrix::mul_scalar`].
pub fn scalar_sub(value: f64, matrix: &Matrix) -> Matrix {
    parallel::map(matrix, |x| value - x)
}

/// Divides `value` by every cell, i.e. the `scalar / matrix` operand order.
pub fn scalar_div(value: f64, matrix: &Matrix) -> Matrix {
    parallel::map(matrix, |x| value / x)
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(
            row < self.height && col < self.width,
            "index ({}, {}) out of bounds for {}x{} matrix",
            row,
            col,
            self.height,
            self.width
        );
        &self.data[row * self.width + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        assert!(
            row < self.height && col < self.width,
            "index ({}, {}) out of bounds for {}x{} matrix",
            row,
            col,
            self.height,
            self.width
        );
        &mut self.data[row * self.width + col]
    }
}

impl fmt::Display for Matrix {
    /// Bracketed, tab-separated, one row per line:
    /// `[\n  [v00\tv01]\n  [v10\tv11]\n]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[")?;
        for row in 0..self.height {
            let cells = self
                .row(row)
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join("\t");
            writeln!(f, "  [{}]", cells)?;
        }
        write!(f, "]")
    }
}
