use rand::Rng;

use crate::math::error::MatrixError;
use crate::math::matrix::Matrix;

/// Reshapes a flat row-major buffer into a `height x width` matrix.
/// The length must match exactly; there is no padding.
pub fn reshape(values: &[f64], height: usize, width: usize) -> Result<Matrix, MatrixError> {
    Matrix::from_vec(height, width, values.to_vec())
}

/// Flattens a matrix back into its row-major value sequence.
pub fn flatten(matrix: &Matrix) -> Vec<f64> {
    matrix.as_slice().to_vec()
}

/// Copies the tail of `values` starting at `start`. `start == len` yields an
/// empty array.
pub fn cut(values: &[f64], start: usize) -> Result<Vec<f64>, MatrixError> {
    if start > values.len() {
        return Err(MatrixError::RangeOutOfBounds {
            start,
            end: values.len(),
            len: values.len(),
        });
    }
    Ok(values[start..].to_vec())
}

/// Copies `values[start..=end]`, both endpoints inclusive.
pub fn cut_range(values: &[f64], start: usize, end: usize) -> Result<Vec<f64>, MatrixError> {
    if start > end || end >= values.len() {
        return Err(MatrixError::RangeOutOfBounds {
            start,
            end,
            len: values.len(),
        });
    }
    Ok(values[start..=end].to_vec())
}

/// Renders a one-dimensional array the way [`Matrix`] renders a row:
/// `[v0\tv1\t...]`.
pub fn render(values: &[f64]) -> String {
    let cells = values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("\t");
    format!("[{}]", cells)
}

/// One-dimensional companion of [`Matrix::random`]: `length` values drawn
/// uniformly from `[0, 1)`.
pub fn random_vec(rng: &mut impl Rng, length: usize) -> Vec<f64> {
    (0..length).map(|_| rng.gen::<f64>()).collect()
}

/// One-dimensional companion of [`Matrix::random_scaled`]: values drawn
/// uniformly from `-1/sqrt(length) .. 1/sqrt(length)`.
pub fn random_scaled_vec(rng: &mut impl Rng, length: usize) -> Vec<f64> {
    let bound = 1.0 / (length as f64).sqrt();
    (0..length)
        .map(|_| rng.gen::<f64>() * (2.0 * bound) - bound)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn reshape_is_row_major() {
        let m = reshape(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3).unwrap();
        assert_eq!(m[(0, 0)], 1.0);
        assert_eq!(m[(0, 2)], 3.0);
        assert_eq!(m[(1, 0)], 4.0);
        assert_eq!(m[(1, 2)], 6.0);
    }

    #[test]
    fn reshape_rejects_length_mismatch() {
        let err = reshape(&[1.0, 2.0, 3.0], 2, 2).unwrap_err();
        assert!(matches!(
            err,
            MatrixError::LengthMismatch {
                expected: 4,
                found: 3
            }
        ));
    }

    #[test]
    fn reshape_then_flatten_roundtrips() {
        let values = [0.5, -1.5, 2.5, -3.5, 4.5, -5.5];
        let m = reshape(&values, 3, 2).unwrap();
        assert_eq!(flatten(&m), values);
    }

    #[test]
    fn cut_from_start_index() {
        let values = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(cut(&values, 0).unwrap(), values);
        assert_eq!(cut(&values, 2).unwrap(), &[3.0, 4.0]);
        assert!(cut(&values, 4).unwrap().is_empty());
        assert!(matches!(
            cut(&values, 5),
            Err(MatrixError::RangeOutOfBounds { .. })
        ));
    }

    #[test]
    fn cut_range_is_inclusive() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(cut_range(&values, 1, 3).unwrap(), &[2.0, 3.0, 4.0]);
        assert_eq!(cut_range(&values, 2, 2).unwrap(), &[3.0]);
        assert!(matches!(
            cut_range(&values, 1, 5),
            Err(MatrixError::RangeOutOfBounds { .. })
        ));
        assert!(matches!(
            cut_range(&values, 3, 1),
            Err(MatrixError::RangeOutOfBounds { .. })
        ));
    }

    #[test]
    fn render_matches_matrix_row_format() {
        assert_eq!(render(&[1.0, 2.5, -3.0]), "[1\t2.5\t-3]");
        assert_eq!(render(&[7.0]), "[7]");
    }

    #[test]
    fn random_vec_length_and_range() {
        let mut rng = StdRng::seed_from_u64(11);
        let v = random_vec(&mut rng, 64);
        assert_eq!(v.len(), 64);
        assert!(v.iter().all(|&x| (0.0..1.0).contains(&x)));
    }

    #[test]
    fn random_scaled_vec_respects_bound() {
        let mut rng = StdRng::seed_from_u64(13);
        let length = 25;
        let bound = 1.0 / (length as f64).sqrt();
        let v = random_scaled_vec(&mut rng, length);
        assert_eq!(v.len(), length);
        assert!(v.iter().all(|&x| (-bound..bound).contains(&x)));
    }
}
