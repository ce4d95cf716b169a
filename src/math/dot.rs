use log::trace;
use rayon::prelude::*;

use crate::math::error::MatrixError;
use crate::math::matrix::Matrix;

/// Standard matrix product: given `a` (HxK) and `b` (KxW), returns the HxW
/// matrix with `out[i, j] = sum over k of a[i, k] * b[k, j]`.
///
/// The dimension check runs before any work is dispatched. The kernel is a
/// bespoke triple loop, not a callback over the elementwise dispatcher: the
/// output is split into contiguous row blocks across the worker pool, and
/// each worker accumulates inner products directly into the output cells it
/// exclusively owns. The i-k-j loop order keeps the innermost walk
/// contiguous through both `b` and the output row.
pub fn dot(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    if a.width() != b.height() {
        return Err(MatrixError::DimensionMismatch {
            left: (a.height(), a.width()),
            right: (b.height(), b.width()),
        });
    }
    trace!(
        "dot: {}x{} by {}x{}",
        a.height(),
        a.width(),
        b.height(),
        b.width()
    );

    let inner = a.width();
    let width = b.width();
    let mut out = Matrix::zeros(a.height(), width);
    let lhs = a.as_slice();
    let rhs = b.as_slice();

    out.as_mut_slice()
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(i, out_row)| {
            let a_row = &lhs[i * inner..(i + 1) * inner];
            for (k, &aik) in a_row.iter().enumerate() {
                let b_row = &rhs[k * width..(k + 1) * width];
                for (cell, &bkj) in out_row.iter_mut().zip(b_row) {
                    *cell += aik * bkj;
                }
            }
        });

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_concrete() {
        let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let b = Matrix::from_rows(vec![vec![5.0, 6.0], vec![7.0, 8.0]]).unwrap();
        let c = dot(&a, &b).unwrap();
        assert_eq!(c.as_slice(), &[19.0, 22.0, 43.0, 50.0]);
    }

    #[test]
    fn dot_with_identity_is_a_noop() {
        let a = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        let c = dot(&a, &Matrix::identity(3)).unwrap();
        assert_eq!(c, a);
    }

    #[test]
    fn dot_rectangular_shapes() {
        // (1x3) * (3x2) -> (1x2)
        let a = Matrix::from_row(vec![1.0, 2.0, 3.0]);
        let b = Matrix::from_rows(vec![vec![1.0, 4.0], vec![2.0, 5.0], vec![3.0, 6.0]]).unwrap();
        let c = dot(&a, &b).unwrap();
        assert_eq!(c.height(), 1);
        assert_eq!(c.width(), 2);
        assert_eq!(c.as_slice(), &[14.0, 32.0]);
    }

    #[test]
    fn dot_is_associative_within_tolerance() {
        let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let b = Matrix::from_rows(vec![vec![0.5, -1.0, 2.0], vec![1.5, 0.25, -0.5]]).unwrap();
        let c = Matrix::from_rows(vec![vec![2.0], vec![-1.0], vec![0.75]]).unwrap();

        let left = dot(&dot(&a, &b).unwrap(), &c).unwrap();
        let right = dot(&a, &dot(&b, &c).unwrap()).unwrap();
        assert!(left.approx_eq(&right, 1e-9));
    }

    #[test]
    fn dot_rejects_mismatched_inner_dimensions() {
        let a = Matrix::zeros(2, 3);
        let b = Matrix::zeros(4, 5);
        assert!(matches!(
            dot(&a, &b),
            Err(MatrixError::DimensionMismatch {
                left: (2, 3),
                right: (4, 5)
            })
        ));
    }

    #[test]
    fn dot_leaves_operands_untouched() {
        let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let b = Matrix::identity(2);
        let _ = dot(&a, &b).unwrap();
        assert_eq!(a.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(b, Matrix::identity(2));
    }
}
