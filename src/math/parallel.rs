use rayon::prelude::*;

use crate::math::matrix::Matrix;

/// Fills every cell of `out` with `f(row, col)`, parallelized by row.
///
/// Rows are split across the shared rayon pool; each worker owns a disjoint
/// block of output rows and walks its columns strictly left to right. Every
/// (row, col) pair is visited exactly once. There is no ordering guarantee
/// across rows, so `f` must not depend on any cell other than the one it is
/// asked to produce.
pub fn fill<F>(out: &mut Matrix, f: F)
where
    F: Fn(usize, usize) -> f64 + Sync,
{
    let width = out.width();
    out.as_mut_slice()
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(row, cells)| {
            for (col, cell) in cells.iter_mut().enumerate() {
                *cell = f(row, col);
            }
        });
}

/// Applies `f` to every cell of `source`, returning the results as a new
/// matrix of the same shape.
pub fn map<F>(source: &Matrix, f: F) -> Matrix
where
    F: Fn(f64) -> f64 + Sync,
{
    let mut out = Matrix::zeros(source.height(), source.width());
    fill(&mut out, |row, col| f(source[(row, col)]));
    out
}

/// Fan-in reduction over rows: each row is collapsed to a single value in
/// parallel, and the per-row values are merged once all rows have finished.
/// No accumulator is ever shared between workers.
pub fn reduce_rows<T, R, M>(matrix: &Matrix, identity: T, per_row: R, merge: M) -> T
where
    T: Copy + Send + Sync,
    R: Fn(&[f64]) -> T + Send + Sync,
    M: Fn(T, T) -> T + Send + Sync,
{
    matrix
        .as_slice()
        .par_chunks(matrix.width())
        .map(per_row)
        .reduce(|| identity, merge)
}
