use thiserror::Error;

/// Every failure a matrix operation can surface.
///
/// Shape and dimension checks run before any parallel work is dispatched,
/// so a returned error always means no partial result was produced.
#[derive(Debug, Error)]
pub enum MatrixError {
    /// Elementwise operation on two matrices of differing shape.
    #[error("shape mismatch: left is {}x{}, right is {}x{}", left.0, left.1, right.0, right.1)]
    ShapeMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },

    /// `dot(a, b)` where `a.width() != b.height()`.
    #[error("cannot multiply {}x{} by {}x{}: inner dimensions differ", left.0, left.1, right.0, right.1)]
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },

    /// Checked cell access outside `[0, height) x [0, width)`.
    #[error("index ({row}, {col}) out of bounds for {height}x{width} matrix")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    },

    /// A buffer's length disagrees with the shape it was paired with.
    #[error("length mismatch: expected {expected} values, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    /// A sub-array range falls outside the source array.
    #[error("range {start}..={end} out of bounds for array of length {len}")]
    RangeOutOfBounds {
        start: usize,
        end: usize,
        len: usize,
    },

    /// Persistence read/write failure.
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),

    /// The on-disk container could not be decoded.
    #[error("corrupt container: {0}")]
    Codec(#[from] bincode::Error),
}
