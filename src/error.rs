use thiserror::Error;

// Unified error type for qrkit

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QrError {
    #[error("shape mismatch: expected {expected_rows}x{expected_cols}, got {rows}x{cols}")]
    ShapeMismatch {
        expected_rows: usize,
        expected_cols: usize,
        rows: usize,
        cols: usize,
    },
    #[error("matrix is not square ({rows}x{cols})")]
    NotSquare { rows: usize, cols: usize },
    #[error("index {index} out of bounds for axis of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
    #[error("cannot normalize column {0}: norm is zero")]
    ZeroNorm(usize),
    #[error("cannot project onto zero vector (column {0})")]
    ZeroVectorProjection(usize),
    #[error("matrix pool exhausted (capacity {0})")]
    PoolExhausted(usize),
    #[error("matrix pool already holds all {0} slots")]
    PoolFull(usize),
}
