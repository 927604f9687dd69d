//! Fixed-shape matrix pool for algorithm scratch space.
//!
//! Iterative factorizations need O(iterations) scratch matrices of one
//! shape. `MatrixStack` pre-allocates a fixed number of them and hands
//! them out LIFO, so peak memory stays at `capacity x shape` no matter
//! how many iterations run. `pop` transfers ownership to the caller and
//! `push` returns the matrix for reuse; a popped matrix stays valid
//! until the caller drops it, even across `release_all`.

use num_traits::Float;

use crate::error::QrError;
use crate::matrix::Matrix;

/// LIFO pool of pre-allocated matrices sharing one configured shape.
#[derive(Debug)]
pub struct MatrixStack<T> {
    rows: usize,
    cols: usize,
    capacity: usize,
    free: Vec<Matrix<T>>,
}

impl<T: Float> MatrixStack<T> {
    /// Pre-allocate `capacity` zeroed matrices of shape `rows x cols`.
    pub fn new(rows: usize, cols: usize, capacity: usize) -> Self {
        let free = (0..capacity).map(|_| Matrix::zeros(rows, cols)).collect();
        Self {
            rows,
            cols,
            capacity,
            free,
        }
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of matrices currently checked out.
    pub fn in_use(&self) -> usize {
        self.capacity - self.free.len()
    }

    /// Hand out the most recently returned (else the next unused)
    /// matrix. Contents are whatever the previous holder left behind.
    pub fn pop(&mut self) -> Result<Matrix<T>, QrError> {
        self.free.pop().ok_or(QrError::PoolExhausted(self.capacity))
    }

    /// Return a matrix to the pool for reuse.
    pub fn push(&mut self, matrix: Matrix<T>) -> Result<(), QrError> {
        if matrix.shape() != (self.rows, self.cols) {
            return Err(QrError::ShapeMismatch {
                expected_rows: self.rows,
                expected_cols: self.cols,
                rows: matrix.rows(),
                cols: matrix.cols(),
            });
        }
        if self.free.len() == self.capacity {
            return Err(QrError::PoolFull(self.capacity));
        }
        self.free.push(matrix);
        Ok(())
    }

    /// Drop every pooled slot and mark the pool spent; subsequent `pop`
    /// calls report exhaustion. Matrices still checked out remain owned
    /// by their holders.
    pub fn release_all(&mut self) {
        self.free.clear();
        self.capacity = 0;
    }
}
