//! Dense matrix storage with a fixed shape and in-place mutation.
//!
//! `Matrix<T>` is a row-major 2D container over a floating-point scalar.
//! The shape is set at construction and never changes; every operation
//! that reads or writes a matrix validates operand shapes first and
//! reports violations as [`QrError`] values instead of touching memory.

use std::fmt;
use std::ops::{Index, IndexMut};

use num_traits::Float;
use rand::Rng;
use rand::distributions::{Distribution, Standard};

use crate::error::QrError;

/// Dense row-major matrix of floating-point values.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Float> Matrix<T> {
    /// Create a `rows x cols` matrix of zeros. Both dimensions must be
    /// nonzero.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "matrix shape must be nonzero");
        Self {
            rows,
            cols,
            data: vec![T::zero(); rows * cols],
        }
    }

    /// Create the `n x n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = T::one();
        }
        m
    }

    /// Build a matrix from a function of the `(row, col)` position.
    pub fn from_fn<F: FnMut(usize, usize) -> T>(rows: usize, cols: usize, mut f: F) -> Self {
        let mut m = Self::zeros(rows, cols);
        for i in 0..rows {
            for j in 0..cols {
                m[(i, j)] = f(i, j);
            }
        }
        m
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Fill every entry with a uniform random value in `[-scale, scale]`.
    ///
    /// The RNG is caller-supplied so results are reproducible from a
    /// seeded generator.
    pub fn fill_random<R: Rng>(&mut self, rng: &mut R, scale: T)
    where
        Standard: Distribution<T>,
    {
        for v in self.data.iter_mut() {
            let r: T = rng.r#gen();
            *v = (r + r - T::one()) * scale;
        }
    }

    /// Set the matrix to `value` times the identity.
    pub fn set_identity(&mut self, value: T) -> Result<(), QrError> {
        self.check_square()?;
        for i in 0..self.rows {
            for j in 0..self.cols {
                self[(i, j)] = if i == j { value } else { T::zero() };
            }
        }
        Ok(())
    }

    /// Set every entry to `value`.
    pub fn fill(&mut self, value: T) {
        for v in self.data.iter_mut() {
            *v = value;
        }
    }

    pub(crate) fn check_square(&self) -> Result<(), QrError> {
        if !self.is_square() {
            return Err(QrError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    pub(crate) fn check_same_shape(&self, other: &Self) -> Result<(), QrError> {
        if self.shape() != other.shape() {
            return Err(QrError::ShapeMismatch {
                expected_rows: self.rows,
                expected_cols: self.cols,
                rows: other.rows,
                cols: other.cols,
            });
        }
        Ok(())
    }

    pub(crate) fn check_row(&self, idx: usize) -> Result<(), QrError> {
        if idx >= self.rows {
            return Err(QrError::IndexOutOfBounds {
                index: idx,
                len: self.rows,
            });
        }
        Ok(())
    }

    pub(crate) fn check_col(&self, idx: usize) -> Result<(), QrError> {
        if idx >= self.cols {
            return Err(QrError::IndexOutOfBounds {
                index: idx,
                len: self.cols,
            });
        }
        Ok(())
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &T {
        assert!(i < self.rows && j < self.cols, "matrix index out of bounds");
        &self.data[i * self.cols + j]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        assert!(i < self.rows && j < self.cols, "matrix index out of bounds");
        &mut self.data[i * self.cols + j]
    }
}

/// Fixed-width grid rendering, used by the verbose solver traces.
impl<T: Float + fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            for j in 0..self.cols {
                write!(f, "{:>12.6} ", self[(i, j)])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
