//! Primitive matrix and vector operations.
//!
//! Everything the QR engines are composed from lives here: copies,
//! transposes, column and whole-matrix arithmetic, reductions, inner
//! products and norms, normalization, outer products, the matrix
//! product, and vector projection. All operations are shape-checked and
//! surface violations as [`QrError`] to the direct caller.

use num_traits::Float;

use crate::error::QrError;
use crate::matrix::Matrix;

/// Selects whether an indexed vector operation reads a row or a column.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Orientation {
    Row,
    Column,
}

impl<T: Float> Matrix<T> {
    /// Element-wise copy of `source` into `self`. Shapes must match.
    pub fn copy_from(&mut self, source: &Self) -> Result<(), QrError> {
        self.check_same_shape(source)?;
        for i in 0..self.rows() {
            for j in 0..self.cols() {
                self[(i, j)] = source[(i, j)];
            }
        }
        Ok(())
    }

    /// Write the transpose of `self` into `target`, whose shape must be
    /// `(self.cols, self.rows)`.
    pub fn transpose_into(&self, target: &mut Self) -> Result<(), QrError> {
        if target.shape() != (self.cols(), self.rows()) {
            return Err(QrError::ShapeMismatch {
                expected_rows: self.cols(),
                expected_cols: self.rows(),
                rows: target.rows(),
                cols: target.cols(),
            });
        }
        for i in 0..self.rows() {
            for j in 0..self.cols() {
                target[(j, i)] = self[(i, j)];
            }
        }
        Ok(())
    }

    /// Multiply every entry by `scalar` in place.
    pub fn scale(&mut self, scalar: T) {
        for i in 0..self.rows() {
            for j in 0..self.cols() {
                self[(i, j)] = self[(i, j)] * scalar;
            }
        }
    }

    /// Multiply column `idx` by `scalar` in place.
    pub fn scale_column(&mut self, idx: usize, scalar: T) -> Result<(), QrError> {
        self.check_col(idx)?;
        for i in 0..self.rows() {
            self[(i, idx)] = self[(i, idx)] * scalar;
        }
        Ok(())
    }

    /// Replace every entry with its absolute value, in place.
    pub fn abs_in_place(&mut self) {
        for i in 0..self.rows() {
            for j in 0..self.cols() {
                self[(i, j)] = self[(i, j)].abs();
            }
        }
    }

    /// Element-wise `self += source`. Shapes must match.
    pub fn add(&mut self, source: &Self) -> Result<(), QrError> {
        self.check_same_shape(source)?;
        for i in 0..self.rows() {
            for j in 0..self.cols() {
                self[(i, j)] = self[(i, j)] + source[(i, j)];
            }
        }
        Ok(())
    }

    /// Element-wise `self -= source`. Shapes must match.
    pub fn subtract(&mut self, source: &Self) -> Result<(), QrError> {
        self.check_same_shape(source)?;
        for i in 0..self.rows() {
            for j in 0..self.cols() {
                self[(i, j)] = self[(i, j)] - source[(i, j)];
            }
        }
        Ok(())
    }

    /// Add column `src_idx` of `source` into column `idx` of `self`.
    /// Row counts must match.
    pub fn add_column(&mut self, idx: usize, source: &Self, src_idx: usize) -> Result<(), QrError> {
        self.check_col(idx)?;
        source.check_col(src_idx)?;
        self.check_column_lengths(source)?;
        for i in 0..self.rows() {
            self[(i, idx)] = self[(i, idx)] + source[(i, src_idx)];
        }
        Ok(())
    }

    /// Subtract column `src_idx` of `source` from column `idx` of `self`.
    /// Row counts must match.
    pub fn subtract_column(
        &mut self,
        idx: usize,
        source: &Self,
        src_idx: usize,
    ) -> Result<(), QrError> {
        self.check_col(idx)?;
        source.check_col(src_idx)?;
        self.check_column_lengths(source)?;
        for i in 0..self.rows() {
            self[(i, idx)] = self[(i, idx)] - source[(i, src_idx)];
        }
        Ok(())
    }

    /// Sum of all entries.
    pub fn sum(&self) -> T {
        let mut acc = T::zero();
        for i in 0..self.rows() {
            for j in 0..self.cols() {
                acc = acc + self[(i, j)];
            }
        }
        acc
    }

    /// Mean of all entries.
    pub fn mean(&self) -> T {
        // rows * cols > 0 by construction, and any practical element
        // count converts exactly
        self.sum() / T::from(self.rows() * self.cols()).unwrap()
    }

    /// Largest entry.
    pub fn max(&self) -> T {
        let mut best = T::neg_infinity();
        for i in 0..self.rows() {
            for j in 0..self.cols() {
                best = best.max(self[(i, j)]);
            }
        }
        best
    }

    /// Inner product of row or column `idx` of `self` with row or column
    /// `other_idx` of `other`. The selected vectors must have equal
    /// length.
    pub fn dot(
        &self,
        orient: Orientation,
        idx: usize,
        other: &Self,
        other_idx: usize,
    ) -> Result<T, QrError> {
        match orient {
            Orientation::Column => {
                self.check_col(idx)?;
                other.check_col(other_idx)?;
                self.check_column_lengths(other)?;
                let mut acc = T::zero();
                for i in 0..self.rows() {
                    acc = acc + self[(i, idx)] * other[(i, other_idx)];
                }
                Ok(acc)
            }
            Orientation::Row => {
                self.check_row(idx)?;
                other.check_row(other_idx)?;
                if self.cols() != other.cols() {
                    return Err(QrError::ShapeMismatch {
                        expected_rows: self.rows(),
                        expected_cols: self.cols(),
                        rows: other.rows(),
                        cols: other.cols(),
                    });
                }
                let mut acc = T::zero();
                for j in 0..self.cols() {
                    acc = acc + self[(idx, j)] * other[(other_idx, j)];
                }
                Ok(acc)
            }
        }
    }

    /// Inner product of two column vectors (both matrices must be n×1).
    pub fn dot_vec(&self, other: &Self) -> Result<T, QrError> {
        self.check_vector()?;
        other.check_vector()?;
        self.dot(Orientation::Column, 0, other, 0)
    }

    /// Euclidean norm of the selected row or column.
    pub fn norm(&self, orient: Orientation, idx: usize) -> Result<T, QrError> {
        Ok(self.dot(orient, idx, self, idx)?.sqrt())
    }

    /// Euclidean norm of an n×1 matrix treated as a vector.
    pub fn norm_vec(&self) -> Result<T, QrError> {
        self.check_vector()?;
        self.norm(Orientation::Column, 0)
    }

    /// Divide column `idx` by its own norm, in place. A zero-norm column
    /// cannot be normalized and is reported as [`QrError::ZeroNorm`]
    /// rather than dividing through to non-finite values.
    pub fn normalize_column(&mut self, idx: usize) -> Result<(), QrError> {
        let n = self.norm(Orientation::Column, idx)?;
        if n == T::zero() {
            return Err(QrError::ZeroNorm(idx));
        }
        self.scale_column(idx, T::one() / n)
    }

    /// Write `v · vᵗ` into `target`, where `v` is column `idx` of
    /// `self`. `target` must be square with dimension `self.rows`.
    pub fn outer_into(&self, idx: usize, target: &mut Self) -> Result<(), QrError> {
        self.check_col(idx)?;
        if target.shape() != (self.rows(), self.rows()) {
            return Err(QrError::ShapeMismatch {
                expected_rows: self.rows(),
                expected_cols: self.rows(),
                rows: target.rows(),
                cols: target.cols(),
            });
        }
        for i in 0..self.rows() {
            for j in 0..self.rows() {
                target[(i, j)] = self[(i, idx)] * self[(j, idx)];
            }
        }
        Ok(())
    }

    fn check_column_lengths(&self, other: &Self) -> Result<(), QrError> {
        if self.rows() != other.rows() {
            return Err(QrError::ShapeMismatch {
                expected_rows: self.rows(),
                expected_cols: self.cols(),
                rows: other.rows(),
                cols: other.cols(),
            });
        }
        Ok(())
    }

    fn check_vector(&self) -> Result<(), QrError> {
        if self.cols() != 1 {
            return Err(QrError::ShapeMismatch {
                expected_rows: self.rows(),
                expected_cols: 1,
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        Ok(())
    }
}

/// Matrix product `target = a · b`. Requires `a.cols == b.rows` and
/// `target` of shape `(a.rows, b.cols)`.
pub fn multiply<T: Float>(
    a: &Matrix<T>,
    b: &Matrix<T>,
    target: &mut Matrix<T>,
) -> Result<(), QrError> {
    if a.cols() != b.rows() {
        return Err(QrError::ShapeMismatch {
            expected_rows: a.cols(),
            expected_cols: b.cols(),
            rows: b.rows(),
            cols: b.cols(),
        });
    }
    if target.shape() != (a.rows(), b.cols()) {
        return Err(QrError::ShapeMismatch {
            expected_rows: a.rows(),
            expected_cols: b.cols(),
            rows: target.rows(),
            cols: target.cols(),
        });
    }
    for i in 0..a.rows() {
        for j in 0..b.cols() {
            let mut acc = T::zero();
            for k in 0..a.cols() {
                acc = acc + a[(i, k)] * b[(k, j)];
            }
            target[(i, j)] = acc;
        }
    }
    Ok(())
}

/// Project column `src_idx` of `source` onto column `onto_idx` of
/// `onto`, writing `(u·v / v·v) · v` into column `target_idx` of
/// `target`. Projecting onto a zero vector is reported as
/// [`QrError::ZeroVectorProjection`].
pub fn project<T: Float>(
    source: &Matrix<T>,
    src_idx: usize,
    onto: &Matrix<T>,
    onto_idx: usize,
    target: &mut Matrix<T>,
    target_idx: usize,
) -> Result<(), QrError> {
    let vv = onto.dot(Orientation::Column, onto_idx, onto, onto_idx)?;
    if vv == T::zero() {
        return Err(QrError::ZeroVectorProjection(onto_idx));
    }
    let uv = source.dot(Orientation::Column, src_idx, onto, onto_idx)?;
    target.check_col(target_idx)?;
    if target.rows() != onto.rows() {
        return Err(QrError::ShapeMismatch {
            expected_rows: onto.rows(),
            expected_cols: target.cols(),
            rows: target.rows(),
            cols: target.cols(),
        });
    }
    let coeff = uv / vv;
    for i in 0..onto.rows() {
        target[(i, target_idx)] = onto[(i, onto_idx)] * coeff;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QrError;

    #[test]
    fn copy_rejects_shape_mismatch() {
        let src: Matrix<f64> = Matrix::zeros(2, 3);
        let mut dst: Matrix<f64> = Matrix::zeros(3, 2);
        assert!(matches!(
            dst.copy_from(&src),
            Err(QrError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn scale_column_and_whole_matrix() {
        let mut m = Matrix::from_fn(2, 2, |i, j| (i + j) as f64 + 1.0);
        m.scale_column(1, 2.0).unwrap();
        assert_eq!(m[(0, 1)], 4.0);
        assert_eq!(m[(0, 0)], 1.0);
        m.scale(0.5);
        assert_eq!(m[(0, 1)], 2.0);
    }

    #[test]
    fn column_arithmetic() {
        let mut m = Matrix::from_fn(3, 2, |i, _| i as f64);
        let v = Matrix::from_fn(3, 1, |_, _| 1.0);
        m.add_column(0, &v, 0).unwrap();
        assert_eq!(m[(2, 0)], 3.0);
        m.subtract_column(0, &v, 0).unwrap();
        assert_eq!(m[(2, 0)], 2.0);
        // mismatched column length
        let short = Matrix::from_fn(2, 1, |_, _| 1.0);
        assert!(matches!(
            m.add_column(0, &short, 0),
            Err(QrError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn reductions() {
        let m = Matrix::from_fn(2, 2, |i, j| (i * 2 + j) as f64); // 0 1 / 2 3
        assert_eq!(m.sum(), 6.0);
        assert_eq!(m.mean(), 1.5);
        assert_eq!(m.max(), 3.0);
    }

    #[test]
    fn row_and_column_dot() {
        let a = Matrix::from_fn(2, 3, |i, j| (i * 3 + j) as f64); // 0 1 2 / 3 4 5
        let col = a.dot(Orientation::Column, 1, &a, 2).unwrap();
        assert_eq!(col, 1.0 * 2.0 + 4.0 * 5.0);
        let row = a.dot(Orientation::Row, 0, &a, 1).unwrap();
        assert_eq!(row, 0.0 * 3.0 + 1.0 * 4.0 + 2.0 * 5.0);
    }

    #[test]
    fn dot_vec_requires_single_column() {
        let v = Matrix::from_fn(3, 1, |i, _| i as f64);
        let m: Matrix<f64> = Matrix::zeros(3, 2);
        assert_eq!(v.dot_vec(&v).unwrap(), 5.0);
        assert!(matches!(
            v.dot_vec(&m),
            Err(QrError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn normalize_zero_column_is_an_error() {
        let mut m: Matrix<f64> = Matrix::zeros(3, 2);
        m[(0, 0)] = 3.0;
        m[(1, 0)] = 4.0;
        m.normalize_column(0).unwrap();
        assert!((m.norm(Orientation::Column, 0).unwrap() - 1.0).abs() < 1e-12);
        assert_eq!(m.normalize_column(1), Err(QrError::ZeroNorm(1)));
    }

    #[test]
    fn outer_product_of_column() {
        let m = Matrix::from_fn(2, 2, |i, j| if j == 0 { (i + 1) as f64 } else { 0.0 });
        let mut t: Matrix<f64> = Matrix::zeros(2, 2);
        m.outer_into(0, &mut t).unwrap();
        assert_eq!(t[(0, 0)], 1.0);
        assert_eq!(t[(0, 1)], 2.0);
        assert_eq!(t[(1, 1)], 4.0);
    }

    #[test]
    fn multiply_checks_inner_dimension() {
        let a: Matrix<f64> = Matrix::zeros(2, 3);
        let b: Matrix<f64> = Matrix::zeros(2, 2);
        let mut t: Matrix<f64> = Matrix::zeros(2, 2);
        assert!(matches!(
            multiply(&a, &b, &mut t),
            Err(QrError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn project_onto_zero_vector_is_an_error() {
        let u = Matrix::from_fn(2, 1, |i, _| (i + 1) as f64);
        let zero: Matrix<f64> = Matrix::zeros(2, 1);
        let mut t: Matrix<f64> = Matrix::zeros(2, 1);
        assert_eq!(
            project(&u, 0, &zero, 0, &mut t, 0),
            Err(QrError::ZeroVectorProjection(0))
        );
    }

    #[test]
    fn projection_values() {
        // project (1, 1) onto (2, 0) -> (1, 0)
        let u = Matrix::from_fn(2, 1, |_, _| 1.0);
        let v = Matrix::from_fn(2, 1, |i, _| if i == 0 { 2.0 } else { 0.0 });
        let mut t: Matrix<f64> = Matrix::zeros(2, 1);
        project(&u, 0, &v, 0, &mut t, 0).unwrap();
        assert_eq!(t[(0, 0)], 1.0);
        assert_eq!(t[(1, 0)], 0.0);
    }
}
