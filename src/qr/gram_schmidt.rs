//! Classical Gram-Schmidt QR for square matrices.
//!
//! Orthonormalizes the columns of A in place inside the Q output: each
//! column has its projection onto every earlier column removed, then is
//! normalized. R is recovered afterwards as `Qᵗ · A`. The classical
//! variant loses orthogonality faster than Householder reflections on
//! ill-conditioned inputs; callers needing tight `QᵗQ = I` bounds
//! should prefer [`HouseholderQr`](crate::qr::HouseholderQr).

use std::fmt;

use num_traits::Float;

use crate::error::QrError;
use crate::matrix::{Matrix, multiply, project};
use crate::qr::{QrFactor, check_square_system};

/// Gram-Schmidt QR solver.
pub struct GramSchmidtQr {
    /// Print per-iteration state to stdout.
    pub verbose: bool,
}

impl GramSchmidtQr {
    pub fn new() -> Self {
        Self { verbose: false }
    }

    /// Enable per-iteration trace output.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

impl Default for GramSchmidtQr {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float + fmt::Display> QrFactor<T> for GramSchmidtQr {
    fn factor(
        &mut self,
        a: &Matrix<T>,
        q: &mut Matrix<T>,
        r: &mut Matrix<T>,
    ) -> Result<(), QrError> {
        let n = check_square_system(a, q, r)?;

        // one (n, 1) scratch holds the current projection
        let mut proj: Matrix<T> = Matrix::zeros(n, 1);
        q.copy_from(a)?;

        for i in 0..n {
            if self.verbose {
                println!("iteration {i}\n{q}");
            }
            for j in 0..i {
                project(q, i, q, j, &mut proj, 0)?;
                q.subtract_column(i, &proj, 0)?;

                if self.verbose {
                    println!("iteration {i}, {j}: projection =\n{proj}");
                }
            }
            // a rank-deficient input leaves a zero column here and
            // surfaces as QrError::ZeroNorm
            q.normalize_column(i)?;
        }

        let mut qt: Matrix<T> = Matrix::zeros(n, n);
        q.transpose_into(&mut qt)?;
        multiply(&qt, a, r)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upper_triangular_input_yields_identity_q() {
        // A = [[1,1],[0,1]]: column 0 is already unit, and removing its
        // component from column 1 leaves e1, so Q = I and R = A
        let a = Matrix::from_fn(2, 2, |i, j| if i <= j { 1.0 } else { 0.0 });
        let mut q: Matrix<f64> = Matrix::zeros(2, 2);
        let mut r: Matrix<f64> = Matrix::zeros(2, 2);
        GramSchmidtQr::new().factor(&a, &mut q, &mut r).unwrap();
        for i in 0..2 {
            for j in 0..2 {
                let want_q = if i == j { 1.0 } else { 0.0 };
                assert!((q[(i, j)] - want_q).abs() < 1e-12);
                assert!((r[(i, j)] - a[(i, j)]).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn rank_deficient_input_reports_zero_norm() {
        // column 1 is an exact multiple of column 0: the projection
        // removes it entirely and the zero column cannot be normalized
        let a = Matrix::from_fn(2, 2, |i, j| if i == 0 { (j + 1) as f64 } else { 0.0 });
        let mut q: Matrix<f64> = Matrix::zeros(2, 2);
        let mut r: Matrix<f64> = Matrix::zeros(2, 2);
        assert_eq!(
            GramSchmidtQr::new().factor(&a, &mut q, &mut r),
            Err(QrError::ZeroNorm(1))
        );
    }

    #[test]
    fn rejects_rectangular_input() {
        let a: Matrix<f64> = Matrix::zeros(2, 3);
        let mut q: Matrix<f64> = Matrix::zeros(2, 3);
        let mut r: Matrix<f64> = Matrix::zeros(2, 3);
        assert_eq!(
            GramSchmidtQr::new().factor(&a, &mut q, &mut r),
            Err(QrError::NotSquare { rows: 2, cols: 3 })
        );
    }
}
