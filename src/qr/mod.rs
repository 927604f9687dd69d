//! QR factorization engines.

use num_traits::Float;

use crate::error::QrError;
use crate::matrix::Matrix;

/// Common interface for QR factorization algorithms.
pub trait QrFactor<T> {
    /// Factor `a` into `q` (orthonormal columns) and `r`, writing into
    /// the caller-owned outputs. On error the contents of `q` and `r`
    /// are unspecified and must not be trusted.
    fn factor(
        &mut self,
        a: &Matrix<T>,
        q: &mut Matrix<T>,
        r: &mut Matrix<T>,
    ) -> Result<(), QrError>;
}

pub mod householder;
pub use householder::{HouseholderQr, HouseholderSign};

pub mod gram_schmidt;
pub use gram_schmidt::GramSchmidtQr;

/// Both engines require a square input and outputs of the same shape.
/// Returns the dimension.
pub(crate) fn check_square_system<T: Float>(
    a: &Matrix<T>,
    q: &Matrix<T>,
    r: &Matrix<T>,
) -> Result<usize, QrError> {
    a.check_square()?;
    a.check_same_shape(q)?;
    a.check_same_shape(r)?;
    Ok(a.rows())
}
