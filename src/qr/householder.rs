//! Householder-reflections QR for square matrices.
//!
//! Each iteration zeroes the subdiagonal of one column by building an
//! elementary reflector `Qi = I - (2 / vᵗv) v vᵗ` and accumulating it
//! into a running transform `acc <- Qi · acc`. After n iterations the
//! accumulated transform triangularizes A from the left, so `R = acc · A`
//! and `Q = accᵗ`. The (n, n) scratch matrices live in a [`MatrixStack`]
//! of four slots and are recycled via push/pop each iteration instead of
//! being reallocated.
//!
//! # References
//! - Trefethen & Bau, Numerical Linear Algebra, Lecture 10
//! - https://en.wikipedia.org/wiki/Householder_transformation

use std::fmt;

use num_traits::Float;

use crate::error::QrError;
use crate::matrix::{Matrix, MatrixStack, Orientation, multiply};
use crate::qr::{QrFactor, check_square_system};

/// Sign placed on the pivot entry of the Householder vector.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HouseholderSign {
    /// Always add `+‖x‖` at the pivot. Cancellation-prone when the
    /// pivot entry is positive, but matches the historical behavior of
    /// implementations that never flip the sign.
    Positive,
    /// Add `sign(x[pivot]) · ‖x‖`, maximizing `‖v‖`. The numerically
    /// stable choice and the default.
    MatchPivot,
}

/// Householder-reflections QR solver.
pub struct HouseholderQr {
    /// Pivot sign convention for the Householder vector.
    pub sign: HouseholderSign,
    /// Print per-iteration state to stdout.
    pub verbose: bool,
}

impl HouseholderQr {
    pub fn new() -> Self {
        Self {
            sign: HouseholderSign::MatchPivot,
            verbose: false,
        }
    }

    /// Set the pivot sign convention.
    pub fn with_sign(mut self, sign: HouseholderSign) -> Self {
        self.sign = sign;
        self
    }

    /// Enable per-iteration trace output.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

impl Default for HouseholderQr {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float + fmt::Display> QrFactor<T> for HouseholderQr {
    fn factor(
        &mut self,
        a: &Matrix<T>,
        q: &mut Matrix<T>,
        r: &mut Matrix<T>,
    ) -> Result<(), QrError> {
        let n = check_square_system(a, q, r)?;

        // four (n, n) slots: accumulated transform, identity, the new
        // reflector, and the product; per-iteration scratch is recycled
        let mut stack = MatrixStack::new(n, n, 4);
        let mut x: Matrix<T> = Matrix::zeros(n, 1);
        let mut v: Matrix<T> = Matrix::zeros(n, 1);

        let mut acc = stack.pop()?;
        acc.set_identity(T::one())?;
        let mut identity = stack.pop()?;
        identity.set_identity(T::one())?;

        for i in 0..n {
            // leading column of the running product acc · A, restricted
            // to the active submatrix (rows above the pivot zeroed)
            let mut work = stack.pop()?;
            multiply(&acc, a, &mut work)?;
            for j in 0..n {
                x[(j, 0)] = if j < i { T::zero() } else { work[(j, i)] };
            }
            stack.push(work)?;

            let pivot_norm = x.norm(Orientation::Column, 0)?;
            v.fill(T::zero());
            v[(i, 0)] = match self.sign {
                HouseholderSign::Positive => pivot_norm,
                HouseholderSign::MatchPivot => {
                    if x[(i, 0)] < T::zero() {
                        -pivot_norm
                    } else {
                        pivot_norm
                    }
                }
            };
            v.add_column(0, &x, 0)?;

            if self.verbose {
                println!("iteration {i}: |x| = {pivot_norm:.10}");
                println!("householder vector =\n{v}");
            }

            let vtv = v.dot_vec(&v)?;
            if vtv == T::zero() {
                // column already eliminated; the reflector degenerates
                // to the identity, so skip the update
                if self.verbose {
                    println!("iteration {i}: zero householder vector, skipping");
                }
                continue;
            }

            let mut reflector = stack.pop()?;
            v.outer_into(0, &mut reflector)?;
            let two = T::one() + T::one();
            reflector.scale(-two / vtv);
            reflector.add(&identity)?;

            if self.verbose {
                println!("I - ((2/vTv) v vT) =\n{reflector}");
            }

            let mut next = stack.pop()?;
            multiply(&reflector, &acc, &mut next)?;
            stack.push(acc)?;
            stack.push(reflector)?;
            acc = next;

            if self.verbose {
                println!("accumulated transform =\n{acc}");
            }
        }

        acc.transpose_into(q)?;
        multiply(&acc, a, r)?;

        stack.push(acc)?;
        stack.push(identity)?;
        stack.release_all();
        Ok(())
    }
}
