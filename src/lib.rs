//! qrkit: dense QR factorization with pooled scratch matrices
//!
//! This crate provides a small dense matrix type, a fixed-shape scratch
//! pool for iterative algorithms, and two QR factorization engines
//! (Householder reflections and classical Gram-Schmidt) built from the
//! same shape-checked primitive operations.

pub mod error;
pub mod matrix;
pub mod qr;

// Re-exports for convenience
pub use error::*;
pub use matrix::*;
pub use qr::*;
