//! Matrix module: dense storage, primitive operations, and the scratch pool.

pub mod dense;
pub use dense::Matrix;
pub mod ops;
pub use ops::{Orientation, multiply, project};
pub mod stack;
pub use stack::MatrixStack;
