//! Dense vectors, matrices and quaternions over any [NumericOps](crate::domains::NumericOps)
//! representation, and the linear algebra built on them.

mod decomposition;
pub mod matrix;
pub mod quaternion;
pub mod vector;

pub use decomposition::LuDecomposition;
pub use matrix::Matrix;
pub use quaternion::Quaternion;
pub use vector::Vector;
