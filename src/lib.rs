//! Algebrix provides dense vectors and matrices that work over any numeric representation.
//!
//! All algorithms are generic over a bundle of numeric operations, the [NumericOps](domains::NumericOps)
//! trait, instead of over the native operators of a number type. This makes it possible to
//! compute determinants, inverses and decompositions over machine integers, floating point
//! numbers, arbitrary-precision rationals or your own types, with behavior that fits the
//! representation: exact elimination for rationals, tolerance-aware pivoting for floats and
//! fraction-free elimination for integers.
//!
//! For example:
//!
//! ```
//! use algebrix::{domains::float::F64, tensors::Matrix};
//!
//! let m = Matrix::from_nested_vec(vec![vec![1., 2.], vec![3., 4.]], F64).unwrap();
//! assert_eq!(m.determinant(), Ok(-2.));
//!
//! let inv = m.inverse().unwrap();
//! assert_eq!(inv.data(), &[-2., 1., 1.5, -0.5]);
//! ```
//!
//! Operations for types that are only known at runtime can be looked up in an
//! [OperationRegistry](registry::OperationRegistry).

pub mod domains;
pub mod error;
pub mod range;
pub mod registry;
pub mod tensors;
mod utils;

pub use error::NumericError;
