//! Defines the numeric capability trait that all algorithms in this crate are generic over.
//!
//! The core trait is [NumericOps]. A bundle of numeric operations is a value of its own,
//! separate from the numbers it operates on. For example:
//! - The bundle [I32](integer::I32) operates on elements of type `i32`.
//! - The bundle [F64](float::F64) operates on elements of type `f64`.
//! - The bundle [Q](rational::Q) operates on elements of type [rug::Rational].
//!
//! In general, the kernel never uses the operators of the element type itself,
//! but asks the bundle instead. This makes it possible to change the behavior of a
//! type, for example to use a different tolerance for floating point numbers,
//! without touching the element type.
//!
//! Bundles for types that are only known at runtime can be stored in and looked up from an
//! [OperationRegistry](crate::registry::OperationRegistry).
pub mod float;
pub mod integer;
pub mod rational;

use std::cmp::Ordering;
use std::fmt::{Debug, Display};

use rand::Rng;

use crate::error::NumericError;

/// A bundle of primitive operations on the numeric representation [NumericOps::Element].
///
/// The required operations are those that every representation has: the identities,
/// addition, subtraction, multiplication, division, negation, exponentiation and comparison.
/// The absolute value, the square root and the trigonometric functions are optional and
/// yield [NumericError::UnsupportedOperation] unless the bundle provides them.
///
/// Division by zero, negation of unsigned numbers and negative powers of integers are
/// reported as errors. Representation-defined sentinels (such as infinities for floating
/// point division) are documented on the bundle that produces them.
pub trait NumericOps: Clone + Debug + Display + Send + Sync {
    /// The numbers this bundle operates on.
    type Element: Clone + Debug;

    /// The name of the element type, used in error messages.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self::Element>()
    }

    fn zero(&self) -> Self::Element;
    fn one(&self) -> Self::Element;
    /// Return the `n`th element by computing `n * 1`.
    fn nth(&self, n: i64) -> Self::Element;

    fn add(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    fn sub(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    fn mul(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    fn div(&self, a: &Self::Element, b: &Self::Element) -> Result<Self::Element, NumericError>;
    fn neg(&self, a: &Self::Element) -> Result<Self::Element, NumericError>;
    /// Raise `b` to the power `e`. For non-negative `e` this agrees with repeated multiplication.
    fn pow(&self, b: &Self::Element, e: i64) -> Result<Self::Element, NumericError>;
    fn cmp(&self, a: &Self::Element, b: &Self::Element) -> Ordering;

    /// Returns `true` iff [NumericOps::div] is the exact inverse of [NumericOps::mul],
    /// as it is for rationals and (up to rounding) for floats. Integer division truncates.
    fn is_field(&self) -> bool;

    /// Returns `false` if the product of two non-zero elements can be zero, as it can for
    /// integers that wrap around. Fraction-free elimination requires an integral domain.
    fn is_integral_domain(&self) -> bool {
        true
    }

    /// Returns `true` iff [NumericOps::neg] is defined, which it is not for unsigned integers.
    fn is_signed(&self) -> bool {
        self.neg(&self.one()).is_ok()
    }

    fn abs(&self, _a: &Self::Element) -> Result<Self::Element, NumericError> {
        Err(self.unsupported("abs"))
    }

    fn sqrt(&self, _a: &Self::Element) -> Result<Self::Element, NumericError> {
        Err(self.unsupported("sqrt"))
    }

    fn sin(&self, _a: &Self::Element) -> Result<Self::Element, NumericError> {
        Err(self.unsupported("sin"))
    }

    fn cos(&self, _a: &Self::Element) -> Result<Self::Element, NumericError> {
        Err(self.unsupported("cos"))
    }

    fn acos(&self, _a: &Self::Element) -> Result<Self::Element, NumericError> {
        Err(self.unsupported("acos"))
    }

    fn is_zero(&self, a: &Self::Element) -> bool {
        self.cmp(a, &self.zero()) == Ordering::Equal
    }

    fn is_one(&self, a: &Self::Element) -> bool {
        self.cmp(a, &self.one()) == Ordering::Equal
    }

    /// Returns `true` if `a` should be treated as zero when selecting pivots
    /// or deciding that a matrix is singular.
    fn is_negligible(&self, a: &Self::Element) -> bool {
        self.is_zero(a)
    }

    fn add_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        *a = self.add(a, b);
    }

    fn sub_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        *a = self.sub(a, b);
    }

    fn mul_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        *a = self.mul(a, b);
    }

    /// Compute `a += b * c`.
    fn add_mul_assign(&self, a: &mut Self::Element, b: &Self::Element, c: &Self::Element) {
        *a = self.add(a, &self.mul(b, c));
    }

    /// Compute `a -= b * c`.
    fn sub_mul_assign(&self, a: &mut Self::Element, b: &Self::Element, c: &Self::Element) {
        *a = self.sub(a, &self.mul(b, c));
    }

    /// The distance `|a - b|`, computed without negation so that it
    /// also works for unsigned representations.
    fn abs_diff(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        if self.cmp(a, b) == Ordering::Less {
            self.sub(b, a)
        } else {
            self.sub(a, b)
        }
    }

    /// Returns `true` iff `|a - b| <= leniency`.
    fn equals_with_leniency(
        &self,
        a: &Self::Element,
        b: &Self::Element,
        leniency: &Self::Element,
    ) -> bool {
        self.cmp(&self.abs_diff(a, b), leniency) != Ordering::Greater
    }

    /// Sample an integer-valued element from the half-open `range`.
    fn sample(&self, rng: &mut impl rand::RngCore, range: (i64, i64)) -> Self::Element {
        self.nth(rng.gen_range(range.0..range.1))
    }

    /// Create the error for an operation this bundle does not define.
    fn unsupported(&self, operation: &'static str) -> NumericError {
        NumericError::UnsupportedOperation {
            operation,
            type_name: self.type_name(),
        }
    }
}

/// Compute `b^e` using binary exponentiation.
pub(crate) fn binary_pow<R: NumericOps>(ops: &R, b: &R::Element, mut e: u64) -> R::Element {
    let mut result = ops.one();
    if e == 0 {
        return result;
    }

    let mut base = b.clone();
    loop {
        if e & 1 == 1 {
            ops.mul_assign(&mut result, &base);
        }
        e >>= 1;
        if e == 0 {
            return result;
        }
        base = ops.mul(&base, &base);
    }
}

#[cfg(test)]
mod test {
    use super::{binary_pow, NumericOps};
    use crate::domains::{float::F64, integer::I64, integer::U8, rational::Q};
    use crate::error::NumericError;

    #[test]
    fn powers() {
        assert_eq!(binary_pow(&I64, &3, 0), 1);
        assert_eq!(binary_pow(&I64, &3, 5), 243);
        assert_eq!(binary_pow(&I64, &-2, 7), -128);
        assert_eq!(binary_pow(&Q, &(2, 3).into(), 3), rug::Rational::from((8, 27)));
    }

    #[test]
    fn leniency() {
        assert!(F64.equals_with_leniency(&1.0, &1.05, &0.1));
        assert!(!F64.equals_with_leniency(&1.0, &1.2, &0.1));
        assert!(U8.equals_with_leniency(&3, &5, &2));
        assert!(!U8.equals_with_leniency(&5, &2, &2));
    }

    #[test]
    fn optional_operations() {
        assert_eq!(
            I64.sin(&1),
            Err(NumericError::UnsupportedOperation {
                operation: "sin",
                type_name: "i64"
            })
        );
        assert!(F64.sin(&0.).is_ok());
    }
}
