//! Arbitrary-precision rational numbers.

use std::{
    cmp::Ordering,
    fmt::{self, Display, Formatter},
};

use rug::{Integer, Rational};

use super::{binary_pow, NumericOps};
use crate::error::NumericError;

/// The field of rational numbers.
pub const Q: RationalField = RationalField;

/// The operations on arbitrary-precision [Rational]s. All arithmetic is exact.
///
/// The square root is exact when the numerator and denominator are both perfect squares.
/// Otherwise it, as well as the trigonometric functions, is computed in double precision
/// and converted back to the nearest rational.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RationalField;

impl Display for RationalField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("Q")
    }
}

impl RationalField {
    fn via_f64(
        &self,
        a: &Rational,
        operation: &'static str,
        f: impl Fn(f64) -> f64,
    ) -> Result<Rational, NumericError> {
        Rational::from_f64(f(a.to_f64())).ok_or_else(|| self.unsupported(operation))
    }
}

impl NumericOps for RationalField {
    type Element = Rational;

    fn zero(&self) -> Rational {
        Rational::new()
    }

    fn one(&self) -> Rational {
        Rational::from(1)
    }

    fn nth(&self, n: i64) -> Rational {
        Rational::from(n)
    }

    fn add(&self, a: &Rational, b: &Rational) -> Rational {
        Rational::from(a + b)
    }

    fn sub(&self, a: &Rational, b: &Rational) -> Rational {
        Rational::from(a - b)
    }

    fn mul(&self, a: &Rational, b: &Rational) -> Rational {
        Rational::from(a * b)
    }

    fn div(&self, a: &Rational, b: &Rational) -> Result<Rational, NumericError> {
        if b.cmp0() == Ordering::Equal {
            return Err(NumericError::DivisionByZero);
        }
        Ok(Rational::from(a / b))
    }

    fn neg(&self, a: &Rational) -> Result<Rational, NumericError> {
        Ok(Rational::from(-a))
    }

    /// A negative exponent raises the reciprocal of `b`.
    fn pow(&self, b: &Rational, e: i64) -> Result<Rational, NumericError> {
        if e >= 0 {
            return Ok(binary_pow(self, b, e as u64));
        }

        if b.cmp0() == Ordering::Equal {
            return Err(NumericError::DivisionByZero);
        }
        Ok(binary_pow(self, &b.clone().recip(), e.unsigned_abs()))
    }

    fn cmp(&self, a: &Rational, b: &Rational) -> Ordering {
        Ord::cmp(a, b)
    }

    fn is_field(&self) -> bool {
        true
    }

    fn abs(&self, a: &Rational) -> Result<Rational, NumericError> {
        Ok(a.clone().abs())
    }

    fn sqrt(&self, a: &Rational) -> Result<Rational, NumericError> {
        if a.cmp0() == Ordering::Less {
            return Err(self.unsupported("sqrt of a negative number"));
        }

        if a.numer().is_perfect_square() && a.denom().is_perfect_square() {
            let n = Integer::from(a.numer().sqrt_ref());
            let d = Integer::from(a.denom().sqrt_ref());
            return Ok(Rational::from((n, d)));
        }

        self.via_f64(a, "sqrt", f64::sqrt)
    }

    fn sin(&self, a: &Rational) -> Result<Rational, NumericError> {
        self.via_f64(a, "sin", f64::sin)
    }

    fn cos(&self, a: &Rational) -> Result<Rational, NumericError> {
        self.via_f64(a, "cos", f64::cos)
    }

    fn acos(&self, a: &Rational) -> Result<Rational, NumericError> {
        self.via_f64(a, "acos", f64::acos)
    }

    fn is_zero(&self, a: &Rational) -> bool {
        a.cmp0() == Ordering::Equal
    }

    fn add_assign(&self, a: &mut Rational, b: &Rational) {
        *a += b;
    }

    fn sub_assign(&self, a: &mut Rational, b: &Rational) {
        *a -= b;
    }

    fn mul_assign(&self, a: &mut Rational, b: &Rational) {
        *a *= b;
    }
}

#[cfg(test)]
mod test {
    use rug::Rational;

    use super::Q;
    use crate::{domains::NumericOps, error::NumericError};

    #[test]
    fn exact_arithmetic() {
        let a = Rational::from((1, 3));
        let b = Rational::from((1, 6));
        assert_eq!(Q.add(&a, &b), Rational::from((1, 2)));
        assert_eq!(Q.div(&a, &b), Ok(Rational::from(2)));
        assert_eq!(Q.div(&a, &Q.zero()), Err(NumericError::DivisionByZero));
        assert_eq!(Q.pow(&a, -2), Ok(Rational::from(9)));
        assert_eq!(Q.pow(&Q.zero(), -1), Err(NumericError::DivisionByZero));
    }

    #[test]
    fn roots() {
        assert_eq!(Q.sqrt(&Rational::from((9, 4))), Ok(Rational::from((3, 2))));
        let r = Q.sqrt(&Rational::from(2)).unwrap();
        assert!((r.to_f64() - std::f64::consts::SQRT_2).abs() < 1e-15);
        assert!(Q.sqrt(&Rational::from(-1)).is_err());
        assert!(Q.acos(&Rational::from(2)).is_err());
    }
}
