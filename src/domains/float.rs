//! Floating-point numbers.

use std::{
    cmp::Ordering,
    fmt::{self, Display, Formatter},
};

use super::NumericOps;
use crate::error::NumericError;

/// The operations on the floating point type `T`.
///
/// Division follows IEEE 754: dividing a non-zero number by zero yields an infinity
/// and `0/0` yields NaN. Elements whose absolute value does not exceed the
/// tolerance are considered negligible, so that pivot selection and singularity
/// detection are robust against rounding.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatField<T> {
    tolerance: T,
}

impl<T: Copy> FloatField<T> {
    /// Create a float bundle that treats values with `|x| <= tolerance` as zero.
    pub const fn with_tolerance(tolerance: T) -> Self {
        FloatField { tolerance }
    }

    pub fn tolerance(&self) -> T {
        self.tolerance
    }
}

pub const F64: FloatField<f64> = FloatField::with_tolerance(1e-12);
pub const F32: FloatField<f32> = FloatField::with_tolerance(1e-5);

impl Default for FloatField<f64> {
    fn default() -> Self {
        F64
    }
}

impl Default for FloatField<f32> {
    fn default() -> Self {
        F32
    }
}

impl<T: Display> Display for FloatField<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} (tolerance {})", std::any::type_name::<T>(), self.tolerance)
    }
}

macro_rules! impl_float_field {
    ($($t:ty),*) => {
        $(
            impl NumericOps for FloatField<$t> {
                type Element = $t;

                #[inline(always)]
                fn zero(&self) -> $t {
                    0.
                }

                #[inline(always)]
                fn one(&self) -> $t {
                    1.
                }

                #[inline(always)]
                fn nth(&self, n: i64) -> $t {
                    n as $t
                }

                #[inline(always)]
                fn add(&self, a: &$t, b: &$t) -> $t {
                    a + b
                }

                #[inline(always)]
                fn sub(&self, a: &$t, b: &$t) -> $t {
                    a - b
                }

                #[inline(always)]
                fn mul(&self, a: &$t, b: &$t) -> $t {
                    a * b
                }

                #[inline(always)]
                fn div(&self, a: &$t, b: &$t) -> Result<$t, NumericError> {
                    Ok(a / b)
                }

                #[inline(always)]
                fn neg(&self, a: &$t) -> Result<$t, NumericError> {
                    Ok(-a)
                }

                fn pow(&self, b: &$t, e: i64) -> Result<$t, NumericError> {
                    Ok(match i32::try_from(e) {
                        Ok(e) => b.powi(e),
                        Err(_) => b.powf(e as $t),
                    })
                }

                /// NaN is ordered using the IEEE total order.
                fn cmp(&self, a: &$t, b: &$t) -> Ordering {
                    a.partial_cmp(b).unwrap_or_else(|| a.total_cmp(b))
                }

                #[inline(always)]
                fn is_field(&self) -> bool {
                    true
                }

                #[inline(always)]
                fn abs(&self, a: &$t) -> Result<$t, NumericError> {
                    Ok(a.abs())
                }

                /// The square root of a negative number is NaN.
                #[inline(always)]
                fn sqrt(&self, a: &$t) -> Result<$t, NumericError> {
                    Ok(a.sqrt())
                }

                #[inline(always)]
                fn sin(&self, a: &$t) -> Result<$t, NumericError> {
                    Ok(a.sin())
                }

                #[inline(always)]
                fn cos(&self, a: &$t) -> Result<$t, NumericError> {
                    Ok(a.cos())
                }

                #[inline(always)]
                fn acos(&self, a: &$t) -> Result<$t, NumericError> {
                    Ok(a.acos())
                }

                #[inline(always)]
                fn is_zero(&self, a: &$t) -> bool {
                    *a == 0.
                }

                #[inline(always)]
                fn is_one(&self, a: &$t) -> bool {
                    *a == 1.
                }

                #[inline(always)]
                fn is_negligible(&self, a: &$t) -> bool {
                    a.abs() <= self.tolerance
                }

                #[inline(always)]
                fn abs_diff(&self, a: &$t, b: &$t) -> $t {
                    (a - b).abs()
                }

                #[inline(always)]
                fn add_assign(&self, a: &mut $t, b: &$t) {
                    *a += b;
                }

                #[inline(always)]
                fn sub_assign(&self, a: &mut $t, b: &$t) {
                    *a -= b;
                }

                #[inline(always)]
                fn mul_assign(&self, a: &mut $t, b: &$t) {
                    *a *= b;
                }

                #[inline(always)]
                fn add_mul_assign(&self, a: &mut $t, b: &$t, c: &$t) {
                    *a = b.mul_add(*c, *a);
                }

                #[inline(always)]
                fn sub_mul_assign(&self, a: &mut $t, b: &$t, c: &$t) {
                    *a = (-b).mul_add(*c, *a);
                }
            }
        )*
    };
}

impl_float_field!(f32, f64);

#[cfg(test)]
mod test {
    use std::cmp::Ordering;

    use super::{FloatField, F32, F64};
    use crate::domains::NumericOps;

    #[test]
    fn ieee_division() {
        assert_eq!(F64.div(&1., &0.), Ok(f64::INFINITY));
        assert_eq!(F64.div(&-1., &0.), Ok(f64::NEG_INFINITY));
        assert!(F64.div(&0., &0.).unwrap().is_nan());
        assert_eq!(F32.div(&3., &2.), Ok(1.5));
    }

    #[test]
    fn tolerance() {
        assert!(F64.is_negligible(&1e-13));
        assert!(!F64.is_negligible(&1e-11));
        assert!(!F64.is_zero(&1e-13));

        let coarse = FloatField::with_tolerance(1e-3);
        assert!(coarse.is_negligible(&-1e-4));
        assert_eq!(coarse.tolerance(), 1e-3);
    }

    #[test]
    fn powers_and_roots() {
        assert_eq!(F64.pow(&2., 10), Ok(1024.));
        assert_eq!(F64.pow(&2., -2), Ok(0.25));
        assert_eq!(F64.sqrt(&16.), Ok(4.));
        assert_eq!(F64.acos(&1.), Ok(0.));
    }

    #[test]
    fn nan_ordering() {
        assert_eq!(F64.cmp(&1., &2.), Ordering::Less);
        assert_eq!(F64.cmp(&f64::NAN, &f64::INFINITY), Ordering::Greater);
    }
}
