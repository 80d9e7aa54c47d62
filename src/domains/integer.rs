//! Fixed-width, wrapping and arbitrary-precision integers.
//!
//! All integer bundles truncate on division and report division by zero as
//! [NumericError::DivisionByZero]. The fixed-width bundles check every operation for
//! overflow and panic instead of wrapping around silently. Use [WrappingInt] for
//! two's complement wraparound semantics.

use std::{
    cmp::Ordering,
    fmt::{self, Debug, Display, Formatter},
    marker::PhantomData,
    num::Wrapping,
};

use rug::Integer;

use super::{binary_pow, NumericOps};
use crate::{error::NumericError, utils};

/// The operations on the fixed-width primitive integer `T`.
///
/// Overflow in addition, subtraction, multiplication and exponentiation
/// panics. The square root is the floor of the real square root.
pub struct FixedInt<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> FixedInt<T> {
    pub const fn new() -> Self {
        FixedInt {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for FixedInt<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for FixedInt<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for FixedInt<T> {}

impl<T> PartialEq for FixedInt<T> {
    fn eq(&self, _: &Self) -> bool {
        true
    }
}

impl<T> Eq for FixedInt<T> {}

impl<T> Debug for FixedInt<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "FixedInt<{}>", std::any::type_name::<T>())
    }
}

impl<T> Display for FixedInt<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(std::any::type_name::<T>())
    }
}

pub const I8: FixedInt<i8> = FixedInt::new();
pub const I16: FixedInt<i16> = FixedInt::new();
pub const I32: FixedInt<i32> = FixedInt::new();
pub const I64: FixedInt<i64> = FixedInt::new();
pub const I128: FixedInt<i128> = FixedInt::new();
pub const ISIZE: FixedInt<isize> = FixedInt::new();
pub const U8: FixedInt<u8> = FixedInt::new();
pub const U16: FixedInt<u16> = FixedInt::new();
pub const U32: FixedInt<u32> = FixedInt::new();
pub const U64: FixedInt<u64> = FixedInt::new();
pub const U128: FixedInt<u128> = FixedInt::new();
pub const USIZE: FixedInt<usize> = FixedInt::new();

#[cold]
#[inline(never)]
fn overflow<T: Display>(operation: &str, a: T, b: T) -> ! {
    panic!("Attempt to {} {} and {} with overflow", operation, a, b)
}

macro_rules! impl_fixed_int_common {
    ($t:ty) => {
        type Element = $t;

        #[inline(always)]
        fn zero(&self) -> $t {
            0
        }

        #[inline(always)]
        fn one(&self) -> $t {
            1
        }

        fn nth(&self, n: i64) -> $t {
            match <$t>::try_from(n) {
                Ok(x) => x,
                Err(_) => panic!("{} does not fit in {}", n, stringify!($t)),
            }
        }

        #[inline]
        fn add(&self, a: &$t, b: &$t) -> $t {
            a.checked_add(*b).unwrap_or_else(|| overflow("add", a, b))
        }

        #[inline]
        fn sub(&self, a: &$t, b: &$t) -> $t {
            a.checked_sub(*b).unwrap_or_else(|| overflow("subtract", a, b))
        }

        #[inline]
        fn mul(&self, a: &$t, b: &$t) -> $t {
            a.checked_mul(*b).unwrap_or_else(|| overflow("multiply", a, b))
        }

        fn div(&self, a: &$t, b: &$t) -> Result<$t, NumericError> {
            if *b == 0 {
                return Err(NumericError::DivisionByZero);
            }
            Ok(a.checked_div(*b).unwrap_or_else(|| overflow("divide", a, b)))
        }

        #[inline(always)]
        fn cmp(&self, a: &$t, b: &$t) -> Ordering {
            Ord::cmp(a, b)
        }

        #[inline(always)]
        fn is_field(&self) -> bool {
            false
        }

        #[inline(always)]
        fn is_zero(&self, a: &$t) -> bool {
            *a == 0
        }

        #[inline(always)]
        fn is_one(&self, a: &$t) -> bool {
            *a == 1
        }
    };
}

macro_rules! impl_signed_fixed_int {
    ($($t:ty),*) => {
        $(
            impl NumericOps for FixedInt<$t> {
                impl_fixed_int_common!($t);

                fn neg(&self, a: &$t) -> Result<$t, NumericError> {
                    match a.checked_neg() {
                        Some(x) => Ok(x),
                        None => panic!("Attempt to negate {} with overflow", a),
                    }
                }

                fn pow(&self, b: &$t, e: i64) -> Result<$t, NumericError> {
                    if e < 0 {
                        return Err(self.unsupported("pow with a negative exponent"));
                    }

                    let r = match u32::try_from(e) {
                        Ok(e) => b.checked_pow(e),
                        Err(_) => match *b {
                            0 | 1 => Some(*b),
                            -1 => Some(if e % 2 == 0 { 1 } else { -1 }),
                            _ => None,
                        },
                    };

                    match r {
                        Some(x) => Ok(x),
                        None => panic!("Attempt to raise {} to the power {} with overflow", b, e),
                    }
                }

                fn abs(&self, a: &$t) -> Result<$t, NumericError> {
                    match a.checked_abs() {
                        Some(x) => Ok(x),
                        None => panic!("Attempt to take the absolute value of {} with overflow", a),
                    }
                }

                fn sqrt(&self, a: &$t) -> Result<$t, NumericError> {
                    if *a < 0 {
                        return Err(self.unsupported("sqrt of a negative number"));
                    }
                    Ok(utils::isqrt(*a as u128) as $t)
                }
            }
        )*
    };
}

macro_rules! impl_unsigned_fixed_int {
    ($($t:ty),*) => {
        $(
            impl NumericOps for FixedInt<$t> {
                impl_fixed_int_common!($t);

                fn neg(&self, _a: &$t) -> Result<$t, NumericError> {
                    Err(self.unsupported("negate"))
                }

                fn pow(&self, b: &$t, e: i64) -> Result<$t, NumericError> {
                    if e < 0 {
                        return Err(self.unsupported("pow with a negative exponent"));
                    }

                    let r = match u32::try_from(e) {
                        Ok(e) => b.checked_pow(e),
                        Err(_) if *b <= 1 => Some(*b),
                        Err(_) => None,
                    };

                    match r {
                        Some(x) => Ok(x),
                        None => panic!("Attempt to raise {} to the power {} with overflow", b, e),
                    }
                }

                #[inline(always)]
                fn abs(&self, a: &$t) -> Result<$t, NumericError> {
                    Ok(*a)
                }

                fn sqrt(&self, a: &$t) -> Result<$t, NumericError> {
                    Ok(utils::isqrt(*a as u128) as $t)
                }
            }
        )*
    };
}

impl_signed_fixed_int!(i8, i16, i32, i64, i128, isize);
impl_unsigned_fixed_int!(u8, u16, u32, u64, u128, usize);

/// The operations on [Wrapping] integers, which wrap around on overflow
/// instead of panicking.
pub struct WrappingInt<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> WrappingInt<T> {
    pub const fn new() -> Self {
        WrappingInt {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for WrappingInt<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for WrappingInt<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for WrappingInt<T> {}

impl<T> Debug for WrappingInt<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "WrappingInt<{}>", std::any::type_name::<T>())
    }
}

impl<T> Display for WrappingInt<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Wrapping<{}>", std::any::type_name::<T>())
    }
}

macro_rules! impl_wrapping_int {
    ($($t:ty),*) => {
        $(
            impl NumericOps for WrappingInt<$t> {
                type Element = Wrapping<$t>;

                #[inline(always)]
                fn zero(&self) -> Self::Element {
                    Wrapping(0)
                }

                #[inline(always)]
                fn one(&self) -> Self::Element {
                    Wrapping(1)
                }

                fn nth(&self, n: i64) -> Self::Element {
                    Wrapping(n as $t)
                }

                #[inline(always)]
                fn add(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
                    a + b
                }

                #[inline(always)]
                fn sub(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
                    a - b
                }

                #[inline(always)]
                fn mul(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
                    a * b
                }

                fn div(&self, a: &Self::Element, b: &Self::Element) -> Result<Self::Element, NumericError> {
                    if b.0 == 0 {
                        return Err(NumericError::DivisionByZero);
                    }
                    Ok(a / b)
                }

                fn neg(&self, a: &Self::Element) -> Result<Self::Element, NumericError> {
                    Ok(-a)
                }

                fn pow(&self, b: &Self::Element, e: i64) -> Result<Self::Element, NumericError> {
                    if e < 0 {
                        return Err(self.unsupported("pow with a negative exponent"));
                    }
                    Ok(binary_pow(self, b, e as u64))
                }

                #[inline(always)]
                fn cmp(&self, a: &Self::Element, b: &Self::Element) -> Ordering {
                    Ord::cmp(a, b)
                }

                #[inline(always)]
                fn is_field(&self) -> bool {
                    false
                }

                fn is_integral_domain(&self) -> bool {
                    false
                }

                fn abs(&self, a: &Self::Element) -> Result<Self::Element, NumericError> {
                    Ok(Wrapping(a.0.wrapping_abs()))
                }

                fn sqrt(&self, a: &Self::Element) -> Result<Self::Element, NumericError> {
                    if a.0 < 0 {
                        return Err(self.unsupported("sqrt of a negative number"));
                    }
                    Ok(Wrapping(utils::isqrt(a.0 as u128) as $t))
                }
            }
        )*
    };
}

impl_wrapping_int!(i32, i64);

/// The ring of arbitrary-precision integers.
pub const Z: IntegerRing = IntegerRing;

/// The operations on arbitrary-precision [Integer]s. No operation can overflow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct IntegerRing;

impl Display for IntegerRing {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("Z")
    }
}

impl NumericOps for IntegerRing {
    type Element = Integer;

    fn zero(&self) -> Integer {
        Integer::new()
    }

    fn one(&self) -> Integer {
        Integer::from(1)
    }

    fn nth(&self, n: i64) -> Integer {
        Integer::from(n)
    }

    fn add(&self, a: &Integer, b: &Integer) -> Integer {
        Integer::from(a + b)
    }

    fn sub(&self, a: &Integer, b: &Integer) -> Integer {
        Integer::from(a - b)
    }

    fn mul(&self, a: &Integer, b: &Integer) -> Integer {
        Integer::from(a * b)
    }

    fn div(&self, a: &Integer, b: &Integer) -> Result<Integer, NumericError> {
        if b.cmp0() == Ordering::Equal {
            return Err(NumericError::DivisionByZero);
        }
        Ok(Integer::from(a / b))
    }

    fn neg(&self, a: &Integer) -> Result<Integer, NumericError> {
        Ok(Integer::from(-a))
    }

    fn pow(&self, b: &Integer, e: i64) -> Result<Integer, NumericError> {
        if e < 0 {
            return Err(self.unsupported("pow with a negative exponent"));
        }
        Ok(binary_pow(self, b, e as u64))
    }

    fn cmp(&self, a: &Integer, b: &Integer) -> Ordering {
        Ord::cmp(a, b)
    }

    fn is_field(&self) -> bool {
        false
    }

    fn abs(&self, a: &Integer) -> Result<Integer, NumericError> {
        Ok(a.clone().abs())
    }

    fn sqrt(&self, a: &Integer) -> Result<Integer, NumericError> {
        if a.cmp0() == Ordering::Less {
            return Err(self.unsupported("sqrt of a negative number"));
        }
        Ok(a.clone().sqrt())
    }

    fn is_zero(&self, a: &Integer) -> bool {
        a.cmp0() == Ordering::Equal
    }

    fn add_assign(&self, a: &mut Integer, b: &Integer) {
        *a += b;
    }

    fn sub_assign(&self, a: &mut Integer, b: &Integer) {
        *a -= b;
    }

    fn mul_assign(&self, a: &mut Integer, b: &Integer) {
        *a *= b;
    }

    fn add_mul_assign(&self, a: &mut Integer, b: &Integer, c: &Integer) {
        *a += Integer::from(b * c);
    }

    fn sub_mul_assign(&self, a: &mut Integer, b: &Integer, c: &Integer) {
        *a -= Integer::from(b * c);
    }
}

#[cfg(test)]
mod test {
    use std::num::Wrapping;

    use rug::Integer;

    use super::{WrappingInt, I32, I8, U16, U8, Z};
    use crate::{domains::NumericOps, error::NumericError};

    #[test]
    fn fixed_width() {
        assert_eq!(I32.add(&2, &3), 5);
        assert_eq!(I32.div(&7, &2), Ok(3));
        assert_eq!(I32.div(&-7, &2), Ok(-3));
        assert_eq!(I32.div(&7, &0), Err(NumericError::DivisionByZero));
        assert_eq!(I32.pow(&3, 4), Ok(81));
        assert_eq!(I32.pow(&-1, 1 << 40), Ok(1));
        assert_eq!(I32.sqrt(&25), Ok(5));
        assert_eq!(I32.sqrt(&24), Ok(4));
        assert!(I32.sqrt(&-4).is_err());
        assert_eq!(I8.abs(&-127), Ok(127));
        assert_eq!(I32.nth(-4), -4);
    }

    #[test]
    fn unsigned() {
        assert_eq!(
            U8.neg(&3),
            Err(NumericError::UnsupportedOperation {
                operation: "negate",
                type_name: "u8"
            })
        );
        assert!(U16.pow(&2, -1).is_err());
        assert_eq!(U16.pow(&2, 10), Ok(1024));
        assert_eq!(U8.abs_diff(&3, &10), 7);
    }

    #[test]
    #[should_panic(expected = "with overflow")]
    fn overflow_panics() {
        I8.add(&100, &100);
    }

    #[test]
    fn wrapping() {
        let w = WrappingInt::<i32>::new();
        assert_eq!(w.add(&Wrapping(i32::MAX), &Wrapping(1)), Wrapping(i32::MIN));
        assert_eq!(w.pow(&Wrapping(2), 32), Ok(Wrapping(0)));
        assert_eq!(w.div(&Wrapping(1), &Wrapping(0)), Err(NumericError::DivisionByZero));
        assert!(w.is_signed());
        assert!(!w.is_integral_domain());
        assert!(!U8.is_signed());
        assert!(I8.is_signed() && I8.is_integral_domain());
    }

    #[test]
    fn big_integers() {
        let big = Z.pow(&Integer::from(10), 40).unwrap();
        assert_eq!(
            big,
            Integer::parse("10000000000000000000000000000000000000000")
                .map(Integer::from)
                .unwrap()
        );
        assert_eq!(Z.div(&Integer::from(-7), &Integer::from(2)), Ok(Integer::from(-3)));
        assert_eq!(Z.sqrt(&Integer::from(50)), Ok(Integer::from(7)));
        assert!(Z.pow(&Integer::from(2), -1).is_err());
    }
}
