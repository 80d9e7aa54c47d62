use std::cmp::Ordering;

use super::vector::Vector;
use crate::{domains::NumericOps, error::NumericError};

/// A quaternion `x i + y j + z k + w`, used to represent rotations in three dimensions.
#[derive(Clone, Debug)]
pub struct Quaternion<R: NumericOps> {
    pub x: R::Element,
    pub y: R::Element,
    pub z: R::Element,
    pub w: R::Element,
    pub(crate) ops: R,
}

impl<R: NumericOps> Quaternion<R> {
    pub fn new(x: R::Element, y: R::Element, z: R::Element, w: R::Element, ops: R) -> Self {
        Quaternion { x, y, z, w, ops }
    }

    /// The quaternion that represents no rotation.
    pub fn identity(ops: R) -> Self {
        Quaternion {
            x: ops.zero(),
            y: ops.zero(),
            z: ops.zero(),
            w: ops.one(),
            ops,
        }
    }

    /// Create the unit quaternion that rotates by `angle` radians around `axis`.
    pub fn from_axis_angle(axis: &Vector<R>, angle: &R::Element) -> Result<Self, NumericError> {
        if axis.dimension() != 3 {
            return Err(NumericError::DimensionMismatch(format!(
                "a rotation axis must be three-dimensional instead of dimension {}",
                axis.dimension()
            )));
        }

        let ops = &axis.ops;
        let half = ops.div(angle, &ops.nth(2))?;
        let (sin, cos) = (ops.sin(&half)?, ops.cos(&half)?);
        let n = axis.normalize()?.mul_scalar(&sin);

        Ok(Quaternion {
            x: n.data[0].clone(),
            y: n.data[1].clone(),
            z: n.data[2].clone(),
            w: cos,
            ops: ops.clone(),
        })
    }

    pub fn ops(&self) -> &R {
        &self.ops
    }

    fn zip_with(&self, other: &Self, f: impl Fn(&R::Element, &R::Element) -> R::Element) -> Self {
        Quaternion {
            x: f(&self.x, &other.x),
            y: f(&self.y, &other.y),
            z: f(&self.z, &other.z),
            w: f(&self.w, &other.w),
            ops: self.ops.clone(),
        }
    }

    pub fn add(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| self.ops.add(a, b))
    }

    pub fn sub(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| self.ops.sub(a, b))
    }

    /// The Hamilton product `self * other`, which applies `other` first when used as a rotation.
    pub fn mul(&self, other: &Self) -> Self {
        let o = &self.ops;
        let (a, b) = (self, other);

        let mut x = o.mul(&a.w, &b.x);
        o.add_mul_assign(&mut x, &a.x, &b.w);
        o.add_mul_assign(&mut x, &a.y, &b.z);
        o.sub_mul_assign(&mut x, &a.z, &b.y);

        let mut y = o.mul(&a.w, &b.y);
        o.sub_mul_assign(&mut y, &a.x, &b.z);
        o.add_mul_assign(&mut y, &a.y, &b.w);
        o.add_mul_assign(&mut y, &a.z, &b.x);

        let mut z = o.mul(&a.w, &b.z);
        o.add_mul_assign(&mut z, &a.x, &b.y);
        o.sub_mul_assign(&mut z, &a.y, &b.x);
        o.add_mul_assign(&mut z, &a.z, &b.w);

        let mut w = o.mul(&a.w, &b.w);
        o.sub_mul_assign(&mut w, &a.x, &b.x);
        o.sub_mul_assign(&mut w, &a.y, &b.y);
        o.sub_mul_assign(&mut w, &a.z, &b.z);

        Quaternion {
            x,
            y,
            z,
            w,
            ops: self.ops.clone(),
        }
    }

    pub fn mul_scalar(&self, e: &R::Element) -> Self {
        Quaternion {
            x: self.ops.mul(&self.x, e),
            y: self.ops.mul(&self.y, e),
            z: self.ops.mul(&self.z, e),
            w: self.ops.mul(&self.w, e),
            ops: self.ops.clone(),
        }
    }

    fn div_scalar(&self, e: &R::Element) -> Result<Self, NumericError> {
        Ok(Quaternion {
            x: self.ops.div(&self.x, e)?,
            y: self.ops.div(&self.y, e)?,
            z: self.ops.div(&self.z, e)?,
            w: self.ops.div(&self.w, e)?,
            ops: self.ops.clone(),
        })
    }

    pub fn conjugate(&self) -> Result<Self, NumericError> {
        Ok(Quaternion {
            x: self.ops.neg(&self.x)?,
            y: self.ops.neg(&self.y)?,
            z: self.ops.neg(&self.z)?,
            w: self.w.clone(),
            ops: self.ops.clone(),
        })
    }

    pub fn magnitude_squared(&self) -> R::Element {
        let mut res = self.ops.mul(&self.x, &self.x);
        self.ops.add_mul_assign(&mut res, &self.y, &self.y);
        self.ops.add_mul_assign(&mut res, &self.z, &self.z);
        self.ops.add_mul_assign(&mut res, &self.w, &self.w);
        res
    }

    pub fn magnitude(&self) -> Result<R::Element, NumericError> {
        self.ops.sqrt(&self.magnitude_squared())
    }

    pub fn normalize(&self) -> Result<Self, NumericError> {
        if self.ops.is_zero(&self.magnitude_squared()) {
            return Err(NumericError::DivisionByZero);
        }
        self.div_scalar(&self.magnitude()?)
    }

    /// The multiplicative inverse `q* / |q|^2`.
    pub fn inverse(&self) -> Result<Self, NumericError> {
        let norm = self.magnitude_squared();
        if self.ops.is_zero(&norm) {
            return Err(NumericError::DivisionByZero);
        }
        self.conjugate()?.div_scalar(&norm)
    }

    /// Componentwise linear interpolation `self + t (other - self)`.
    pub fn lerp(&self, other: &Self, t: &R::Element) -> Self {
        self.zip_with(other, |a, b| {
            let mut r = a.clone();
            self.ops.add_mul_assign(&mut r, t, &self.ops.sub(b, a));
            r
        })
    }

    fn components(&self) -> [&R::Element; 4] {
        [&self.x, &self.y, &self.z, &self.w]
    }

    pub fn equals(&self, other: &Self) -> bool {
        self.components()
            .iter()
            .zip(other.components())
            .all(|(a, b)| self.ops.cmp(a, b) == Ordering::Equal)
    }

    pub fn equals_with_leniency(&self, other: &Self, leniency: &R::Element) -> bool {
        self.components()
            .iter()
            .zip(other.components())
            .all(|(a, b)| self.ops.equals_with_leniency(a, b, leniency))
    }
}

impl<R: NumericOps> PartialEq for Quaternion<R> {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}
