use std::{
    cmp::Ordering,
    fmt::Display,
    ops::{Index, IndexMut},
    slice::Iter,
};

use super::{matrix::Matrix, quaternion::Quaternion};
use crate::{domains::NumericOps, error::NumericError};

/// An n-dimensional vector with entries of the numeric representation `R`.
#[derive(Clone, Debug)]
pub struct Vector<R: NumericOps> {
    pub(crate) data: Vec<R::Element>,
    pub(crate) ops: R,
}

impl<R: NumericOps> Vector<R> {
    /// Create a new vector from a list of scalars.
    pub fn new(data: Vec<R::Element>, ops: R) -> Vector<R> {
        Vector { data, ops }
    }

    /// Create a vector with `dimension` zeroes.
    pub fn zero(dimension: usize, ops: R) -> Vector<R> {
        Vector {
            data: vec![ops.zero(); dimension],
            ops,
        }
    }

    /// Create a vector with `dimension` ones.
    pub fn one(dimension: usize, ops: R) -> Vector<R> {
        Vector {
            data: vec![ops.one(); dimension],
            ops,
        }
    }

    /// Create a vector where every entry is `value`.
    pub fn uniform(dimension: usize, value: R::Element, ops: R) -> Vector<R> {
        Vector {
            data: vec![value; dimension],
            ops,
        }
    }

    /// Create the unit vector along `axis`.
    pub fn unit(dimension: usize, axis: usize, ops: R) -> Result<Vector<R>, NumericError> {
        if axis >= dimension {
            return Err(NumericError::IndexOutOfBounds {
                index: vec![axis],
                shape: vec![dimension],
            });
        }

        let mut v = Vector::zero(dimension, ops);
        v.data[axis] = v.ops.one();
        Ok(v)
    }

    /// Create a new zero vector from an existing one.
    pub fn new_zero(&self) -> Vector<R> {
        Vector::zero(self.data.len(), self.ops.clone())
    }

    pub fn dimension(&self) -> usize {
        self.data.len()
    }

    /// Return the numeric operations of the vector entries.
    pub fn ops(&self) -> &R {
        &self.ops
    }

    pub fn as_slice(&self) -> &[R::Element] {
        &self.data
    }

    pub fn iter(&self) -> Iter<'_, R::Element> {
        self.data.iter()
    }

    pub fn into_vec(self) -> Vec<R::Element> {
        self.data
    }

    pub fn get(&self, index: usize) -> Result<&R::Element, NumericError> {
        self.data
            .get(index)
            .ok_or_else(|| NumericError::IndexOutOfBounds {
                index: vec![index],
                shape: vec![self.data.len()],
            })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut R::Element, NumericError> {
        let len = self.data.len();
        self.data
            .get_mut(index)
            .ok_or_else(|| NumericError::IndexOutOfBounds {
                index: vec![index],
                shape: vec![len],
            })
    }

    pub fn set(&mut self, index: usize, value: R::Element) -> Result<(), NumericError> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    pub fn x(&self) -> Result<&R::Element, NumericError> {
        self.get(0)
    }

    pub fn y(&self) -> Result<&R::Element, NumericError> {
        self.get(1)
    }

    pub fn z(&self) -> Result<&R::Element, NumericError> {
        self.get(2)
    }

    pub fn w(&self) -> Result<&R::Element, NumericError> {
        self.get(3)
    }

    /// Convert the vector into a column matrix.
    pub fn into_matrix(self) -> Result<Matrix<R>, NumericError> {
        Matrix::from_vector(self)
    }

    /// Apply a function `f` to each entry of the vector.
    pub fn map<G: NumericOps>(&self, f: impl Fn(&R::Element) -> G::Element, ops: G) -> Vector<G> {
        Vector {
            data: self.data.iter().map(f).collect(),
            ops,
        }
    }

    fn check_dimension(&self, other: &Self, operation: &str) -> Result<(), NumericError> {
        if self.data.len() != other.data.len() {
            return Err(NumericError::DimensionMismatch(format!(
                "cannot {} vectors of dimension {} and {}",
                operation,
                self.data.len(),
                other.data.len()
            )));
        }
        Ok(())
    }

    fn check_three_dimensional(&self, operation: &str) -> Result<(), NumericError> {
        if self.data.len() != 3 {
            return Err(NumericError::DimensionMismatch(format!(
                "{} requires a three-dimensional vector instead of dimension {}",
                operation,
                self.data.len()
            )));
        }
        Ok(())
    }

    pub fn add(&self, other: &Self) -> Result<Vector<R>, NumericError> {
        self.check_dimension(other, "add")?;
        Ok(Vector {
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(a, b)| self.ops.add(a, b))
                .collect(),
            ops: self.ops.clone(),
        })
    }

    pub fn sub(&self, other: &Self) -> Result<Vector<R>, NumericError> {
        self.check_dimension(other, "subtract")?;
        Ok(Vector {
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(a, b)| self.ops.sub(a, b))
                .collect(),
            ops: self.ops.clone(),
        })
    }

    pub fn neg(&self) -> Result<Vector<R>, NumericError> {
        Ok(Vector {
            data: self
                .data
                .iter()
                .map(|a| self.ops.neg(a))
                .collect::<Result<_, _>>()?,
            ops: self.ops.clone(),
        })
    }

    /// Multiply each entry by the scalar `e`.
    pub fn mul_scalar(&self, e: &R::Element) -> Vector<R> {
        Vector {
            data: self.data.iter().map(|a| self.ops.mul(a, e)).collect(),
            ops: self.ops.clone(),
        }
    }

    /// Divide each entry by the scalar `e`.
    pub fn div_scalar(&self, e: &R::Element) -> Result<Vector<R>, NumericError> {
        Ok(Vector {
            data: self
                .data
                .iter()
                .map(|a| self.ops.div(a, e))
                .collect::<Result<_, _>>()?,
            ops: self.ops.clone(),
        })
    }

    /// Take the Euclidean scalar product of two vectors.
    pub fn dot(&self, other: &Self) -> Result<R::Element, NumericError> {
        self.check_dimension(other, "take the dot product of")?;

        let mut res = self.ops.zero();
        for (a, b) in self.data.iter().zip(&other.data) {
            self.ops.add_mul_assign(&mut res, a, b);
        }
        Ok(res)
    }

    /// Compute the Euclidean cross product in three dimensions.
    pub fn cross(&self, other: &Self) -> Result<Vector<R>, NumericError> {
        self.check_dimension(other, "take the cross product of")?;
        self.check_three_dimensional("The cross product")?;

        let (a, b, o) = (&self.data, &other.data, &self.ops);
        Ok(Vector {
            data: vec![
                o.sub(&o.mul(&a[1], &b[2]), &o.mul(&a[2], &b[1])),
                o.sub(&o.mul(&a[2], &b[0]), &o.mul(&a[0], &b[2])),
                o.sub(&o.mul(&a[0], &b[1]), &o.mul(&a[1], &b[0])),
            ],
            ops: self.ops.clone(),
        })
    }

    pub fn magnitude_squared(&self) -> R::Element {
        let mut res = self.ops.zero();
        for e in &self.data {
            self.ops.add_mul_assign(&mut res, e, e);
        }
        res
    }

    /// The Euclidean length, which is only exact for representations
    /// with an exact square root.
    pub fn magnitude(&self) -> Result<R::Element, NumericError> {
        self.ops.sqrt(&self.magnitude_squared())
    }

    /// Scale the vector to unit length.
    pub fn normalize(&self) -> Result<Vector<R>, NumericError> {
        if self.ops.is_zero(&self.magnitude_squared()) {
            return Err(NumericError::DivisionByZero);
        }

        self.div_scalar(&self.magnitude()?)
    }

    fn clamp_unit(&self, c: R::Element) -> Result<R::Element, NumericError> {
        let one = self.ops.one();
        let minus_one = self.ops.neg(&one)?;
        Ok(if self.ops.cmp(&c, &one) == Ordering::Greater {
            one
        } else if self.ops.cmp(&c, &minus_one) == Ordering::Less {
            minus_one
        } else {
            c
        })
    }

    /// The angle between `self` and `other` in radians.
    pub fn angle(&self, other: &Self) -> Result<R::Element, NumericError> {
        self.check_dimension(other, "take the angle between")?;
        let cos = self.normalize()?.dot(&other.normalize()?)?;
        self.ops.acos(&self.clamp_unit(cos)?)
    }

    /// Linearly interpolate between `self` (at `t = 0`) and `other` (at `t = 1`).
    /// Values of `t` outside `[0, 1]` extrapolate.
    pub fn lerp(&self, other: &Self, t: &R::Element) -> Result<Vector<R>, NumericError> {
        self.add(&other.sub(self)?.mul_scalar(t))
    }

    /// Spherically interpolate between `self` and `other`, moving at a constant
    /// angular velocity. Parallel vectors are interpolated linearly.
    pub fn slerp(&self, other: &Self, t: &R::Element) -> Result<Vector<R>, NumericError> {
        self.check_dimension(other, "interpolate")?;

        let cos = self.normalize()?.dot(&other.normalize()?)?;
        let theta = self.ops.acos(&self.clamp_unit(cos)?)?;
        let sin = self.ops.sin(&theta)?;
        if self.ops.is_negligible(&sin) {
            return self.lerp(other, t);
        }

        let one_minus_t = self.ops.sub(&self.ops.one(), t);
        let wa = self
            .ops
            .div(&self.ops.sin(&self.ops.mul(&one_minus_t, &theta))?, &sin)?;
        let wb = self
            .ops
            .div(&self.ops.sin(&self.ops.mul(t, &theta))?, &sin)?;

        self.mul_scalar(&wa).add(&other.mul_scalar(&wb))
    }

    /// Bilinearly interpolate in the triangle `self`, `b`, `c`:
    /// `self + u (b - self) + v (c - self)`.
    pub fn blerp(
        &self,
        b: &Self,
        c: &Self,
        u: &R::Element,
        v: &R::Element,
    ) -> Result<Vector<R>, NumericError> {
        let ub = b.sub(self)?.mul_scalar(u);
        let vc = c.sub(self)?.mul_scalar(v);
        self.add(&ub)?.add(&vc)
    }

    /// Rotate a three-dimensional vector by `angle` radians around the axis `(x, y, z)`,
    /// counterclockwise when looking against the axis.
    pub fn rotate_by(
        &self,
        angle: &R::Element,
        x: &R::Element,
        y: &R::Element,
        z: &R::Element,
    ) -> Result<Vector<R>, NumericError> {
        self.check_three_dimensional("Rotation")?;

        let axis =
            Vector::new(vec![x.clone(), y.clone(), z.clone()], self.ops.clone()).normalize()?;
        let cos = self.ops.cos(angle)?;
        let sin = self.ops.sin(angle)?;

        // v cos + (k x v) sin + k (k . v) (1 - cos)
        let along_axis = self
            .ops
            .mul(&axis.dot(self)?, &self.ops.sub(&self.ops.one(), &cos));
        self.mul_scalar(&cos)
            .add(&axis.cross(self)?.mul_scalar(&sin))?
            .add(&axis.mul_scalar(&along_axis))
    }

    /// Rotate a three-dimensional vector by the quaternion `q`, which does not
    /// need to be normalized.
    pub fn rotate_by_quaternion(&self, q: &Quaternion<R>) -> Result<Vector<R>, NumericError> {
        self.check_three_dimensional("Rotation")?;

        let norm = q.magnitude_squared();
        if self.ops.is_zero(&norm) {
            return Err(NumericError::DivisionByZero);
        }

        let p = Quaternion::new(
            self.data[0].clone(),
            self.data[1].clone(),
            self.data[2].clone(),
            self.ops.zero(),
            self.ops.clone(),
        );
        let r = q.mul(&p).mul(&q.conjugate()?);

        Vector::new(vec![r.x, r.y, r.z], self.ops.clone()).div_scalar(&norm)
    }

    /// Returns `true` iff the vectors have the same dimension and equal entries.
    pub fn equals(&self, other: &Self) -> bool {
        self.data.len() == other.data.len()
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| self.ops.cmp(a, b) == Ordering::Equal)
    }

    /// Returns `true` iff the vectors have the same dimension and all entries
    /// differ by at most `leniency`.
    pub fn equals_with_leniency(&self, other: &Self, leniency: &R::Element) -> bool {
        self.data.len() == other.data.len()
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| self.ops.equals_with_leniency(a, b, leniency))
    }

    /// Project the vector onto the `target` vector.
    pub fn project(&self, target: &Self) -> Result<Vector<R>, NumericError> {
        if !self.ops.is_field() {
            return Err(self.ops.unsupported("project"));
        }

        let factor = self
            .ops
            .div(&self.dot(target)?, &target.magnitude_squared())?;
        Ok(target.mul_scalar(&factor))
    }

    /// Use the Gram–Schmidt method to create an orthogonal basis.
    pub fn orthogonalize(system: &[Self]) -> Result<Vec<Vector<R>>, NumericError> {
        let mut res: Vec<Vector<R>> = vec![];

        for s in system {
            let mut new_vec = s.clone();
            for x in &res {
                new_vec = new_vec.sub(&new_vec.project(x)?)?;
            }

            res.push(new_vec);
        }

        Ok(res)
    }
}

impl<R: NumericOps> PartialEq for Vector<R> {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<R: NumericOps> Index<usize> for Vector<R> {
    type Output = R::Element;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<R: NumericOps> IndexMut<usize> for Vector<R> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}

impl<R: NumericOps> Display for Vector<R>
where
    R::Element: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("(")?;
        for (i, e) in self.data.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", e)?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod test {
    use std::f64::consts::{FRAC_PI_2, PI};

    use rug::Rational;

    use crate::{
        domains::{
            float::F64,
            integer::{I64, U32},
            rational::Q,
        },
        error::NumericError,
        tensors::{Quaternion, Vector},
    };

    #[test]
    fn arithmetic() {
        let a = Vector::new(vec![1, 2, 3], I64);
        let b = Vector::new(vec![4, 5, 6], I64);
        assert_eq!(a.add(&b).unwrap().as_slice(), &[5, 7, 9]);
        assert_eq!(b.sub(&a).unwrap().as_slice(), &[3, 3, 3]);
        assert_eq!(a.dot(&b), Ok(32));
        assert_eq!(a.neg().unwrap().as_slice(), &[-1, -2, -3]);
        assert_eq!(a.mul_scalar(&2).as_slice(), &[2, 4, 6]);

        let c = Vector::new(vec![1, 2], I64);
        assert!(matches!(
            a.add(&c),
            Err(NumericError::DimensionMismatch(_))
        ));
    }

    #[test]
    fn unsigned_negation() {
        let a = Vector::new(vec![1u32, 2], U32);
        assert!(matches!(
            a.neg(),
            Err(NumericError::UnsupportedOperation { .. })
        ));
    }

    #[test]
    fn accessors() {
        let mut a = Vector::new(vec![1, 2], I64);
        assert_eq!(a.x(), Ok(&1));
        assert_eq!(a.y(), Ok(&2));
        assert_eq!(
            a.z(),
            Err(NumericError::IndexOutOfBounds {
                index: vec![2],
                shape: vec![2]
            })
        );
        a.set(1, 5).unwrap();
        assert_eq!(a[1], 5);
        assert!(a.set(2, 5).is_err());
        assert_eq!(Vector::unit(3, 1, I64).unwrap().as_slice(), &[0, 1, 0]);
        assert!(Vector::unit(3, 3, I64).is_err());
    }

    #[test]
    fn cross_product() {
        let x = Vector::unit(3, 0, I64).unwrap();
        let y = Vector::unit(3, 1, I64).unwrap();
        assert_eq!(x.cross(&y).unwrap(), Vector::unit(3, 2, I64).unwrap());

        let p = Vector::new(vec![1, 2], I64);
        assert!(p.cross(&p).is_err());
    }

    #[test]
    fn magnitude() {
        let a = Vector::new(vec![3, 4], I64);
        assert_eq!(a.magnitude_squared(), 25);
        assert_eq!(a.magnitude(), Ok(5));

        let b = Vector::new(vec![Rational::from(3), Rational::from(4)], Q);
        assert_eq!(
            b.normalize().unwrap().as_slice(),
            &[Rational::from((3, 5)), Rational::from((4, 5))]
        );

        let f = Vector::new(vec![1., 2., 2.], F64).normalize().unwrap();
        assert!((f.magnitude().unwrap() - 1.).abs() < 1e-12);

        assert_eq!(
            Vector::zero(3, F64).normalize(),
            Err(NumericError::DivisionByZero)
        );
    }

    #[test]
    fn interpolation() {
        let a = Vector::new(vec![0., 0.], F64);
        let b = Vector::new(vec![2., 4.], F64);
        assert_eq!(a.lerp(&b, &0.5).unwrap().as_slice(), &[1., 2.]);
        assert_eq!(a.lerp(&b, &2.).unwrap().as_slice(), &[4., 8.]);

        let c = Vector::new(vec![0., 2.], F64);
        assert_eq!(
            a.blerp(&b, &c, &0.5, &0.5).unwrap().as_slice(),
            &[1., 3.]
        );

        let x = Vector::new(vec![1., 0.], F64);
        let y = Vector::new(vec![0., 1.], F64);
        let mid = x.slerp(&y, &0.5).unwrap();
        let s = (0.5f64).sqrt();
        assert!(mid.equals_with_leniency(&Vector::new(vec![s, s], F64), &1e-12));

        let parallel = x.slerp(&x.mul_scalar(&3.), &0.5).unwrap();
        assert!(parallel.equals_with_leniency(&Vector::new(vec![2., 0.], F64), &1e-12));

        assert_eq!(a.slerp(&b, &0.5), Err(NumericError::DivisionByZero));
    }

    #[test]
    fn angles_and_rotations() {
        let x = Vector::new(vec![1., 0., 0.], F64);
        let y = Vector::new(vec![0., 1., 0.], F64);
        assert!((x.angle(&y).unwrap() - FRAC_PI_2).abs() < 1e-12);
        assert!((x.angle(&x.mul_scalar(&-2.)).unwrap() - PI).abs() < 1e-12);

        let r = x.rotate_by(&FRAC_PI_2, &0., &0., &2.).unwrap();
        assert!(r.equals_with_leniency(&y, &1e-12));

        let q = Quaternion::from_axis_angle(&Vector::new(vec![0., 0., 1.], F64), &FRAC_PI_2)
            .unwrap()
            .mul_scalar(&3.);
        let r = x.rotate_by_quaternion(&q).unwrap();
        assert!(r.equals_with_leniency(&y, &1e-12));

        let p = Vector::new(vec![1., 0.], F64);
        assert!(p.rotate_by(&1., &0., &0., &1.).is_err());
        assert!(matches!(
            p.rotate_by_quaternion(&q),
            Err(NumericError::DimensionMismatch(_))
        ));
        let w = Vector::new(vec![1., 0., 0., 0.], F64);
        assert!(matches!(
            w.rotate_by_quaternion(&q),
            Err(NumericError::DimensionMismatch(_))
        ));
    }

    #[test]
    fn gram_schmidt() {
        let system = [
            Vector::new(vec![Rational::from(1), Rational::from(1)], Q),
            Vector::new(vec![Rational::from(1), Rational::from(2)], Q),
        ];
        let basis = Vector::orthogonalize(&system).unwrap();
        assert_eq!(basis[0].dot(&basis[1]), Ok(Rational::new()));
        assert_eq!(
            basis[1].as_slice(),
            &[Rational::from((-1, 2)), Rational::from((1, 2))]
        );

        let ints = Vector::new(vec![1, 2], I64);
        assert!(ints.project(&ints).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(Vector::new(vec![1, -2, 3], I64).to_string(), "(1, -2, 3)");
    }
}
