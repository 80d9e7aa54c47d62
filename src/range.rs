//! Axis-aligned boxes.

use std::cmp::Ordering;

use crate::{domains::NumericOps, error::NumericError, tensors::Vector};

/// An axis-aligned box spanned by the corners `min` and `max`, with `min[i] <= max[i]`
/// for every axis `i`. The bounds are inclusive.
#[derive(Clone, Debug)]
pub struct Range<R: NumericOps> {
    min: Vector<R>,
    max: Vector<R>,
}

fn validate<R: NumericOps>(min: &Vector<R>, max: &Vector<R>) -> Result<(), NumericError> {
    if min.dimension() != max.dimension() {
        return Err(NumericError::DimensionMismatch(format!(
            "the bounds of a range have dimensions {} and {}",
            min.dimension(),
            max.dimension()
        )));
    }

    if let Some(i) = min
        .iter()
        .zip(max.iter())
        .position(|(a, b)| min.ops().cmp(a, b) == Ordering::Greater)
    {
        return Err(NumericError::InvalidArgument(format!(
            "the minimum of a range exceeds its maximum along axis {}",
            i
        )));
    }

    Ok(())
}

impl<R: NumericOps> Range<R> {
    pub fn new(min: Vector<R>, max: Vector<R>) -> Result<Self, NumericError> {
        validate(&min, &max)?;
        Ok(Range { min, max })
    }

    pub fn min(&self) -> &Vector<R> {
        &self.min
    }

    pub fn max(&self) -> &Vector<R> {
        &self.max
    }

    /// Replace the lower corner. The range is unchanged if the new corner is invalid.
    pub fn set_min(&mut self, min: Vector<R>) -> Result<(), NumericError> {
        validate(&min, &self.max)?;
        self.min = min;
        Ok(())
    }

    /// Replace the upper corner. The range is unchanged if the new corner is invalid.
    pub fn set_max(&mut self, max: Vector<R>) -> Result<(), NumericError> {
        validate(&self.min, &max)?;
        self.max = max;
        Ok(())
    }

    pub fn dimension(&self) -> usize {
        self.min.dimension()
    }

    /// The center `(min + max) / 2`, which truncates for integers.
    pub fn midpoint(&self) -> Result<Vector<R>, NumericError> {
        let two = self.min.ops().nth(2);
        self.min.add(&self.max)?.div_scalar(&two)
    }

    /// Returns `true` iff `point` lies inside the range or on its boundary.
    pub fn contains(&self, point: &Vector<R>) -> Result<bool, NumericError> {
        self.check_dimension(point.dimension())?;

        let ops = self.min.ops();
        Ok(self
            .min
            .iter()
            .zip(self.max.iter())
            .zip(point.iter())
            .all(|((lo, hi), p)| {
                ops.cmp(lo, p) != Ordering::Greater && ops.cmp(p, hi) != Ordering::Greater
            }))
    }

    /// Returns `true` iff `other` lies completely inside this range.
    pub fn contains_range(&self, other: &Self) -> Result<bool, NumericError> {
        Ok(self.contains(&other.min)? && self.contains(&other.max)?)
    }

    /// Returns `true` iff the ranges share at least one point.
    pub fn overlaps(&self, other: &Self) -> Result<bool, NumericError> {
        self.check_dimension(other.dimension())?;

        let ops = self.min.ops();
        Ok((0..self.dimension()).all(|i| {
            ops.cmp(&self.min[i], &other.max[i]) != Ordering::Greater
                && ops.cmp(&other.min[i], &self.max[i]) != Ordering::Greater
        }))
    }

    /// The range of points that lie in both ranges, or `None` if the ranges do not overlap.
    pub fn intersect(&self, other: &Self) -> Result<Option<Self>, NumericError> {
        if !self.overlaps(other)? {
            return Ok(None);
        }

        let ops = self.min.ops();
        let pick = |a: &Vector<R>, b: &Vector<R>, keep: Ordering| {
            Vector::new(
                a.iter()
                    .zip(b.iter())
                    .map(|(x, y)| {
                        if ops.cmp(x, y) == keep {
                            x.clone()
                        } else {
                            y.clone()
                        }
                    })
                    .collect(),
                ops.clone(),
            )
        };

        Ok(Some(Range {
            min: pick(&self.min, &other.min, Ordering::Greater),
            max: pick(&self.max, &other.max, Ordering::Less),
        }))
    }

    fn check_dimension(&self, dimension: usize) -> Result<(), NumericError> {
        if dimension != self.dimension() {
            return Err(NumericError::DimensionMismatch(format!(
                "expected dimension {} instead of {}",
                self.dimension(),
                dimension
            )));
        }
        Ok(())
    }
}

impl<R: NumericOps> PartialEq for Range<R> {
    fn eq(&self, other: &Self) -> bool {
        self.min == other.min && self.max == other.max
    }
}

#[cfg(test)]
mod test {
    use super::Range;
    use crate::{
        domains::{float::F64, integer::I64},
        error::NumericError,
        tensors::Vector,
    };

    fn range(min: Vec<i64>, max: Vec<i64>) -> Range<crate::domains::integer::FixedInt<i64>> {
        Range::new(Vector::new(min, I64), Vector::new(max, I64)).unwrap()
    }

    #[test]
    fn validation() {
        assert!(matches!(
            Range::new(Vector::new(vec![0, 0], I64), Vector::new(vec![1], I64)),
            Err(NumericError::DimensionMismatch(_))
        ));
        assert!(matches!(
            Range::new(Vector::new(vec![0, 2], I64), Vector::new(vec![1, 1], I64)),
            Err(NumericError::InvalidArgument(_))
        ));

        let mut r = range(vec![0, 0], vec![2, 2]);
        assert!(r.set_min(Vector::new(vec![3, 0], I64)).is_err());
        assert_eq!(r.min().as_slice(), &[0, 0]);
        r.set_max(Vector::new(vec![4, 6], I64)).unwrap();
        assert_eq!(r.midpoint().unwrap().as_slice(), &[2, 3]);
    }

    #[test]
    fn containment() {
        let r = range(vec![0, 0], vec![4, 4]);
        assert_eq!(r.contains(&Vector::new(vec![4, 0], I64)), Ok(true));
        assert_eq!(r.contains(&Vector::new(vec![5, 0], I64)), Ok(false));
        assert!(r.contains(&Vector::new(vec![1], I64)).is_err());
        assert_eq!(r.contains_range(&range(vec![1, 1], vec![2, 3])), Ok(true));
        assert_eq!(r.contains_range(&range(vec![1, 1], vec![2, 5])), Ok(false));
    }

    #[test]
    fn intersection() {
        let a = range(vec![0, 0], vec![4, 4]);
        let b = range(vec![2, -1], vec![6, 3]);
        assert_eq!(a.intersect(&b), Ok(Some(range(vec![2, 0], vec![4, 3]))));

        let c = range(vec![5, 5], vec![6, 6]);
        assert_eq!(a.overlaps(&c), Ok(false));
        assert_eq!(a.intersect(&c), Ok(None));

        let touching = range(vec![4, 4], vec![5, 5]);
        assert_eq!(
            a.intersect(&touching),
            Ok(Some(range(vec![4, 4], vec![4, 4])))
        );

        let f = Range::new(Vector::new(vec![0., 0.], F64), Vector::new(vec![1., 3.], F64)).unwrap();
        assert_eq!(f.midpoint().unwrap().as_slice(), &[0.5, 1.5]);
    }
}
