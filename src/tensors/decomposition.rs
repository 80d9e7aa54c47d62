//! Determinants, Gaussian elimination, inverses and LU decomposition.
//!
//! Representations whose division is exact (see [NumericOps::is_field]) are reduced by
//! subtracting scaled pivot rows. Representations with truncating division use
//! fraction-free elimination instead, which only divides when the quotient is exact.

use std::cmp::Ordering;

use smallvec::SmallVec;
use tracing::{debug, instrument};

use super::{matrix::Matrix, vector::Vector};
use crate::{domains::NumericOps, error::NumericError};

/// The factorization `P * A = L * U` of a square matrix `A`, where `L` is lower triangular
/// with ones on the diagonal, `U` is upper triangular and `P` is a row permutation.
#[derive(Clone, Debug)]
pub struct LuDecomposition<R: NumericOps> {
    pub lower: Matrix<R>,
    pub upper: Matrix<R>,
    /// Row `i` of `P * A` is row `permutation[i]` of `A`.
    pub permutation: SmallVec<[usize; 8]>,
    /// The number of row swaps performed.
    pub swaps: usize,
}

impl<R: NumericOps> LuDecomposition<R> {
    /// The determinant of the decomposed matrix.
    pub fn determinant(&self) -> Result<R::Element, NumericError> {
        let ops = &self.upper.ops;
        let mut det = ops.one();
        for i in 0..self.upper.nrows {
            ops.mul_assign(&mut det, &self.upper[(i, i)]);
        }

        if self.swaps % 2 == 1 {
            ops.neg(&det)
        } else {
            Ok(det)
        }
    }

    /// The permutation as a matrix `P`.
    pub fn permutation_matrix(&self) -> Result<Matrix<R>, NumericError> {
        let n = self.permutation.len();
        let mut p = Matrix::new(n, n, self.upper.ops.clone())?;
        for (i, &j) in self.permutation.iter().enumerate() {
            p[(i, j)] = p.ops.one();
        }
        Ok(p)
    }

    /// Solve `A * x = b` for `x` by forward and back substitution.
    pub fn solve(&self, b: &Vector<R>) -> Result<Vector<R>, NumericError> {
        let n = self.upper.nrows;
        if b.dimension() != n {
            return Err(NumericError::DimensionMismatch(format!(
                "the right-hand side has dimension {} instead of {}",
                b.dimension(),
                n
            )));
        }

        let ops = &self.upper.ops;

        let mut y: Vec<R::Element> = Vec::with_capacity(n);
        for i in 0..n {
            let mut s = b.data[self.permutation[i]].clone();
            for (j, yj) in y.iter().enumerate() {
                ops.sub_mul_assign(&mut s, &self.lower[(i, j)], yj);
            }
            y.push(s);
        }

        let mut x = vec![ops.zero(); n];
        for i in (0..n).rev() {
            let mut s = y[i].clone();
            for j in i + 1..n {
                ops.sub_mul_assign(&mut s, &self.upper[(i, j)], &x[j]);
            }

            let d = &self.upper[(i, i)];
            if ops.is_negligible(d) {
                return Err(NumericError::Singular);
            }
            x[i] = ops.div(&s, d)?;
        }

        Ok(Vector::new(x, ops.clone()))
    }
}

impl<R: NumericOps> Matrix<R> {
    fn check_square(&self) -> Result<(), NumericError> {
        if self.nrows != self.ncols {
            return Err(NumericError::NotSquare {
                nrows: self.nrows,
                ncols: self.ncols,
            });
        }
        Ok(())
    }

    /// Compute the determinant of the matrix. Matrices up to 3x3 are
    /// expanded in closed form, larger ones are eliminated.
    ///
    /// Representations without negation, such as unsigned integers, are expanded
    /// into positive and negative terms that are only subtracted at the end. If the
    /// determinant is negative, [NumericError::UnsupportedOperation] is returned.
    pub fn determinant(&self) -> Result<R::Element, NumericError> {
        self.check_square()?;
        if !self.ops.is_signed() {
            return self.unsigned_determinant();
        }

        let f = &self.ops;
        match self.nrows {
            1 => Ok(self.data[0].clone()),
            2 => Ok(f.sub(
                &f.mul(&self.data[0], &self.data[3]),
                &f.mul(&self.data[1], &self.data[2]),
            )),
            3 => {
                let m0 = f.mul(
                    &self.data[0],
                    &f.sub(
                        &f.mul(&self.data[4], &self.data[8]),
                        &f.mul(&self.data[5], &self.data[7]),
                    ),
                );
                let m1 = f.mul(
                    &self.data[1],
                    &f.sub(
                        &f.mul(&self.data[3], &self.data[8]),
                        &f.mul(&self.data[5], &self.data[6]),
                    ),
                );
                let m2 = f.mul(
                    &self.data[2],
                    &f.sub(
                        &f.mul(&self.data[3], &self.data[7]),
                        &f.mul(&self.data[4], &self.data[6]),
                    ),
                );

                Ok(f.add(&f.sub(&m0, &m1), &m2))
            }
            _ => self.determinant_by_elimination(),
        }
    }

    /// Compute the determinant by recursive cofactor expansion along the first row.
    /// This takes factorial time and is only suitable for small matrices.
    #[instrument(level = "trace", skip_all)]
    pub fn determinant_by_cofactors(&self) -> Result<R::Element, NumericError> {
        self.check_square()?;
        if !self.ops.is_signed() {
            return self.unsigned_determinant();
        }

        if self.nrows == 1 {
            return Ok(self.data[0].clone());
        }

        let mut det = self.ops.zero();
        for j in 0..self.ncols {
            if self.ops.is_zero(&self.data[j]) {
                continue;
            }

            let c = self.ops.mul(&self.data[j], &self.minor(0, j)?.determinant_by_cofactors()?);
            if j % 2 == 0 {
                self.ops.add_assign(&mut det, &c);
            } else {
                self.ops.sub_assign(&mut det, &c);
            }
        }

        Ok(det)
    }

    /// Compute the determinant using LU decomposition for representations with exact division
    /// and fraction-free Bareiss elimination for integral domains.
    ///
    /// Bareiss elimination divides exactly only in an integral domain, so wrapping
    /// integers are expanded by cofactors instead.
    #[instrument(level = "trace", skip_all)]
    pub fn determinant_by_elimination(&self) -> Result<R::Element, NumericError> {
        self.check_square()?;

        let ops = self.ops.clone();
        let n = self.nrows;

        if !ops.is_signed() {
            return self.unsigned_determinant();
        }

        if ops.is_field() {
            let lu = self.decompose_lu()?;
            if (0..n).any(|i| ops.is_negligible(&lu.upper[(i, i)])) {
                return Ok(ops.zero());
            }
            return lu.determinant();
        }

        if !ops.is_integral_domain() {
            debug!(
                "{} has zero divisors: expanding the {}x{} determinant by cofactors",
                ops.type_name(),
                n,
                n
            );
            return self.determinant_by_cofactors();
        }

        let mut m = self.clone();
        let mut negate = false;
        let mut prev = ops.one();
        for k in 0..n - 1 {
            let Some(p) = m.select_pivot(k, k) else {
                return Ok(ops.zero());
            };

            if p != k {
                m.swap_rows(k, p)?;
                negate = !negate;
            }

            for i in k + 1..n {
                for j in k + 1..n {
                    let mut e = ops.mul(&m[(i, j)], &m[(k, k)]);
                    ops.sub_mul_assign(&mut e, &m[(i, k)], &m[(k, j)]);
                    // exact by Sylvester's identity
                    m[(i, j)] = ops.div(&e, &prev)?;
                }
            }

            prev = m[(k, k)].clone();
        }

        let det = m[(n - 1, n - 1)].clone();
        if negate {
            ops.neg(&det)
        } else {
            Ok(det)
        }
    }

    /// The determinant of a representation without negation.
    fn unsigned_determinant(&self) -> Result<R::Element, NumericError> {
        let ops = &self.ops;
        let (pos, neg) = self.split_determinant()?;
        if ops.cmp(&pos, &neg) == Ordering::Less {
            ops.neg(&ops.sub(&neg, &pos))
        } else {
            Ok(ops.sub(&pos, &neg))
        }
    }

    /// Expand the determinant along the first row as `positive - negative`, where both
    /// parts are sums of products and never require a subtraction.
    fn split_determinant(&self) -> Result<(R::Element, R::Element), NumericError> {
        let ops = &self.ops;
        if self.nrows == 1 {
            return Ok((self.data[0].clone(), ops.zero()));
        }

        let mut pos = ops.zero();
        let mut neg = ops.zero();
        for j in 0..self.ncols {
            let a = &self.data[j];
            if ops.is_zero(a) {
                continue;
            }

            let (p, n) = self.minor(0, j)?.split_determinant()?;
            let (p, n) = if j % 2 == 0 { (p, n) } else { (n, p) };
            ops.add_mul_assign(&mut pos, a, &p);
            ops.add_mul_assign(&mut neg, a, &n);
        }

        Ok((pos, neg))
    }

    /// Select the row at or below `from` that has the largest absolute value in `col`.
    /// If the representation has no absolute value, the first non-negligible entry is taken.
    fn select_pivot(&self, col: usize, from: usize) -> Option<usize> {
        let mut best: Option<(usize, R::Element)> = None;
        for r in from..self.nrows {
            let e = &self[(r, col)];
            if self.ops.is_negligible(e) {
                continue;
            }

            let Ok(a) = self.ops.abs(e) else {
                return Some(r);
            };

            match &best {
                Some((_, b)) if self.ops.cmp(&a, b) != Ordering::Greater => {}
                _ => best = Some((r, a)),
            }
        }

        best.map(|(r, _)| r)
    }

    /// Eliminate the entry in row `target` and column `col` using the pivot
    /// in row `source`. The entry is set to zero.
    fn eliminate(
        &mut self,
        ops: &R,
        target: usize,
        source: usize,
        col: usize,
    ) -> Result<(), NumericError> {
        let zero = ops.zero();
        let q = std::mem::replace(&mut self[(target, col)], zero.clone());
        if ops.is_negligible(&q) {
            return Ok(());
        }

        if ops.is_field() {
            let s = ops.div(&q, &self[(source, col)])?;
            for l in col + 1..self.ncols {
                let mut e = std::mem::replace(&mut self[(target, l)], zero.clone());
                ops.sub_mul_assign(&mut e, &self[(source, l)], &s);
                self[(target, l)] = e;
            }
        } else {
            // row_target = p * row_target - q * row_source
            let p = self[(source, col)].clone();
            for l in (0..self.ncols).filter(|&l| l != col) {
                let mut e = ops.mul(&self[(target, l)], &p);
                ops.sub_mul_assign(&mut e, &self[(source, l)], &q);
                self[(target, l)] = e;
            }
        }

        Ok(())
    }

    /// Bring the first `max_col` columns into echelon form and return the pivot positions.
    /// Columns without a usable pivot are skipped.
    fn forward_eliminate(
        &mut self,
        max_col: usize,
    ) -> Result<SmallVec<[(usize, usize); 8]>, NumericError> {
        let ops = self.ops.clone();
        let mut pivots = SmallVec::new();

        let mut i = 0;
        for j in 0..max_col {
            if i == self.nrows {
                break;
            }

            match self.select_pivot(j, i) {
                Some(p) => {
                    self.swap_rows(i, p)?;
                    for k in i + 1..self.nrows {
                        self.eliminate(&ops, k, i, j)?;
                    }

                    pivots.push((i, j));
                    i += 1;
                }
                None => {
                    for k in i..self.nrows {
                        self[(k, j)] = ops.zero();
                    }
                }
            }
        }

        Ok(pivots)
    }

    /// Create a row-reduced matrix from a matrix in echelon form.
    fn back_substitute(&mut self, pivots: &[(usize, usize)]) -> Result<(), NumericError> {
        let ops = self.ops.clone();

        if ops.is_field() {
            for &(i, j) in pivots.iter().rev() {
                let p = self[(i, j)].clone();
                if !ops.is_one(&p) {
                    for l in j..self.ncols {
                        self[(i, l)] = ops.div(&self[(i, l)], &p)?;
                    }
                }

                for k in 0..i {
                    self.eliminate(&ops, k, i, j)?;
                }
            }
            return Ok(());
        }

        for &(i, j) in pivots.iter().rev() {
            for k in 0..i {
                self.eliminate(&ops, k, i, j)?;
            }
        }

        for &(i, j) in pivots {
            let p = self[(i, j)].clone();
            if !ops.is_one(&p) {
                for l in 0..self.ncols {
                    self[(i, l)] = ops.div(&self[(i, l)], &p)?;
                }
            }
        }

        Ok(())
    }

    /// Compute the row echelon form using Gaussian elimination with partial pivoting.
    #[instrument(level = "trace", skip_all)]
    pub fn echelon(&self) -> Result<Matrix<R>, NumericError> {
        let mut m = self.clone();
        m.forward_eliminate(self.ncols)?;
        Ok(m)
    }

    /// Compute the reduced row echelon form, in which every pivot is one
    /// and is the only non-zero entry in its column.
    ///
    /// For representations with truncating division, the pivot rows are divided by
    /// their pivot at the end, which truncates the other entries of the row.
    #[instrument(level = "trace", skip_all)]
    pub fn reduced_echelon(&self) -> Result<Matrix<R>, NumericError> {
        let mut m = self.clone();
        let pivots = m.forward_eliminate(self.ncols)?;
        m.back_substitute(&pivots)?;
        Ok(m)
    }

    /// Get the rank of the matrix.
    pub fn rank(&self) -> Result<usize, NumericError> {
        Ok(self.clone().forward_eliminate(self.ncols)?.len())
    }

    /// Compute the inverse of a square matrix, if it exists.
    /// Otherwise, this function returns [NumericError::Singular].
    ///
    /// Matrices up to 3x3 and matrices over representations with truncating division
    /// are inverted as `adjoint / determinant`, which truncates for the latter.
    /// For representations with exact division, a matrix is singular when elimination
    /// finds a negligible pivot, independently of its size.
    #[instrument(level = "trace", skip_all)]
    pub fn inverse(&self) -> Result<Matrix<R>, NumericError> {
        self.check_square()?;

        let n = self.nrows;
        if !self.ops.is_field() {
            let det = self.determinant()?;
            if self.ops.is_negligible(&det) {
                debug!("Singular {}x{} matrix: the determinant {:?} is negligible", n, n, det);
                return Err(NumericError::Singular);
            }

            return self.adjoint()?.div_scalar(&det);
        }

        if n <= 3 {
            // singular iff a pivot is negligible
            let rank = self.rank()?;
            let det = self.determinant()?;
            if rank < n || self.ops.is_zero(&det) {
                debug!("Singular {}x{} matrix: rank {}", n, n, rank);
                return Err(NumericError::Singular);
            }

            return self.adjoint()?.div_scalar(&det);
        }

        // use Gaussian elimination with an augmented matrix to find the inverse
        let mut m = self.concatenate_row_wise(&Matrix::identity(n, n, self.ops.clone())?)?;
        let pivots = m.forward_eliminate(n)?;
        if pivots.len() < n {
            debug!("Singular {}x{} matrix: rank {}", n, n, pivots.len());
            return Err(NumericError::Singular);
        }
        m.back_substitute(&pivots)?;

        let mut data = Vec::with_capacity(n * n);
        for row in m.row_iter() {
            data.extend_from_slice(&row[n..]);
        }

        Ok(Matrix {
            data,
            nrows: n,
            ncols: n,
            ops: self.ops.clone(),
        })
    }

    /// Compute the adjoint (adjugate) matrix, the transpose of the cofactor matrix.
    pub fn adjoint(&self) -> Result<Matrix<R>, NumericError> {
        self.check_square()?;

        let n = self.nrows;
        if n == 1 {
            return Matrix::one(1, 1, self.ops.clone());
        }

        let mut adj = Matrix::new(n, n, self.ops.clone())?;
        for i in 0..n {
            for j in 0..n {
                let c = self.minor(i, j)?.determinant()?;
                adj[(j, i)] = if (i + j) % 2 == 0 {
                    c
                } else {
                    self.ops.neg(&c)?
                };
            }
        }

        Ok(adj)
    }

    /// Decompose a square matrix into `P * A = L * U` using Doolittle's method with
    /// partial pivoting.
    ///
    /// Only representations with exact division are supported. A singular matrix
    /// yields an upper factor with a negligible diagonal entry.
    #[instrument(level = "trace", skip_all)]
    pub fn decompose_lu(&self) -> Result<LuDecomposition<R>, NumericError> {
        self.check_square()?;
        if !self.ops.is_field() {
            return Err(self.ops.unsupported("LU decomposition"));
        }

        let ops = self.ops.clone();
        let n = self.nrows;
        let mut upper = self.clone();
        let mut lower = Matrix::identity(n, n, ops.clone())?;
        let mut permutation: SmallVec<[usize; 8]> = (0..n).collect();
        let mut swaps = 0;

        for k in 0..n {
            let Some(p) = upper.select_pivot(k, k) else {
                for i in k + 1..n {
                    upper[(i, k)] = ops.zero();
                }
                continue;
            };

            if p != k {
                upper.swap_rows(k, p)?;
                permutation.swap(k, p);
                for c in 0..k {
                    lower.data.swap(k * n + c, p * n + c);
                }
                swaps += 1;
            }

            for i in k + 1..n {
                let f = ops.div(&upper[(i, k)], &upper[(k, k)])?;
                upper.eliminate(&ops, i, k, k)?;
                lower[(i, k)] = f;
            }
        }

        Ok(LuDecomposition {
            lower,
            upper,
            permutation,
            swaps,
        })
    }

    /// Solve `A * x = b` for `x`, where `A` is `self`.
    pub fn solve(&self, b: &Vector<R>) -> Result<Vector<R>, NumericError> {
        self.decompose_lu()?.solve(b)
    }

    /// Raise a square matrix to the power `e`. Negative powers invert the matrix first.
    pub fn pow(&self, e: i64) -> Result<Matrix<R>, NumericError> {
        self.check_square()?;

        let mut result = Matrix::identity(self.nrows, self.ncols, self.ops.clone())?;
        if e == 0 {
            return Ok(result);
        }

        let mut base = if e < 0 {
            self.inverse()?
        } else {
            self.clone()
        };

        let mut e = e.unsigned_abs();
        loop {
            if e & 1 == 1 {
                result = result.mul(&base)?;
            }
            e >>= 1;
            if e == 0 {
                return Ok(result);
            }
            base = base.mul(&base)?;
        }
    }
}

#[cfg(test)]
mod test {
    use rug::Rational;

    use crate::{
        domains::{
            float::F64,
            integer::{I64, U32, Z},
            rational::Q,
            NumericOps,
        },
        error::NumericError,
        tensors::{Matrix, Vector},
    };

    fn rationals(rows: &[&[i64]]) -> Matrix<crate::domains::rational::RationalField> {
        Matrix::from_nested_vec(
            rows.iter()
                .map(|r| r.iter().map(|&x| Rational::from(x)).collect())
                .collect(),
            Q,
        )
        .unwrap()
    }

    #[test]
    fn determinant() {
        let a = Matrix::from_nested_vec(vec![vec![1., 2.], vec![3., 4.]], F64).unwrap();
        assert_eq!(a.determinant(), Ok(-2.));

        let b = Matrix::from_nested_vec(
            vec![vec![2, -3, 1], vec![2, 0, -1], vec![1, 4, 5]],
            I64,
        )
        .unwrap();
        assert_eq!(b.determinant(), Ok(49));
        assert_eq!(b.determinant_by_cofactors(), Ok(49));

        let r = Matrix::new(2, 3, I64).unwrap();
        assert_eq!(
            r.determinant(),
            Err(NumericError::NotSquare { nrows: 2, ncols: 3 })
        );
    }

    #[test]
    fn bareiss() {
        let m = Matrix::from_nested_vec(
            vec![
                vec![0, 2, 1, 3],
                vec![1, 0, 4, 1],
                vec![2, 1, 0, 2],
                vec![3, 1, 2, 0],
            ],
            I64,
        )
        .unwrap();
        let det = m.determinant_by_cofactors().unwrap();
        assert_eq!(m.determinant(), Ok(det));

        let big = m.map(|x| rug::Integer::from(*x), Z);
        assert_eq!(big.determinant(), Ok(rug::Integer::from(det)));

        let singular = Matrix::from_linear((1..=16).collect(), 4, 4, I64).unwrap();
        assert_eq!(singular.determinant(), Ok(0));
    }

    #[test]
    fn echelon() {
        let m = rationals(&[&[1, 2, 3], &[2, 4, 7], &[1, 2, 4]]);
        let e = m.echelon().unwrap();
        assert_eq!(e.rank(), Ok(2));
        assert_eq!(e.echelon().unwrap(), e);

        let r = m.reduced_echelon().unwrap();
        assert_eq!(r, rationals(&[&[1, 2, 0], &[0, 0, 1], &[0, 0, 0]]));

        let i = Matrix::from_nested_vec(vec![vec![2, 4], vec![1, 3]], I64).unwrap();
        assert_eq!(i.reduced_echelon().unwrap().data(), &[1, 0, 0, 1]);
    }

    #[test]
    fn inverse() {
        let a = Matrix::from_nested_vec(vec![vec![1., 2.], vec![3., 4.]], F64).unwrap();
        let inv = a.inverse().unwrap();
        assert_eq!(inv.data(), &[-2., 1., 1.5, -0.5]);

        let s = Matrix::from_nested_vec(vec![vec![1., 2.], vec![2., 4.]], F64).unwrap();
        assert_eq!(s.inverse(), Err(NumericError::Singular));

        let m = rationals(&[
            &[2, 0, 1, 0, 1],
            &[1, 3, 0, 0, 0],
            &[0, 1, 4, 1, 0],
            &[0, 0, 1, 5, 1],
            &[1, 0, 0, 1, 6],
        ]);
        let inv = m.inverse().unwrap();
        assert_eq!(m.mul(&inv).unwrap(), Matrix::identity(5, 5, Q).unwrap());
        assert_eq!(inv.inverse().unwrap(), m);
        assert_eq!(inv, m.adjoint().unwrap().div_scalar(&m.determinant().unwrap()).unwrap());

        let one = Matrix::from_linear(vec![4.], 1, 1, F64).unwrap();
        assert_eq!(one.adjoint().unwrap().data(), &[1.]);
        assert_eq!(one.inverse().unwrap().data(), &[0.25]);
    }

    #[test]
    fn small_scale_is_not_singular() {
        for n in [2, 3, 4, 5] {
            let m = Matrix::diagonal(&vec![1e-5; n], F64).unwrap();
            let inv = m.inverse().unwrap();
            assert!(inv.equals_with_leniency(&Matrix::diagonal(&vec![1e5; n], F64).unwrap(), &1e-6));

            let mut d = vec![1.; n];
            d[n - 1] = 1e-13;
            let s = Matrix::diagonal(&d, F64).unwrap();
            assert_eq!(s.inverse(), Err(NumericError::Singular));
        }
    }

    #[test]
    fn unsigned_determinant() {
        let m = Matrix::from_nested_vec(vec![vec![1, 1, 0], vec![0, 1, 1], vec![1, 0, 1]], U32)
            .unwrap();
        assert_eq!(m.determinant(), Ok(2));
        assert_eq!(m.determinant_by_cofactors(), Ok(2));
        assert_eq!(m.determinant_by_elimination(), Ok(2));

        let cyclic = Matrix::from_nested_vec(
            vec![
                vec![2, 1, 0, 0],
                vec![0, 2, 1, 0],
                vec![0, 0, 2, 1],
                vec![1, 0, 0, 2],
            ],
            U32,
        )
        .unwrap();
        assert_eq!(cyclic.determinant(), Ok(15));
        assert_eq!(
            cyclic.map(|x| *x as i64, I64).determinant(),
            Ok(15)
        );

        let swap = Matrix::from_nested_vec(vec![vec![0, 1], vec![1, 0]], U32).unwrap();
        assert!(matches!(
            swap.determinant(),
            Err(NumericError::UnsupportedOperation { .. })
        ));
    }

    #[test]
    fn lu() {
        let m = rationals(&[&[0, 1, 2], &[3, 4, 5], &[6, 8, 1]]);
        let lu = m.decompose_lu().unwrap();
        let p = lu.permutation_matrix().unwrap();
        assert_eq!(p.mul(&m).unwrap(), lu.lower.mul(&lu.upper).unwrap());
        assert_eq!(lu.determinant(), m.determinant_by_cofactors());
        assert!((0..3).all(|i| Q.is_one(&lu.lower[(i, i)])));
        assert!(Q.is_zero(&lu.upper[(2, 0)]));

        let b = Vector::new(vec![Rational::from(3), Rational::from(12), Rational::from(15)], Q);
        let x = m.solve(&b).unwrap();
        assert_eq!(m.mul_vector(&x).unwrap(), b);

        let ints = Matrix::identity(2, 2, I64).unwrap();
        assert!(matches!(
            ints.decompose_lu(),
            Err(NumericError::UnsupportedOperation { .. })
        ));

        let singular = rationals(&[&[1, 2], &[2, 4]]);
        assert_eq!(
            singular.solve(&Vector::new(vec![Rational::new(), Rational::new()], Q)),
            Err(NumericError::Singular)
        );
    }

    #[test]
    fn power() {
        let m = Matrix::from_nested_vec(vec![vec![1, 1], vec![1, 0]], I64).unwrap();
        assert_eq!(m.pow(10).unwrap().data(), &[89, 55, 55, 34]);
        assert_eq!(m.pow(0).unwrap(), Matrix::identity(2, 2, I64).unwrap());
        assert_eq!(m.pow(-1).unwrap().data(), &[0, 1, 1, -1]);

        let q = rationals(&[&[2, 0], &[0, 4]]);
        assert_eq!(
            q.pow(-2).unwrap(),
            Matrix::diagonal(&[Rational::from((1, 4)), Rational::from((1, 16))], Q).unwrap()
        );
        assert!(Matrix::new(2, 3, I64).unwrap().pow(2).is_err());
    }
}
