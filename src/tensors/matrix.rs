use std::{
    cmp::Ordering,
    fmt::Display,
    ops::{Index, IndexMut},
    slice::Chunks,
};

use super::vector::Vector;
use crate::{domains::NumericOps, error::NumericError};

/// A dense matrix with entries of the numeric representation `R`, stored in row-major order.
///
/// A matrix has at least one row and one column. A vector can be represented
/// as a matrix with one column.
#[derive(Clone, Debug)]
pub struct Matrix<R: NumericOps> {
    pub(crate) data: Vec<R::Element>,
    pub(crate) nrows: usize,
    pub(crate) ncols: usize,
    pub(crate) ops: R,
}

fn check_shape(nrows: usize, ncols: usize) -> Result<(), NumericError> {
    if nrows == 0 || ncols == 0 {
        return Err(NumericError::DimensionMismatch(format!(
            "a matrix needs at least one row and one column instead of ({},{})",
            nrows, ncols
        )));
    }
    Ok(())
}

impl<R: NumericOps> Matrix<R> {
    /// Create a new zeroed matrix with `nrows` rows and `ncols` columns.
    pub fn new(nrows: usize, ncols: usize, ops: R) -> Result<Matrix<R>, NumericError> {
        Self::uniform(nrows, ncols, ops.zero(), ops)
    }

    /// Create a new matrix with ones on the main diagonal and zeroes elsewhere.
    /// The matrix does not need to be square.
    pub fn identity(nrows: usize, ncols: usize, ops: R) -> Result<Matrix<R>, NumericError> {
        check_shape(nrows, ncols)?;
        Ok(Matrix {
            data: (0..nrows * ncols)
                .map(|i| {
                    if i % ncols == i / ncols {
                        ops.one()
                    } else {
                        ops.zero()
                    }
                })
                .collect(),
            nrows,
            ncols,
            ops,
        })
    }

    /// Create a new matrix where every entry is one.
    pub fn one(nrows: usize, ncols: usize, ops: R) -> Result<Matrix<R>, NumericError> {
        Self::uniform(nrows, ncols, ops.one(), ops)
    }

    /// Create a new matrix where every entry is `value`.
    pub fn uniform(
        nrows: usize,
        ncols: usize,
        value: R::Element,
        ops: R,
    ) -> Result<Matrix<R>, NumericError> {
        check_shape(nrows, ncols)?;
        Ok(Matrix {
            data: vec![value; nrows * ncols],
            nrows,
            ncols,
            ops,
        })
    }

    /// Create a new square matrix with the scalars `diag` on the main diagonal and zeroes elsewhere.
    pub fn diagonal(diag: &[R::Element], ops: R) -> Result<Matrix<R>, NumericError> {
        let mut m = Matrix::new(diag.len(), diag.len(), ops)?;
        for (i, e) in diag.iter().enumerate() {
            m[(i, i)] = e.clone();
        }
        Ok(m)
    }

    /// Convert a row-major linear representation of a matrix to a `Matrix`.
    pub fn from_linear(
        data: Vec<R::Element>,
        nrows: usize,
        ncols: usize,
        ops: R,
    ) -> Result<Matrix<R>, NumericError> {
        check_shape(nrows, ncols)?;
        if data.len() != nrows * ncols {
            return Err(NumericError::DimensionMismatch(format!(
                "data length does not match matrix dimensions: {} vs ({},{})",
                data.len(),
                nrows,
                ncols
            )));
        }

        Ok(Matrix {
            data,
            nrows,
            ncols,
            ops,
        })
    }

    /// Create a new matrix from a list of rows.
    pub fn from_nested_vec(
        matrix: Vec<Vec<R::Element>>,
        ops: R,
    ) -> Result<Matrix<R>, NumericError> {
        let nrows = matrix.len();
        let ncols = matrix.first().map(|r| r.len()).unwrap_or(0);
        check_shape(nrows, ncols)?;

        let mut data = Vec::with_capacity(nrows * ncols);
        for (i, row) in matrix.into_iter().enumerate() {
            if row.len() != ncols {
                return Err(NumericError::InvalidArgument(format!(
                    "the matrix is not rectangular: row {} has {} entries instead of {}",
                    i,
                    row.len(),
                    ncols
                )));
            }

            data.extend(row);
        }

        Ok(Matrix {
            data,
            nrows,
            ncols,
            ops,
        })
    }

    /// Create a column matrix from a vector.
    pub fn from_vector(v: Vector<R>) -> Result<Matrix<R>, NumericError> {
        check_shape(v.data.len(), 1)?;
        Ok(Matrix {
            nrows: v.data.len(),
            ncols: 1,
            data: v.data,
            ops: v.ops,
        })
    }

    fn rotation(
        angle: &R::Element,
        ops: R,
        layout: impl Fn(&R::Element, &R::Element, &R::Element) -> [R::Element; 9],
    ) -> Result<Matrix<R>, NumericError> {
        let (c, s) = (ops.cos(angle)?, ops.sin(angle)?);
        let minus_s = ops.neg(&s)?;
        Ok(Matrix {
            data: layout(&c, &s, &minus_s).into(),
            nrows: 3,
            ncols: 3,
            ops,
        })
    }

    /// The 3x3 matrix that rotates counterclockwise by `angle` radians around the x-axis.
    pub fn rotation_x(angle: &R::Element, ops: R) -> Result<Matrix<R>, NumericError> {
        let (zero, one) = (ops.zero(), ops.one());
        Self::rotation(angle, ops, |c, s, ms| {
            [
                one.clone(),
                zero.clone(),
                zero.clone(),
                zero.clone(),
                c.clone(),
                ms.clone(),
                zero.clone(),
                s.clone(),
                c.clone(),
            ]
        })
    }

    /// The 3x3 matrix that rotates counterclockwise by `angle` radians around the y-axis.
    pub fn rotation_y(angle: &R::Element, ops: R) -> Result<Matrix<R>, NumericError> {
        let (zero, one) = (ops.zero(), ops.one());
        Self::rotation(angle, ops, |c, s, ms| {
            [
                c.clone(),
                zero.clone(),
                s.clone(),
                zero.clone(),
                one.clone(),
                zero.clone(),
                ms.clone(),
                zero.clone(),
                c.clone(),
            ]
        })
    }

    /// The 3x3 matrix that rotates counterclockwise by `angle` radians around the z-axis.
    pub fn rotation_z(angle: &R::Element, ops: R) -> Result<Matrix<R>, NumericError> {
        let (zero, one) = (ops.zero(), ops.one());
        Self::rotation(angle, ops, |c, s, ms| {
            [
                c.clone(),
                ms.clone(),
                zero.clone(),
                s.clone(),
                c.clone(),
                zero.clone(),
                zero.clone(),
                zero.clone(),
                one.clone(),
            ]
        })
    }

    /// Return the number of rows.
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Return the number of columns.
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// Return true iff the matrix has a single row or a single column.
    pub fn is_vector(&self) -> bool {
        self.nrows == 1 || self.ncols == 1
    }

    /// Return the numeric operations of the matrix entries.
    pub fn ops(&self) -> &R {
        &self.ops
    }

    /// Return the entries in row-major order.
    pub fn data(&self) -> &[R::Element] {
        &self.data
    }

    /// Return an iterator over the rows of the matrix.
    pub fn row_iter(&self) -> Chunks<'_, R::Element> {
        self.data.chunks(self.ncols)
    }

    fn out_of_bounds(&self, index: Vec<usize>) -> NumericError {
        NumericError::IndexOutOfBounds {
            index,
            shape: vec![self.nrows, self.ncols],
        }
    }

    pub fn row(&self, row: usize) -> Result<&[R::Element], NumericError> {
        if row >= self.nrows {
            return Err(self.out_of_bounds(vec![row]));
        }
        Ok(&self[row])
    }

    pub fn column(&self, column: usize) -> Result<Vector<R>, NumericError> {
        if column >= self.ncols {
            return Err(self.out_of_bounds(vec![0, column]));
        }

        Ok(Vector {
            data: self
                .data
                .iter()
                .skip(column)
                .step_by(self.ncols)
                .cloned()
                .collect(),
            ops: self.ops.clone(),
        })
    }

    /// Get the entry in row `row` and column `column`.
    pub fn get(&self, row: usize, column: usize) -> Result<&R::Element, NumericError> {
        if row >= self.nrows || column >= self.ncols {
            return Err(self.out_of_bounds(vec![row, column]));
        }
        Ok(&self[(row, column)])
    }

    pub fn get_mut(&mut self, row: usize, column: usize) -> Result<&mut R::Element, NumericError> {
        if row >= self.nrows || column >= self.ncols {
            return Err(self.out_of_bounds(vec![row, column]));
        }
        Ok(&mut self[(row, column)])
    }

    pub fn set(&mut self, row: usize, column: usize, value: R::Element) -> Result<(), NumericError> {
        *self.get_mut(row, column)? = value;
        Ok(())
    }

    /// Swap rows `a` and `b`.
    pub fn swap_rows(&mut self, a: usize, b: usize) -> Result<(), NumericError> {
        if a >= self.nrows || b >= self.nrows {
            return Err(self.out_of_bounds(vec![a.max(b)]));
        }

        if a != b {
            for l in 0..self.ncols {
                self.data.swap(a * self.ncols + l, b * self.ncols + l);
            }
        }
        Ok(())
    }

    fn check_same_shape(&self, other: &Self, operation: &str) -> Result<(), NumericError> {
        if self.nrows != other.nrows || self.ncols != other.ncols {
            return Err(NumericError::DimensionMismatch(format!(
                "cannot {} matrices of different dimensions: ({},{}) vs ({},{})",
                operation, self.nrows, self.ncols, other.nrows, other.ncols
            )));
        }
        Ok(())
    }

    fn zip_with(&self, other: &Self, f: impl Fn(&R::Element, &R::Element) -> R::Element) -> Self {
        Matrix {
            data: self.data.iter().zip(&other.data).map(|(a, b)| f(a, b)).collect(),
            nrows: self.nrows,
            ncols: self.ncols,
            ops: self.ops.clone(),
        }
    }

    /// Add two matrices.
    pub fn add(&self, other: &Self) -> Result<Matrix<R>, NumericError> {
        self.check_same_shape(other, "add")?;
        Ok(self.zip_with(other, |a, b| self.ops.add(a, b)))
    }

    /// Subtract two matrices.
    pub fn sub(&self, other: &Self) -> Result<Matrix<R>, NumericError> {
        self.check_same_shape(other, "subtract")?;
        Ok(self.zip_with(other, |a, b| self.ops.sub(a, b)))
    }

    /// Negate each entry of the matrix.
    pub fn neg(&self) -> Result<Matrix<R>, NumericError> {
        Ok(Matrix {
            data: self
                .data
                .iter()
                .map(|e| self.ops.neg(e))
                .collect::<Result<_, _>>()?,
            nrows: self.nrows,
            ncols: self.ncols,
            ops: self.ops.clone(),
        })
    }

    /// Multiply two matrices.
    pub fn mul(&self, other: &Self) -> Result<Matrix<R>, NumericError> {
        if self.ncols != other.nrows {
            return Err(NumericError::DimensionMismatch(format!(
                "cannot multiply matrices of dimensions ({},{}) and ({},{})",
                self.nrows, self.ncols, other.nrows, other.ncols
            )));
        }

        let mut m = Matrix::new(self.nrows, other.ncols, self.ops.clone())?;
        for i in 0..self.nrows {
            for j in 0..other.ncols {
                let sum = &mut m.data[i * other.ncols + j];
                for k in 0..self.ncols {
                    self.ops.add_mul_assign(sum, &self[(i, k)], &other[(k, j)]);
                }
            }
        }

        Ok(m)
    }

    /// Multiply the matrix with a column vector.
    pub fn mul_vector(&self, v: &Vector<R>) -> Result<Vector<R>, NumericError> {
        if self.ncols != v.data.len() {
            return Err(NumericError::DimensionMismatch(format!(
                "cannot multiply a matrix of dimension ({},{}) with a vector of dimension {}",
                self.nrows,
                self.ncols,
                v.data.len()
            )));
        }

        Ok(Vector {
            data: self
                .row_iter()
                .map(|row| {
                    let mut sum = self.ops.zero();
                    for (a, b) in row.iter().zip(&v.data) {
                        self.ops.add_mul_assign(&mut sum, a, b);
                    }
                    sum
                })
                .collect(),
            ops: self.ops.clone(),
        })
    }

    /// Multiply the scalar `e` to each entry of the matrix.
    pub fn mul_scalar(&self, e: &R::Element) -> Matrix<R> {
        self.map(|ee| self.ops.mul(ee, e), self.ops.clone())
    }

    /// Divide each entry of the matrix by the scalar `e`.
    pub fn div_scalar(&self, e: &R::Element) -> Result<Matrix<R>, NumericError> {
        Ok(Matrix {
            data: self
                .data
                .iter()
                .map(|ee| self.ops.div(ee, e))
                .collect::<Result<_, _>>()?,
            nrows: self.nrows,
            ncols: self.ncols,
            ops: self.ops.clone(),
        })
    }

    /// Remove row `row` and column `column`.
    pub fn minor(&self, row: usize, column: usize) -> Result<Matrix<R>, NumericError> {
        if row >= self.nrows || column >= self.ncols {
            return Err(self.out_of_bounds(vec![row, column]));
        }
        if self.nrows < 2 || self.ncols < 2 {
            return Err(NumericError::DimensionMismatch(format!(
                "cannot take a minor of a ({},{}) matrix",
                self.nrows, self.ncols
            )));
        }

        Ok(Matrix {
            data: self
                .data
                .iter()
                .enumerate()
                .filter(|(i, _)| i / self.ncols != row && i % self.ncols != column)
                .map(|(_, e)| e.clone())
                .collect(),
            nrows: self.nrows - 1,
            ncols: self.ncols - 1,
            ops: self.ops.clone(),
        })
    }

    /// Transpose the matrix.
    pub fn transpose(&self) -> Matrix<R> {
        let mut data = Vec::with_capacity(self.data.len());
        for j in 0..self.ncols {
            for i in 0..self.nrows {
                data.push(self[(i, j)].clone());
            }
        }

        Matrix {
            data,
            nrows: self.ncols,
            ncols: self.nrows,
            ops: self.ops.clone(),
        }
    }

    /// Transpose the matrix, reusing its storage if it is square.
    pub fn into_transposed(mut self) -> Matrix<R> {
        if self.nrows != self.ncols {
            return self.transpose();
        }

        for i in 0..self.nrows {
            for j in 0..i {
                self.data.swap(i * self.ncols + j, j * self.ncols + i);
            }
        }
        self
    }

    /// Place the columns of `other` to the right of the columns of `self`.
    pub fn concatenate_row_wise(&self, other: &Self) -> Result<Matrix<R>, NumericError> {
        if self.nrows != other.nrows {
            return Err(NumericError::DimensionMismatch(format!(
                "cannot concatenate matrices with {} and {} rows",
                self.nrows, other.nrows
            )));
        }

        let mut data = Vec::with_capacity(self.data.len() + other.data.len());
        for (a, b) in self.row_iter().zip(other.row_iter()) {
            data.extend_from_slice(a);
            data.extend_from_slice(b);
        }

        Ok(Matrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols + other.ncols,
            ops: self.ops.clone(),
        })
    }

    /// Convert a matrix that is a row or column vector into a [Vector].
    pub fn into_vector(self) -> Result<Vector<R>, NumericError> {
        if !self.is_vector() {
            return Err(NumericError::DimensionMismatch(format!(
                "a ({},{}) matrix is not a vector",
                self.nrows, self.ncols
            )));
        }

        Ok(Vector {
            data: self.data,
            ops: self.ops,
        })
    }

    /// Return true iff every entry in the matrix is zero.
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|e| self.ops.is_zero(e))
    }

    /// Return true iff every entry off the main diagonal is zero.
    pub fn is_diagonal(&self) -> bool {
        self.data
            .iter()
            .enumerate()
            .all(|(i, e)| i % self.ncols == i / self.ncols || self.ops.is_zero(e))
    }

    /// Apply a function `f` to each entry of the matrix.
    pub fn map<G: NumericOps>(&self, f: impl Fn(&R::Element) -> G::Element, ops: G) -> Matrix<G> {
        Matrix {
            data: self.data.iter().map(f).collect(),
            nrows: self.nrows,
            ncols: self.ncols,
            ops,
        }
    }

    /// Returns `true` iff the matrices have the same shape and equal entries.
    pub fn equals(&self, other: &Self) -> bool {
        self.nrows == other.nrows
            && self.ncols == other.ncols
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| self.ops.cmp(a, b) == Ordering::Equal)
    }

    /// Returns `true` iff the matrices have the same shape and all entries
    /// differ by at most `leniency`.
    pub fn equals_with_leniency(&self, other: &Self, leniency: &R::Element) -> bool {
        self.nrows == other.nrows
            && self.ncols == other.ncols
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| self.ops.equals_with_leniency(a, b, leniency))
    }
}

impl<R: NumericOps> PartialEq for Matrix<R> {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<R: NumericOps> Index<usize> for Matrix<R> {
    type Output = [R::Element];

    /// Get the `index`th row of the matrix.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index * self.ncols..(index + 1) * self.ncols]
    }
}

impl<R: NumericOps> Index<(usize, usize)> for Matrix<R> {
    type Output = R::Element;

    /// Get the `i`th row and `j`th column of the matrix, where `index=(i,j)`.
    #[inline]
    fn index(&self, index: (usize, usize)) -> &Self::Output {
        debug_assert!(index.1 < self.ncols);
        &self.data[index.0 * self.ncols + index.1]
    }
}

impl<R: NumericOps> IndexMut<(usize, usize)> for Matrix<R> {
    #[inline]
    fn index_mut(&mut self, index: (usize, usize)) -> &mut R::Element {
        debug_assert!(index.1 < self.ncols);
        &mut self.data[index.0 * self.ncols + index.1]
    }
}

impl<R: NumericOps> Display for Matrix<R>
where
    R::Element: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("{")?;
        for (i, row) in self.row_iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            f.write_str("{")?;
            for (j, e) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(",")?;
                }
                write!(f, "{}", e)?;
            }
            f.write_str("}")?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod test {
    use std::f64::consts::FRAC_PI_2;

    use crate::{
        domains::{float::F64, integer::I64},
        error::NumericError,
        tensors::{Matrix, Vector},
    };

    #[test]
    fn construction() {
        assert!(matches!(
            Matrix::new(0, 3, I64),
            Err(NumericError::DimensionMismatch(_))
        ));
        assert!(matches!(
            Matrix::from_nested_vec(vec![vec![1, 2], vec![3]], I64),
            Err(NumericError::InvalidArgument(_))
        ));
        assert!(Matrix::from_linear(vec![1, 2, 3], 2, 2, I64).is_err());

        let id = Matrix::identity(2, 3, I64).unwrap();
        assert_eq!(id.data(), &[1, 0, 0, 0, 1, 0]);
        assert!(id.is_diagonal());

        let d = Matrix::diagonal(&[2, 3], I64).unwrap();
        assert_eq!(d.data(), &[2, 0, 0, 3]);

        let col = Matrix::from_vector(Vector::new(vec![1, 2, 3], I64)).unwrap();
        assert_eq!((col.nrows(), col.ncols()), (3, 1));
        assert_eq!(col.into_vector().unwrap().as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn indexing() {
        let mut m = Matrix::from_nested_vec(vec![vec![1, 2, 3], vec![4, 5, 6]], I64).unwrap();
        assert_eq!(m[(1, 0)], 4);
        assert_eq!(&m[1], &[4, 5, 6]);
        assert_eq!(m.get(0, 2), Ok(&3));
        assert_eq!(
            m.get(2, 0),
            Err(NumericError::IndexOutOfBounds {
                index: vec![2, 0],
                shape: vec![2, 3]
            })
        );
        m.set(0, 0, 7).unwrap();
        assert_eq!(m.row(0), Ok(&[7, 2, 3][..]));
        assert_eq!(m.column(1).unwrap().as_slice(), &[2, 5]);

        m.swap_rows(0, 1).unwrap();
        assert_eq!(m.data(), &[4, 5, 6, 7, 2, 3]);
        assert!(m.swap_rows(0, 2).is_err());
    }

    #[test]
    fn arithmetic() {
        let a = Matrix::from_nested_vec(vec![vec![1, 2], vec![3, 4]], I64).unwrap();
        let b = Matrix::from_nested_vec(vec![vec![0, 1], vec![1, 0]], I64).unwrap();
        assert_eq!(a.add(&b).unwrap().data(), &[1, 3, 4, 4]);
        assert_eq!(a.sub(&b).unwrap().data(), &[1, 1, 2, 4]);
        assert_eq!(a.mul(&b).unwrap().data(), &[2, 1, 4, 3]);
        assert_eq!(b.mul(&a).unwrap().data(), &[3, 4, 1, 2]);
        assert_eq!(a.neg().unwrap().data(), &[-1, -2, -3, -4]);
        assert_eq!(a.mul_scalar(&2).data(), &[2, 4, 6, 8]);
        assert_eq!(a.div_scalar(&2).unwrap().data(), &[0, 1, 1, 2]);
        assert_eq!(a.div_scalar(&0), Err(NumericError::DivisionByZero));

        let v = Vector::new(vec![1, 1], I64);
        assert_eq!(a.mul_vector(&v).unwrap().as_slice(), &[3, 7]);

        let c = Matrix::new(2, 3, I64).unwrap();
        let d = Matrix::new(3, 2, I64).unwrap();
        assert!(matches!(
            c.add(&d),
            Err(NumericError::DimensionMismatch(_))
        ));
        assert!(c.mul(&c).is_err());
        assert_eq!(c.mul(&d).unwrap().nrows(), 2);
    }

    #[test]
    fn minors_and_transposes() {
        let m = Matrix::from_linear((1..=9).collect(), 3, 3, I64).unwrap();
        assert_eq!(m.minor(1, 1).unwrap().data(), &[1, 3, 7, 9]);
        assert_eq!(m.minor(0, 2).unwrap().data(), &[4, 5, 7, 8]);
        assert!(matches!(
            m.minor(3, 0),
            Err(NumericError::IndexOutOfBounds { .. })
        ));

        let row = Matrix::from_linear(vec![1, 2], 1, 2, I64).unwrap();
        assert!(matches!(
            row.minor(0, 0),
            Err(NumericError::DimensionMismatch(_))
        ));

        let r = Matrix::from_linear((1..=6).collect(), 2, 3, I64).unwrap();
        assert_eq!(r.transpose().data(), &[1, 4, 2, 5, 3, 6]);
        assert_eq!(r.transpose().transpose(), r);
        assert_eq!(m.clone().into_transposed(), m.transpose());

        let cat = r.concatenate_row_wise(&m.minor(2, 2).unwrap()).unwrap();
        assert_eq!(cat.data(), &[1, 2, 3, 1, 2, 4, 5, 6, 4, 5]);
        assert!(r.concatenate_row_wise(&m).is_err());
    }

    #[test]
    fn rotations() {
        let rz = Matrix::rotation_z(&FRAC_PI_2, F64).unwrap();
        let x = Vector::new(vec![1., 0., 0.], F64);
        let y = rz.mul_vector(&x).unwrap();
        assert!(y.equals_with_leniency(&Vector::new(vec![0., 1., 0.], F64), &1e-12));

        let rx = Matrix::rotation_x(&FRAC_PI_2, F64).unwrap();
        let z = rx.mul_vector(&y).unwrap();
        assert!(z.equals_with_leniency(&Vector::new(vec![0., 0., 1.], F64), &1e-12));

        let ry = Matrix::rotation_y(&FRAC_PI_2, F64).unwrap();
        let x2 = ry.mul_vector(&z).unwrap();
        assert!(x2.equals_with_leniency(&x, &1e-12));
    }

    #[test]
    fn display() {
        let m = Matrix::from_nested_vec(vec![vec![1, 2], vec![3, 4]], I64).unwrap();
        assert_eq!(m.to_string(), "{{1,2},{3,4}}");
    }
}
