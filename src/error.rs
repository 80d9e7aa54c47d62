use std::fmt;

/// Errors that can occur when resolving numeric operations or when
/// performing vector and matrix algebra.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumericError {
    /// No operations are registered for the named type.
    UnsupportedType(&'static str),
    /// The operands do not have compatible shapes.
    DimensionMismatch(String),
    /// A square matrix was required.
    NotSquare { nrows: usize, ncols: usize },
    /// The matrix has a (numerically) zero determinant.
    Singular,
    DivisionByZero,
    /// The representation does not define the operation, for example
    /// negation of an unsigned integer.
    UnsupportedOperation {
        operation: &'static str,
        type_name: &'static str,
    },
    IndexOutOfBounds {
        index: Vec<usize>,
        shape: Vec<usize>,
    },
    InvalidArgument(String),
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::UnsupportedType(t) => {
                write!(f, "No numeric operations are registered for type {}", t)
            }
            NumericError::DimensionMismatch(msg) => write!(f, "Dimension mismatch: {}", msg),
            NumericError::NotSquare { nrows, ncols } => {
                write!(f, "The matrix is not square: ({},{})", nrows, ncols)
            }
            NumericError::Singular => write!(f, "The matrix is singular"),
            NumericError::DivisionByZero => write!(f, "Division by zero"),
            NumericError::UnsupportedOperation {
                operation,
                type_name,
            } => write!(f, "Operation '{}' is not supported for {}", operation, type_name),
            NumericError::IndexOutOfBounds { index, shape } => {
                write!(f, "Index {:?} is out of bounds for shape {:?}", index, shape)
            }
            NumericError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
        }
    }
}

impl std::error::Error for NumericError {}

#[cfg(test)]
mod test {
    use super::NumericError;

    #[test]
    fn display() {
        assert_eq!(
            NumericError::NotSquare { nrows: 2, ncols: 3 }.to_string(),
            "The matrix is not square: (2,3)"
        );
        assert_eq!(
            NumericError::UnsupportedOperation {
                operation: "negate",
                type_name: "u8"
            }
            .to_string(),
            "Operation 'negate' is not supported for u8"
        );
        assert_eq!(
            NumericError::IndexOutOfBounds {
                index: vec![3],
                shape: vec![2]
            }
            .to_string(),
            "Index [3] is out of bounds for shape [2]"
        );
    }
}
