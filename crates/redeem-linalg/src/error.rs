use std::fmt;

/// Which dimension an index refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Column => write!(f, "column"),
        }
    }
}

/// Errors raised by matrix construction and the algebra engines.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MatrixError {
    #[error("matrix not correctly formed: {grid}")]
    MalformedShape { grid: String },

    #[error("column count is undefined for a matrix with no rows")]
    UndefinedColumnCount,

    #[error("{axis} index {index} is out of range for {len} {axis}s")]
    IndexOutOfRange { axis: Axis, index: usize, len: usize },

    #[error("shape mismatch: expected {expected:?}, found {found:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        found: Vec<usize>,
    },

    #[error("incompatible shapes for dot product: {left:?} and {right:?}")]
    IncompatibleShapes {
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("cannot arrange {count} elements into shape {shape:?}")]
    ElementCountMismatch { count: usize, shape: (usize, usize) },

    #[error("expected a square matrix, found shape {0:?}")]
    NotSquare((usize, usize)),

    #[error("unsupported operand: {0}")]
    UnsupportedOperandKind(String),

    #[error("complex elements have no ordering")]
    UnorderedElementKind,

    #[error("operation requires at least one element")]
    EmptyMatrix,

    #[error("division by zero")]
    DivisionByZero,

    #[error("invalid range: lower bound {lower} exceeds upper bound {upper}")]
    InvalidRange { lower: i64, upper: i64 },

    #[error("{0} is not implemented")]
    NotImplemented(&'static str),

    #[error("complex element cannot be represented as a real value")]
    ComplexElement,
}

/// Convenience alias for `Result<T, MatrixError>`.
pub type Result<T> = std::result::Result<T, MatrixError>;
