use crate::error::{MatrixError, Result};
use crate::math::{Matrix, Scalar};

/// Matrix product `a · b`.
///
/// Requires `a.ncols() == b.nrows()`. Cell `(i, j)` of the result is the
/// inner product of row `i` of `a` with column `j` of `b`, so integer,
/// real and complex operands combine under the usual promotion rules.
///
/// # Example
///
/// ```rust
/// use redeem_linalg::math::Matrix;
/// use redeem_linalg::product::dot;
///
/// let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
/// let b = Matrix::from_rows(vec![vec![5, 6], vec![7, 8]]).unwrap();
/// let c = dot(&a, &b).unwrap();
/// assert_eq!(c, Matrix::from_rows(vec![vec![19, 22], vec![43, 50]]).unwrap());
/// ```
pub fn dot(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    let (a_rows, a_cols) = a.shape()?;
    if a_cols != b.nrows() {
        return Err(MatrixError::IncompatibleShapes {
            left: (a_rows, a_cols),
            right: (b.nrows(), b.ncols().unwrap_or(0)),
        });
    }
    let b_cols = b.ncols()?;
    log::debug!(
        "dot: ({}, {}) x ({}, {})",
        a_rows,
        a_cols,
        b.nrows(),
        b_cols
    );

    let columns = b.columns();
    let mut data: Vec<Scalar> = Vec::with_capacity(a_rows * b_cols);
    for row in a.rows() {
        for col in &columns {
            data.push(row.dot(col)?);
        }
    }
    Matrix::from_shape_vec((a_rows, b_cols), data)
}

impl Matrix {
    pub fn dot(&self, other: &Matrix) -> Result<Matrix> {
        dot(self, other)
    }
}
