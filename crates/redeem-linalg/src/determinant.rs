use crate::error::{Axis, MatrixError, Result};
use crate::math::{Matrix, Scalar};
use crate::validate::is_square_size;

/// Determinant of a square matrix by cofactor expansion along row 0.
///
/// `1x1` and `2x2` matrices are solved directly; larger ones recurse on
/// their first-row minors, so the cost grows factorially with the order.
/// Integer matrices yield an integer determinant.
///
/// # Example
///
/// ```rust
/// use redeem_linalg::determinant::determinant;
/// use redeem_linalg::math::{Matrix, Scalar};
///
/// let m = Matrix::from_rows(vec![vec![1, 1, 2], vec![2, 3, 4], vec![3, 4, 5]]).unwrap();
/// assert_eq!(determinant(&m).unwrap(), Scalar::Int(-1));
/// ```
pub fn determinant(m: &Matrix) -> Result<Scalar> {
    let shape = m.shape()?;
    if !is_square_size(shape) {
        return Err(MatrixError::NotSquare(shape));
    }
    log::debug!("determinant: order {}", shape.0);
    cofactor_expansion(m)
}

fn cofactor_expansion(m: &Matrix) -> Result<Scalar> {
    let n = m.nrows();
    match n {
        1 => Ok(m[(0, 0)]),
        2 => Ok(m[(0, 0)] * m[(1, 1)] - m[(0, 1)] * m[(1, 0)]),
        _ => {
            log::trace!("cofactor expansion at order {}", n);
            let mut det = Scalar::Int(0);
            for j in 0..n {
                let term = m[(0, j)] * cofactor_expansion(&minor(m, 0, j)?)?;
                det = if j % 2 == 0 { det + term } else { det - term };
            }
            Ok(det)
        }
    }
}

/// Copy of `m` without row `row` and column `col`. `m` is not modified.
pub fn minor(m: &Matrix, row: usize, col: usize) -> Result<Matrix> {
    if row >= m.nrows() {
        return Err(MatrixError::IndexOutOfRange {
            axis: Axis::Row,
            index: row,
            len: m.nrows(),
        });
    }
    let cols = m.ncols()?;
    if col >= cols {
        return Err(MatrixError::IndexOutOfRange {
            axis: Axis::Column,
            index: col,
            len: cols,
        });
    }
    let data = m
        .iter()
        .enumerate()
        .filter(|(idx, _)| idx / cols != row && idx % cols != col)
        .map(|(_, v)| *v)
        .collect();
    Ok(Matrix::from_parts(data, m.nrows() - 1, cols - 1))
}

impl Matrix {
    pub fn determinant(&self) -> Result<Scalar> {
        determinant(self)
    }

    pub fn minor(&self, row: usize, col: usize) -> Result<Matrix> {
        minor(self, row, col)
    }
}
