//! Shape transforms. All of them leave the input untouched and return new values.
use crate::error::{MatrixError, Result};
use crate::math::matrix::element_count;
use crate::math::{Matrix, Scalar};

/// Elements of `m` in row-major order.
pub fn flatten(m: &Matrix) -> Vec<Scalar> {
    m.flatten_to_vec()
}

/// Re-partition the row-major elements of `m` into `shape`.
///
/// The element count must be preserved: `rows * cols == m.len()`.
///
/// # Example
///
/// ```rust
/// use redeem_linalg::math::Matrix;
/// use redeem_linalg::transform::reshape;
///
/// let m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
/// let column = reshape(&m, (4, 1)).unwrap();
/// assert_eq!(column, Matrix::from_rows(vec![vec![1], vec![2], vec![3], vec![4]]).unwrap());
/// assert!(reshape(&m, (1, 3)).is_err());
/// ```
pub fn reshape(m: &Matrix, shape: (usize, usize)) -> Result<Matrix> {
    if element_count(shape) != Some(m.len()) {
        return Err(MatrixError::ElementCountMismatch {
            count: m.len(),
            shape,
        });
    }
    Matrix::from_shape_vec(shape, flatten(m))
}

/// Swap the roles of rows and columns: `result[j][i] == m[i][j]`.
pub fn transpose(m: &Matrix) -> Matrix {
    let columns = m.columns();
    let rows = columns.len();
    let cols = m.nrows();
    let data = columns.into_iter().flat_map(|c| c.into_vec()).collect();
    Matrix::from_parts(data, rows, cols)
}

impl Matrix {
    pub fn flatten(&self) -> Vec<Scalar> {
        flatten(self)
    }

    pub fn reshape(&self, shape: (usize, usize)) -> Result<Matrix> {
        reshape(self, shape)
    }

    pub fn transpose(&self) -> Matrix {
        transpose(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transpose_of_zero_row_matrix_is_empty() {
        let m = Matrix::new(vec![]).unwrap();
        assert_eq!(transpose(&m), m);
    }

    #[test]
    fn reshape_uses_product_of_dimensions() {
        // (2, 3) and (4, 1) have the same dimension sum but not the same count
        let m = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        assert_eq!(
            reshape(&m, (4, 1)),
            Err(MatrixError::ElementCountMismatch {
                count: 6,
                shape: (4, 1)
            })
        );
        assert_eq!(reshape(&m, (3, 2)).unwrap().shape().unwrap(), (3, 2));
    }
}
