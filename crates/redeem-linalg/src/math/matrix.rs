use std::cmp::Ordering;
use std::fmt;
use std::ops::{Index, IndexMut};
use std::slice::Iter;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::DivisionPolicy;
use crate::error::{Axis, MatrixError, Result};
use crate::math::scalar::Scalar;
use crate::math::vector::Vector;
use crate::validate;

/// A dense, rectangular, row-major grid of `Scalar` values.
///
/// A matrix with no rows is valid but has no defined column count;
/// `ncols()` and `shape()` report `UndefinedColumnCount` for it.
/// Structural edits (`set`, `replace_row`, `delete_row`, `delete_column`,
/// `swap_rows`) mutate in place; every other operation returns a new matrix.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Scalar>>", into = "Vec<Vec<Scalar>>")]
pub struct Matrix {
    data: Vec<Scalar>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Build a matrix from a nested grid of rows.
    pub fn new(grid: Vec<Vec<Scalar>>) -> Result<Self> {
        if !validate::is_rectangular(&grid) {
            return Err(MatrixError::MalformedShape {
                grid: render_grid(&grid),
            });
        }
        let rows = grid.len();
        let cols = grid.first().map_or(0, Vec::len);
        let data = grid.into_iter().flatten().collect();
        Ok(Self::from_parts(data, rows, cols))
    }

    pub fn from_rows<T: Into<Scalar>>(rows: Vec<Vec<T>>) -> Result<Self> {
        Self::new(
            rows.into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        )
    }

    /// Build a matrix from untyped JSON, e.g. `[[1, 2.5], [{"re": 0, "im": 1}, 4]]`.
    pub fn from_value(grid: &Value) -> Result<Self> {
        if !validate::is_well_formed(grid) {
            return Err(MatrixError::MalformedShape {
                grid: grid.to_string(),
            });
        }
        let mut rows = Vec::new();
        for row in grid.as_array().into_iter().flatten() {
            let items = row.as_array().into_iter().flatten();
            rows.push(items.filter_map(Scalar::from_value).collect());
        }
        Self::new(rows)
    }

    /// Build a matrix from a row-major buffer.
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<Scalar>) -> Result<Self> {
        let (rows, cols) = shape;
        if element_count(shape) != Some(data.len()) {
            return Err(MatrixError::ElementCountMismatch {
                count: data.len(),
                shape,
            });
        }
        Ok(Self::from_parts(data, rows, cols))
    }

    // Zero-row matrices all share the same representation.
    pub(crate) fn from_parts(data: Vec<Scalar>, rows: usize, cols: usize) -> Self {
        let cols = if rows == 0 { 0 } else { cols };
        debug_assert_eq!(element_count((rows, cols)), Some(data.len()));
        Self { data, rows, cols }
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> Result<usize> {
        if self.rows == 0 {
            return Err(MatrixError::UndefinedColumnCount);
        }
        Ok(self.cols)
    }

    pub fn shape(&self) -> Result<(usize, usize)> {
        Ok((self.rows, self.ncols()?))
    }

    /// Total number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn is_square(&self) -> bool {
        self.rows > 0 && self.rows == self.cols
    }

    pub fn as_slice(&self) -> &[Scalar] {
        &self.data
    }

    /// Elements in row-major order.
    pub fn iter(&self) -> Iter<'_, Scalar> {
        self.data.iter()
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    fn check_row(&self, row: usize) -> Result<()> {
        if row >= self.rows {
            return Err(MatrixError::IndexOutOfRange {
                axis: Axis::Row,
                index: row,
                len: self.rows,
            });
        }
        Ok(())
    }

    fn check_col(&self, col: usize) -> Result<()> {
        if col >= self.cols {
            return Err(MatrixError::IndexOutOfRange {
                axis: Axis::Column,
                index: col,
                len: self.cols,
            });
        }
        Ok(())
    }

    pub fn get(&self, row: usize, col: usize) -> Result<Scalar> {
        self.check_row(row)?;
        self.check_col(col)?;
        Ok(self.data[self.offset(row, col)])
    }

    pub fn set<V: Into<Scalar>>(&mut self, row: usize, col: usize, value: V) -> Result<()> {
        self.check_row(row)?;
        self.check_col(col)?;
        let offset = self.offset(row, col);
        self.data[offset] = value.into();
        Ok(())
    }

    pub fn row(&self, n: usize) -> Result<Vector> {
        self.check_row(n)?;
        let start = self.offset(n, 0);
        Ok(Vector::from_vec(self.data[start..start + self.cols].to_vec()))
    }

    pub fn column(&self, n: usize) -> Result<Vector> {
        self.check_col(n)?;
        Ok((0..self.rows)
            .map(|row| self.data[self.offset(row, n)])
            .collect())
    }

    pub fn rows(&self) -> Vec<Vector> {
        (0..self.rows)
            .map(|row| {
                let start = self.offset(row, 0);
                Vector::from_vec(self.data[start..start + self.cols].to_vec())
            })
            .collect()
    }

    pub fn columns(&self) -> Vec<Vector> {
        (0..self.cols)
            .map(|col| {
                (0..self.rows)
                    .map(|row| self.data[self.offset(row, col)])
                    .collect()
            })
            .collect()
    }

    /// Overwrite row `n` with `values`, which must hold exactly `ncols` elements.
    pub fn replace_row(&mut self, n: usize, values: Vec<Scalar>) -> Result<()> {
        self.check_row(n)?;
        if values.len() != self.cols {
            return Err(MatrixError::ShapeMismatch {
                expected: vec![self.cols],
                found: vec![values.len()],
            });
        }
        let start = self.offset(n, 0);
        self.data[start..start + self.cols].copy_from_slice(&values);
        Ok(())
    }

    pub fn delete_row(&mut self, n: usize) -> Result<()> {
        self.check_row(n)?;
        let start = self.offset(n, 0);
        self.data.drain(start..start + self.cols);
        self.rows -= 1;
        if self.rows == 0 {
            self.cols = 0;
        }
        Ok(())
    }

    pub fn delete_column(&mut self, n: usize) -> Result<()> {
        self.check_col(n)?;
        let cols = self.cols;
        let mut idx = 0usize;
        self.data.retain(|_| {
            let keep = idx % cols != n;
            idx += 1;
            keep
        });
        self.cols -= 1;
        Ok(())
    }

    pub fn swap_rows(&mut self, a: usize, b: usize) -> Result<()> {
        self.check_row(a)?;
        self.check_row(b)?;
        if a != b {
            for col in 0..self.cols {
                let (i, j) = (self.offset(a, col), self.offset(b, col));
                self.data.swap(i, j);
            }
        }
        Ok(())
    }

    pub fn sum(&self) -> Scalar {
        self.data.iter().sum()
    }

    pub fn mean(&self) -> Result<Scalar> {
        if self.is_empty() {
            return Err(MatrixError::EmptyMatrix);
        }
        self.sum()
            .try_div(Scalar::Int(self.len() as i64), DivisionPolicy::Ieee)
    }

    pub fn min(&self) -> Result<Scalar> {
        self.extreme(Ordering::Less)
    }

    pub fn max(&self) -> Result<Scalar> {
        self.extreme(Ordering::Greater)
    }

    // NaN loses every comparison, so it is only returned when nothing else is present.
    fn extreme(&self, wanted: Ordering) -> Result<Scalar> {
        if self.data.iter().any(Scalar::is_complex) {
            return Err(MatrixError::UnorderedElementKind);
        }
        let mut values = self.data.iter().copied();
        let mut best = values.next().ok_or(MatrixError::EmptyMatrix)?;
        for value in values {
            let best_is_nan = best.as_f64().map_or(false, f64::is_nan);
            if best_is_nan || value.partial_cmp(&best) == Some(wanted) {
                best = value;
            }
        }
        Ok(best)
    }

    pub fn flatten_to_vec(&self) -> Vec<Scalar> {
        self.data.clone()
    }

    /// The matrix as a single `1 x len` row.
    pub fn flatten_to_row(&self) -> Matrix {
        Matrix::from_parts(self.data.clone(), 1, self.len())
    }

    pub fn to_nested_vec(&self) -> Vec<Vec<Scalar>> {
        self.rows().into_iter().map(Vector::into_vec).collect()
    }

    pub fn mapv<F>(&self, mut f: F) -> Matrix
    where
        F: FnMut(&Scalar) -> Scalar,
    {
        Matrix::from_parts(
            self.data.iter().map(|v| f(v)).collect(),
            self.rows,
            self.cols,
        )
    }

    /// Render as `[[1, 2],\n [3, 4]]`, optionally fixing the decimals of
    /// real and complex elements.
    pub fn render(&self, precision: Option<usize>) -> String {
        let rows: Vec<String> = self
            .rows()
            .iter()
            .map(|row| match precision {
                Some(p) => format!("{:.*}", p, row),
                None => row.to_string(),
            })
            .collect();
        format!("[{}]", rows.join(",\n "))
    }
}

/// Number of cells in `shape`, or `None` when `rows * cols` overflows `usize`.
pub fn element_count(shape: (usize, usize)) -> Option<usize> {
    shape.0.checked_mul(shape.1)
}

fn render_grid(grid: &[Vec<Scalar>]) -> String {
    let rows: Vec<String> = grid
        .iter()
        .map(|row| Vector::from_vec(row.clone()).to_string())
        .collect();
    format!("[{}]", rows.join(", "))
}

impl TryFrom<Vec<Vec<Scalar>>> for Matrix {
    type Error = MatrixError;

    fn try_from(grid: Vec<Vec<Scalar>>) -> Result<Self> {
        Matrix::new(grid)
    }
}

impl From<Matrix> for Vec<Vec<Scalar>> {
    fn from(value: Matrix) -> Self {
        value.to_nested_vec()
    }
}

impl<'a> IntoIterator for &'a Matrix {
    type Item = &'a Scalar;
    type IntoIter = Iter<'a, Scalar>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = Scalar;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        assert!(index.1 < self.cols, "column index out of bounds");
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        assert!(index.1 < self.cols, "column index out of bounds");
        let offset = self.offset(index.0, index.1);
        &mut self.data[offset]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(f.precision()))
    }
}
