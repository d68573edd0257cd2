use std::fmt;
use std::iter::FromIterator;
use std::ops::{Index, IndexMut};
use std::slice::{Iter, IterMut};

use num_traits::{One, Zero};

use crate::error::{MatrixError, Result};
use crate::math::scalar::Scalar;

/// An owned row or column of a matrix.
///
/// Vectors returned by `Matrix::row` and `Matrix::column` are snapshots:
/// editing one never reaches back into the matrix it came from.
#[derive(Clone, Debug, PartialEq)]
pub struct Vector {
    data: Vec<Scalar>,
}

impl Vector {
    pub fn new(data: Vec<Scalar>) -> Self {
        Self { data }
    }

    pub fn from_vec(data: Vec<Scalar>) -> Self {
        Self::new(data)
    }

    pub fn from_elem(len: usize, value: Scalar) -> Self {
        Vector::from_vec(vec![value; len])
    }

    pub fn zeros(len: usize) -> Self {
        Vector::from_elem(len, Scalar::zero())
    }

    pub fn ones(len: usize) -> Self {
        Vector::from_elem(len, Scalar::one())
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, Scalar> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, Scalar> {
        self.data.iter_mut()
    }

    pub fn as_slice(&self) -> &[Scalar] {
        &self.data
    }

    pub fn to_vec(&self) -> Vec<Scalar> {
        self.data.clone()
    }

    pub fn into_vec(self) -> Vec<Scalar> {
        self.data
    }

    pub fn mapv<F>(&self, mut f: F) -> Vector
    where
        F: FnMut(&Scalar) -> Scalar,
    {
        Vector::from_vec(self.data.iter().map(|v| f(v)).collect())
    }

    pub fn sum(&self) -> Scalar {
        self.data.iter().sum()
    }

    /// Inner product `Σ self[k] * other[k]`; an empty pair sums to `Int(0)`.
    pub fn dot(&self, other: &Vector) -> Result<Scalar> {
        if self.len() != other.len() {
            return Err(MatrixError::ShapeMismatch {
                expected: vec![self.len()],
                found: vec![other.len()],
            });
        }
        Ok(self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| *a * *b)
            .sum())
    }
}

impl From<Vec<Scalar>> for Vector {
    fn from(value: Vec<Scalar>) -> Self {
        Vector::from_vec(value)
    }
}

impl From<Vector> for Vec<Scalar> {
    fn from(value: Vector) -> Self {
        value.data
    }
}

impl FromIterator<Scalar> for Vector {
    fn from_iter<I: IntoIterator<Item = Scalar>>(iter: I) -> Self {
        Vector::from_vec(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a Scalar;
    type IntoIter = Iter<'a, Scalar>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl Index<usize> for Vector {
    type Output = Scalar;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl IndexMut<usize> for Vector {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, value) in self.data.iter().enumerate() {
            fmt::Display::fmt(value, f)?;
            if idx + 1 != self.data.len() {
                write!(f, ", ")?;
            }
        }
        write!(f, "]")
    }
}
