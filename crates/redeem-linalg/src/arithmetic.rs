//! Element-wise arithmetic between matrices and scalar broadcast.
//!
//! The right-hand side of an operation is an `Operand`: either a scalar,
//! applied to every element, or a matrix of exactly the same shape.
//! Scalar-on-the-left forms (`3 - &m`, `1.0 / &m`) compute `s op m[i][j]`,
//! so subtraction and division keep their operand order.
//!
//! Operators use the default `DivisionPolicy`; call `elementwise` or
//! `Matrix::try_div_with` to choose another.
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::DivisionPolicy;
use crate::error::{MatrixError, Result};
use crate::math::{Matrix, Scalar};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    pub fn apply(self, lhs: Scalar, rhs: Scalar, policy: DivisionPolicy) -> Result<Scalar> {
        match self {
            BinaryOp::Add => Ok(lhs + rhs),
            BinaryOp::Sub => Ok(lhs - rhs),
            BinaryOp::Mul => Ok(lhs * rhs),
            BinaryOp::Div => lhs.try_div(rhs, policy),
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
        };
        write!(f, "{}", symbol)
    }
}

/// Right-hand side of an element-wise operation.
#[derive(Debug, Clone, Copy)]
pub enum Operand<'a> {
    Scalar(Scalar),
    Matrix(&'a Matrix),
}

impl<'a> From<&'a Matrix> for Operand<'a> {
    fn from(value: &'a Matrix) -> Self {
        Operand::Matrix(value)
    }
}

macro_rules! scalar_operand_from {
    ($($ty:ty),* $(,)?) => {$(
        impl From<$ty> for Operand<'_> {
            fn from(value: $ty) -> Self {
                Operand::Scalar(Scalar::from(value))
            }
        }
    )*};
}

scalar_operand_from!(Scalar, i32, i64, f64, Complex64);

fn shape_dims(m: &Matrix) -> Vec<usize> {
    match m.shape() {
        Ok((rows, cols)) => vec![rows, cols],
        Err(_) => vec![m.nrows()],
    }
}

fn broadcast<F>(m: &Matrix, mut f: F) -> Result<Matrix>
where
    F: FnMut(Scalar) -> Result<Scalar>,
{
    let data = m
        .iter()
        .map(|v| f(*v))
        .collect::<Result<Vec<Scalar>>>()?;
    Ok(Matrix::from_parts(data, m.nrows(), m.ncols().unwrap_or(0)))
}

/// Compute `lhs op rhs` element by element.
pub fn elementwise(
    lhs: &Matrix,
    op: BinaryOp,
    rhs: Operand<'_>,
    policy: DivisionPolicy,
) -> Result<Matrix> {
    match rhs {
        Operand::Scalar(s) => {
            log::trace!("broadcast matrix {} {}", op, s);
            broadcast(lhs, |v| op.apply(v, s, policy))
        }
        Operand::Matrix(other) => {
            if lhs.nrows() != other.nrows() || lhs.ncols().ok() != other.ncols().ok() {
                return Err(MatrixError::ShapeMismatch {
                    expected: shape_dims(lhs),
                    found: shape_dims(other),
                });
            }
            log::trace!("elementwise {} on {:?}", op, shape_dims(lhs));
            let data = lhs
                .iter()
                .zip(other.iter())
                .map(|(a, b)| op.apply(*a, *b, policy))
                .collect::<Result<Vec<Scalar>>>()?;
            Ok(Matrix::from_parts(data, lhs.nrows(), lhs.ncols().unwrap_or(0)))
        }
    }
}

/// Compute `lhs op rhs[i][j]` for a scalar on the left.
pub fn elementwise_reversed(
    lhs: Scalar,
    op: BinaryOp,
    rhs: &Matrix,
    policy: DivisionPolicy,
) -> Result<Matrix> {
    log::trace!("broadcast {} {} matrix", lhs, op);
    broadcast(rhs, |v| op.apply(lhs, v, policy))
}

/// Apply `op` with an operand only known at runtime as JSON.
///
/// Numbers and `{"re", "im"}` objects broadcast as scalars, arrays are
/// parsed as matrices, anything else is an `UnsupportedOperandKind`.
pub fn apply_value(
    lhs: &Matrix,
    op: BinaryOp,
    rhs: &Value,
    policy: DivisionPolicy,
) -> Result<Matrix> {
    if let Some(s) = Scalar::from_value(rhs) {
        return elementwise(lhs, op, Operand::Scalar(s), policy);
    }
    let kind = match rhs {
        Value::Array(_) => {
            let other = Matrix::from_value(rhs)?;
            return elementwise(lhs, op, Operand::Matrix(&other), policy);
        }
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::String(_) => "string",
        Value::Number(_) => "number",
        Value::Object(_) => "object",
    };
    Err(MatrixError::UnsupportedOperandKind(format!(
        "expected a matrix or a number, found {}",
        kind
    )))
}

impl Matrix {
    pub fn try_add<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Matrix> {
        elementwise(self, BinaryOp::Add, rhs.into(), DivisionPolicy::default())
    }

    pub fn try_sub<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Matrix> {
        elementwise(self, BinaryOp::Sub, rhs.into(), DivisionPolicy::default())
    }

    pub fn try_mul<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Matrix> {
        elementwise(self, BinaryOp::Mul, rhs.into(), DivisionPolicy::default())
    }

    pub fn try_div<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Matrix> {
        self.try_div_with(rhs, DivisionPolicy::default())
    }

    pub fn try_div_with<'a>(
        &self,
        rhs: impl Into<Operand<'a>>,
        policy: DivisionPolicy,
    ) -> Result<Matrix> {
        elementwise(self, BinaryOp::Div, rhs.into(), policy)
    }

    /// `lhs + self[i][j]`
    pub fn radd<S: Into<Scalar>>(&self, lhs: S) -> Result<Matrix> {
        elementwise_reversed(lhs.into(), BinaryOp::Add, self, DivisionPolicy::default())
    }

    /// `lhs - self[i][j]`
    pub fn rsub<S: Into<Scalar>>(&self, lhs: S) -> Result<Matrix> {
        elementwise_reversed(lhs.into(), BinaryOp::Sub, self, DivisionPolicy::default())
    }

    /// `lhs * self[i][j]`
    pub fn rmul<S: Into<Scalar>>(&self, lhs: S) -> Result<Matrix> {
        elementwise_reversed(lhs.into(), BinaryOp::Mul, self, DivisionPolicy::default())
    }

    /// `lhs / self[i][j]`
    pub fn rdiv<S: Into<Scalar>>(&self, lhs: S) -> Result<Matrix> {
        elementwise_reversed(lhs.into(), BinaryOp::Div, self, DivisionPolicy::default())
    }
}

macro_rules! impl_binary_op {
    (@primitive $trait:ident, $method:ident, $($prim:ty),*) => {$(
        impl<'a> $trait<$prim> for &'a Matrix {
            type Output = Result<Matrix>;

            fn $method(self, rhs: $prim) -> Result<Matrix> {
                $trait::$method(self, Scalar::from(rhs))
            }
        }

        impl<'b> $trait<&'b Matrix> for $prim {
            type Output = Result<Matrix>;

            fn $method(self, rhs: &'b Matrix) -> Result<Matrix> {
                $trait::$method(Scalar::from(self), rhs)
            }
        }
    )*};
    ($trait:ident, $method:ident, $op:expr) => {
        impl<'a, 'b> $trait<&'b Matrix> for &'a Matrix {
            type Output = Result<Matrix>;

            fn $method(self, rhs: &'b Matrix) -> Result<Matrix> {
                elementwise(self, $op, Operand::Matrix(rhs), DivisionPolicy::default())
            }
        }

        impl<'a> $trait<Scalar> for &'a Matrix {
            type Output = Result<Matrix>;

            fn $method(self, rhs: Scalar) -> Result<Matrix> {
                elementwise(self, $op, Operand::Scalar(rhs), DivisionPolicy::default())
            }
        }

        impl<'b> $trait<&'b Matrix> for Scalar {
            type Output = Result<Matrix>;

            fn $method(self, rhs: &'b Matrix) -> Result<Matrix> {
                elementwise_reversed(self, $op, rhs, DivisionPolicy::default())
            }
        }

        impl_binary_op!(@primitive $trait, $method, i32, i64, f64, Complex64);
    };
}

impl_binary_op!(Add, add, BinaryOp::Add);
impl_binary_op!(Sub, sub, BinaryOp::Sub);
impl_binary_op!(Mul, mul, BinaryOp::Mul);
impl_binary_op!(Div, div, BinaryOp::Div);

impl<'a> Neg for &'a Matrix {
    type Output = Matrix;

    fn neg(self) -> Matrix {
        self.mapv(|v| -*v)
    }
}
