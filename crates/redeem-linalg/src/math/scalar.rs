use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Neg, Sub};

use num_complex::Complex64;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::DivisionPolicy;
use crate::error::{MatrixError, Result};

/// The numeric kind carried by a `Scalar`, ordered by promotion rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ElementKind {
    Int,
    Real,
    Complex,
}

/// A single matrix element.
///
/// Integer, real and complex values may be mixed freely inside one matrix.
/// Binary operations promote both operands to the higher kind
/// (`Int < Real < Complex`); integer overflow promotes to `Real`, and
/// integer division is true division, so `Int / Int` is always `Real`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(from = "ScalarRepr", into = "ScalarRepr")]
pub enum Scalar {
    Int(i64),
    Real(f64),
    Complex(Complex64),
}

/// JSON form: plain numbers for `Int`/`Real`, `{"re": .., "im": ..}` for `Complex`.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum ScalarRepr {
    Int(i64),
    Real(f64),
    Complex { re: f64, im: f64 },
}

impl From<ScalarRepr> for Scalar {
    fn from(value: ScalarRepr) -> Self {
        match value {
            ScalarRepr::Int(v) => Scalar::Int(v),
            ScalarRepr::Real(v) => Scalar::Real(v),
            ScalarRepr::Complex { re, im } => Scalar::complex(re, im),
        }
    }
}

impl From<Scalar> for ScalarRepr {
    fn from(value: Scalar) -> Self {
        match value {
            Scalar::Int(v) => ScalarRepr::Int(v),
            Scalar::Real(v) => ScalarRepr::Real(v),
            Scalar::Complex(c) => ScalarRepr::Complex { re: c.re, im: c.im },
        }
    }
}

enum Promoted {
    Int(i64, i64),
    Real(f64, f64),
    Complex(Complex64, Complex64),
}

fn promote(lhs: Scalar, rhs: Scalar) -> Promoted {
    match (lhs, rhs) {
        (Scalar::Int(a), Scalar::Int(b)) => Promoted::Int(a, b),
        (Scalar::Complex(_), _) | (_, Scalar::Complex(_)) => {
            Promoted::Complex(lhs.to_complex(), rhs.to_complex())
        }
        _ => Promoted::Real(lhs.real_part(), rhs.real_part()),
    }
}

impl Scalar {
    pub fn complex(re: f64, im: f64) -> Self {
        Scalar::Complex(Complex64::new(re, im))
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            Scalar::Int(_) => ElementKind::Int,
            Scalar::Real(_) => ElementKind::Real,
            Scalar::Complex(_) => ElementKind::Complex,
        }
    }

    pub fn is_complex(&self) -> bool {
        matches!(self, Scalar::Complex(_))
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Scalar::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// The value as `f64`, or `None` for complex values.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Int(v) => Some(*v as f64),
            Scalar::Real(v) => Some(*v),
            Scalar::Complex(_) => None,
        }
    }

    pub fn to_complex(&self) -> Complex64 {
        match self {
            Scalar::Int(v) => Complex64::new(*v as f64, 0.0),
            Scalar::Real(v) => Complex64::new(*v, 0.0),
            Scalar::Complex(c) => *c,
        }
    }

    // Only called once complex operands have been ruled out.
    fn real_part(&self) -> f64 {
        match self {
            Scalar::Int(v) => *v as f64,
            Scalar::Real(v) => *v,
            Scalar::Complex(c) => c.re,
        }
    }

    /// Read a scalar out of a JSON value: a number, or a `{"re", "im"}` object.
    pub fn from_value(value: &Value) -> Option<Scalar> {
        match value {
            Value::Number(n) => match n.as_i64() {
                Some(v) => Some(Scalar::Int(v)),
                None => n.as_f64().map(Scalar::Real),
            },
            Value::Object(map) if map.len() == 2 => {
                let re = map.get("re")?.as_f64()?;
                let im = map.get("im")?.as_f64()?;
                Some(Scalar::complex(re, im))
            }
            _ => None,
        }
    }

    /// Divide `self` by `rhs`, honouring the zero-divisor `policy`.
    pub fn try_div(self, rhs: Scalar, policy: DivisionPolicy) -> Result<Scalar> {
        if rhs.is_zero() {
            let integer_only = self.kind() == ElementKind::Int && rhs.kind() == ElementKind::Int;
            if integer_only || policy == DivisionPolicy::Strict {
                return Err(MatrixError::DivisionByZero);
            }
        }
        Ok(match promote(self, rhs) {
            Promoted::Int(a, b) => Scalar::Real(a as f64 / b as f64),
            Promoted::Real(a, b) => Scalar::Real(a / b),
            Promoted::Complex(a, b) => Scalar::Complex(a / b),
        })
    }
}

impl Add for Scalar {
    type Output = Scalar;

    fn add(self, rhs: Scalar) -> Scalar {
        match promote(self, rhs) {
            Promoted::Int(a, b) => a
                .checked_add(b)
                .map_or_else(|| Scalar::Real(a as f64 + b as f64), Scalar::Int),
            Promoted::Real(a, b) => Scalar::Real(a + b),
            Promoted::Complex(a, b) => Scalar::Complex(a + b),
        }
    }
}

impl Sub for Scalar {
    type Output = Scalar;

    fn sub(self, rhs: Scalar) -> Scalar {
        match promote(self, rhs) {
            Promoted::Int(a, b) => a
                .checked_sub(b)
                .map_or_else(|| Scalar::Real(a as f64 - b as f64), Scalar::Int),
            Promoted::Real(a, b) => Scalar::Real(a - b),
            Promoted::Complex(a, b) => Scalar::Complex(a - b),
        }
    }
}

impl Mul for Scalar {
    type Output = Scalar;

    fn mul(self, rhs: Scalar) -> Scalar {
        match promote(self, rhs) {
            Promoted::Int(a, b) => a
                .checked_mul(b)
                .map_or_else(|| Scalar::Real(a as f64 * b as f64), Scalar::Int),
            Promoted::Real(a, b) => Scalar::Real(a * b),
            Promoted::Complex(a, b) => Scalar::Complex(a * b),
        }
    }
}

impl Neg for Scalar {
    type Output = Scalar;

    fn neg(self) -> Scalar {
        match self {
            Scalar::Int(v) => v
                .checked_neg()
                .map_or_else(|| Scalar::Real(-(v as f64)), Scalar::Int),
            Scalar::Real(v) => Scalar::Real(-v),
            Scalar::Complex(c) => Scalar::Complex(-c),
        }
    }
}

impl Zero for Scalar {
    fn zero() -> Self {
        Scalar::Int(0)
    }

    fn is_zero(&self) -> bool {
        match self {
            Scalar::Int(v) => *v == 0,
            Scalar::Real(v) => *v == 0.0,
            Scalar::Complex(c) => c.is_zero(),
        }
    }
}

impl One for Scalar {
    fn one() -> Self {
        Scalar::Int(1)
    }
}

impl Sum for Scalar {
    fn sum<I: Iterator<Item = Scalar>>(iter: I) -> Self {
        iter.fold(Scalar::zero(), |acc, v| acc + v)
    }
}

impl<'a> Sum<&'a Scalar> for Scalar {
    fn sum<I: Iterator<Item = &'a Scalar>>(iter: I) -> Self {
        iter.fold(Scalar::zero(), |acc, v| acc + *v)
    }
}

/// Numeric equality across kinds: `Int(1) == Real(1.0) == Complex(1+0i)`.
impl PartialEq for Scalar {
    fn eq(&self, other: &Scalar) -> bool {
        match promote(*self, *other) {
            Promoted::Int(a, b) => a == b,
            Promoted::Real(a, b) => a == b,
            Promoted::Complex(a, b) => a == b,
        }
    }
}

/// Complex values are unordered and always compare as `None`.
impl PartialOrd for Scalar {
    fn partial_cmp(&self, other: &Scalar) -> Option<Ordering> {
        match promote(*self, *other) {
            Promoted::Int(a, b) => Some(a.cmp(&b)),
            Promoted::Real(a, b) => a.partial_cmp(&b),
            Promoted::Complex(..) => None,
        }
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::Int(value as i64)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Int(value)
    }
}

impl From<u32> for Scalar {
    fn from(value: u32) -> Self {
        Scalar::Int(value as i64)
    }
}

impl From<f32> for Scalar {
    fn from(value: f32) -> Self {
        Scalar::Real(value as f64)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Real(value)
    }
}

impl From<Complex64> for Scalar {
    fn from(value: Complex64) -> Self {
        Scalar::Complex(value)
    }
}

/// Integers print bare, reals always carry a decimal point and complex
/// values print as `re+imi`. A formatter precision applies to real parts.
impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self, f.precision()) {
            (Scalar::Int(v), _) => write!(f, "{}", v),
            (Scalar::Real(v), Some(p)) => write!(f, "{:.*}", p, v),
            (Scalar::Real(v), None) => write!(f, "{:?}", v),
            (Scalar::Complex(c), precision) => {
                let sign = if c.im.is_sign_negative() { '-' } else { '+' };
                match precision {
                    Some(p) => write!(f, "{:.*}{}{:.*}i", p, c.re, sign, p, c.im.abs()),
                    None => write!(f, "{}{}{}i", c.re, sign, c.im.abs()),
                }
            }
        }
    }
}
