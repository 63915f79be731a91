//! Boundary types for the order and evaluation points passed to
//! [`hermite_functions`][crate::hermite::hermite_functions].
//!
//! Both are resolved once, at the boundary, so that the evaluators themselves
//! only ever see a validated `usize` order and an array with a known shape.

use ndarray as nd;
use crate::{ error::HError, hermite::Method };

/// A raw, unvalidated Hermite function order as supplied by a caller.
///
/// Every primitive integer type converts to [`OrderArg::Int`] and every
/// primitive float type to [`OrderArg::Float`]; floats are always rejected by
/// [`OrderArg::validate`], even when integer-valued.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum OrderArg {
    /// Any primitive integer.
    Int(i128),
    /// Any primitive float.
    Float(f64),
}

macro_rules! impl_order_from_int {
    ( $( $t:ty ),* $(,)? ) => {
        $(
            impl From<$t> for OrderArg {
                fn from(n: $t) -> Self { Self::Int(n as i128) }
            }
        )*
    }
}
impl_order_from_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);

impl From<f32> for OrderArg {
    fn from(n: f32) -> Self { Self::Float(n as f64) }
}

impl From<f64> for OrderArg {
    fn from(n: f64) -> Self { Self::Float(n) }
}

impl OrderArg {
    /// Return `true` if `self` was given as an integer type.
    pub fn is_integer(&self) -> bool { matches!(self, Self::Int(_)) }

    /// Check that `self` is a non-negative integer that `method` can handle,
    /// returning it as a `usize`.
    ///
    /// Checks are performed in the following order, returning the first
    /// failure: [`HError::NonIntegerOrder`], [`HError::NegativeOrder`],
    /// [`HError::AnalyticOrder`].
    pub fn validate(self, method: Method) -> Result<usize, HError> {
        let n = match self {
            Self::Float(f) => { return Err(HError::NonIntegerOrder(f)); },
            Self::Int(n) => n,
        };
        if n < 0 { return Err(HError::NegativeOrder(n)); }
        // no ψ_n with n beyond usize range could be stored anyway
        let n = usize::try_from(n).unwrap_or(usize::MAX);
        if method.is_analytic() { HError::check_analytic(n)?; }
        Ok(n)
    }
}

/// Evaluation points: either a single real number or an array of them.
///
/// Scalars are treated as arrays of shape `[1]` everywhere downstream.
#[derive(Clone, Debug, PartialEq)]
pub enum Input {
    /// A plain number.
    Scalar(f64),
    /// An array of any dimensionality.
    Array(nd::ArrayD<f64>),
}

impl Input {
    /// Return the shape that single-order results for `self` will have.
    pub fn shape(&self) -> Vec<usize> {
        match self {
            Self::Scalar(_) => vec![1],
            Self::Array(x) => x.shape().to_vec(),
        }
    }

    /// Return the number of dimensions that single-order results for `self`
    /// will have.
    pub fn ndim(&self) -> usize {
        match self {
            Self::Scalar(_) => 1,
            Self::Array(x) => x.ndim(),
        }
    }

    /// Return `true` if `self` is `Scalar`.
    pub fn is_scalar(&self) -> bool { matches!(self, Self::Scalar(_)) }

    /// Convert to an array, placing a scalar in a length-1 array.
    pub fn into_array(self) -> nd::ArrayD<f64> {
        match self {
            Self::Scalar(x) => nd::arr1(&[x]).into_dyn(),
            Self::Array(x) => x,
        }
    }
}

impl From<f64> for Input {
    fn from(x: f64) -> Self { Self::Scalar(x) }
}

impl From<f32> for Input {
    fn from(x: f32) -> Self { Self::Scalar(x as f64) }
}

impl From<i32> for Input {
    fn from(x: i32) -> Self { Self::Scalar(x as f64) }
}

impl<D> From<nd::Array<f64, D>> for Input
where D: nd::Dimension
{
    fn from(x: nd::Array<f64, D>) -> Self { Self::Array(x.into_dyn()) }
}

impl<S, D> From<&nd::ArrayBase<S, D>> for Input
where
    S: nd::Data<Elem = f64>,
    D: nd::Dimension,
{
    fn from(x: &nd::ArrayBase<S, D>) -> Self {
        Self::Array(x.to_owned().into_dyn())
    }
}

impl From<Vec<f64>> for Input {
    fn from(x: Vec<f64>) -> Self { Self::Array(nd::Array1::from(x).into_dyn()) }
}

impl From<&[f64]> for Input {
    fn from(x: &[f64]) -> Self { Self::Array(nd::arr1(x).into_dyn()) }
}
