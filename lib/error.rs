//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
//!
//! [anyhow]: https://crates.io/crates/anyhow

use thiserror::Error;
use crate::ANALYTIC_MAX_ORDER;

/// Returned when an operation requiring equal-length sequences encounters
/// sequences with unequal length.
#[derive(Debug, Error)]
#[error("encountered sequences with incompatible lengths; got {0} and {1}")]
pub struct LengthError(pub usize, pub usize);

impl LengthError {
    pub(crate) fn check<A, B>(a: &[A], b: &[B]) -> Result<(), Self> {
        let na = a.len();
        let nb = b.len();
        (na == nb).then_some(()).ok_or(Self(na, nb))
    }
}

/// Returned from [`move_axes`][crate::axes::move_axes] and
/// [`AxisMap::resolve`][crate::axes::AxisMap::resolve] for malformed axis
/// mappings.
#[derive(Debug, Error)]
pub enum AxisError {
    /// [`LengthError`]
    #[error("source and destination axes must have the same length: {0}")]
    Length(#[from] LengthError),

    /// Returned when an axis index does not exist in an array of the given
    /// dimensionality.
    #[error("axis {axis} is out of bounds for array of dimension {ndim}")]
    OutOfBounds { axis: isize, ndim: usize },

    /// Returned when an axis is listed more than once in either the source or
    /// destination sequence.
    #[error("repeated axis {0} in axis mapping")]
    Repeated(usize),
}

/// Returned from Hermite function evaluators.
#[derive(Debug, Error)]
pub enum HError {
    /// Returned when a method name is not one of `recursive`, `analytic`, or
    /// `direct`.
    #[error("method not recognized: {0:?}")]
    InvalidMethod(String),

    /// Returned when the order is given as a non-integer type.
    #[error("n must be an integer; got {0}")]
    NonIntegerOrder(f64),

    /// Returned when the order is negative.
    #[error("n must be non-negative; got {0}")]
    NegativeOrder(i128),

    /// Returned when the analytic method is asked for an order it has no
    /// closed form for.
    #[error("n must not be greater than 5 for analytic calculation; got {0}")]
    AnalyticOrder(usize),

    /// [`AxisError`]
    #[error("axis error: {0}")]
    Axis(#[from] AxisError),
}

impl HError {
    pub(crate) fn check_analytic(n: usize) -> Result<(), Self> {
        (n <= ANALYTIC_MAX_ORDER).then_some(()).ok_or(Self::AnalyticOrder(n))
    }

    /// Return `true` if `self` signals an order of the wrong type.
    pub fn is_type_error(&self) -> bool {
        matches!(self, Self::NonIntegerOrder(_))
    }

    /// Return `true` if `self` signals an order of the right type but outside
    /// the permitted range.
    pub fn is_value_error(&self) -> bool {
        matches!(self, Self::NegativeOrder(_) | Self::AnalyticOrder(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_check() {
        assert!(LengthError::check(&[0, 1], &[2, 3]).is_ok());
        let err = LengthError::check(&[0, 1, 2], &[0]).unwrap_err();
        assert_eq!((err.0, err.1), (3, 1));
    }

    #[test]
    fn analytic_check() {
        assert!(HError::check_analytic(0).is_ok());
        assert!(HError::check_analytic(5).is_ok());
        assert!(matches!(HError::check_analytic(6), Err(HError::AnalyticOrder(6))));
    }

    #[test]
    fn error_kinds() {
        assert!(HError::NonIntegerOrder(1.0).is_type_error());
        assert!(!HError::NonIntegerOrder(1.0).is_value_error());
        assert!(HError::NegativeOrder(-1).is_value_error());
        assert!(HError::AnalyticOrder(6).is_value_error());
        assert!(!HError::InvalidMethod("bogus".into()).is_type_error());
        assert!(!HError::InvalidMethod("bogus".into()).is_value_error());
    }

    #[test]
    fn messages() {
        assert_eq!(
            HError::NegativeOrder(-1).to_string(),
            "n must be non-negative; got -1",
        );
        assert_eq!(
            HError::AnalyticOrder(6).to_string(),
            "n must not be greater than 5 for analytic calculation; got 6",
        );
        let axis: HError = AxisError::from(LengthError(2, 3)).into();
        assert!(axis.to_string().starts_with("axis error: "));
    }
}
