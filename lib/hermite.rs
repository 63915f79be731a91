//! Top-level evaluation of Hermite functions over scalar or array inputs,
//! dispatching to one of the three [methods][Method].

use std::{ fmt, str::FromStr };
use ndarray as nd;
use crate::{
    analytic::{ analytic, analytic_all },
    axes::AxisMap,
    direct::{ direct, direct_all },
    error::HError,
    input::{ Input, OrderArg },
    recursive::{ recursive, recursive_all },
    ANALYTIC_MAX_ORDER,
};

pub type HResult<T> = Result<T, HError>;

/// Evaluation method selector.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Method {
    /// Use the [three-term recurrence][recursive]. Most efficient for `n > 5`.
    #[default]
    Recursive,
    /// Use the [closed-form expressions][analytic]. Only available for
    /// `n <= 5`.
    Analytic,
    /// Use the [Hermite polynomials][direct] directly. Slow, but useful for
    /// comparison.
    Direct,
}

impl Method {
    /// Return `true` if `self` is `Recursive`.
    pub fn is_recursive(&self) -> bool { matches!(self, Self::Recursive) }

    /// Return `true` if `self` is `Analytic`.
    pub fn is_analytic(&self) -> bool { matches!(self, Self::Analytic) }

    /// Return `true` if `self` is `Direct`.
    pub fn is_direct(&self) -> bool { matches!(self, Self::Direct) }

    /// Return the highest order `self` can evaluate, if there is one.
    pub fn max_order(&self) -> Option<usize> {
        self.is_analytic().then_some(ANALYTIC_MAX_ORDER)
    }

    /// Return the name of `self`, as accepted by [`Method::from_str`].
    pub fn name(&self) -> &'static str {
        match self {
            Self::Recursive => "recursive",
            Self::Analytic => "analytic",
            Self::Direct => "direct",
        }
    }

    fn single(&self, n: usize, x: &nd::ArrayD<f64>) -> HResult<nd::ArrayD<f64>> {
        match self {
            Self::Recursive => Ok(recursive(n, x)),
            Self::Analytic => analytic(n, x),
            Self::Direct => Ok(direct(n, x)),
        }
    }

    fn all(&self, n: usize, x: &nd::ArrayD<f64>) -> HResult<nd::ArrayD<f64>> {
        match self {
            Self::Recursive => Ok(recursive_all(n, x)),
            Self::Analytic => analytic_all(n, x),
            Self::Direct => Ok(direct_all(n, x)),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = HError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "recursive" => Ok(Self::Recursive),
            "analytic" => Ok(Self::Analytic),
            "direct" => Ok(Self::Direct),
            _ => Err(HError::InvalidMethod(s.to_string())),
        }
    }
}

/// Evaluation settings for Hermite functions.
///
/// By default, all orders up to the requested one are computed with the
/// recursive method and no axes are moved.
///
/// ```
/// use ndarray as nd;
/// use hermite::{ Hermite, Method };
///
/// let x: nd::Array3<f64> = nd::Array3::zeros((2, 3, 4));
/// let psi = Hermite::new().eval(10, &x).unwrap();
/// assert_eq!(psi.shape(), &[11, 2, 3, 4]);
///
/// let psi = Hermite::new()
///     .all_orders(false)
///     .method(Method::Analytic)
///     .eval(3, &x)
///     .unwrap();
/// assert_eq!(psi.shape(), &[2, 3, 4]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hermite {
    all_orders: bool,
    axes: AxisMap,
    method: Method,
}

impl Default for Hermite {
    fn default() -> Self {
        Self { all_orders: true, axes: AxisMap::default(), method: Method::default() }
    }
}

impl Hermite {
    /// Create a new `Hermite` with default settings.
    pub fn new() -> Self { Self::default() }

    /// Return all ψ<sub>*m*</sub> for 0 ≤ *m* ≤ *n* stacked along a new leading
    /// axis (`true`, the default) or only ψ<sub>*n*</sub> (`false`).
    pub fn all_orders(mut self, all_orders: bool) -> Self {
        self.all_orders = all_orders;
        self
    }

    /// Move the axes of the output as described by `axes`.
    pub fn move_axes(mut self, axes: AxisMap) -> Self {
        self.axes = axes;
        self
    }

    /// Set the evaluation method.
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Get the evaluation method.
    pub fn get_method(&self) -> Method { self.method }

    /// Return `true` if all orders are to be computed.
    pub fn get_all_orders(&self) -> bool { self.all_orders }

    /// Get a reference to the output axis mapping.
    pub fn get_axes(&self) -> &AxisMap { &self.axes }

    /// Evaluate at order `n` and points `x`.
    ///
    /// All argument checks are performed before any evaluation: the order
    /// must be of an integer type ([`HError::NonIntegerOrder`]), non-negative
    /// ([`HError::NegativeOrder`]), and supported by the method
    /// ([`HError::AnalyticOrder`]); the axis mapping must then fit the output
    /// ([`HError::Axis`]).
    ///
    /// The output has the shape of `x` (or `[1]` for a scalar) when computing
    /// a single order, otherwise an extra leading axis of length `n + 1`,
    /// before any axes are moved.
    pub fn eval<N, X>(&self, n: N, x: X) -> HResult<nd::ArrayD<f64>>
    where
        N: Into<OrderArg>,
        X: Into<Input>,
    {
        let n = n.into().validate(self.method)?;
        let x = x.into().into_array();
        let ndim = x.ndim() + usize::from(self.all_orders);
        let order
            = (!self.axes.is_empty())
            .then(|| self.axes.resolve(ndim))
            .transpose()?;
        let psi
            = if self.all_orders {
                self.method.all(n, &x)?
            } else {
                self.method.single(n, &x)?
            };
        match order {
            Some(order) => Ok(psi.permuted_axes(order)),
            None => Ok(psi),
        }
    }
}

/// Calculate the Hermite functions up to order `n` at points `x`.
///
/// This is a thin interface to [`Hermite::eval`] accepting the method by name
/// (`"recursive"`, `"analytic"`, or `"direct"`), which is checked first.
/// `move_axes` gives source and destination axes for the output, as in
/// [`move_axes`][crate::axes::move_axes].
///
/// ```
/// use ndarray as nd;
/// use hermite::hermite_functions;
///
/// let x = nd::array![[-2.0, -1.0], [0.0, 1.0], [2.0, 3.0]];
/// let psi = hermite_functions(
///     5, &x, true, Some((&[0, 1, 2], &[2, 0, 1])), "recursive").unwrap();
/// assert_eq!(psi.shape(), &[3, 2, 6]);
/// ```
pub fn hermite_functions<N, X>(
    n: N,
    x: X,
    all_orders: bool,
    move_axes: Option<(&[isize], &[isize])>,
    method: &str,
) -> HResult<nd::ArrayD<f64>>
where
    N: Into<OrderArg>,
    X: Into<Input>,
{
    let method: Method = method.parse()?;
    let n: OrderArg = n.into();
    // order errors take precedence over malformed axis maps
    n.validate(method)?;
    let axes
        = match move_axes {
            Some((source, destination)) => AxisMap::new(source, destination)?,
            None => AxisMap::default(),
        };
    Hermite { all_orders, axes, method }.eval(n, x)
}
