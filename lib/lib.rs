//! Provides functions to evaluate the Hermite functions ψₙ(*x*), i.e. the
//! normalized energy eigenfunctions of the quantum harmonic oscillator, over
//! scalar or multi-dimensional array inputs.
//!
//! Provides implementations for the following numerical routines:
//! - Three-term recurrence (any order; numerically stable)
//! - Closed-form analytic expressions (orders 0 through 5)
//! - Direct evaluation via Hermite polynomials and factorial normalization (any
//!   order; log-domain assembly)
//!
//! Any of these can return either a single order or all orders up to some
//! maximum stacked along a new leading axis, whose position can then be
//! rearranged with a numpy-style [axis move][axes::move_axes].
//!
//! ```
//! use ndarray as nd;
//! use hermite::hermite_functions;
//!
//! let x = nd::array![-1.0, -0.5, 0.0];
//! let psi = hermite_functions(1, &x, false, None, "analytic").unwrap();
//! let expected = [-0.64428837, -0.46871702, 0.0];
//! assert!(psi.iter().zip(expected).all(|(p, e)| (p - e).abs() < 1e-8));
//! ```
//!
//! See [`docs`] for theoretical background.

pub mod error;
pub mod input;
pub mod analytic;
pub mod direct;
pub mod recursive;
pub mod axes;
pub mod hermite;

pub mod docs;

pub use error::HError;
pub use hermite::{ Hermite, HResult, Method, hermite_functions };
pub use input::{ Input, OrderArg };
pub use axes::{ AxisMap, move_axes };

/// Highest order with a closed-form expression in [`analytic`].
pub const ANALYTIC_MAX_ORDER: usize = 5;

// magnitude at which the Hermite polynomial recurrence in `direct` is
// renormalized
pub(crate) const DIRECT_RESCALE: f64 = 1e150;

// |x| beyond which exp(-x²/2) is subnormal
pub(crate) const SEED_UNDERFLOW: f64 = 37.64;
