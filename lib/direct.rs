//! Direct evaluation of Hermite functions via the physicist's Hermite
//! polynomials,
//! ```text
//!                     1
//! ψₙ(x) = ----------------- π^(-1/4) exp(-x²/2) Hₙ(x)
//!           √(2ⁿ n!)
//! ```
//! with
//! ```text
//! H₀(x) = 1
//! H₁(x) = 2x
//! Hₘ(x) = 2x Hₘ₋₁(x) - 2(m - 1) Hₘ₋₂(x)
//! ```
//!
//! Both Hₙ(*x*) and 2ⁿ *n*! leave the range of `f64` long before ψₙ(*x*)
//! does, so the polynomial is carried with a separate logarithmic scale and
//! the prefactor is carried as a logarithm; the result is assembled in the log
//! domain. There is consequently no upper limit on `n`.

use std::f64::consts::{ LN_2, PI };
use ndarray as nd;
use crate::DIRECT_RESCALE;

#[derive(Copy, Clone, Debug)]
struct Window(f64, f64);

impl Window {
    fn push(&mut self, val: f64) { self.0 = self.1; self.1 = val; }

    fn rescale(&mut self, a: f64) { self.0 /= a; self.1 /= a; }
}

// ln(2ⁿ n!)
fn ln_norm(n: usize) -> f64 {
    (1..=n).map(|k| (k as f64).ln()).sum::<f64>() + n as f64 * LN_2
}

// Hₙ(x) as a (mantissa, log-scale) pair such that Hₙ(x) = h exp(scale)
fn hermite_poly_scaled(n: usize, x: f64) -> (f64, f64) {
    let mut h = Window(1.0, 2.0 * x);
    if n == 0 { return (h.0, 0.0); }
    let ln_rescale = DIRECT_RESCALE.ln();
    let mut scale: f64 = 0.0;
    for m in 2..=n {
        h.push(2.0 * x * h.1 - 2.0 * (m - 1) as f64 * h.0);
        if h.1.abs() > DIRECT_RESCALE {
            h.rescale(DIRECT_RESCALE);
            scale += ln_rescale;
        }
    }
    (h.1, scale)
}

/// Compute the physicist's Hermite polynomial Hₙ(*x*) at a single point.
///
/// This is subject to overflow for large `n`; [`direct`] does not use it.
pub fn hermite_poly(n: usize, x: f64) -> f64 {
    let (h, scale) = hermite_poly_scaled(n, x);
    h * scale.exp()
}

pub(crate) fn direct_point(n: usize, x: f64) -> f64 {
    let (h, scale) = hermite_poly_scaled(n, x);
    if h == 0.0 { return 0.0; }
    let ln_abs = h.abs().ln() + scale - 0.5 * ln_norm(n) - x.powi(2) / 2.0
        - 0.25 * PI.ln();
    h.signum() * ln_abs.exp()
}

/// Compute ψ<sub>*n*</sub>(*x*) elementwise from the Hermite polynomial and
/// factorial normalization.
///
/// This is the slowest of the three methods, scaling as *O*(*n*) per point
/// and per order, and is primarily useful as a reference.
///
/// ```
/// use ndarray as nd;
/// use hermite::direct::direct;
///
/// let psi = direct(2, &nd::array![0.0]);
/// assert!((psi[0] + 0.5311259660135984).abs() < 1e-12);
/// ```
pub fn direct<S, D>(n: usize, x: &nd::ArrayBase<S, D>) -> nd::Array<f64, D>
where
    S: nd::Data<Elem = f64>,
    D: nd::Dimension,
{
    x.mapv(|xk| direct_point(n, xk))
}

/// Compute ψ<sub>*m*</sub>(*x*) for all 0 ≤ *m* ≤ *n* by direct evaluation,
/// stacked along a new leading axis.
pub fn direct_all<S, D>(n: usize, x: &nd::ArrayBase<S, D>) -> nd::ArrayD<f64>
where
    S: nd::Data<Elem = f64>,
    D: nd::Dimension,
{
    let x = x.view().into_dyn();
    let mut shape = vec![n + 1];
    shape.extend_from_slice(x.shape());
    let mut psi: nd::ArrayD<f64> = nd::ArrayD::zeros(shape);
    psi.axis_iter_mut(nd::Axis(0)).enumerate()
        .for_each(|(m, mut psi_m)| { psi_m.assign(&direct(m, &x)); });
    psi
}
