//! Closed-form expressions for the first six Hermite functions.
//!
//! ```text
//! ψ₀(x) = π^(-1/4) exp(-x²/2)
//! ψ₁(x) = √2 π^(-1/4) x exp(-x²/2)
//! ψ₂(x) = (√2 π^(1/4))⁻¹ (2x² - 1) exp(-x²/2)
//! ψ₃(x) = (√3 π^(1/4))⁻¹ (2x³ - 3x) exp(-x²/2)
//! ψ₄(x) = (2√6 π^(1/4))⁻¹ (4x⁴ - 12x² + 3) exp(-x²/2)
//! ψ₅(x) = (2√15 π^(1/4))⁻¹ (4x⁵ - 20x³ + 15x) exp(-x²/2)
//! ```

use std::f64::consts::{ PI, SQRT_2 };
use ndarray as nd;
use crate::error::HError;

pub(crate) fn psi0(x: f64) -> f64 {
    PI.powf(-0.25) * (-x.powi(2) / 2.0).exp()
}

pub(crate) fn psi1(x: f64) -> f64 {
    SQRT_2 * PI.powf(-0.25) * x * (-x.powi(2) / 2.0).exp()
}

fn psi2(x: f64) -> f64 {
    (SQRT_2 * PI.powf(0.25)).recip()
        * (2.0 * x.powi(2) - 1.0)
        * (-x.powi(2) / 2.0).exp()
}

fn psi3(x: f64) -> f64 {
    (3.0_f64.sqrt() * PI.powf(0.25)).recip()
        * (2.0 * x.powi(3) - 3.0 * x)
        * (-x.powi(2) / 2.0).exp()
}

fn psi4(x: f64) -> f64 {
    (2.0 * 6.0_f64.sqrt() * PI.powf(0.25)).recip()
        * (4.0 * x.powi(4) - 12.0 * x.powi(2) + 3.0)
        * (-x.powi(2) / 2.0).exp()
}

fn psi5(x: f64) -> f64 {
    (2.0 * 15.0_f64.sqrt() * PI.powf(0.25)).recip()
        * (4.0 * x.powi(5) - 20.0 * x.powi(3) + 15.0 * x)
        * (-x.powi(2) / 2.0).exp()
}

fn closed_form(n: usize) -> Result<fn(f64) -> f64, HError> {
    match n {
        0 => Ok(psi0),
        1 => Ok(psi1),
        2 => Ok(psi2),
        3 => Ok(psi3),
        4 => Ok(psi4),
        5 => Ok(psi5),
        _ => Err(HError::AnalyticOrder(n)),
    }
}

/// Compute ψ<sub>*n*</sub>(*x*) elementwise from its closed form.
///
/// Returns [`HError::AnalyticOrder`] if `n` is greater than 5.
///
/// ```
/// use ndarray as nd;
/// use hermite::analytic::analytic;
///
/// let x = nd::array![-1.0, -0.5, 0.0];
/// let psi = analytic(1, &x).unwrap();
/// let expected = [-0.64428837, -0.46871702, 0.0];
/// assert!(psi.iter().zip(expected).all(|(p, e)| (p - e).abs() < 1e-8));
/// ```
pub fn analytic<S, D>(n: usize, x: &nd::ArrayBase<S, D>)
    -> Result<nd::Array<f64, D>, HError>
where
    S: nd::Data<Elem = f64>,
    D: nd::Dimension,
{
    let f = closed_form(n)?;
    Ok(x.mapv(f))
}

/// Compute ψ<sub>*m*</sub>(*x*) for all 0 ≤ *m* ≤ *n* from their closed forms,
/// stacked along a new leading axis.
///
/// Returns [`HError::AnalyticOrder`] if `n` is greater than 5.
pub fn analytic_all<S, D>(n: usize, x: &nd::ArrayBase<S, D>)
    -> Result<nd::ArrayD<f64>, HError>
where
    S: nd::Data<Elem = f64>,
    D: nd::Dimension,
{
    HError::check_analytic(n)?;
    let x = x.view().into_dyn();
    let mut shape = vec![n + 1];
    shape.extend_from_slice(x.shape());
    let mut psi: nd::ArrayD<f64> = nd::ArrayD::zeros(shape);
    for (m, mut psi_m) in psi.axis_iter_mut(nd::Axis(0)).enumerate() {
        psi_m.assign(&analytic(m, &x)?);
    }
    Ok(psi)
}
