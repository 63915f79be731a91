//! Evaluation of Hermite functions by the three-term recurrence
//! ```text
//!         ⎛ 2 ⎞1/2          ⎛ m - 1 ⎞1/2
//! ψₘ(x) = ⎜---⎟    x ψₘ₋₁ - ⎜-------⎟    ψₘ₋₂(x)
//!         ⎝ m ⎠             ⎝   m   ⎠
//! ```
//! seeded with the closed forms of ψ₀ and ψ₁.
//!
//! Both coefficients are bounded for all *m*, so the recurrence is stable and
//! is the preferred method for large orders.

use ndarray as nd;
use crate::{
    analytic::{ psi0, psi1 },
    SEED_UNDERFLOW,
};

// recurrence coefficients for order m
fn coeffs(m: usize) -> (f64, f64) {
    let m = m as f64;
    ((2.0 / m).sqrt(), ((m - 1.0) / m).sqrt())
}

// the seeds are flushed to zero far out in the tails, and the recurrence cannot
// recover from this; complain if that happens where ψₙ is not negligible
fn check_seed_underflow<S, D>(n: usize, x: &nd::ArrayBase<S, D>)
where
    S: nd::Data<Elem = f64>,
    D: nd::Dimension,
{
    let turning = (2.0 * n as f64 + 1.0).sqrt();
    let lost = x.iter()
        .filter(|xk| xk.abs() > SEED_UNDERFLOW && xk.abs() < turning)
        .count();
    if lost > 0 {
        println!(
            "recursive: WARNING: {lost} point(s) with |x| > {SEED_UNDERFLOW} \
            lie within the classical turning point of order {n} \
            (|x| = {turning:.3}) but underflow in the recurrence seeds; these \
            are returned as zero (use the direct method instead)"
        );
    }
}

/// Compute ψ<sub>*n*</sub>(*x*) elementwise by recurrence.
///
/// Only the two most recent orders are held in memory at any time.
///
/// ```
/// use ndarray as nd;
/// use hermite::{ analytic::analytic, recursive::recursive };
///
/// let x: nd::Array1<f64> = nd::Array1::linspace(-5.0, 5.0, 101);
/// let rec = recursive(5, &x);
/// let ana = analytic(5, &x).unwrap();
/// assert!(rec.iter().zip(&ana).all(|(r, a)| (r - a).abs() < 1e-12));
/// ```
pub fn recursive<S, D>(n: usize, x: &nd::ArrayBase<S, D>) -> nd::Array<f64, D>
where
    S: nd::Data<Elem = f64>,
    D: nd::Dimension,
{
    let mut psi_mm2: nd::Array<f64, D> = x.mapv(psi0);
    if n == 0 { return psi_mm2; }
    let mut psi_mm1: nd::Array<f64, D> = x.mapv(psi1);
    if n == 1 { return psi_mm1; }
    check_seed_underflow(n, x);
    for m in 2..=n {
        let (a, b) = coeffs(m);
        // overwrite ψₘ₋₂ with ψₘ, then rotate
        nd::Zip::from(&mut psi_mm2).and(&psi_mm1).and(x)
            .for_each(|p2, &p1, &xk| { *p2 = a * xk * p1 - b * *p2; });
        std::mem::swap(&mut psi_mm2, &mut psi_mm1);
    }
    psi_mm1
}

/// Compute ψ<sub>*m*</sub>(*x*) for all 0 ≤ *m* ≤ *n* by recurrence, stacked
/// along a new leading axis.
///
/// Each order is written directly into its slot in the output.
pub fn recursive_all<S, D>(n: usize, x: &nd::ArrayBase<S, D>)
    -> nd::ArrayD<f64>
where
    S: nd::Data<Elem = f64>,
    D: nd::Dimension,
{
    let x = x.view().into_dyn();
    let mut shape = vec![n + 1];
    shape.extend_from_slice(x.shape());
    let mut psi: nd::ArrayD<f64> = nd::ArrayD::zeros(shape);

    nd::Zip::from(psi.index_axis_mut(nd::Axis(0), 0)).and(&x)
        .for_each(|p, &xk| { *p = psi0(xk); });
    if n == 0 { return psi; }
    nd::Zip::from(psi.index_axis_mut(nd::Axis(0), 1)).and(&x)
        .for_each(|p, &xk| { *p = psi1(xk); });
    if n == 1 { return psi; }
    check_seed_underflow(n, &x);

    for m in 2..=n {
        let (a, b) = coeffs(m);
        let (done, mut rest) = psi.view_mut().split_at(nd::Axis(0), m);
        let psi_mm2 = done.index_axis(nd::Axis(0), m - 2);
        let psi_mm1 = done.index_axis(nd::Axis(0), m - 1);
        nd::Zip::from(rest.index_axis_mut(nd::Axis(0), 0))
            .and(&psi_mm2)
            .and(&psi_mm1)
            .and(&x)
            .for_each(|p, &p2, &p1, &xk| { *p = a * xk * p1 - b * p2; });
    }
    psi
}
