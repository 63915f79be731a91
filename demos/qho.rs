use std::f64::consts::PI;
use ndarray as nd;
use hermite::{ AxisMap, Hermite, Method };

// tabulate the lowest eigenstates of a harmonic trap and cross-check the three
// evaluation methods

const HBAR: f64 = 1.054571817e-34; // J s
const MASS: f64 = 2.8384644058191703e-25; // ¹⁷¹Yb; kg
const TRAP_FREQ: f64 = 2.0 * PI * 30e3; // s⁻¹
const MAX_N: usize = 5;

fn main() {
    // characteristic length scale of the ground state
    let gs_length = (HBAR / MASS / TRAP_FREQ).sqrt();
    println!("oscillator length: {:.3e} m", gs_length);

    // coordinates in natural units
    let x: nd::Array1<f64> = nd::Array1::linspace(-4.0, 4.0, 17);

    // lay out as (x, n) for printing
    let layout = AxisMap::new(&[0], &[-1]).unwrap();
    let psi = Hermite::new()
        .move_axes(layout)
        .eval(MAX_N, &x)
        .unwrap();

    print!("{:>8}", "x / a");
    (0..=MAX_N).for_each(|n| { print!("{:>12}", format!("ψ_{}", n)); });
    println!();
    for (xk, row) in x.iter().zip(psi.outer_iter()) {
        print!("{:>8.2}", xk);
        row.iter().for_each(|p| { print!("{:>12.6}", p); });
        println!();
    }

    // physical wavefunctions pick up a factor of a^(-1/2)
    let peak = psi.iter().fold(0.0_f64, |acc, p| acc.max(p.abs()));
    println!("max |φ_n| = {:.3e} m^(-1/2)", peak / gs_length.sqrt());

    let methods = [Method::Recursive, Method::Analytic, Method::Direct];
    let results: Vec<nd::ArrayD<f64>>
        = methods.iter()
        .map(|method| Hermite::new().method(*method).eval(MAX_N, &x).unwrap())
        .collect();
    for (method, res) in methods.iter().zip(&results).skip(1) {
        let diff = res.iter().zip(&results[0])
            .fold(0.0_f64, |acc, (a, b)| acc.max((a - b).abs()));
        println!("max |{} - {}| = {:.3e}", method, methods[0], diff);
    }
}
