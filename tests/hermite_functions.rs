use approx::{ assert_abs_diff_eq, assert_relative_eq };
use ndarray as nd;
use hermite::{
    HError,
    Hermite,
    Method,
    hermite_functions,
    move_axes,
};

const METHODS: [&str; 3] = ["recursive", "analytic", "direct"];

fn assert_close(a: &nd::ArrayD<f64>, b: &nd::ArrayD<f64>) {
    assert_eq!(a.shape(), b.shape());
    for (ak, bk) in a.iter().zip(b) {
        assert_relative_eq!(ak, bk, epsilon = 1e-12, max_relative = 1e-7);
    }
}

// incorrect inputs

#[test]
fn non_integer_n() {
    let err = hermite_functions(1.0, 0.0, true, None, "recursive").unwrap_err();
    assert!(matches!(err, HError::NonIntegerOrder(_)));
    assert!(err.is_type_error());
    assert!(err.to_string().starts_with("n must be an integer"));
}

#[test]
fn negative_n() {
    for method in METHODS {
        let err = hermite_functions(-1, 0.0, true, None, method).unwrap_err();
        assert!(matches!(err, HError::NegativeOrder(-1)));
        assert!(err.is_value_error());
        assert!(err.to_string().starts_with("n must be non-negative"));
    }
}

#[test]
fn n_outside_analytic_range() {
    for n in [-1, 6] {
        let err = hermite_functions(n, 0.0, true, None, "analytic").unwrap_err();
        assert!(err.is_value_error());
    }
    let err = hermite_functions(6, 0.0, false, None, "analytic").unwrap_err();
    assert!(matches!(err, HError::AnalyticOrder(6)));
}

#[test]
fn incorrect_method() {
    let err = hermite_functions(0, 0.0, true, None, "incorrect method")
        .unwrap_err();
    assert!(matches!(err, HError::InvalidMethod(_)));
    let err = hermite_functions(0, 0.0, true, None, "bogus").unwrap_err();
    assert!(matches!(err, HError::InvalidMethod(_)));
}

// reference values, checked against every method

const REFERENCE: [(i32, f64, f64); 8] = [
    (0, 0.0, 0.7511255444649425),
    (1, 0.0, 0.0),
    (2, 0.0, -0.5311259660135984),
    (3, 0.0, 0.0),
    (4, 0.0, 0.4599685791773267),
    (5, 0.0, 0.0),
    (0, 1.0, 0.45558067201133257),
    (1, 1.0, 0.6442883651134752),
];

#[test]
fn reference_values() {
    for method in METHODS {
        for (n, x, expected) in REFERENCE {
            let psi = hermite_functions(n, x, false, None, method).unwrap();
            assert_eq!(psi.shape(), &[1]);
            assert_abs_diff_eq!(psi[[0]], expected, epsilon = 1e-12);
        }
    }
}

#[test]
fn reference_array() {
    let x = nd::array![-1.0, -0.5, 0.0];
    let expected = nd::array![-0.64428837, -0.46871702, 0.0];
    for method in METHODS {
        let psi = hermite_functions(1, &x, false, None, method).unwrap();
        assert_eq!(psi.shape(), &[3]);
        for (p, e) in psi.iter().zip(&expected) {
            assert_abs_diff_eq!(p, e, epsilon = 1e-8);
        }
    }
}

#[test]
fn odd_orders_vanish_at_origin() {
    for method in METHODS {
        for n in [1, 3, 5] {
            let psi = hermite_functions(n, 0.0, false, None, method).unwrap();
            assert_eq!(psi[[0]], 0.0);
        }
    }
}

// all orders at once

#[test]
fn analytic_all_n() {
    let x: nd::Array1<f64> = nd::Array1::linspace(-2.0, 2.0, 3);
    let n = 5;
    let psi = hermite_functions(n, &x, true, None, "analytic").unwrap();
    assert_eq!(psi.shape(), &[n + 1, 3]);
    for m in 0..=n {
        let single = hermite_functions(m, &x, false, None, "analytic").unwrap();
        assert_eq!(psi.index_axis(nd::Axis(0), m), single);
    }
}

#[test]
fn direct_all_n() {
    let x: nd::Array1<f64> = nd::Array1::linspace(-2.0, 2.0, 11);
    let n = 10;
    let psi = hermite_functions(n, &x, true, None, "direct").unwrap();
    assert_eq!(psi.shape(), &[n + 1, 11]);
    for m in 0..=n {
        let single = hermite_functions(m, &x, false, None, "direct").unwrap();
        assert_eq!(psi.index_axis(nd::Axis(0), m), single);
    }
}

// recursive against direct

fn recursive_cases() -> Vec<(usize, nd::ArrayD<f64>)> {
    vec![
        (0, nd::arr1(&[0.0]).into_dyn()),
        (1, nd::arr1(&[0.0]).into_dyn()),
        (1, nd::arr1(&[1.0]).into_dyn()),
        (2, nd::arr1(&[1.0]).into_dyn()),
        (3, nd::arr1(&[3.3]).into_dyn()),
        (10, nd::arr1(&[3.3]).into_dyn()),
        (5, nd::arr1(&[0.0, 0.5, 1.2]).into_dyn()),
        (10, nd::Array1::linspace(-10.0, 10.0, 101).into_dyn()),
        (20, nd::Array::linspace(-6.0, 6.0, 24).into_shape((2, 3, 4)).unwrap().into_dyn()),
    ]
}

#[test]
fn recursive_single() {
    for (n, x) in recursive_cases() {
        let rec = hermite_functions(n, &x, false, None, "recursive").unwrap();
        let dir = hermite_functions(n, &x, false, None, "direct").unwrap();
        assert_close(&rec, &dir);
    }
}

#[test]
fn recursive_all_n() {
    for (n, x) in recursive_cases() {
        let rec = hermite_functions(n, &x, true, None, "recursive").unwrap();
        let dir = hermite_functions(n, &x, true, None, "direct").unwrap();
        assert_close(&rec, &dir);
    }
}

#[test]
fn scalar_and_array_inputs_agree() {
    let scalar = hermite_functions(7, -0.5, true, None, "recursive").unwrap();
    let array = hermite_functions(7, vec![-0.5], true, None, "recursive")
        .unwrap();
    assert_eq!(scalar.shape(), &[8, 1]);
    assert_eq!(scalar, array);
}

// output shapes and axis moves

#[test]
fn shapes() {
    let x: nd::Array3<f64> = nd::Array3::from_elem((2, 3, 4), 0.25);
    let psi = hermite_functions(10, &x, true, None, "recursive").unwrap();
    assert_eq!(psi.shape(), &[11, 2, 3, 4]);
    let psi = hermite_functions(10, &x, false, None, "recursive").unwrap();
    assert_eq!(psi.shape(), &[2, 3, 4]);
    let psi = hermite_functions(
        10, &x, true, Some((&[0, 1, 2, 3], &[3, 1, 0, 2])), "recursive")
        .unwrap();
    assert_eq!(psi.shape(), &[3, 2, 4, 11]);
    let psi = hermite_functions(
        10, &x, true, Some((&[0, 1, 2, 3], &[3, 0, 1, 2])), "recursive")
        .unwrap();
    assert_eq!(psi.shape(), &[2, 3, 4, 11]);
}

// grids like np.mgrid[a:b, c:d]
fn mgrid(r0: (f64, f64), r1: (f64, f64)) -> nd::ArrayD<f64> {
    let a: Vec<f64>
        = (0..).map(|k| r0.0 + k as f64).take_while(|v| *v < r0.1).collect();
    let b: Vec<f64>
        = (0..).map(|k| r1.0 + k as f64).take_while(|v| *v < r1.1).collect();
    let (na, nb) = (a.len(), b.len());
    nd::Array3::from_shape_fn((2, na, nb), |(c, i, j)| {
        if c == 0 { a[i] } else { b[j] }
    })
    .into_dyn()
}

#[test]
fn move_axes_matches_standalone() {
    let source = [0, 1, 2, 3];
    let destination = [1, 3, 2, 0];
    let cases = [
        (5, mgrid((-2.0, 3.0), (0.0, 4.0))),
        (0, mgrid((-2.1, 4.5), (0.0, 8.0))),
        (1, mgrid((-1.0, 1.0), (-2.0, 2.0))),
    ];
    for (n, x) in cases {
        for method in METHODS {
            let out = hermite_functions(
                n, &x, true, Some((&source, &destination)), method).unwrap();
            let check = move_axes(
                hermite_functions(n, &x, true, None, method).unwrap(),
                &source,
                &destination,
            ).unwrap();
            assert_eq!(out, check);
        }
    }
    let x = mgrid((-2.0, 3.0), (0.0, 4.0));
    let out = hermite_functions(5, &x, true, Some((&source, &destination)), "recursive")
        .unwrap();
    assert_eq!(out.shape(), &[4, 6, 5, 2]);
}

// orthonormality on a wide grid

fn trapz(y: nd::ArrayView1<f64>, dx: f64) -> f64 {
    let n = y.len();
    (dx / 2.0) * (y[0] + 2.0 * y.slice(nd::s![1..n - 1]).sum() + y[n - 1])
}

#[test]
fn orthonormal() {
    let x: nd::Array1<f64> = nd::Array1::linspace(-15.0, 15.0, 3001);
    let dx = x[1] - x[0];
    let n = 12;
    let psi = Hermite::new().method(Method::Recursive).eval(n, &x).unwrap();
    let psi = psi.into_dimensionality::<nd::Ix2>().unwrap();
    for i in 0..=n {
        for j in 0..=n {
            let prod = &psi.row(i) * &psi.row(j);
            let overlap = trapz(prod.view(), dx);
            let expected = if i == j { 1.0 } else { 0.0 };
            assert_abs_diff_eq!(overlap, expected, epsilon = 1e-8);
        }
    }
}
