//! Theoretical background.
//!
//! # Contents
//! - [Background](#background)
//! - [Recurrence](#recurrence)
//! - [Closed forms](#closed-forms)
//! - [Direct evaluation](#direct-evaluation)
//! - [Output layout](#output-layout)
//!
//! # Background
//! In units where the oscillator length *√*(*ħ*/*m* *ω*) is 1, the
//! time-independent Schrödinger equation for the harmonic oscillator reads
//! ```text
//!    1 ∂²ψ   1
//! - --- --- + - x² ψ = E ψ
//!    2 ∂x²   2
//! ```
//! whose normalized bound states are the Hermite functions
//! ```text
//!                    1
//! ψₙ(x) = ----------------- π^(-1/4) exp(-x²/2) Hₙ(x)
//!          √(2ⁿ n!)
//! ```
//! with energies *E*ₙ = *n* + 1/2. Here *H*ₙ is the physicist's Hermite
//! polynomial of degree *n*. The ψₙ form an orthonormal basis of
//! *L*²(ℝ),
//! ```text
//! ∫ ψₘ(x) ψₙ(x) dx = δ[m, n]
//! ```
//! have definite parity ψₙ(-*x*) = (-1)ⁿ ψₙ(*x*) (so that odd orders vanish at
//! the origin), and have exactly *n* nodes, all lying inside the classical
//! turning points ±*√*(2*n* + 1).
//!
//! Physical wavefunctions for a particle of mass *m* in a trap of angular
//! frequency *ω* are recovered as
//! ```text
//! φₙ(x) = a^(-1/2) ψₙ(x / a),   a = √(ħ / m ω)
//! ```
//!
//! # Recurrence
//! The ladder-operator identity *x* ψₙ = *√*((*n* + 1)/2) ψₙ₊₁ + *√*(*n*/2)
//! ψₙ₋₁ rearranges to
//! ```text
//!         ⎛ 2 ⎞1/2            ⎛ m - 1 ⎞1/2
//! ψₘ(x) = ⎜---⎟    x ψₘ₋₁(x) - ⎜-------⎟    ψₘ₋₂(x)
//!         ⎝ m ⎠               ⎝   m   ⎠
//! ```
//! which is what [`recursive`][crate::recursive] uses, starting from ψ₀ and
//! ψ₁. Unlike the recurrence for *H*ₙ itself, both coefficients here are
//! at most 1, and the values being propagated are those of the
//! normalized functions, so nothing grows without bound: this is the method
//! of choice for large *n*. Only the two previous orders are needed at any
//! step.
//!
//! The one weakness of the recurrence is its seed: exp(-*x*²/2) leaves the
//! normal range of `f64` for |*x*| ≳ 37.6 and flushes to zero at |*x*| ≈
//! 38.6, and no amount of recurrence can recover from a zero seed. For orders
//! above roughly 700 the classically allowed region extends past this point,
//! and the recurrence then returns zero where ψₙ is not small; a warning is
//! printed when this happens.
//!
//! # Closed forms
//! For the lowest orders, the Hermite polynomials are short enough to write
//! out:
//! ```text
//! H₀(x) = 1
//! H₁(x) = 2x
//! H₂(x) = 4x² - 2
//! H₃(x) = 8x³ - 12x
//! H₄(x) = 16x⁴ - 48x² + 12
//! H₅(x) = 32x⁵ - 160x³ + 120x
//! ```
//! Absorbing common factors into the normalization gives the expressions used
//! by [`analytic`][crate::analytic], which are limited to *n* ≤
//! [`ANALYTIC_MAX_ORDER`][crate::ANALYTIC_MAX_ORDER].
//!
//! # Direct evaluation
//! [`direct`][crate::direct] evaluates the defining formula as written, with
//! *H*ₙ computed by its own recurrence
//! ```text
//! Hₘ(x) = 2x Hₘ₋₁(x) - 2(m - 1) Hₘ₋₂(x)
//! ```
//! Both *H*ₙ(*x*) and 2ⁿ *n*! overflow `f64` for moderate *n* (*n*! alone
//! does so at *n* = 171), even though their ratio is well-behaved. The
//! polynomial is therefore carried as a mantissa and a logarithmic scale,
//! renormalizing whenever the mantissa grows past 10¹⁵⁰, and the
//! normalization is carried as *n* ln 2 + ln *n*!. Everything is combined in
//! the log domain before a single final exponentiation, so the direct method
//! has no upper limit on *n* and does not suffer from the seed underflow
//! described above. It is, however, *O*(*n*) per order and point, and so
//! *O*(*n*²) for all orders up to *n*.
//!
//! # Output layout
//! For a single order, the output has the shape of the input (a scalar input
//! is treated as an array of shape `[1]`). For all orders up to *n*, a new
//! leading axis of length *n* + 1 is added, indexing the order:
//! ```text
//! psi[m, ...] = ψₘ(x[...])
//! ```
//! The axes of either output can be rearranged as with `numpy.moveaxis`: each
//! source axis is moved to its destination position, and the remaining axes
//! keep their relative order. For example, moving axes `[0, 1, 2, 3]` to
//! `[3, 1, 0, 2]` turns a `[11, 2, 3, 4]` output into a `[3, 2, 4, 11]` one.
