//! Analytic reference solution for the diffusion problem.
//!
//! The closed form is built on the complementary error function. The time
//! marcher never uses this module to evolve state; it exists purely for
//! error measurement and snapshot output.

use crate::{Config, Float};

// Rational Chebyshev coefficients for erfc, W. J. Cody (1969).
const A: [Float; 5] = [
    3.16112374387056560e0,
    1.13864154151050156e2,
    3.77485237685302021e2,
    3.20937758913846947e3,
    1.85777706184603153e-1,
];
const B: [Float; 4] = [
    2.36012909523441209e1,
    2.44024637934444173e2,
    1.28261652607737228e3,
    2.84423683343917062e3,
];
const C: [Float; 9] = [
    5.64188496988670089e-1,
    8.88314979438837594e0,
    6.61191906371416295e1,
    2.98635138197400131e2,
    8.81952221241769090e2,
    1.71204761263407058e3,
    2.05107837782607147e3,
    1.23033935479799725e3,
    2.15311535474403846e-8,
];
const D: [Float; 8] = [
    1.57449261107098347e1,
    1.17693950891312499e2,
    5.37181101862009858e2,
    1.62138957456669019e3,
    3.29079923573345963e3,
    4.36261909014324716e3,
    3.43936767414372164e3,
    1.23033935480374942e3,
];
const P: [Float; 6] = [
    3.05326634961232344e-1,
    3.60344899949804439e-1,
    1.25781726111229246e-1,
    1.60837851487422766e-2,
    6.58749161529837803e-4,
    1.63153871373020978e-2,
];
const Q: [Float; 5] = [
    2.56852019228982242e0,
    1.87295284992346047e0,
    5.27905102951428412e-1,
    6.05183413124413191e-2,
    2.33520497626869185e-3,
];

/// 1 / sqrt(pi)
const SQRPI: Float = 5.641_895_835_477_563e-1;
/// Threshold between the erf and erfc approximation intervals.
const THRESH: Float = 0.46875;
/// erfc underflows to zero beyond this argument.
const XBIG: Float = 26.543;

/// Complementary error function erfc(x) = 1 - erf(x).
///
/// Cody's rational approximation, accurate to close to machine epsilon
/// over the whole real line.
pub fn erfc(x: Float) -> Float {
    let y = x.abs();

    if y <= THRESH {
        let ysq = if y > 1.11e-16 { y * y } else { 0.0 };
        let mut xnum = A[4] * ysq;
        let mut xden = ysq;
        for i in 0..3 {
            xnum = (xnum + A[i]) * ysq;
            xden = (xden + B[i]) * ysq;
        }
        return 1.0 - x * (xnum + A[3]) / (xden + B[3]);
    }

    let result = if y <= 4.0 {
        let mut xnum = C[8] * y;
        let mut xden = y;
        for i in 0..7 {
            xnum = (xnum + C[i]) * y;
            xden = (xden + D[i]) * y;
        }
        (xnum + C[7]) / (xden + D[7])
    } else if y >= XBIG {
        0.0
    } else {
        let ysq = 1.0 / (y * y);
        let mut xnum = P[5] * ysq;
        let mut xden = ysq;
        for i in 0..4 {
            xnum = (xnum + P[i]) * ysq;
            xden = (xden + Q[i]) * ysq;
        }
        let r = ysq * (xnum + P[4]) / (xden + Q[4]);
        (SQRPI - r) / y
    };

    // exp(-y^2) split into two factors to limit cancellation in the exponent.
    let ysq = (y * 16.0).trunc() / 16.0;
    let del = (y - ysq) * (y + ysq);
    let scaled = (-ysq * ysq).exp() * (-del).exp() * result;

    if x < 0.0 {
        2.0 - scaled
    } else {
        scaled
    }
}

/// Initial profile U(x, 0): zero left of the origin, exp(-x/b) to the right.
pub fn initial_condition(x: Float, steepness: Float) -> Float {
    if x < 0.0 {
        0.0
    } else {
        (-x / steepness).exp()
    }
}

/// Exact solution U(x, t) of the diffusion problem.
///
/// U(x, t) = 1/2 exp(D t / b^2 - x / b) erfc((2 D t / b - x) / (2 sqrt(D t)))
///
/// The closed form divides by sqrt(t); at t = 0 this returns the initial
/// condition instead.
pub fn exact(x: Float, t: Float, config: &Config) -> Float {
    let d = config.diffusion;
    let b = config.steepness;
    if t == 0.0 {
        return initial_condition(x, b);
    }
    let z = (2.0 * d * t / b - x) / (2.0 * (d * t).sqrt());
    let pref = 0.5 * (d * t / (b * b) - x / b).exp();
    pref * erfc(z)
}

/// Maximum absolute difference between a numeric state and the exact
/// solution at time `t`, over the whole spatial grid.
pub fn max_error(u: &[Float], x: &[Float], t: Float, config: &Config) -> Float {
    let mut max_err: Float = 0.0;
    for (ui, xi) in u.iter().zip(x) {
        let e = (ui - exact(*xi, t, config)).abs();
        if e > max_err {
            max_err = e;
        }
    }
    max_err
}
