//! Implicit Laasonen (BTCS) stepper.
//!
//! Each level solves a linear system: boundary rows pin the Dirichlet
//! condition exactly, interior rows come from the backward-time
//! centered-space discretization. The same assembly feeds either the
//! Thomas tridiagonal solver or the dense permuted-LU solver; the two
//! paths differ only in asymptotic cost.

use crate::matrix::{Matrix, Tridiagonal};
use crate::{Error, Float};

/// Assemble the Laasonen system for one time level.
///
/// Boundary rows (i = 0 and i = n-1): sub = 0, diag = 1, sup = 0, rhs = 0.
/// Interior rows: sub = -lambda, diag = 1 + 2 lambda, sup = -lambda,
/// rhs = `u_prev[i]`. The result is strictly diagonally dominant for any
/// lambda > 0, which is what lets the Thomas path run without pivoting.
pub fn laasonen_system(u_prev: &[Float], lambda: Float) -> (Tridiagonal, Vec<Float>) {
    let n = u_prev.len();
    let mut sys = Tridiagonal::zeros(n);
    let mut rhs = vec![0.0; n];

    for i in 0..n {
        if i == 0 || i == n - 1 {
            sys.diag[i] = 1.0;
        } else {
            sys.sub[i] = -lambda;
            sys.diag[i] = 1.0 + 2.0 * lambda;
            sys.sup[i] = -lambda;
            rhs[i] = u_prev[i];
        }
    }

    (sys, rhs)
}

/// Advance one level of the Laasonen scheme via the Thomas algorithm.
///
/// O(n) per level; the scratch system is step-local.
pub fn laasonen_thomas_step(u_prev: &[Float], u_next: &mut [Float], lambda: Float) {
    let (mut sys, mut rhs) = laasonen_system(u_prev, lambda);
    sys.solve_in_place(&mut rhs, u_next);
}

/// Advance one level of the Laasonen scheme via dense LU decomposition.
///
/// Expands the tridiagonal band into a zero-filled n x n matrix and runs
/// the O(n^3) factor-and-solve. Mathematically equivalent to
/// [`laasonen_thomas_step`]; kept as the reference path the fast one is
/// validated against. The system never triggers a pivot swap, so the
/// discarded permutation is the identity and `u_next` comes back in
/// natural order.
pub fn laasonen_lu_step(
    u_prev: &[Float],
    u_next: &mut [Float],
    lambda: Float,
) -> Result<(), Error> {
    let n = u_prev.len();
    assert_eq!(u_next.len(), n, "state buffers differ in length");
    let (sys, rhs) = laasonen_system(u_prev, lambda);

    let mut a = Matrix::zeros(n);
    for i in 0..n {
        if i > 0 {
            a[(i, i - 1)] = sys.sub[i];
        }
        a[(i, i)] = sys.diag[i];
        if i < n - 1 {
            a[(i, i + 1)] = sys.sup[i];
        }
    }

    u_next.copy_from_slice(&rhs);
    a.lu_decompose_and_solve(u_next)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assembly_rows() {
        let u_prev = vec![0.0, 2.0, 3.0, 0.0];
        let lambda = 0.8;
        let (sys, rhs) = laasonen_system(&u_prev, lambda);

        assert_eq!((sys.sub[0], sys.diag[0], sys.sup[0]), (0.0, 1.0, 0.0));
        assert_eq!((sys.sub[3], sys.diag[3], sys.sup[3]), (0.0, 1.0, 0.0));
        assert_eq!(rhs[0], 0.0);
        assert_eq!(rhs[3], 0.0);

        for i in 1..3 {
            assert_eq!(sys.sub[i], -lambda);
            assert!((sys.diag[i] - 2.6).abs() < 1e-15);
            assert_eq!(sys.sup[i], -lambda);
            assert_eq!(rhs[i], u_prev[i]);
        }
    }

    #[test]
    fn boundaries_stay_pinned_at_zero() {
        let u_prev = vec![0.0, 1.0, 0.5, 0.25, 0.0];
        let mut u_next = vec![1.0; 5];
        laasonen_thomas_step(&u_prev, &mut u_next, 1.0);
        assert_eq!(u_next[0], 0.0);
        assert_eq!(u_next[4], 0.0);

        let mut u_next_lu = vec![1.0; 5];
        laasonen_lu_step(&u_prev, &mut u_next_lu, 1.0).unwrap();
        assert_eq!(u_next_lu[0], 0.0);
        assert_eq!(u_next_lu[4], 0.0);
    }

    #[test]
    fn thomas_and_lu_paths_agree() {
        let u_prev: Vec<Float> = (0..9)
            .map(|i| {
                let x = i as Float / 8.0;
                (std::f64::consts::PI as Float * x).sin()
            })
            .collect();

        for lambda in [0.3, 1.0, 4.0] {
            let mut u_thomas = vec![0.0; 9];
            laasonen_thomas_step(&u_prev, &mut u_thomas, lambda);
            let mut u_lu = vec![0.0; 9];
            laasonen_lu_step(&u_prev, &mut u_lu, lambda).unwrap();

            for i in 0..9 {
                assert!(
                    (u_thomas[i] - u_lu[i]).abs() < 1e-13,
                    "lambda = {}: node {} differs: {} vs {}",
                    lambda,
                    i,
                    u_thomas[i],
                    u_lu[i]
                );
            }
        }
    }

    #[test]
    fn implicit_step_damps_the_state() {
        // Pure diffusion with zero boundaries shrinks the max norm.
        let u_prev = vec![0.0, 1.0, 2.0, 1.0, 0.0];
        let mut u_next = vec![0.0; 5];
        laasonen_thomas_step(&u_prev, &mut u_next, 1.0);
        let max_prev = u_prev.iter().cloned().fold(0.0 as Float, Float::max);
        let max_next = u_next.iter().cloned().fold(0.0 as Float, Float::max);
        assert!(max_next < max_prev);
        assert!(max_next > 0.0);
    }
}
