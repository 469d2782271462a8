//! Thomas algorithm for tridiagonal systems.

use crate::Float;

/// Tridiagonal coefficient matrix, stored as three same-length diagonals.
///
/// By convention `sub[0]` and `sup[n-1]` are unused. No pivoting is
/// performed by either solve; correctness requires diagonal dominance,
/// which the implicit-scheme assembly guarantees for its systems. Neither
/// solve verifies it.
#[derive(Clone, Debug, PartialEq)]
pub struct Tridiagonal {
    /// Sub-diagonal l, `sub[0]` unused.
    pub sub: Vec<Float>,
    /// Main diagonal d.
    pub diag: Vec<Float>,
    /// Super-diagonal u, `sup[n-1]` unused.
    pub sup: Vec<Float>,
}

impl Tridiagonal {
    /// Three zero diagonals of length n.
    pub fn zeros(n: usize) -> Self {
        Self {
            sub: vec![0.0; n],
            diag: vec![0.0; n],
            sup: vec![0.0; n],
        }
    }

    /// System size n.
    pub fn n(&self) -> usize {
        self.diag.len()
    }

    fn check_dims(&self, b: &[Float], x: &[Float]) {
        let n = self.n();
        assert!(n > 0, "system size must be > 0");
        assert_eq!(self.sub.len(), n, "sub-diagonal length mismatch");
        assert_eq!(self.sup.len(), n, "super-diagonal length mismatch");
        assert_eq!(b.len(), n, "rhs length mismatch: expected {}, got {}", n, b.len());
        assert_eq!(x.len(), n, "solution length mismatch: expected {}, got {}", n, x.len());
    }

    /// Solve A x = b by forward elimination and back substitution.
    ///
    /// This is the in-place formulation: the forward pass mutates `diag`
    /// and `b` directly, so callers that need the original system must
    /// copy it first. The solution lands in `x`.
    pub fn solve_in_place(&mut self, b: &mut [Float], x: &mut [Float]) {
        self.check_dims(b, x);
        let n = self.n();

        // Forward elimination on the main diagonal:
        // d[i] -= (l[i] / d[i-1]) * u[i-1]
        for i in 1..n {
            let m = self.sub[i] / self.diag[i - 1];
            self.diag[i] -= m * self.sup[i - 1];
        }

        // Same elimination applied to the right-hand side. The multiplier
        // uses the already-updated d[i-1], matching the two-pass split of
        // the eliminated system.
        for i in 1..n {
            let m = self.sub[i] / self.diag[i - 1];
            b[i] -= m * b[i - 1];
        }

        // Back substitution
        x[n - 1] = b[n - 1] / self.diag[n - 1];
        for i in (0..n - 1).rev() {
            x[i] = (b[i] - self.sup[i] * x[i + 1]) / self.diag[i];
        }
    }

    /// Solve A x = b without mutating the system or the right-hand side.
    ///
    /// Maintains forward-eliminated scratch coefficients (cp, dp) instead
    /// of overwriting caller storage. Preferred at large node counts where
    /// the caller wants to retain the assembled system.
    pub fn solve_scratch(&self, b: &[Float], x: &mut [Float]) {
        self.check_dims(b, x);
        let n = self.n();

        let mut cp = vec![0.0; n];
        let mut dp = vec![0.0; n];

        cp[0] = self.sup[0] / self.diag[0];
        dp[0] = b[0] / self.diag[0];
        for i in 1..n {
            let den = self.diag[i] - self.sub[i] * cp[i - 1];
            if i < n - 1 {
                cp[i] = self.sup[i] / den;
            }
            dp[i] = (b[i] - self.sub[i] * dp[i - 1]) / den;
        }

        x[n - 1] = dp[n - 1];
        for i in (0..n - 1).rev() {
            x[i] = dp[i] - cp[i] * x[i + 1];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn laplacian_4() -> (Tridiagonal, Vec<Float>) {
        // [ 2 -1  0  0]       [1]
        // [-1  2 -1  0]  x  = [0]
        // [ 0 -1  2 -1]       [0]
        // [ 0  0 -1  2]       [1]
        let sys = Tridiagonal {
            sub: vec![0.0, -1.0, -1.0, -1.0],
            diag: vec![2.0; 4],
            sup: vec![-1.0, -1.0, -1.0, 0.0],
        };
        (sys, vec![1.0, 0.0, 0.0, 1.0])
    }

    #[test]
    fn laplacian_solution_by_hand() {
        // Thomas elimination by hand gives x = [1, 1, 1, 1].
        let (mut sys, mut b) = laplacian_4();
        let mut x = vec![0.0; 4];
        sys.solve_in_place(&mut b, &mut x);
        for (i, xi) in x.iter().enumerate() {
            assert!((xi - 1.0).abs() < 1e-15, "x[{}] = {}", i, xi);
        }
    }

    #[test]
    fn scratch_form_matches_in_place_form() {
        let sys = Tridiagonal {
            sub: vec![0.0, -0.3, -0.3, -0.3, -0.3],
            diag: vec![1.6; 5],
            sup: vec![-0.3, -0.3, -0.3, -0.3, 0.0],
        };
        let b = vec![1.0, 0.5, -0.25, 2.0, 0.125];

        let mut x_scratch = vec![0.0; 5];
        sys.solve_scratch(&b, &mut x_scratch);

        let mut sys_mut = sys.clone();
        let mut b_mut = b.clone();
        let mut x_in_place = vec![0.0; 5];
        sys_mut.solve_in_place(&mut b_mut, &mut x_in_place);

        for i in 0..5 {
            assert!(
                (x_scratch[i] - x_in_place[i]).abs() < 1e-14,
                "solutions diverge at {}: {} vs {}",
                i,
                x_scratch[i],
                x_in_place[i]
            );
        }
    }

    #[test]
    fn scratch_form_leaves_inputs_untouched() {
        let (sys, b) = laplacian_4();
        let sys_before = sys.clone();
        let b_before = b.clone();
        let mut x = vec![0.0; 4];
        sys.solve_scratch(&b, &mut x);
        assert_eq!(sys, sys_before);
        assert_eq!(b, b_before);
    }

    #[test]
    fn in_place_form_consumes_the_system() {
        let (mut sys, mut b) = laplacian_4();
        let diag_before = sys.diag.clone();
        let mut x = vec![0.0; 4];
        sys.solve_in_place(&mut b, &mut x);
        assert_ne!(sys.diag, diag_before);
    }

    #[test]
    fn identity_system() {
        let mut sys = Tridiagonal {
            sub: vec![0.0; 3],
            diag: vec![1.0; 3],
            sup: vec![0.0; 3],
        };
        let mut b = vec![4.0, -1.0, 0.5];
        let mut x = vec![0.0; 3];
        sys.solve_in_place(&mut b, &mut x);
        assert_eq!(x, vec![4.0, -1.0, 0.5]);
    }

    #[test]
    fn solution_satisfies_the_system() {
        let sys = Tridiagonal {
            sub: vec![0.0, 1.0, 2.0, -1.0],
            diag: vec![5.0, 6.0, 7.0, 5.0],
            sup: vec![1.5, -2.0, 1.0, 0.0],
        };
        let b = vec![3.0, 1.0, -4.0, 2.0];
        let mut x = vec![0.0; 4];
        sys.solve_scratch(&b, &mut x);

        let ax = [
            sys.diag[0] * x[0] + sys.sup[0] * x[1],
            sys.sub[1] * x[0] + sys.diag[1] * x[1] + sys.sup[1] * x[2],
            sys.sub[2] * x[1] + sys.diag[2] * x[2] + sys.sup[2] * x[3],
            sys.sub[3] * x[2] + sys.diag[3] * x[3],
        ];
        for i in 0..4 {
            assert!((ax[i] - b[i]).abs() < 1e-12, "row {} residual {}", i, ax[i] - b[i]);
        }
    }
}
