//! Explicit FTCS stepper.

use crate::Float;

/// Advance one time level with the explicit FTCS scheme.
///
/// Interior nodes follow the three-point stencil
/// `u_next[i] = u_prev[i] + lambda (u_prev[i+1] - 2 u_prev[i] + u_prev[i-1])`;
/// both boundary nodes are re-assigned to exactly zero on every call, never
/// assumed to carry over from the previous level.
///
/// The scheme is numerically stable only for lambda <= 0.5. That bound is a
/// property of the discretization and is deliberately not enforced here;
/// callers choosing a larger lambda get the divergent states the scheme
/// genuinely produces.
pub fn ftcs_step(u_prev: &[Float], u_next: &mut [Float], lambda: Float) {
    let n = u_prev.len();
    assert_eq!(u_next.len(), n, "state buffers differ in length");
    assert!(n >= 3, "FTCS needs at least one interior node");

    // Dirichlet boundaries
    u_next[0] = 0.0;
    u_next[n - 1] = 0.0;

    for i in 1..n - 1 {
        u_next[i] = u_prev[i] + lambda * (u_prev[i + 1] - 2.0 * u_prev[i] + u_prev[i - 1]);
    }
}
