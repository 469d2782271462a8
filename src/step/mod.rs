//! Time-stepping schemes for the diffusion equation.

mod explicit;
mod implicit;

pub use explicit::ftcs_step;
pub use implicit::{laasonen_lu_step, laasonen_system, laasonen_thomas_step};

/// Scheme selection for the [`TimeMarcher`](crate::TimeMarcher).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scheme {
    /// Explicit forward-time centered-space scheme. Cheapest per level,
    /// stable only for lambda <= 0.5.
    Ftcs,
    /// Implicit Laasonen scheme over the Thomas tridiagonal solver,
    /// O(n) per level. Unconditionally stable.
    LaasonenThomas,
    /// Implicit Laasonen scheme over the dense permuted-LU solver,
    /// O(n^3) per level. Produces the same states as
    /// [`Scheme::LaasonenThomas`] within floating-point tolerance and
    /// exists for cross-validation.
    LaasonenLu,
}
