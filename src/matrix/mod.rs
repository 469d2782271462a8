//! Dense and tridiagonal matrix types and their linear solvers.

mod base;
mod lu;
mod tridiagonal;

pub use base::Matrix;
pub use lu::Lu;
pub use tridiagonal::Tridiagonal;
