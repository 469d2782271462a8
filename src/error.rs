//! Errors for the linear solvers and the time marcher.

use crate::Float;

/// Errors surfaced by configuration validation and the LU solver.
///
/// A singular matrix is reported as a value the caller can match on
/// rather than aborting the process; configuration problems are caught
/// up front instead of surfacing later as NaN time steps.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// No nonzero pivot candidate exists in this column; the matrix is
    /// singular (or has an all-zero column below the eliminated rows).
    SingularMatrix { column: usize },
    /// Fewer than three spatial nodes leaves no interior to evolve.
    TooFewSpatialNodes(usize),
    /// Fewer than two time nodes leaves no step to take.
    TooFewTimeNodes(usize),
    /// Diffusion coefficient must be positive.
    NonPositiveDiffusion(Float),
    /// Domain half-width must be positive.
    NonPositiveHalfWidth(Float),
    /// Boundary steepness parameter must be positive.
    NonPositiveSteepness(Float),
    /// Final simulation time must be positive.
    NonPositiveFinalTime(Float),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::SingularMatrix { column } => {
                write!(f, "singular matrix: no nonzero pivot in column {}", column)
            }
            Error::TooFewSpatialNodes(v) => {
                write!(f, "nx must be at least 3 (got {})", v)
            }
            Error::TooFewTimeNodes(v) => write!(f, "nt must be at least 2 (got {})", v),
            Error::NonPositiveDiffusion(v) => {
                write!(f, "diffusion coefficient must be positive (got {})", v)
            }
            Error::NonPositiveHalfWidth(v) => {
                write!(f, "domain half-width must be positive (got {})", v)
            }
            Error::NonPositiveSteepness(v) => {
                write!(f, "steepness parameter must be positive (got {})", v)
            }
            Error::NonPositiveFinalTime(v) => {
                write!(f, "final time must be positive (got {})", v)
            }
        }
    }
}

impl std::error::Error for Error {}
