//! Finite-difference solvers for the 1-D diffusion (heat) equation on a
//! bounded domain with homogeneous Dirichlet boundaries.
//!
//! Two time-stepping schemes are provided: the explicit FTCS scheme and the
//! implicit Laasonen (BTCS) scheme. The implicit scheme's linear system can
//! be solved either with the O(n) Thomas algorithm for tridiagonal matrices
//! or with a dense LU decomposition using a logical row permutation. Both
//! paths produce the same solution and exist to be compared against each
//! other.
//!
//! The [`TimeMarcher`] drives a chosen [`Scheme`] over the full time grid,
//! double-buffering the state and reporting progress through an optional
//! [`Monitor`] callback.

mod analytic;
mod config;
mod error;
mod march;
mod monitor;
mod output;
mod status;

pub mod matrix;
pub mod prelude;
pub mod step;

pub use analytic::{erfc, exact, initial_condition, max_error};
pub use config::Config;
pub use error::Error;
pub use march::{March, TimeMarcher};
pub use monitor::{ControlFlag, Monitor, NoMonitor};
pub use output::{error_trace_csv, snapshot_csv, write_error_trace, write_snapshot, Recorder};
pub use status::Status;
pub use step::Scheme;

// Prevent selecting two incompatible float precision features at once.
#[cfg(all(feature = "f32", feature = "f64"))]
compile_error!(
    "features 'f32' and 'f64' cannot both be enabled; pick exactly one Float precision feature"
);

/// Floating-point type used throughout the crate.
///
/// `f64` is the default and the precision all documented tolerances assume.
#[cfg(feature = "f32")]
pub type Float = f32;
#[cfg(feature = "f64")]
pub type Float = f64;
