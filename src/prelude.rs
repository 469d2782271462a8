//! Convenient prelude: import the most commonly used types and functions.
//!
//! Bring this into scope with:
//!
//! ```rust
//! use heat1d::prelude::*;
//! ```

pub use crate::matrix::{Lu, Matrix, Tridiagonal};
pub use crate::{
    erfc, exact, initial_condition, max_error, Config, ControlFlag, Error, Float, March, Monitor,
    NoMonitor, Recorder, Scheme, Status, TimeMarcher,
};
