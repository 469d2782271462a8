//! Observation hook invoked by the time marcher at every time level.

use crate::Float;

/// Return flags for [`Monitor`].
///
/// - `Continue`: keep marching.
/// - `Interrupt`: stop marching and return control to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlFlag {
    Continue,
    Interrupt,
}

/// Callback invoked by the [`TimeMarcher`](crate::TimeMarcher) once per
/// time level, before the step that computes the next one, and once more
/// for the final level.
///
/// Arguments are the level number (0 for the initial condition), the time
/// coordinate of that level, and the state vector at it. The state slice
/// is the marcher's current buffer; implementations must copy what they
/// want to keep.
///
/// Typical uses: writing snapshot files at selected level numbers, or
/// accumulating an error trace against the analytic reference. The
/// built-in [`Recorder`](crate::Recorder) does both.
pub trait Monitor {
    fn on_level(&mut self, level: usize, t: Float, u: &[Float]) -> ControlFlag;
}

/// No-op monitor for callers that do not observe the run.
pub struct NoMonitor;

impl Monitor for NoMonitor {
    fn on_level(&mut self, _level: usize, _t: Float, _u: &[Float]) -> ControlFlag {
        ControlFlag::Continue
    }
}
