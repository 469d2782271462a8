//! CSV output for snapshots and error traces.
//!
//! Formatting and writing are split: the `*_csv` functions build the file
//! contents as a `String`, the `write_*` wrappers put them on disk. One
//! snapshot file per recorded time level, one error-trace file per run.

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::analytic::exact;
use crate::monitor::{ControlFlag, Monitor};
use crate::{Config, Float};

/// Render one snapshot as CSV rows of `x,U_method,U_exact`.
pub fn snapshot_csv(x: &[Float], u: &[Float], u_exact: &[Float], precision: usize) -> String {
    let mut out = String::new();
    out.push_str("x,U_method,U_exact\n");
    for i in 0..x.len() {
        out.push_str(&format!(
            "{:.prec$e},{:.prec$e},{:.prec$e}\n",
            x[i],
            u[i],
            u_exact[i],
            prec = precision
        ));
    }
    out
}

/// Write a snapshot file for one time level.
pub fn write_snapshot(
    path: &Path,
    x: &[Float],
    u: &[Float],
    u_exact: &[Float],
    precision: usize,
) -> io::Result<()> {
    fs::write(path, snapshot_csv(x, u, u_exact, precision))
}

/// Render an error trace as CSV rows of `t,e_max`.
pub fn error_trace_csv(rows: &[(Float, Float)], precision: usize) -> String {
    let mut out = String::new();
    out.push_str("t,e_max\n");
    for (t, e_max) in rows {
        out.push_str(&format!(
            "{:.prec$e},{:.prec$e}\n",
            t,
            e_max,
            prec = precision
        ));
    }
    out
}

/// Write the per-level error trace of a whole run.
pub fn write_error_trace(path: &Path, rows: &[(Float, Float)], precision: usize) -> io::Result<()> {
    fs::write(path, error_trace_csv(rows, precision))
}

/// Monitor that records snapshots at selected levels and accumulates the
/// per-level error trace against the analytic reference.
///
/// Snapshot files are named `<prefix>results<level>iter.csv`; the trace
/// file written by [`finish`](Recorder::finish) is
/// `<prefix>maxerror_vs_time.csv`. An I/O failure interrupts the march and
/// resurfaces from `finish`.
pub struct Recorder {
    config: Config,
    x: Vec<Float>,
    dir: PathBuf,
    prefix: String,
    snapshot_levels: BTreeSet<usize>,
    precision: usize,
    trace: Vec<(Float, Float)>,
    max_error: Float,
    io_error: Option<io::Error>,
}

impl Recorder {
    pub fn new(
        config: &Config,
        dir: impl Into<PathBuf>,
        prefix: &str,
        snapshot_levels: &[usize],
        precision: usize,
    ) -> Self {
        Self {
            config: config.clone(),
            x: config.x_grid(),
            dir: dir.into(),
            prefix: prefix.to_string(),
            snapshot_levels: snapshot_levels.iter().copied().collect(),
            precision,
            trace: Vec::with_capacity(config.nt),
            max_error: 0.0,
            io_error: None,
        }
    }

    /// Running maximum of the per-level errors seen so far.
    pub fn max_error(&self) -> Float {
        self.max_error
    }

    /// Per-level error trace accumulated so far.
    pub fn trace(&self) -> &[(Float, Float)] {
        &self.trace
    }

    /// Write the error-trace file and finish the recording.
    ///
    /// Returns the overall maximum error, or the first I/O error hit
    /// during the run.
    pub fn finish(self) -> io::Result<Float> {
        if let Some(err) = self.io_error {
            return Err(err);
        }
        let path = self.dir.join(format!("{}maxerror_vs_time.csv", self.prefix));
        write_error_trace(&path, &self.trace, self.precision)?;
        Ok(self.max_error)
    }
}

impl Monitor for Recorder {
    fn on_level(&mut self, level: usize, t: Float, u: &[Float]) -> ControlFlag {
        let u_exact: Vec<Float> = self.x.iter().map(|&xi| exact(xi, t, &self.config)).collect();

        let mut e_max: Float = 0.0;
        for (ui, ei) in u.iter().zip(&u_exact) {
            let e = (ui - ei).abs();
            if e > e_max {
                e_max = e;
            }
        }
        self.trace.push((t, e_max));
        if e_max > self.max_error {
            self.max_error = e_max;
        }

        if self.snapshot_levels.contains(&level) {
            let path = self
                .dir
                .join(format!("{}results{}iter.csv", self.prefix, level));
            if let Err(err) = write_snapshot(&path, &self.x, u, &u_exact, self.precision) {
                self.io_error = Some(err);
                return ControlFlag::Interrupt;
            }
        }

        ControlFlag::Continue
    }
}
