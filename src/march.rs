//! Time marching driver: owns the double-buffered state and repeatedly
//! applies the chosen scheme.

use crate::analytic::initial_condition;
use crate::monitor::{ControlFlag, Monitor, NoMonitor};
use crate::step::{ftcs_step, laasonen_lu_step, laasonen_thomas_step, Scheme};
use crate::{Config, Error, Float, Status};

/// Which of the two owned buffers currently holds the solution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Slot {
    A,
    B,
}

/// Two owned state buffers with an explicit role flag.
///
/// Each step reads the current buffer and writes the other; afterwards the
/// flag flips. Ownership of the roles is exchanged, the elements never
/// are, which keeps the cost per level independent of the grid size.
#[derive(Debug)]
struct StatePair {
    a: Vec<Float>,
    b: Vec<Float>,
    current: Slot,
}

impl StatePair {
    fn new(initial: Vec<Float>) -> Self {
        let scratch = vec![0.0; initial.len()];
        Self {
            a: initial,
            b: scratch,
            current: Slot::A,
        }
    }

    fn current(&self) -> &[Float] {
        match self.current {
            Slot::A => &self.a,
            Slot::B => &self.b,
        }
    }

    /// Borrow the previous level read-only and the next level writable.
    /// The two slices are disjoint buffers; no aliasing inside a step.
    fn roles_mut(&mut self) -> (&[Float], &mut [Float]) {
        match self.current {
            Slot::A => (&self.a, &mut self.b),
            Slot::B => (&self.b, &mut self.a),
        }
    }

    fn swap_roles(&mut self) {
        self.current = match self.current {
            Slot::A => Slot::B,
            Slot::B => Slot::A,
        };
    }
}

/// The outcome of a completed (or interrupted) march.
#[derive(Clone, Debug)]
pub struct March {
    /// Time coordinate of the last computed level.
    pub t: Float,
    /// State vector at the last computed level.
    pub u: Vec<Float>,
    /// Number of time levels visited, the initial one included.
    pub nlevel: usize,
    /// Number of linear systems solved (zero for the explicit scheme).
    pub nsolve: usize,
    /// How the march ended.
    pub status: Status,
}

/// Drives one scheme across the whole time grid.
///
/// Construction validates the configuration, precomputes the grids, and
/// applies the initial profile; [`run`](TimeMarcher::run) then walks all
/// `nt` time levels. The marcher owns its state buffers for the duration
/// of the run, while per-step scratch (diagonals or the dense matrix)
/// stays inside the steppers and is released at step end.
#[derive(Debug)]
pub struct TimeMarcher {
    config: Config,
    scheme: Scheme,
    lambda: Float,
    t: Vec<Float>,
    states: StatePair,
}

impl TimeMarcher {
    pub fn new(config: Config, scheme: Scheme) -> Result<Self, Error> {
        config.validate()?;
        let u0: Vec<Float> = config
            .x_grid()
            .iter()
            .map(|&xi| initial_condition(xi, config.steepness))
            .collect();
        let lambda = config.lambda();
        let t = config.t_grid();
        Ok(Self {
            config,
            scheme,
            lambda,
            t,
            states: StatePair::new(u0),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn lambda(&self) -> Float {
        self.lambda
    }

    /// March to the final time level without observing the run.
    pub fn run(self) -> Result<March, Error> {
        self.run_with(&mut NoMonitor)
    }

    /// March to the final time level, invoking `monitor` at every level.
    ///
    /// The monitor sees each level before the step that leaves it,
    /// including level 0 (the initial condition) and the final level. A
    /// singular-matrix failure from the dense path aborts the march and
    /// propagates.
    pub fn run_with<M: Monitor>(mut self, monitor: &mut M) -> Result<March, Error> {
        let nt = self.config.nt;
        let mut nsolve = 0;
        let mut status = Status::Success;
        let mut level = 0;

        loop {
            let flag = monitor.on_level(level, self.t[level], self.states.current());
            if flag == ControlFlag::Interrupt {
                status = Status::Interrupted;
                break;
            }
            if level + 1 == nt {
                break;
            }

            let (u_prev, u_next) = self.states.roles_mut();
            match self.scheme {
                Scheme::Ftcs => ftcs_step(u_prev, u_next, self.lambda),
                Scheme::LaasonenThomas => {
                    laasonen_thomas_step(u_prev, u_next, self.lambda);
                    nsolve += 1;
                }
                Scheme::LaasonenLu => {
                    laasonen_lu_step(u_prev, u_next, self.lambda)?;
                    nsolve += 1;
                }
            }
            self.states.swap_roles();
            level += 1;
        }

        Ok(March {
            t: self.t[level],
            u: self.states.current().to_vec(),
            nlevel: level + 1,
            nsolve,
            status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytic::max_error;

    fn small_config() -> Config {
        Config::builder().nx(121).nt(201).build()
    }

    #[test]
    fn swap_exchanges_roles_without_copying() {
        let mut pair = StatePair::new(vec![1.0, 2.0, 3.0]);
        let ptr_a = pair.a.as_ptr();
        let ptr_b = pair.b.as_ptr();
        assert_eq!(pair.current().as_ptr(), ptr_a);
        pair.swap_roles();
        assert_eq!(pair.current().as_ptr(), ptr_b);
        pair.swap_roles();
        assert_eq!(pair.current().as_ptr(), ptr_a);
    }

    #[test]
    fn roles_are_disjoint_buffers() {
        let mut pair = StatePair::new(vec![1.0; 4]);
        let (prev, next) = pair.roles_mut();
        assert_ne!(prev.as_ptr(), next.as_ptr());
    }

    #[test]
    fn marcher_visits_every_level() {
        let marcher = TimeMarcher::new(small_config(), Scheme::LaasonenThomas).unwrap();
        let march = marcher.run().unwrap();
        assert_eq!(march.status, Status::Success);
        assert_eq!(march.nlevel, 201);
        assert_eq!(march.nsolve, 200);
        assert!((march.t - 1.0).abs() < 1e-12);
    }

    #[test]
    fn explicit_scheme_solves_no_systems() {
        // lambda = D dt / h^2 stays under 0.5 for this grid.
        let cfg = Config::builder().nx(41).nt(2001).build();
        assert!(cfg.lambda() < 0.5);
        let march = TimeMarcher::new(cfg, Scheme::Ftcs).unwrap().run().unwrap();
        assert_eq!(march.nsolve, 0);
        assert_eq!(march.nlevel, 2001);
    }

    #[test]
    fn monitor_sees_initial_and_final_levels() {
        struct Levels(Vec<usize>);
        impl Monitor for Levels {
            fn on_level(&mut self, level: usize, _t: Float, _u: &[Float]) -> ControlFlag {
                self.0.push(level);
                ControlFlag::Continue
            }
        }

        let cfg = Config::builder().nx(5).nt(4).build();
        let mut levels = Levels(Vec::new());
        TimeMarcher::new(cfg, Scheme::LaasonenThomas)
            .unwrap()
            .run_with(&mut levels)
            .unwrap();
        assert_eq!(levels.0, vec![0, 1, 2, 3]);
    }

    #[test]
    fn monitor_can_interrupt() {
        struct StopAt(usize);
        impl Monitor for StopAt {
            fn on_level(&mut self, level: usize, _t: Float, _u: &[Float]) -> ControlFlag {
                if level >= self.0 {
                    ControlFlag::Interrupt
                } else {
                    ControlFlag::Continue
                }
            }
        }

        let march = TimeMarcher::new(small_config(), Scheme::Ftcs)
            .unwrap()
            .run_with(&mut StopAt(10))
            .unwrap();
        assert_eq!(march.status, Status::Interrupted);
        assert_eq!(march.nlevel, 11);
    }

    #[test]
    fn implicit_run_tracks_the_analytic_solution() {
        let cfg = small_config();
        let x = cfg.x_grid();
        let march = TimeMarcher::new(cfg.clone(), Scheme::LaasonenThomas)
            .unwrap()
            .run()
            .unwrap();
        let err = max_error(&march.u, &x, march.t, &cfg);
        // Coarse grid, so the bound is loose; it still rules out a wrong
        // assembly or a sign error, which blow up by orders of magnitude.
        assert!(err < 0.02, "max error {} too large", err);
    }

    #[test]
    fn invalid_config_is_rejected_at_construction() {
        let cfg = Config::builder().nx(2).nt(10).build();
        assert!(matches!(
            TimeMarcher::new(cfg, Scheme::Ftcs),
            Err(Error::TooFewSpatialNodes(2))
        ));
    }
}
