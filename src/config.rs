//! Grid and physical configuration for a diffusion run.

use bon::Builder;

use crate::{Error, Float};

/// Configuration for a diffusion run.
///
/// The spatial domain is `[-half_width, half_width]` discretized with `nx`
/// nodes, the time interval is `[0, t_max]` with `nt` levels. Defaults:
/// diffusion coefficient D = 1, half-width a = 6 (about 6 sqrt(D t_max),
/// wide enough that the far boundary stays near zero), boundary steepness
/// b = 0.1, final time t_max = 1.
#[derive(Builder, Clone, Debug)]
pub struct Config {
    /// Number of spatial grid nodes (including both boundary nodes).
    pub nx: usize,
    /// Number of time levels (including the initial level).
    pub nt: usize,
    /// Diffusion coefficient D.
    #[builder(default = 1.0)]
    pub diffusion: Float,
    /// Half-width a of the spatial domain `[-a, a]`.
    #[builder(default = 6.0)]
    pub half_width: Float,
    /// Steepness parameter b of the initial profile `exp(-x/b)`.
    #[builder(default = 0.1)]
    pub steepness: Float,
    /// Final simulation time.
    #[builder(default = 1.0)]
    pub t_max: Float,
}

impl Config {
    /// Check the grid sizes and physical constants.
    ///
    /// Degenerate grids would otherwise divide by zero when deriving the
    /// steps; better to fail loudly here.
    pub fn validate(&self) -> Result<(), Error> {
        if self.nx < 3 {
            return Err(Error::TooFewSpatialNodes(self.nx));
        }
        if self.nt < 2 {
            return Err(Error::TooFewTimeNodes(self.nt));
        }
        if !(self.diffusion > 0.0) {
            return Err(Error::NonPositiveDiffusion(self.diffusion));
        }
        if !(self.half_width > 0.0) {
            return Err(Error::NonPositiveHalfWidth(self.half_width));
        }
        if !(self.steepness > 0.0) {
            return Err(Error::NonPositiveSteepness(self.steepness));
        }
        if !(self.t_max > 0.0) {
            return Err(Error::NonPositiveFinalTime(self.t_max));
        }
        Ok(())
    }

    /// Spatial grid spacing h = 2a / (nx - 1).
    pub fn dx(&self) -> Float {
        2.0 * self.half_width / (self.nx - 1) as Float
    }

    /// Time step dt = t_max / (nt - 1).
    pub fn dt(&self) -> Float {
        self.t_max / (self.nt - 1) as Float
    }

    /// Stability parameter lambda = D dt / h^2.
    ///
    /// The explicit scheme is stable only for lambda <= 0.5; the implicit
    /// scheme has no such restriction and is usually run near lambda = 1.
    pub fn lambda(&self) -> Float {
        self.diffusion * self.dt() / (self.dx() * self.dx())
    }

    /// Spatial node coordinates `x_i = -a + i h`.
    pub fn x_grid(&self) -> Vec<Float> {
        let h = self.dx();
        (0..self.nx)
            .map(|i| -self.half_width + i as Float * h)
            .collect()
    }

    /// Time level coordinates `t_j = j dt`.
    pub fn t_grid(&self) -> Vec<Float> {
        let dt = self.dt();
        (0..self.nt).map(|j| j as Float * dt).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_quantities() {
        let cfg = Config::builder().nx(241).nt(1001).build();
        assert!((cfg.dx() - 0.05).abs() < 1e-12);
        assert!((cfg.dt() - 0.001).abs() < 1e-12);
        assert!((cfg.lambda() - 0.4).abs() < 1e-12);
        cfg.validate().unwrap();
    }

    #[test]
    fn grids_span_the_domain() {
        let cfg = Config::builder().nx(5).nt(3).build();
        let x = cfg.x_grid();
        assert_eq!(x.len(), 5);
        assert!((x[0] + 6.0).abs() < 1e-12);
        assert!((x[4] - 6.0).abs() < 1e-12);
        let t = cfg.t_grid();
        assert!((t[0]).abs() < 1e-12);
        assert!((t[2] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn degenerate_grids_are_rejected() {
        let cfg = Config::builder().nx(2).nt(10).build();
        assert_eq!(cfg.validate(), Err(Error::TooFewSpatialNodes(2)));
        let cfg = Config::builder().nx(10).nt(1).build();
        assert_eq!(cfg.validate(), Err(Error::TooFewTimeNodes(1)));
        let cfg = Config::builder().nx(10).nt(10).diffusion(0.0).build();
        assert_eq!(cfg.validate(), Err(Error::NonPositiveDiffusion(0.0)));
    }
}
