//! Simulation parameter record. Doubles as solver configuration and as
//! the cache key for per-run output directories.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use crate::grid::Grid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationParams {
    pub sim_name: String,
    pub grid_bounds: (f64, f64),
    pub grid_points: usize,
    pub initial_value: f64,
    pub sim_time: f64,
    pub dt: f64,
}

impl SimulationParams {
    pub fn grid(&self) -> Grid {
        Grid::new(self.grid_bounds, self.grid_points)
    }

    pub fn n_steps(&self) -> usize {
        (self.sim_time / self.dt).round() as usize
    }

    /// Steps per unit of simulation time, the tracker interval shared by
    /// both solver adapters.
    pub fn steps_per_unit_time(&self) -> usize {
        (1.0 / self.dt).round() as usize
    }

    pub fn validate(&self) -> Result<()> {
        let (min, max) = self.grid_bounds;
        if !(max > min) {
            return Err(anyhow!(
                "grid bounds must be increasing (min={}, max={})",
                min,
                max
            ));
        }
        if self.grid_points < 2 {
            return Err(anyhow!(
                "need at least 2 grid points (got {})",
                self.grid_points
            ));
        }
        if !(self.dt > 0.0) || !(self.sim_time > 0.0) {
            return Err(anyhow!(
                "time step and duration must be positive (dt={}, sim_time={})",
                self.dt,
                self.sim_time
            ));
        }
        if self.dt > self.sim_time {
            return Err(anyhow!(
                "time step {} exceeds simulation duration {}",
                self.dt,
                self.sim_time
            ));
        }
        // Snapshots are binned per unit of simulation time.
        if self.dt > 1.0 {
            return Err(anyhow!(
                "time step {} exceeds the unit tracker interval",
                self.dt
            ));
        }
        Ok(())
    }

    /// Fold every field into a hash. Floats go in by bit pattern, so any
    /// parameter change lands in a different output directory while a
    /// repeat run maps back to the same one.
    fn args_hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.sim_name.hash(&mut hasher);
        self.grid_bounds.0.to_bits().hash(&mut hasher);
        self.grid_bounds.1.to_bits().hash(&mut hasher);
        self.grid_points.hash(&mut hasher);
        self.initial_value.to_bits().hash(&mut hasher);
        self.sim_time.to_bits().hash(&mut hasher);
        self.dt.to_bits().hash(&mut hasher);
        hasher.finish()
    }

    /// Output directory for this parameter set under `root`.
    pub fn sim_output_path(&self, root: &Path) -> PathBuf {
        root.join(self.args_hash().to_string())
    }
}
