//! Solver adapters. Each exposes a pure `solve` returning the result
//! matrix and a `run_simulation` that also creates the hash-named output
//! directory and writes the plot artifacts into it.

pub mod fd;
pub mod mpdata;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::params::SimulationParams;

/// Default chunk handed to one rayon task in the stencil solver.
pub const CHUNK_SIZE: usize = 128;

/// Create the per-parameter-set output directory and drop a provenance
/// record of the parameters into it.
pub fn prepare_output_dir(output_root: &Path, params: &SimulationParams) -> Result<PathBuf> {
    let output_path = params.sim_output_path(output_root);
    fs::create_dir_all(&output_path)
        .with_context(|| format!("couldn't create {}", output_path.display()))?;
    let params_json = serde_json::to_string_pretty(params)?;
    fs::write(output_path.join("params.json"), params_json)
        .with_context(|| format!("couldn't write params.json in {}", output_path.display()))?;
    Ok(output_path)
}
