//! Finite-difference adapter: heterogeneous diffusion stencil, Dirichlet
//! value-0 boundary, one trace row per unit of simulation time.

use std::path::Path;

use anyhow::Result;
use log::{debug, warn};

use crate::domain::{ConstantCheck, Field};
use crate::grid::tanh_diffusivity;
use crate::image::Kymograph;
use crate::params::SimulationParams;
use crate::plot;
use crate::result::SimulationResult;
use crate::sim::{prepare_output_dir, CHUNK_SIZE};
use crate::solver::fd::direct_apply;
use crate::stencil::{het_diffusion_1d, stable_dt};

pub fn solve<D: Fn(f64) -> f64>(
    params: &SimulationParams,
    diffusivity: D,
) -> Result<SimulationResult> {
    params.validate()?;
    let grid = params.grid();
    let d = grid.sample(diffusivity);

    let max_d = d.iter().fold(0.0_f64, |a, &b| a.max(b));
    let dt_bound = stable_dt(grid.dx(), max_d);
    if params.dt > dt_bound {
        warn!(
            "time step {:.3e} above the forward Euler bound {:.3e}, \
             expect an unstable solution",
            params.dt, dt_bound
        );
    }

    let stencil = het_diffusion_1d(params.dt, grid.dx(), &d);
    let bc = ConstantCheck::new(0.0, grid.points);
    let mut input = Field::new(grid.points);
    let initial_value = params.initial_value;
    input.par_set_values(|_| initial_value, CHUNK_SIZE);
    let mut output = Field::new(grid.points);

    // Both adapters bin the same number of whole unit-time intervals,
    // so their matrices always share a shape.
    let interval = params.steps_per_unit_time();
    let n_rows = params.n_steps() / interval;
    let mut rows = Vec::with_capacity(n_rows + 1);
    rows.push(input.buffer().to_vec());
    for _ in 0..n_rows {
        direct_apply(&bc, &stencil, &mut input, &mut output, interval, CHUNK_SIZE);
        rows.push(input.buffer().to_vec());
    }

    Ok(SimulationResult::from_rows(&rows))
}

pub fn run_simulation(output_root: &Path, params: &SimulationParams) -> Result<SimulationResult> {
    let output_path = prepare_output_dir(output_root, params)?;
    debug!(
        "running finite-difference simulation with output path: {}",
        output_path.display()
    );

    let res = solve(params, tanh_diffusivity)?;

    Kymograph::from_result(&res).write(output_path.join("kymograph.png"))?;

    let grid = params.grid();
    plot::plot_profile(
        &grid.cell_centers(),
        &grid.sample(tanh_diffusivity),
        &output_path.join("diffusivity_profile.png"),
    )?;

    Ok(res)
}
