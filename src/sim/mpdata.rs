//! MPDATA adapter: zero physical advector, heterogeneous diffusivity as
//! pseudo-velocity, per-step trace resampled to unit time bins.

use std::path::Path;

use anyhow::Result;
use log::{info, warn};

use crate::grid::tanh_diffusivity;
use crate::image::Kymograph;
use crate::params::SimulationParams;
use crate::plot;
use crate::result::{resample_unit_time, SimulationResult};
use crate::sim::prepare_output_dir;
use crate::solver::mpdata::{Boundary, MpdataSolver, Options};
use crate::stencil::stable_dt;

pub fn solve<D: Fn(f64) -> f64>(
    params: &SimulationParams,
    diffusivity: D,
    options: &Options,
) -> Result<SimulationResult> {
    params.validate()?;
    let grid = params.grid();
    let dx = grid.dx();
    let d = grid.sample(diffusivity);

    let c0 = vec![params.initial_value; grid.points];
    let advector = vec![0.0; grid.points + 1];
    let mut solver = MpdataSolver::new(*options, &c0, &advector, &d, Boundary::Constant(0.0))?;

    // mu·D(x) is the dimensionless diffusion number of the physical
    // equation, so both solvers integrate the same problem.
    let mu_coeff = params.dt / (dx * dx);
    let n_steps = params.n_steps();

    // The pseudo-velocity is bounded by 2·mu·D, so the Courant condition
    // |C| ≤ 1 reduces to the same time step bound the stencil solver has.
    let max_d = d.iter().fold(0.0_f64, |a, &b| a.max(b));
    let dt_bound = stable_dt(dx, max_d);
    if params.dt > dt_bound {
        warn!(
            "time step {:.3e} above the Courant bound {:.3e} for the \
             diffusive pseudo-velocity, expect an unstable solution",
            params.dt, dt_bound
        );
    }

    let mut snapshots = Vec::with_capacity(n_steps + 1);
    snapshots.push(solver.advectee().to_vec());
    solver.advance(n_steps, mu_coeff, |step, state| {
        if step % 10_000 == 0 {
            info!("at step {}/{}", step, n_steps);
        }
        snapshots.push(state.to_vec());
    });

    let initial_mass: f64 = snapshots[0].iter().sum();
    let final_mass: f64 = snapshots[n_steps].iter().sum();
    info!(
        "mass conservation: initial={:.6}, final={:.6}",
        initial_mass, final_mass
    );

    Ok(resample_unit_time(
        &snapshots,
        params.steps_per_unit_time(),
    ))
}

pub fn run_simulation(output_root: &Path, params: &SimulationParams) -> Result<SimulationResult> {
    let output_path = prepare_output_dir(output_root, params)?;
    info!(
        "running MPDATA simulation with output path: {}",
        output_path.display()
    );

    let options = Options {
        n_iters: 10,
        ..Options::default()
    };
    let res = solve(params, tanh_diffusivity, &options)?;

    Kymograph::from_result(&res).write(output_path.join("kymograph.png"))?;

    let grid = params.grid();
    let x = grid.cell_centers();
    plot::plot_profile(
        &x,
        &grid.sample(tanh_diffusivity),
        &output_path.join("diffusivity_profile.png"),
    )?;
    plot::plot_initial_vs_final(
        &x,
        &res.initial(),
        &res.last(),
        &output_path.join("initial_vs_final.png"),
    )?;

    Ok(res)
}
