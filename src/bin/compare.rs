use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;
use log::info;

use hetdiff::params::SimulationParams;
use hetdiff::sim;
use hetdiff::similarity;

/// Run the finite-difference and MPDATA solvers on the same 1-D
/// heterogeneous diffusion problem and check their result matrices
/// against each other.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory the per-run artifact directories land in
    #[arg(short, long, default_value = "sim_output")]
    output_dir: PathBuf,

    #[arg(long, default_value_t = -5.0)]
    x_min: f64,

    #[arg(long, default_value_t = 5.0)]
    x_max: f64,

    #[arg(long, default_value_t = 64)]
    grid_points: usize,

    #[arg(long, default_value_t = 1.0)]
    initial_value: f64,

    #[arg(long, default_value_t = 100.0)]
    sim_time: f64,

    #[arg(long, default_value_t = 1e-3)]
    dt: f64,

    /// Accepted mean absolute difference between the two result matrices
    #[arg(long, default_value_t = 0.1)]
    tolerance: f64,
}

impl Args {
    fn params(&self, sim_name: &str) -> SimulationParams {
        SimulationParams {
            sim_name: sim_name.to_string(),
            grid_bounds: (self.x_min, self.x_max),
            grid_points: self.grid_points,
            initial_value: self.initial_value,
            sim_time: self.sim_time,
            dt: self.dt,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    std::fs::create_dir_all(&args.output_dir)?;

    let fd_res = sim::fd::run_simulation(&args.output_dir, &args.params("fd_sim"))?;
    let mpdata_res = sim::mpdata::run_simulation(&args.output_dir, &args.params("mpdata_sim"))?;

    let report = similarity::compare(&fd_res, &mpdata_res);
    info!("{report}");
    println!("{report}");

    if !report.within(args.tolerance) {
        bail!(
            "solvers disagree: mean |Δ| {:.6e} over tolerance {:.6e}",
            report.mean_abs,
            args.tolerance
        );
    }
    Ok(())
}
