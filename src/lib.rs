//! Compare two numerical methods on 1-D heterogeneous diffusion:
//! a finite-difference stencil solver and an MPDATA advection-diffusion
//! solver. Both are driven from the same [`params::SimulationParams`]
//! record and reshaped into a common time-by-space matrix for comparison
//! and kymograph plotting.

pub mod domain;
pub mod grid;
pub mod image;
pub mod params;
pub mod plot;
pub mod result;
pub mod sim;
pub mod similarity;
pub mod solver;
pub mod stencil;
