//! The two numerical cores: a direct finite-difference stencil solver
//! and an MPDATA advection-diffusion solver.

pub mod fd;
pub mod mpdata;
