//! Linear 1-D stencils: neighbor offsets plus weights. Heterogeneous
//! coefficients enter through [`VaryingStencil`] with per-cell weights.

mod standard_stencils;
#[allow(clippy::module_inception)]
mod stencil;
mod varying;

pub use standard_stencils::*;
pub use stencil::*;
pub use varying::*;
