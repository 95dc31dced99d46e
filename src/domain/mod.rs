//! Cell buffers and boundary lookups. Solvers work on a pair of fields,
//! swapping buffers between steps; anything outside the cell range goes
//! through a boundary check.

mod bc;
mod field;

pub use bc::*;
pub use field::*;
