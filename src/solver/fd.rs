//! Direct stencil application, parallelized over output chunks.

use rayon::prelude::*;

use crate::domain::{BcCheck, Field, PeriodicCheck};
use crate::stencil::{Values, VaryingStencil};

/// Apply one stencil step, writing into `output`. Neighbor lookups that
/// leave the domain are answered by the boundary check.
pub fn apply<BC, S, const NEIGHBORHOOD_SIZE: usize>(
    bc: &BC,
    stencil: &S,
    input: &Field,
    output: &mut Field,
    chunk_size: usize,
) where
    BC: BcCheck,
    S: VaryingStencil<NEIGHBORHOOD_SIZE>,
{
    debug_assert_eq!(input.len(), output.len());
    output.par_modify_access(chunk_size).for_each(|mut chunk| {
        chunk.coord_iter_mut().for_each(|(cell, value_mut)| {
            let mut args = Values::<NEIGHBORHOOD_SIZE>::zeros();
            for (n, offset) in stencil.offsets().iter().enumerate() {
                let neighbor = cell as i32 + offset;
                args[n] = bc
                    .check(neighbor)
                    .unwrap_or_else(|| input.view(neighbor));
            }
            *value_mut = stencil.apply_at(cell, &args);
        })
    });
}

/// March `steps` stencil applications, swapping buffers each step.
/// The result ends up in `input`.
pub fn direct_apply<BC, S, const NEIGHBORHOOD_SIZE: usize>(
    bc: &BC,
    stencil: &S,
    input: &mut Field,
    output: &mut Field,
    steps: usize,
    chunk_size: usize,
) where
    BC: BcCheck,
    S: VaryingStencil<NEIGHBORHOOD_SIZE>,
{
    for _ in 0..steps {
        apply(bc, stencil, input, output, chunk_size);
        std::mem::swap(input, output);
    }
}

/// [`direct_apply`] under wraparound boundaries. The periodic check
/// borrows the current input, so it is rebuilt after every swap.
pub fn direct_periodic_apply<S, const NEIGHBORHOOD_SIZE: usize>(
    stencil: &S,
    input: &mut Field,
    output: &mut Field,
    steps: usize,
    chunk_size: usize,
) where
    S: VaryingStencil<NEIGHBORHOOD_SIZE>,
{
    for _ in 0..steps {
        {
            let bc = PeriodicCheck::new(input);
            apply(&bc, stencil, input, output, chunk_size);
        }
        std::mem::swap(input, output);
    }
}
