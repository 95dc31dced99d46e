use crate::stencil::{Stencil, Values};

/// Stencil whose weights vary per cell. Heterogeneous coefficients like
/// D(x) need this; a uniform [`Stencil`] is the degenerate case.
pub trait VaryingStencil<const NEIGHBORHOOD_SIZE: usize>: Sync {
    fn weights_at(&self, cell: usize) -> Values<NEIGHBORHOOD_SIZE>;

    fn offsets(&self) -> &[i32; NEIGHBORHOOD_SIZE];

    fn apply_at(&self, cell: usize, args: &Values<NEIGHBORHOOD_SIZE>) -> f64 {
        self.weights_at(cell).component_mul(args).sum()
    }
}

impl<const NEIGHBORHOOD_SIZE: usize> VaryingStencil<NEIGHBORHOOD_SIZE>
    for Stencil<NEIGHBORHOOD_SIZE>
{
    fn weights_at(&self, _cell: usize) -> Values<NEIGHBORHOOD_SIZE> {
        *self.weights()
    }

    fn offsets(&self) -> &[i32; NEIGHBORHOOD_SIZE] {
        self.offsets()
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn uniform_stencil_is_varying() {
        let s = Stencil::new([-1, 0, 1], |args: &[f64; 3]| {
            0.1 * args[0] + 0.8 * args[1] + 0.1 * args[2]
        });
        for cell in [0, 5, 99] {
            let w = s.weights_at(cell);
            assert_approx_eq!(f64, w[0], 0.1, ulps = 2);
            assert_approx_eq!(f64, w[1], 0.8, ulps = 2);
            assert_approx_eq!(f64, w[2], 0.1, ulps = 2);
        }
    }
}
