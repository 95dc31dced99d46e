pub type Values<const N: usize> = nalgebra::SVector<f64, N>;

/// For linear stencils, we can extract the weight for a neighbor
/// by passing in 1.0 for that neighbor and 0.0 for the others.
pub fn extract_weights<const NEIGHBORHOOD_SIZE: usize, F: Fn(&[f64; NEIGHBORHOOD_SIZE]) -> f64>(
    f: F,
) -> Values<NEIGHBORHOOD_SIZE> {
    let mut weights = Values::zeros();
    let mut arg_buffer = [0.0; NEIGHBORHOOD_SIZE];
    for n in 0..NEIGHBORHOOD_SIZE {
        arg_buffer[n] = 1.0;
        weights[n] = f(&arg_buffer);
        arg_buffer[n] = 0.0;
    }
    weights
}

/// A linear stencil as a combination of neighbor offsets and weights.
pub struct Stencil<const NEIGHBORHOOD_SIZE: usize> {
    weights: Values<NEIGHBORHOOD_SIZE>,
    offsets: [i32; NEIGHBORHOOD_SIZE],
}

impl<const NEIGHBORHOOD_SIZE: usize> Stencil<NEIGHBORHOOD_SIZE> {
    pub fn new<F: Fn(&[f64; NEIGHBORHOOD_SIZE]) -> f64>(
        offsets: [i32; NEIGHBORHOOD_SIZE],
        operation: F,
    ) -> Self {
        let weights = extract_weights(operation);
        Stencil { weights, offsets }
    }

    pub fn weights(&self) -> &Values<NEIGHBORHOOD_SIZE> {
        &self.weights
    }

    pub fn offsets(&self) -> &[i32; NEIGHBORHOOD_SIZE] {
        &self.offsets
    }

    /// Maximum reach to the left and right of the center cell.
    pub fn slopes(&self) -> (i32, i32) {
        let mut left = 0;
        let mut right = 0;
        for neighbor in self.offsets {
            if neighbor > 0 {
                right = right.max(neighbor);
            } else {
                left = left.max(-neighbor);
            }
        }
        (left, right)
    }

    pub fn apply(&self, args: &Values<NEIGHBORHOOD_SIZE>) -> f64 {
        self.weights.component_mul(args).sum()
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn extract_weights() {
        {
            let s = Stencil::new([1], |args: &[f64; 1]| 2.0 * args[0]);
            let w = s.weights()[0];
            assert_approx_eq!(f64, w, 2.0);
        }

        {
            let s = Stencil::new([1, 2, 3], |args: &[f64; 3]| {
                2.0 * args[0] + 3.0 * args[1] + 5.0 * args[2]
            });
            let w = s.weights();
            assert_approx_eq!(f64, w[0], 2.0, ulps = 1);
            assert_approx_eq!(f64, w[1], 3.0, ulps = 1);
            assert_approx_eq!(f64, w[2], 5.0, ulps = 1);
        }
    }

    #[test]
    fn slopes() {
        {
            let s = Stencil::new([1], |args: &[f64; 1]| 2.0 * args[0]);
            assert_eq!(s.slopes(), (0, 1));
        }

        {
            let s = Stencil::new([-1], |args: &[f64; 1]| 2.0 * args[0]);
            assert_eq!(s.slopes(), (1, 0));
        }

        {
            let s = Stencil::new([-3, 0, 2], |args: &[f64; 3]| args[0] + args[1] + args[2]);
            assert_eq!(s.slopes(), (3, 2));
        }
    }

    #[test]
    fn apply() {
        let s = Stencil::new([-1, 0, 1], |args: &[f64; 3]| {
            0.25 * args[0] + 0.5 * args[1] + 0.25 * args[2]
        });
        let args = Values::<3>::from_column_slice(&[1.0, 2.0, 3.0]);
        assert_approx_eq!(f64, s.apply(&args), 2.0, ulps = 2);
    }
}
