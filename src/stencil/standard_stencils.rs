use crate::stencil::{Stencil, Values, VaryingStencil};

/// Constant-coefficient diffusion, forward Euler in time.
pub fn heat_1d(dt: f64, dx: f64, k: f64) -> Stencil<3> {
    Stencil::new([-1, 0, 1], move |args: &[f64; 3]| {
        let left = args[0];
        let middle = args[1];
        let right = args[2];
        middle + (k * dt / (dx * dx)) * (left - 2.0 * middle + right)
    })
}

/// Heterogeneous diffusion `∂c/∂t = ∂x(D(x) ∂x c)` in flux form with
/// face diffusivities averaged from the adjacent cells. Each cell's
/// weights sum to one, so a uniform field is a fixed point away from
/// the boundary.
pub struct HetDiffusion1d {
    offsets: [i32; 3],
    weights: Vec<Values<3>>,
}

pub fn het_diffusion_1d(dt: f64, dx: f64, diffusivity: &[f64]) -> HetDiffusion1d {
    let n = diffusivity.len();
    debug_assert!(n >= 2);
    let nu = dt / (dx * dx);
    let face = |a: usize, b: usize| 0.5 * (diffusivity[a] + diffusivity[b]);
    let mut weights = Vec::with_capacity(n);
    for i in 0..n {
        // Boundary faces clamp D to the edge cell.
        let d_left = if i == 0 {
            diffusivity[0]
        } else {
            face(i - 1, i)
        };
        let d_right = if i == n - 1 {
            diffusivity[n - 1]
        } else {
            face(i, i + 1)
        };
        weights.push(Values::<3>::from_column_slice(&[
            nu * d_left,
            1.0 - nu * (d_left + d_right),
            nu * d_right,
        ]));
    }
    HetDiffusion1d {
        offsets: [-1, 0, 1],
        weights,
    }
}

impl VaryingStencil<3> for HetDiffusion1d {
    fn weights_at(&self, cell: usize) -> Values<3> {
        self.weights[cell]
    }

    fn offsets(&self) -> &[i32; 3] {
        &self.offsets
    }
}

/// Forward Euler stability bound for the diffusion stencils.
pub fn stable_dt(dx: f64, max_diffusivity: f64) -> f64 {
    0.5 * dx * dx / max_diffusivity
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn heat_1d_weights() {
        let s = heat_1d(1.0, 1.0, 0.25);
        let w = s.weights();
        assert_approx_eq!(f64, w[0], 0.25, ulps = 2);
        assert_approx_eq!(f64, w[1], 0.5, ulps = 2);
        assert_approx_eq!(f64, w[2], 0.25, ulps = 2);
        assert_approx_eq!(f64, w.sum(), 1.0, ulps = 2);
    }

    #[test]
    fn het_weights_sum_to_one() {
        let d: Vec<f64> = (0..16).map(|i| 1.01 + ((i as f64) - 8.0).tanh()).collect();
        let s = het_diffusion_1d(0.01, 0.5, &d);
        for cell in 0..16 {
            assert_approx_eq!(f64, s.weights_at(cell).sum(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn het_with_constant_d_matches_heat() {
        let k = 0.7;
        let d = vec![k; 8];
        let het = het_diffusion_1d(0.1, 1.0, &d);
        let heat = heat_1d(0.1, 1.0, k);
        for cell in 1..7 {
            let wv = het.weights_at(cell);
            let wu = heat.weights();
            for i in 0..3 {
                assert_approx_eq!(f64, wv[i], wu[i], epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn stability_bound() {
        let dx = 10.0 / 64.0;
        let dt = stable_dt(dx, 2.01);
        assert!(2.01 * dt / (dx * dx) <= 0.5 + 1e-12);
    }
}
