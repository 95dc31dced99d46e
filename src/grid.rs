//! Cell-centered 1-D grid.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    pub min: f64,
    pub max: f64,
    pub points: usize,
}

impl Grid {
    pub fn new(bounds: (f64, f64), points: usize) -> Self {
        debug_assert!(bounds.1 > bounds.0);
        debug_assert!(points >= 2);
        Grid {
            min: bounds.0,
            max: bounds.1,
            points,
        }
    }

    pub fn dx(&self) -> f64 {
        (self.max - self.min) / self.points as f64
    }

    /// Center of cell `i`, so the first center sits half a cell in
    /// from the lower bound.
    pub fn cell_center(&self, i: usize) -> f64 {
        debug_assert!(i < self.points);
        self.min + (i as f64 + 0.5) * self.dx()
    }

    pub fn cell_centers(&self) -> Vec<f64> {
        (0..self.points).map(|i| self.cell_center(i)).collect()
    }

    /// Sample a function of space at every cell center.
    pub fn sample<F: Fn(f64) -> f64>(&self, f: F) -> Vec<f64> {
        (0..self.points).map(|i| f(self.cell_center(i))).collect()
    }
}

/// The heterogeneous diffusivity profile under study.
/// Strictly positive and monotone, ranging over (0.01, 2.01).
pub fn tanh_diffusivity(x: f64) -> f64 {
    1.01 + x.tanh()
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn cell_centers() {
        let grid = Grid::new((-5.0, 5.0), 10);
        assert_approx_eq!(f64, grid.dx(), 1.0);
        assert_approx_eq!(f64, grid.cell_center(0), -4.5);
        assert_approx_eq!(f64, grid.cell_center(9), 4.5);
        let centers = grid.cell_centers();
        assert_eq!(centers.len(), 10);
        // symmetric about the origin
        for i in 0..10 {
            assert_approx_eq!(f64, centers[i], -centers[9 - i], ulps = 2);
        }
    }

    #[test]
    fn sample_profile() {
        let grid = Grid::new((-5.0, 5.0), 64);
        let d = grid.sample(tanh_diffusivity);
        assert_eq!(d.len(), 64);
        for w in d.windows(2) {
            assert!(w[0] < w[1]);
        }
        assert!(d.iter().all(|&v| v > 0.0 && v < 2.01));
    }
}
