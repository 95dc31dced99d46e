//! Common time-by-space matrix representation both solvers reduce to.

use nalgebra::DMatrix;

/// A simulation trace on the shared sampling grid: one row per unit of
/// simulation time (initial state included), one column per grid cell.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    pub matrix: DMatrix<f64>,
}

impl SimulationResult {
    pub fn from_rows(rows: &[Vec<f64>]) -> Self {
        debug_assert!(!rows.is_empty());
        let n_points = rows[0].len();
        debug_assert!(rows.iter().all(|r| r.len() == n_points));
        let matrix = DMatrix::from_fn(rows.len(), n_points, |t, x| rows[t][x]);
        SimulationResult { matrix }
    }

    pub fn n_times(&self) -> usize {
        self.matrix.nrows()
    }

    pub fn n_points(&self) -> usize {
        self.matrix.ncols()
    }

    pub fn row(&self, t: usize) -> Vec<f64> {
        self.matrix.row(t).iter().copied().collect()
    }

    pub fn initial(&self) -> Vec<f64> {
        self.row(0)
    }

    pub fn last(&self) -> Vec<f64> {
        self.row(self.n_times() - 1)
    }

    pub fn total_mass(&self, t: usize) -> f64 {
        self.matrix.row(t).sum()
    }

    pub fn max_value(&self) -> f64 {
        self.matrix.iter().fold(f64::MIN, |a, &b| a.max(b))
    }
}

/// Down-sample a per-step trace (initial snapshot first) to one row per
/// `interval` steps, taking the midpoint snapshot of each bin and keeping
/// the initial row. Trailing steps short of a full bin are dropped.
pub fn resample_unit_time(snapshots: &[Vec<f64>], interval: usize) -> SimulationResult {
    debug_assert!(interval >= 1);
    debug_assert!(!snapshots.is_empty());
    let n_bins = (snapshots.len() - 1) / interval;
    let mut rows = Vec::with_capacity(n_bins + 1);
    rows.push(snapshots[0].clone());
    for i in 0..n_bins {
        let bin = &snapshots[i * interval + 1..i * interval + 1 + interval];
        rows.push(bin[bin.len() / 2].clone());
    }
    SimulationResult::from_rows(&rows)
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn from_rows_shape() {
        let res = SimulationResult::from_rows(&[vec![0.0, 1.0], vec![2.0, 3.0], vec![4.0, 5.0]]);
        assert_eq!(res.n_times(), 3);
        assert_eq!(res.n_points(), 2);
        assert_approx_eq!(f64, res.matrix[(1, 0)], 2.0);
        assert_approx_eq!(f64, res.matrix[(2, 1)], 5.0);
        assert_eq!(res.initial(), vec![0.0, 1.0]);
        assert_eq!(res.last(), vec![4.0, 5.0]);
        assert_approx_eq!(f64, res.total_mass(1), 5.0);
        assert_approx_eq!(f64, res.max_value(), 5.0);
    }

    #[test]
    fn resample_takes_bin_midpoints() {
        // 8 steps after the initial snapshot, binned by 4:
        // bin 0 holds steps 1..=4 (midpoint step 3),
        // bin 1 holds steps 5..=8 (midpoint step 7).
        let snapshots: Vec<Vec<f64>> = (0..=8).map(|k| vec![k as f64]).collect();
        let res = resample_unit_time(&snapshots, 4);
        assert_eq!(res.n_times(), 3);
        assert_approx_eq!(f64, res.matrix[(0, 0)], 0.0);
        assert_approx_eq!(f64, res.matrix[(1, 0)], 3.0);
        assert_approx_eq!(f64, res.matrix[(2, 0)], 7.0);
    }

    #[test]
    fn resample_drops_partial_bin() {
        let snapshots: Vec<Vec<f64>> = (0..=10).map(|k| vec![k as f64]).collect();
        let res = resample_unit_time(&snapshots, 4);
        assert_eq!(res.n_times(), 3);
    }

    #[test]
    fn resample_interval_one() {
        let snapshots: Vec<Vec<f64>> = (0..=3).map(|k| vec![k as f64]).collect();
        let res = resample_unit_time(&snapshots, 1);
        assert_eq!(res.n_times(), 4);
        for k in 0..4 {
            assert_approx_eq!(f64, res.matrix[(k, 0)], k as f64);
        }
    }
}
