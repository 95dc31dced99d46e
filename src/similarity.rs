//! Numeric similarity check between the two solvers' result matrices.

use std::fmt;

use crate::result::SimulationResult;

#[derive(Debug, Clone, Copy)]
pub struct SimilarityReport {
    pub shape_match: bool,
    pub max_abs: f64,
    pub mean_abs: f64,
    pub rms: f64,
}

impl SimilarityReport {
    /// Matrices agree when shapes match and the mean absolute
    /// difference stays under `tol`.
    pub fn within(&self, tol: f64) -> bool {
        self.shape_match && self.mean_abs <= tol
    }
}

impl fmt::Display for SimilarityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.shape_match {
            return write!(f, "similarity: result shapes differ");
        }
        write!(
            f,
            "similarity: max|Δ|={:.6e} mean|Δ|={:.6e} rms={:.6e}",
            self.max_abs, self.mean_abs, self.rms
        )
    }
}

pub fn compare(a: &SimulationResult, b: &SimulationResult) -> SimilarityReport {
    if a.n_times() != b.n_times() || a.n_points() != b.n_points() {
        return SimilarityReport {
            shape_match: false,
            max_abs: f64::INFINITY,
            mean_abs: f64::INFINITY,
            rms: f64::INFINITY,
        };
    }
    let mut max_abs: f64 = 0.0;
    let mut sum_abs = 0.0;
    let mut sum_sq = 0.0;
    for (x, y) in a.matrix.iter().zip(b.matrix.iter()) {
        let d = (x - y).abs();
        max_abs = max_abs.max(d);
        sum_abs += d;
        sum_sq += d * d;
    }
    let count = (a.n_times() * a.n_points()) as f64;
    SimilarityReport {
        shape_match: true,
        max_abs,
        mean_abs: sum_abs / count,
        rms: (sum_sq / count).sqrt(),
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn identical_matrices() {
        let a = SimulationResult::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]);
        let report = compare(&a, &a.clone());
        assert!(report.shape_match);
        assert_approx_eq!(f64, report.max_abs, 0.0);
        assert_approx_eq!(f64, report.mean_abs, 0.0);
        assert_approx_eq!(f64, report.rms, 0.0);
        assert!(report.within(0.0));
    }

    #[test]
    fn known_difference() {
        let a = SimulationResult::from_rows(&[vec![0.0, 0.0], vec![0.0, 0.0]]);
        let b = SimulationResult::from_rows(&[vec![1.0, 0.0], vec![0.0, 0.0]]);
        let report = compare(&a, &b);
        assert_approx_eq!(f64, report.max_abs, 1.0);
        assert_approx_eq!(f64, report.mean_abs, 0.25);
        assert_approx_eq!(f64, report.rms, 0.5);
        assert!(report.within(0.25));
        assert!(!report.within(0.2));
    }

    #[test]
    fn shape_mismatch() {
        let a = SimulationResult::from_rows(&[vec![0.0, 0.0]]);
        let b = SimulationResult::from_rows(&[vec![0.0, 0.0], vec![0.0, 0.0]]);
        let report = compare(&a, &b);
        assert!(!report.shape_match);
        assert!(!report.within(f64::INFINITY));
        assert_eq!(format!("{report}"), "similarity: result shapes differ");
    }
}
