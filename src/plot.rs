//! Line plots (diffusivity profile, initial vs final state) via
//! plotters. Rendered without text so the bitmap backend stays free of
//! any system font stack.

use std::path::Path;

use anyhow::Result;
use plotters::prelude::*;

fn padded_range(series: &[&[f64]]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for s in series {
        for &v in *s {
            min = min.min(v);
            max = max.max(v);
        }
    }
    let span = (max - min).max(1e-9);
    (min - 0.05 * span, max + 0.05 * span)
}

/// A single profile over the grid, e.g. D(x).
pub fn plot_profile(x: &[f64], y: &[f64], path: &Path) -> Result<()> {
    debug_assert_eq!(x.len(), y.len());
    let root = BitMapBackend::new(path, (1000, 600)).into_drawing_area();
    root.fill(&WHITE)?;
    let (y_min, y_max) = padded_range(&[y]);
    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .build_cartesian_2d(x[0]..x[x.len() - 1], y_min..y_max)?;
    chart.draw_series(LineSeries::new(
        x.iter().zip(y).map(|(&a, &b)| (a, b)),
        BLUE.stroke_width(2),
    ))?;
    root.present()?;
    Ok(())
}

/// First and last trace rows overlaid: black for t=0, red for the end.
pub fn plot_initial_vs_final(x: &[f64], initial: &[f64], last: &[f64], path: &Path) -> Result<()> {
    debug_assert_eq!(x.len(), initial.len());
    debug_assert_eq!(x.len(), last.len());
    let root = BitMapBackend::new(path, (1000, 600)).into_drawing_area();
    root.fill(&WHITE)?;
    let (y_min, y_max) = padded_range(&[initial, last]);
    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .build_cartesian_2d(x[0]..x[x.len() - 1], y_min..y_max)?;
    chart.draw_series(LineSeries::new(
        x.iter().zip(initial).map(|(&a, &b)| (a, b)),
        &BLACK,
    ))?;
    chart.draw_series(LineSeries::new(
        x.iter().zip(last).map(|(&a, &b)| (a, b)),
        RED.stroke_width(2),
    ))?;
    root.present()?;
    Ok(())
}
