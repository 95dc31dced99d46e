//! Kymograph raster: one image line per time row, TURBO gradient.

use std::path::Path;

use anyhow::{Context, Result};

use crate::result::SimulationResult;

pub struct Kymograph {
    img_buffer: image::RgbImage,
    scale: f64,
}

impl Kymograph {
    /// `max_value` maps to the top of the gradient; values are clamped
    /// into the unit range.
    pub fn new(width: u32, lines: u32, max_value: f64) -> Self {
        Kymograph {
            img_buffer: image::RgbImage::new(width, lines),
            scale: if max_value > 0.0 { max_value } else { 1.0 },
        }
    }

    pub fn add_line(&mut self, l: u32, v: &[f64]) {
        debug_assert!(l < self.img_buffer.height());
        debug_assert_eq!(v.len(), self.img_buffer.width() as usize);
        let gradient = colorous::TURBO;
        for x in 0..self.img_buffer.width() {
            let r = (v[x as usize] / self.scale).clamp(0.0, 1.0);
            let c = gradient.eval_continuous(r);
            self.img_buffer.put_pixel(x, l, image::Rgb(c.as_array()));
        }
    }

    pub fn from_result(result: &SimulationResult) -> Self {
        let mut img = Kymograph::new(
            result.n_points() as u32,
            result.n_times() as u32,
            result.max_value(),
        );
        for t in 0..result.n_times() {
            img.add_line(t as u32, &result.row(t));
        }
        img
    }

    pub fn write<P: AsRef<Path>>(self, path: P) -> Result<()> {
        self.img_buffer
            .save(path.as_ref())
            .with_context(|| format!("couldn't save kymograph to {}", path.as_ref().display()))
    }
}
