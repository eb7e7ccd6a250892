//! Rasterizer: samples the film plane and turns brightness into glyphs
//!
//! Rows come out top to bottom, each glyph followed by a space. The parallel
//! path shades rows on the rayon pool and collects them in order, so both
//! paths produce identical bytes.

use crate::config::{ConfigError, RenderConfig};
use crate::scene::Scene;
use rayon::prelude::*;
use std::io::Write;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Map a brightness on the `[0, 255]` scale to a ramp glyph
pub fn glyph(br: f64) -> char {
    let ramp = crate::DENSITY_RAMP.as_bytes();
    // NaN and negative values saturate to 0 in the cast
    let index = (((255.0 - br) / 4.0).floor() as usize).min(ramp.len() - 1);
    ramp[index] as char
}

/// ASCII renderer for the mirror-ball scene
pub struct Renderer {
    width: usize,
    height: usize,
    pixel_size: usize,
    parallel: bool,
    scene: Scene,
}

impl Renderer {
    /// Validate `config` and build a renderer for the default scene
    pub fn new(config: RenderConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            width: config.width as usize,
            height: config.height as usize,
            pixel_size: config.pixel_size as usize,
            parallel: config.parallel,
            scene: Scene::default(),
        })
    }

    pub fn set_parallel(&mut self, parallel: bool) {
        self.parallel = parallel;
    }

    /// Brightness of pixel `(x, y)` on the `[0, 255]` scale
    pub fn brightness(&self, x: usize, y: usize) -> f64 {
        let l = x as f64 / self.width as f64 - 0.5;
        let m = y as f64 / self.height as f64 - 0.5;
        255.0 * self.scene.bri_film(l, m)
    }

    /// One scan-line, without the trailing newline
    pub fn render_row(&self, y: usize) -> String {
        let mut row = String::with_capacity(2 * self.width / self.pixel_size + 2);
        for x in (0..self.width).step_by(self.pixel_size) {
            row.push(glyph(self.brightness(x, y)));
            row.push(' ');
        }
        row
    }

    fn row_indices(&self) -> Vec<usize> {
        (0..self.height).step_by(self.pixel_size).collect()
    }

    /// All sampled scan-lines, top to bottom
    pub fn render_rows(&self) -> Vec<String> {
        let rows = self.row_indices();
        if self.parallel {
            rows.par_iter().map(|&y| self.render_row(y)).collect()
        } else {
            rows.iter().map(|&y| self.render_row(y)).collect()
        }
    }

    /// The whole picture as a newline-terminated string
    pub fn to_ascii(&self) -> String {
        let mut result = String::new();
        for row in self.render_rows() {
            result.push_str(&row);
            result.push('\n');
        }
        result
    }

    /// Write the picture to `out`, returning the number of rows written
    pub fn draw<W: Write>(&self, out: &mut W) -> Result<usize, RenderError> {
        tracing::info!(
            width = self.width,
            height = self.height,
            pixel_size = self.pixel_size,
            parallel = self.parallel,
            "Rendering"
        );

        let mut written = 0;
        if self.parallel {
            for row in self.render_rows() {
                writeln!(out, "{}", row)?;
                written += 1;
            }
        } else {
            // Stream row by row
            for y in self.row_indices() {
                writeln!(out, "{}", self.render_row(y))?;
                written += 1;
            }
        }

        tracing::info!(rows = written, "Render finished");
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_ends_of_ramp() {
        assert_eq!(glyph(255.0), 'M');
        assert_eq!(glyph(0.0), ' ');
        assert_eq!(glyph(251.5), 'M');
        assert_eq!(glyph(250.0), 'W');
    }

    #[test]
    fn test_glyph_out_of_range_is_clamped() {
        assert_eq!(glyph(300.0), 'M');
        assert_eq!(glyph(-50.0), ' ');
        assert_eq!(glyph(f64::NAN), 'M');
    }

    #[test]
    fn test_renderer_rejects_bad_config() {
        assert!(Renderer::new(RenderConfig::new(0, 10, 1)).is_err());
        assert!(Renderer::new(RenderConfig::new(10, -1, 1)).is_err());
        assert!(Renderer::new(RenderConfig::new(10, 10, 0)).is_err());
    }

    #[test]
    fn test_row_shape() {
        let renderer = Renderer::new(RenderConfig::new(20, 20, 1)).unwrap();
        let row = renderer.render_row(0);
        assert_eq!(row.len(), 40);
        assert!(row.chars().skip(1).step_by(2).all(|c| c == ' '));
    }

    #[test]
    fn test_stride_downsamples() {
        let renderer = Renderer::new(RenderConfig::new(40, 30, 4)).unwrap();
        let rows = renderer.render_rows();
        assert_eq!(rows.len(), 8);
        assert!(rows.iter().all(|r| r.len() == 20));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let mut renderer = Renderer::new(RenderConfig::new(60, 40, 1)).unwrap();
        renderer.set_parallel(true);
        let parallel = renderer.to_ascii();
        renderer.set_parallel(false);
        let sequential = renderer.to_ascii();
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_draw_matches_to_ascii() {
        let renderer = Renderer::new(RenderConfig::new(30, 30, 3)).unwrap();
        let mut buf = Vec::new();
        let rows = renderer.draw(&mut buf).unwrap();
        assert_eq!(rows, 10);
        assert_eq!(String::from_utf8(buf).unwrap(), renderer.to_ascii());
    }

    #[test]
    fn test_only_ramp_glyphs() {
        let renderer = Renderer::new(RenderConfig::new(50, 50, 1)).unwrap();
        let ascii = renderer.to_ascii();
        assert!(ascii
            .chars()
            .all(|c| c == '\n' || crate::DENSITY_RAMP.contains(c)));
    }
}
