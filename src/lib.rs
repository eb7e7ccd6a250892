//! ASCII ray tracer: a mirror sphere over checkerboard planes
//!
//! Each sampled pixel casts one ray from the origin through the film plane at
//! z = 1. Rays that hit the sphere bounce once and pick up the checkerboard
//! they land on; rays that miss go straight to a plane. Brightness becomes a
//! glyph from a 64-character density ramp.

pub mod config;
pub mod renderer;
pub mod scene;
pub mod solver;
pub mod timing;
pub mod vector;

pub use config::{ConfigError, RenderConfig};
pub use renderer::{RenderError, Renderer};
pub use scene::Scene;

/// Glyph ramp from densest to sparsest
pub const DENSITY_RAMP: &str =
    "MWN$@%#&B89EGA6mK5HRkbYT43V0JL7gpaseyxznocv?jIftr1li*=-~^`':;,. ";

/// Render the scene at `width` x `height`, sampling every `pixel_size`-th pixel
pub fn draw(width: i64, height: i64, pixel_size: i64) -> Result<String, ConfigError> {
    let renderer = Renderer::new(RenderConfig::new(width, height, pixel_size))?;
    Ok(renderer.to_ascii())
}
