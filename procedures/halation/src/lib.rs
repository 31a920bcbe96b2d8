//! Glow around the main path of a lightning bolt.
//!
//! A [`GlowField`] packs the bolt backbone into a fixed number of slots so the same
//! data can be sampled on the CPU or uploaded as a `vec2[]` uniform and sampled per pixel.

pub mod config;
pub mod field;
pub mod raster;

pub use config::GlowFieldConfig;
pub use field::GlowField;
pub use raster::{rasterize, HalationImage, Viewport};
