use crate::field::GlowField;
use bevy::prelude::*;
use rayon::prelude::*;
use sdf::Sdf;

/// A pixel grid centered on the world origin with y pointing up, one world unit per pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
	pub width: u32,
	pub height: u32,
}

impl Viewport {
	pub fn new(width: u32, height: u32) -> Self {
		Self { width, height }
	}

	/// World position of the center of pixel (`x`, `y`), counted from the top left.
	pub fn pixel_to_world(&self, x: u32, y: u32) -> Vec2 {
		Vec2::new(
			x as f32 + 0.5 - self.width as f32 / 2.0,
			self.height as f32 / 2.0 - y as f32 - 0.5,
		)
	}
}

/// Per pixel glow alpha, row major from the top left.
#[derive(Debug, Clone, PartialEq)]
pub struct HalationImage {
	viewport: Viewport,
	color: [f32; 3],
	alpha: Vec<f32>,
}

impl HalationImage {
	pub fn viewport(&self) -> Viewport {
		self.viewport
	}

	pub fn alpha(&self) -> &[f32] {
		&self.alpha
	}

	pub fn get(&self, x: u32, y: u32) -> Option<f32> {
		if x >= self.viewport.width || y >= self.viewport.height {
			return None;
		}
		self.alpha.get(y as usize * self.viewport.width as usize + x as usize).copied()
	}

	/// Scales every alpha, e.g. by the fade of the bolt the glow belongs to.
	pub fn faded(mut self, multiplier: f32) -> Self {
		self.alpha.iter_mut().for_each(|alpha| *alpha *= multiplier);
		self
	}

	/// Straight alpha RGBA8 pixels.
	pub fn to_rgba8(&self) -> Vec<u8> {
		let [r, g, b] = self.color.map(|channel| (channel.clamp(0.0, 1.0) * 255.0).round() as u8);
		self.alpha
			.iter()
			.flat_map(|alpha| [r, g, b, (alpha.clamp(0.0, 1.0) * 255.0).round() as u8])
			.collect()
	}
}

/// Samples the glow of `field` at every pixel center of `viewport`.
///
/// Rows are computed in parallel. Pixels farther than the glow reach from the field bounds stay at zero.
pub fn rasterize(field: &GlowField, viewport: Viewport) -> HalationImage {
	let width = viewport.width as usize;
	let mut alpha = vec![0.0; width * viewport.height as usize];

	if width > 0 {
		let reach = field.bounds().inflate(field.config().max_distance);
		alpha.par_chunks_mut(width).enumerate().for_each(|(y, row)| {
			for (x, value) in row.iter_mut().enumerate() {
				let point = viewport.pixel_to_world(x as u32, y as u32);
				if reach.contains(point) {
					*value = field.alpha(point);
				}
			}
		});
	}

	HalationImage { viewport, color: field.config().color, alpha }
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::GlowFieldConfig;
	use lightning::Backbone;
	use sdf::SegmentSdf;

	fn vertical_field() -> GlowField {
		let backbone =
			Backbone::new(vec![SegmentSdf::new(Vec2::new(0.0, -50.0), Vec2::new(0.0, 50.0))]);
		GlowField::build(&backbone, &GlowFieldConfig::default().with_max_distance(20.0))
	}

	#[test]
	fn test_pixel_centers() {
		let viewport = Viewport::new(4, 2);
		assert_eq!(viewport.pixel_to_world(0, 0), Vec2::new(-1.5, 0.5));
		assert_eq!(viewport.pixel_to_world(3, 1), Vec2::new(1.5, -0.5));
	}

	#[test]
	fn test_rasterize_matches_point_samples() {
		let field = vertical_field();
		let viewport = Viewport::new(64, 32);
		let image = rasterize(&field, viewport);

		assert_eq!(image.alpha().len(), 64 * 32);
		for (x, y) in [(0, 0), (31, 16), (32, 5), (50, 31), (63, 10)] {
			let expected = field.alpha(viewport.pixel_to_world(x, y));
			assert_eq!(image.get(x, y), Some(expected));
		}
		assert_eq!(image.get(64, 0), None);

		// the column next to the bolt glows, the far edge is out of reach
		assert!(image.get(32, 16).unwrap_or_default() > 0.0);
		assert_eq!(image.get(0, 16), Some(0.0));
	}

	#[test]
	fn test_faded_image_and_rgba() {
		let image = rasterize(&vertical_field(), Viewport::new(8, 8));
		let strongest = image.alpha().iter().copied().fold(0.0, f32::max);
		let faded = image.clone().faded(0.5);
		let faded_strongest = faded.alpha().iter().copied().fold(0.0, f32::max);
		assert!((faded_strongest - strongest * 0.5).abs() < 1e-6);

		let rgba = image.to_rgba8();
		assert_eq!(rgba.len(), 8 * 8 * 4);
		assert_eq!(rgba[0], 66);
		assert_eq!(rgba[2], 209);
	}

	#[test]
	fn test_empty_viewport() {
		let image = rasterize(&vertical_field(), Viewport::new(0, 10));
		assert!(image.alpha().is_empty());
	}
}
