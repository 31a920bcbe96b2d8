use crate::bolt::Bolt;
use crate::config::LightningConfig;
use bevy::prelude::*;

/// Blends segment colors from `near` at the bolt start to `far` away from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorGradient {
	pub near: Srgba,
	pub far: Srgba,
	pub distance_scale: f32,
}

impl ColorGradient {
	pub fn new(near: Srgba, far: Srgba, distance_scale: f32) -> Self {
		Self { near, far, distance_scale }
	}

	pub fn from_config(config: &LightningConfig) -> Self {
		let [nr, ng, nb] = config.near_color;
		let [fr, fg, fb] = config.far_color;
		Self::new(Srgba::rgb(nr, ng, nb), Srgba::rgb(fr, fg, fb), config.color_distance_scale)
	}

	/// How far toward `far` a point of `bolt` is, in [0, 1].
	///
	/// Branches reach the far color sooner the fainter they are.
	pub fn mix_factor(&self, bolt: &Bolt, point: Vec2, origin: Vec2, ideal_length: f32) -> f32 {
		let mut distance = point.distance(origin) / ideal_length * self.distance_scale;
		if bolt.is_branch() {
			if bolt.opacity <= 0.0 {
				return 1.0;
			}
			distance *= 2.0 / bolt.opacity;
		}
		(distance * distance).min(1.0)
	}

	pub fn color_at(&self, bolt: &Bolt, point: Vec2, origin: Vec2, ideal_length: f32) -> Srgba {
		self.near.mix(&self.far, self.mix_factor(bolt, point, origin, ideal_length))
	}

	/// Colors at the start and end of `bolt`.
	pub fn bolt_colors(&self, bolt: &Bolt, origin: Vec2, ideal_length: f32) -> (Srgba, Srgba) {
		(
			self.color_at(bolt, bolt.start, origin, ideal_length),
			self.color_at(bolt, bolt.end, origin, ideal_length),
		)
	}
}

impl Default for ColorGradient {
	fn default() -> Self {
		Self::from_config(&LightningConfig::default())
	}
}
