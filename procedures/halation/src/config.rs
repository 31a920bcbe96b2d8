use sdf::smoothstep;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlowFieldConfig {
	/// Number of segments the field can hold. Each segment takes two slots.
	pub capacity: usize,
	/// Distance at which the glow has faded out completely.
	pub max_distance: f32,
	/// Scales the linear falloff before it is smoothed.
	pub intensity_scale: f32,
	pub color: [f32; 3],
}

impl Default for GlowFieldConfig {
	fn default() -> Self {
		Self { capacity: 256, max_distance: 600.0, intensity_scale: 0.4, color: [0.26, 0.3, 0.82] }
	}
}

impl GlowFieldConfig {
	pub fn with_capacity(mut self, capacity: usize) -> Self {
		self.capacity = capacity;
		self
	}

	pub fn with_max_distance(mut self, max_distance: f32) -> Self {
		self.max_distance = max_distance;
		self
	}

	pub fn slots(&self) -> usize {
		self.capacity * 2
	}

	/// Glow alpha at `distance` from the backbone.
	pub fn intensity(&self, distance: f32) -> f32 {
		let falloff = ((self.max_distance - distance) / self.max_distance).max(0.0);
		smoothstep(0.0, 1.0, falloff * self.intensity_scale)
	}
}
