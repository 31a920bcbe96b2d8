use serde::{Deserialize, Serialize};

/// Tuning for bolt generation, coloring and fading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightningConfig {
	/// Stroke width of the initial trunk segment.
	pub base_width: f32,
	/// Width of a branch relative to the segment it sprouts from.
	pub branch_width_scale: f32,
	/// Opacity of a branch relative to the segment it sprouts from.
	pub branch_opacity_scale: f32,
	/// Branch reach relative to the half segment it leaves from, at probability 1.
	pub branch_length_scale: f32,
	/// Largest branch rotation in radians, at probability 1.
	pub branch_angle_scale: f32,
	/// No branch sprouts within this distance of the bolt start.
	pub branch_exclusion_radius: f32,
	pub max_generations: u32,
	pub max_segments: usize,
	/// Segments thinner than this are kept in the tree but not stroked.
	pub min_render_width: f32,
	/// Scales the normalized distance from the bolt start before it is squared into a mix factor.
	pub color_distance_scale: f32,
	pub near_color: [f32; 3],
	pub far_color: [f32; 3],
	/// Seconds until the per tick fade identity reaches zero.
	pub fade_duration: f32,
	/// The bolt dies on the first tick whose identity is at or below this.
	pub death_threshold: f32,
}

impl Default for LightningConfig {
	fn default() -> Self {
		Self {
			base_width: 4.0,
			branch_width_scale: 0.6,
			branch_opacity_scale: 0.8,
			branch_length_scale: 2.6,
			branch_angle_scale: 1.1,
			branch_exclusion_radius: 40.0,
			max_generations: 12,
			max_segments: 1 << 16,
			min_render_width: 1.0,
			color_distance_scale: 0.8,
			near_color: [0.92, 0.95, 1.0],
			far_color: [0.26, 0.3, 0.82],
			fade_duration: 2.0,
			death_threshold: 0.2,
		}
	}
}

impl LightningConfig {
	pub fn with_base_width(mut self, base_width: f32) -> Self {
		self.base_width = base_width;
		self
	}

	pub fn with_branch_exclusion_radius(mut self, branch_exclusion_radius: f32) -> Self {
		self.branch_exclusion_radius = branch_exclusion_radius;
		self
	}

	pub fn with_max_generations(mut self, max_generations: u32) -> Self {
		self.max_generations = max_generations;
		self
	}

	pub fn with_max_segments(mut self, max_segments: usize) -> Self {
		self.max_segments = max_segments;
		self
	}

	pub fn with_min_render_width(mut self, min_render_width: f32) -> Self {
		self.min_render_width = min_render_width;
		self
	}

	pub fn with_colors(mut self, near_color: [f32; 3], far_color: [f32; 3]) -> Self {
		self.near_color = near_color;
		self.far_color = far_color;
		self
	}

	pub fn with_fade(mut self, fade_duration: f32, death_threshold: f32) -> Self {
		self.fade_duration = fade_duration;
		self.death_threshold = death_threshold;
		self
	}
}
