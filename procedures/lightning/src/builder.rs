use crate::bolt::Bolt;
use crate::config::LightningConfig;
use crate::error::LightningError;
use crate::tree::BoltTree;
use bevy::prelude::*;
use rand::Rng;
use sdf::rotate_around;

/// Grows a bolt tree by repeated midpoint displacement with random side branches.
#[derive(Debug, Clone)]
pub struct BoltTreeBuilder {
	pub start: Vec2,
	pub end: Vec2,
	pub generations: u32,
	/// Largest sideways midpoint displacement of the first generation. Halves every generation.
	pub amplitude: f32,
	pub config: LightningConfig,
}

impl BoltTreeBuilder {
	pub fn new(start: Vec2, end: Vec2) -> Self {
		Self { start, end, generations: 0, amplitude: 0.0, config: LightningConfig::default() }
	}

	pub fn with_generations(mut self, generations: u32) -> Self {
		self.generations = generations;
		self
	}

	pub fn with_amplitude(mut self, amplitude: f32) -> Self {
		self.amplitude = amplitude;
		self
	}

	pub fn with_config(mut self, config: LightningConfig) -> Self {
		self.config = config;
		self
	}

	pub fn validate(&self) -> Result<(), LightningError> {
		if !self.start.is_finite() || !self.end.is_finite() {
			return Err(LightningError::InvalidInput(format!(
				"endpoints must be finite, got {} and {}",
				self.start, self.end
			)));
		}

		if self.start.distance(self.end) <= f32::EPSILON {
			return Err(LightningError::InvalidInput(format!(
				"start and end coincide at {}",
				self.start
			)));
		}

		if !self.amplitude.is_finite() || self.amplitude < 0.0 {
			return Err(LightningError::InvalidInput(format!(
				"amplitude must be finite and non-negative, got {}",
				self.amplitude
			)));
		}

		if self.generations > self.config.max_generations {
			return Err(LightningError::ResourceExceeded {
				resource: "generations",
				requested: self.generations as usize,
				limit: self.config.max_generations as usize,
			});
		}

		Ok(())
	}

	/// Midpoint of the bolt pushed sideways by a magnitude in `[offset / 2, offset]` with a random sign.
	pub fn displaced_midpoint<R: Rng + ?Sized>(&self, bolt: &Bolt, offset: f32, rng: &mut R) -> Vec2 {
		let dir = bolt.ray();
		let normal = dir.perp().normalize_or_zero();
		let half = offset / 2.0;
		let magnitude = half + rng.gen::<f32>() * half;
		let sign = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
		bolt.start + dir * 0.5 + normal * magnitude * sign
	}

	/// Rolls for a branch leaving `midpoint`.
	///
	/// Earlier bolts in a round have more siblings left and so branch more often.
	pub fn branch_from<R: Rng + ?Sized>(
		&self,
		bolt: &Bolt,
		midpoint: Vec2,
		remaining: usize,
		total: usize,
		rng: &mut R,
	) -> Option<Bolt> {
		if midpoint.distance(self.start) <= self.config.branch_exclusion_radius {
			return None;
		}

		let probability = midpoint.distance(self.end) / self.start.distance(self.end);
		let chance = probability * remaining as f32 / total as f32;
		if rng.gen::<f32>() >= chance {
			return None;
		}

		let reach = (midpoint - bolt.start) * probability * self.config.branch_length_scale;
		if reach.length_squared() <= f32::EPSILON {
			return None;
		}

		// turn away from the parent line on the side the midpoint was pushed to
		let side = if bolt.ray().perp_dot(midpoint - bolt.start) < 0.0 { -1.0 } else { 1.0 };
		let angle = side * rng.gen::<f32>() * probability * self.config.branch_angle_scale;
		let tip = rotate_around(midpoint + reach, midpoint, angle);

		Some(bolt.branch(
			midpoint,
			tip,
			self.config.branch_width_scale,
			self.config.branch_opacity_scale,
		))
	}

	pub fn build<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<BoltTree, LightningError> {
		self.validate()?;

		let mut offset = self.amplitude;
		let mut current = vec![Bolt::trunk(self.start, self.end, self.config.base_width)];
		let mut next = Vec::with_capacity(2);

		for generation in 0..self.generations {
			next.clear();
			next.reserve(current.len() * 2);

			let total = current.len();
			let mut branches = 0;

			for (index, bolt) in current.iter().enumerate() {
				let midpoint = self.displaced_midpoint(bolt, offset, rng);

				next.push(bolt.split(bolt.start, midpoint));
				if let Some(branch) = self.branch_from(bolt, midpoint, total - index, total, rng) {
					next.push(branch);
					branches += 1;
				}
				next.push(bolt.split(midpoint, bolt.end));

				if next.len() > self.config.max_segments {
					return Err(LightningError::ResourceExceeded {
						resource: "segments",
						requested: next.len(),
						limit: self.config.max_segments,
					});
				}
			}

			log::debug!(
				"Generation {}: {} segments, {} new branches, offset {}",
				generation,
				next.len(),
				branches,
				offset
			);

			std::mem::swap(&mut current, &mut next);
			offset /= 2.0;
		}

		Ok(BoltTree::new(self.start, self.end, current))
	}
}

/// Builds a bolt tree from `start` to `end` with the given tuning.
pub fn generate<R: Rng + ?Sized>(
	start: Vec2,
	end: Vec2,
	generations: u32,
	amplitude: f32,
	config: &LightningConfig,
	rng: &mut R,
) -> Result<BoltTree, LightningError> {
	BoltTreeBuilder::new(start, end)
		.with_generations(generations)
		.with_amplitude(amplitude)
		.with_config(config.clone())
		.build(rng)
}
