use crate::config::GlowFieldConfig;
use bevy::prelude::*;
use lightning::Backbone;
use sdf::{Bounds, SegmentSdf, Sdf};

/// Backbone endpoints packed into a fixed number of slots.
///
/// Slots come in start/end pairs. Only the first `active_len` slots are meaningful, the
/// rest are zero padding. Backbones longer than the capacity keep every n-th segment.
#[derive(Debug, Clone, PartialEq)]
pub struct GlowField {
	slots: Vec<[f32; 2]>,
	active_len: usize,
	config: GlowFieldConfig,
}

impl GlowField {
	pub fn build(backbone: &Backbone, config: &GlowFieldConfig) -> Self {
		let capacity = config.capacity;
		if capacity == 0 {
			log::warn!("Glow field has no capacity, leaving it empty");
			return Self { slots: Vec::new(), active_len: 0, config: config.clone() };
		}

		let mut slots = vec![[0.0; 2]; config.slots()];

		let count = backbone.len();
		let (interval, active_len) = if count <= capacity {
			(1, count * 2)
		} else {
			let interval = count.div_ceil(capacity);
			log::debug!(
				"Decimating backbone of {} segments to every {}th for a capacity of {}",
				count,
				interval,
				capacity
			);
			(interval, slots.len())
		};

		for (index, segment) in backbone.segments().iter().step_by(interval).enumerate() {
			slots[index * 2] = segment.start.to_array();
			slots[index * 2 + 1] = segment.end.to_array();
		}

		Self { slots, active_len, config: config.clone() }
	}

	pub fn config(&self) -> &GlowFieldConfig {
		&self.config
	}

	/// Number of meaningful slots, twice the number of stored segments.
	pub fn active_len(&self) -> usize {
		self.active_len
	}

	/// Every slot including padding.
	pub fn slots(&self) -> &[[f32; 2]] {
		&self.slots
	}

	/// The slots as raw bytes, laid out like a `vec2[]` uniform.
	pub fn as_bytes(&self) -> &[u8] {
		bytemuck::cast_slice(&self.slots)
	}

	/// Stored segments, without zero length padding.
	pub fn segments(&self) -> impl Iterator<Item = SegmentSdf> + '_ {
		self.slots[..self.active_len]
			.chunks_exact(2)
			.map(|pair| SegmentSdf::new(Vec2::from_array(pair[0]), Vec2::from_array(pair[1])))
			.filter(|segment| !segment.is_degenerate())
	}

	/// Distance from `point` to the closest stored segment, infinite for an empty field.
	pub fn sample(&self, point: Vec2) -> f32 {
		self.segments().map(|segment| segment.distance(point)).fold(f32::INFINITY, f32::min)
	}

	/// Glow alpha at `point`.
	pub fn alpha(&self, point: Vec2) -> f32 {
		self.config.intensity(self.sample(point))
	}
}

impl Sdf for GlowField {
	fn distance(&self, p: Vec2) -> f32 {
		self.sample(p)
	}

	fn bounds(&self) -> Bounds {
		self.segments().fold(Bounds::Empty, |bounds, segment| bounds.union(&segment.bounds()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use lightning::{generate, LightningConfig};
	use rand::rngs::StdRng;
	use rand::SeedableRng;

	const EPSILON: f32 = 1e-4;

	fn straight_backbone(count: usize) -> Backbone {
		Backbone::new(
			(0..count)
				.map(|i| {
					SegmentSdf::new(Vec2::new(i as f32, 0.0), Vec2::new(i as f32 + 1.0, 0.0))
				})
				.collect(),
		)
	}

	#[test]
	fn test_single_segment_samples() {
		let backbone = Backbone::new(vec![SegmentSdf::new(Vec2::ZERO, Vec2::new(10.0, 0.0))]);
		let field = GlowField::build(&backbone, &GlowFieldConfig::default());

		assert_eq!(field.active_len(), 2);
		assert!((field.sample(Vec2::new(5.0, 5.0)) - 5.0).abs() < EPSILON);
		assert!((field.sample(Vec2::new(-5.0, 0.0)) - 5.0).abs() < EPSILON);
	}

	#[test]
	fn test_small_backbone_is_copied_and_padded() {
		let field = GlowField::build(&straight_backbone(100), &GlowFieldConfig::default());

		assert_eq!(field.slots().len(), 512);
		assert_eq!(field.active_len(), 200);
		assert_eq!(field.slots()[199], [100.0, 0.0]);
		assert!(field.slots()[200..].iter().all(|slot| *slot == [0.0, 0.0]));
		assert_eq!(field.segments().count(), 100);
	}

	#[test]
	fn test_full_backbone_fits_exactly() {
		let field = GlowField::build(&straight_backbone(256), &GlowFieldConfig::default());
		assert_eq!(field.active_len(), 512);
		assert_eq!(field.segments().count(), 256);
	}

	#[test]
	fn test_large_backbone_is_decimated() {
		let field = GlowField::build(&straight_backbone(300), &GlowFieldConfig::default());

		// interval of ceil(300 / 256) = 2 keeps segments 0, 2, 4, ...
		assert_eq!(field.active_len(), 512);
		assert_eq!(field.segments().count(), 150);
		assert_eq!(field.slots()[2], [2.0, 0.0]);
		assert_eq!(field.slots()[3], [3.0, 0.0]);

		// padding does not pull the field toward the origin
		let point = Vec2::new(-50.0, 0.0);
		assert!((field.sample(point) - 50.0).abs() < EPSILON);
	}

	#[test]
	fn test_active_len_stays_in_range() {
		for count in [0, 1, 255, 256, 257, 511, 513, 4096] {
			let field = GlowField::build(&straight_backbone(count), &GlowFieldConfig::default());
			assert!(field.active_len() <= 512);
			if count <= 256 {
				assert_eq!(field.active_len(), count * 2);
			} else {
				assert_eq!(field.active_len(), 512);
			}
		}
	}

	#[test]
	fn test_empty_field() {
		let field = GlowField::build(&Backbone::default(), &GlowFieldConfig::default());
		assert_eq!(field.active_len(), 0);
		assert_eq!(field.sample(Vec2::ZERO), f32::INFINITY);
		assert_eq!(field.alpha(Vec2::ZERO), 0.0);
		assert_eq!(field.bounds(), Bounds::Empty);
	}

	#[test]
	fn test_zero_capacity_is_an_empty_field() {
		let config = GlowFieldConfig::default().with_capacity(0);
		let field = GlowField::build(&straight_backbone(1), &config);

		assert_eq!(field.active_len(), 0);
		assert!(field.slots().is_empty());
		assert_eq!(field.sample(Vec2::new(0.5, 0.0)), f32::INFINITY);
		assert_eq!(field.alpha(Vec2::new(0.5, 0.0)), 0.0);
	}

	#[test]
	fn test_bytes_match_uniform_layout() {
		let field = GlowField::build(&straight_backbone(3), &GlowFieldConfig::default());
		let bytes = field.as_bytes();
		assert_eq!(bytes.len(), 512 * 2 * 4);
		assert_eq!(&bytes[8..12], &1.0f32.to_ne_bytes());
	}

	#[test]
	fn test_generated_backbone_glows_along_its_path() {
		let mut rng = StdRng::seed_from_u64(9);
		let tree = generate(
			Vec2::new(-20.0, 400.0),
			Vec2::new(20.0, -400.0),
			8,
			100.0,
			&LightningConfig::default(),
			&mut rng,
		)
		.unwrap();
		let field = GlowField::build(&tree.backbone(), &GlowFieldConfig::default());

		assert_eq!(field.active_len(), 512);
		for segment in tree.backbone().segments() {
			assert!(field.sample(segment.start) < EPSILON);
		}
		assert!(field.alpha(tree.start()) > field.alpha(Vec2::new(900.0, 0.0)));
	}
}
