pub mod analysis;
pub mod math;
pub mod segment;

pub use analysis::bounds::Bounds;
pub use math::{rotate_around, smoothstep};
pub use segment::SegmentSdf;

use bevy::prelude::*;

/// Trait for 2D distance fields.
///
/// Unlike a signed field there is no inside: the distance is zero on the
/// shape and grows away from it. Glow and falloff effects are layered on top of this.
pub trait Sdf: Send + Sync {
	fn distance(&self, p: Vec2) -> f32;

	/// Returns the bounds of the field, i.e., the region that holds every zero of the field.
	///
	/// Consumers can inflate these bounds by a falloff radius to skip sampling points
	/// that are known to be out of reach.
	fn bounds(&self) -> Bounds {
		Bounds::Unbounded
	}
}
