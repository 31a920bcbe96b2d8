use crate::{Bounds, Sdf};
use bevy::math::Rect;
use bevy::prelude::*;

/// Distance to a line segment.
///
/// Points whose projection falls outside the span measure to the nearer endpoint,
/// points inside the span measure perpendicular to the carrying line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentSdf {
	pub start: Vec2,
	pub end: Vec2,
}

impl SegmentSdf {
	pub fn new(start: Vec2, end: Vec2) -> Self {
		Self { start, end }
	}

	pub fn is_degenerate(&self) -> bool {
		self.start == self.end
	}
}

impl Sdf for SegmentSdf {
	fn distance(&self, p: Vec2) -> f32 {
		let e1 = self.start - p;
		let e2 = self.end - p;
		let line = self.start - self.end;

		// zero length segments are plain points
		let Some(dir) = line.try_normalize() else {
			return e1.length();
		};

		// the projection of p lies before start or past end
		if e1.dot(line) < 0.0 || e2.dot(line) > 0.0 {
			return e1.length().min(e2.length());
		}

		dir.perp_dot(e1).abs()
	}

	fn bounds(&self) -> Bounds {
		Bounds::Rect(Rect::from_corners(self.start, self.end))
	}
}
