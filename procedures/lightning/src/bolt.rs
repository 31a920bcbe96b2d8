use bevy::prelude::*;
use sdf::SegmentSdf;

/// Which lineage a segment belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoltKind {
	/// Descends from the original start to end segment.
	Trunk,
	/// Descends from a side branch. Never turns back into trunk.
	Branch,
}

/// A single straight piece of a lightning bolt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bolt {
	pub start: Vec2,
	pub end: Vec2,
	pub width: f32,
	pub opacity: f32,
	pub kind: BoltKind,
}

impl Bolt {
	pub fn trunk(start: Vec2, end: Vec2, width: f32) -> Self {
		Self { start, end, width, opacity: 1.0, kind: BoltKind::Trunk }
	}

	pub fn is_branch(&self) -> bool {
		self.kind == BoltKind::Branch
	}

	pub fn ray(&self) -> Vec2 {
		self.end - self.start
	}

	pub fn length(&self) -> f32 {
		self.ray().length()
	}

	/// A piece of this bolt between two new points, keeping its lineage, width and opacity.
	pub fn split(&self, start: Vec2, end: Vec2) -> Self {
		Self { start, end, ..*self }
	}

	/// A side branch sprouting from this bolt, thinner and fainter than it.
	pub fn branch(&self, start: Vec2, end: Vec2, width_scale: f32, opacity_scale: f32) -> Self {
		Self {
			start,
			end,
			width: self.width * width_scale,
			opacity: self.opacity * opacity_scale,
			kind: BoltKind::Branch,
		}
	}

	pub fn segment(&self) -> SegmentSdf {
		SegmentSdf::new(self.start, self.end)
	}
}
