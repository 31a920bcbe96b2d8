use crate::bolt::Bolt;
use bevy::prelude::*;
use sdf::SegmentSdf;

/// The full set of segments produced for one bolt, in subdivision order.
///
/// Trees are never patched. Changing any generation parameter means building a new tree.
#[derive(Debug, Clone, PartialEq)]
pub struct BoltTree {
	start: Vec2,
	end: Vec2,
	bolts: Vec<Bolt>,
}

impl BoltTree {
	pub(crate) fn new(start: Vec2, end: Vec2, bolts: Vec<Bolt>) -> Self {
		Self { start, end, bolts }
	}

	pub fn start(&self) -> Vec2 {
		self.start
	}

	pub fn end(&self) -> Vec2 {
		self.end
	}

	/// Straight line distance from start to end.
	pub fn ideal_length(&self) -> f32 {
		self.start.distance(self.end)
	}

	pub fn bolts(&self) -> &[Bolt] {
		&self.bolts
	}

	pub fn len(&self) -> usize {
		self.bolts.len()
	}

	pub fn is_empty(&self) -> bool {
		self.bolts.is_empty()
	}

	pub fn branches(&self) -> impl Iterator<Item = &Bolt> {
		self.bolts.iter().filter(|bolt| bolt.is_branch())
	}

	/// The trunk segments in order. These chain from the tree start to the tree end.
	pub fn backbone(&self) -> Backbone {
		Backbone {
			segments: self
				.bolts
				.iter()
				.filter(|bolt| !bolt.is_branch())
				.map(Bolt::segment)
				.collect(),
		}
	}
}

/// The main conductive path of a bolt.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Backbone {
	segments: Vec<SegmentSdf>,
}

impl Backbone {
	pub fn new(segments: Vec<SegmentSdf>) -> Self {
		Self { segments }
	}

	pub fn segments(&self) -> &[SegmentSdf] {
		&self.segments
	}

	pub fn len(&self) -> usize {
		self.segments.len()
	}

	pub fn is_empty(&self) -> bool {
		self.segments.is_empty()
	}

	/// Returns true if every segment starts where the previous one ended.
	pub fn is_chained(&self, epsilon: f32) -> bool {
		self.segments
			.windows(2)
			.all(|pair| pair[0].end.abs_diff_eq(pair[1].start, epsilon))
	}
}
