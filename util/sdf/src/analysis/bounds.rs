use bevy::math::Rect;
use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bounds {
	/// The field has no zeros at all.
	Empty,
	Rect(Rect),
	Unbounded,
}

impl Bounds {
	/// Returns the smallest bounds holding both bounds.
	pub fn union(&self, other: &Self) -> Self {
		match (self, other) {
			(Bounds::Unbounded, _) | (_, Bounds::Unbounded) => Bounds::Unbounded,
			(Bounds::Empty, bounds) | (bounds, Bounds::Empty) => *bounds,
			(Bounds::Rect(a), Bounds::Rect(b)) => Bounds::Rect(a.union(*b)),
		}
	}

	/// Grows the bounds by `expansion` on every side.
	pub fn inflate(&self, expansion: f32) -> Self {
		match self {
			Bounds::Rect(rect) => Bounds::Rect(rect.inflate(expansion)),
			bounds => *bounds,
		}
	}

	pub fn contains(&self, p: Vec2) -> bool {
		match self {
			Bounds::Empty => false,
			Bounds::Rect(rect) => rect.contains(p),
			Bounds::Unbounded => true,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_union_with_empty_is_identity() {
		let rect = Bounds::Rect(Rect::from_corners(Vec2::ZERO, Vec2::ONE));
		assert_eq!(Bounds::Empty.union(&rect), rect);
		assert_eq!(rect.union(&Bounds::Empty), rect);
		assert_eq!(rect.union(&Bounds::Unbounded), Bounds::Unbounded);
	}

	#[test]
	fn test_inflate_rect() {
		let rect = Bounds::Rect(Rect::from_corners(Vec2::ZERO, Vec2::new(10.0, 0.0)));
		let inflated = rect.inflate(5.0);
		assert!(inflated.contains(Vec2::new(-4.0, 4.0)));
		assert!(!inflated.contains(Vec2::new(-6.0, 0.0)));
		assert!(!Bounds::Empty.inflate(100.0).contains(Vec2::ZERO));
	}
}
