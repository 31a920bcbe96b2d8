use bevy::prelude::*;

/// Rotates `point` counter-clockwise around `center` by `angle` radians.
pub fn rotate_around(point: Vec2, center: Vec2, angle: f32) -> Vec2 {
	let (sin, cos) = angle.sin_cos();
	let offset = point - center;
	center + Vec2::new(offset.x * cos - offset.y * sin, offset.x * sin + offset.y * cos)
}

/// Hermite interpolation between `edge0` and `edge1`, clamped to [0, 1].
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
	let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
	t * t * (3.0 - 2.0 * t)
}
