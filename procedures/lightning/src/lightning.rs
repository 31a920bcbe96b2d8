use crate::builder::BoltTreeBuilder;
use crate::color::ColorGradient;
use crate::config::LightningConfig;
use crate::error::LightningError;
use crate::fade::{Died, Fade, FadeState};
use crate::tree::{Backbone, BoltTree};
use bevy::prelude::*;
use rand::Rng;

/// What a renderer needs to draw one segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
	pub start: Vec2,
	pub end: Vec2,
	pub width: f32,
	pub opacity: f32,
	pub start_color: Srgba,
	pub end_color: Srgba,
}

/// One lightning bolt: its tree, how it is colored and how far it has faded.
#[derive(Component, Debug, Clone)]
pub struct Lightning {
	tree: BoltTree,
	gradient: ColorGradient,
	fade: Fade,
	min_render_width: f32,
}

impl Lightning {
	/// Builds the bolt and starts fading it right away.
	pub fn new<R: Rng + ?Sized>(
		start: Vec2,
		end: Vec2,
		generations: u32,
		amplitude: f32,
		config: &LightningConfig,
		rng: &mut R,
	) -> Result<Self, LightningError> {
		let mut fade = Fade::from_config(config);

		let tree = BoltTreeBuilder::new(start, end)
			.with_generations(generations)
			.with_amplitude(amplitude)
			.with_config(config.clone())
			.build(rng)?;

		fade.grown();
		fade.start();

		log::info!(
			"Lightning from {} to {}: {} segments, {} branches",
			start,
			end,
			tree.len(),
			tree.branches().count()
		);

		Ok(Self {
			tree,
			gradient: ColorGradient::from_config(config),
			fade,
			min_render_width: config.min_render_width,
		})
	}

	pub fn tree(&self) -> &BoltTree {
		&self.tree
	}

	pub fn backbone(&self) -> Backbone {
		self.tree.backbone()
	}

	pub fn state(&self) -> FadeState {
		self.fade.state()
	}

	pub fn is_dead(&self) -> bool {
		self.fade.is_dead()
	}

	pub fn opacity_multiplier(&self) -> f32 {
		self.fade.multiplier()
	}

	/// Advances the fade with `elapsed` seconds since the bolt was created.
	pub fn update(&mut self, elapsed: f32) -> Option<Died> {
		let died = self.fade.tick(elapsed);
		if died.is_some() {
			log::debug!("Lightning died after {}s", elapsed);
		}
		died
	}

	/// Segments wide enough to draw, with the fade applied to their opacity.
	pub fn strokes(&self) -> impl Iterator<Item = Stroke> + '_ {
		let origin = self.tree.start();
		let ideal_length = self.tree.ideal_length();
		let multiplier = self.fade.multiplier();
		let min_width = self.min_render_width;

		self.tree.bolts().iter().filter(move |bolt| bolt.width >= min_width).map(
			move |bolt| {
				let (start_color, end_color) =
					self.gradient.bolt_colors(bolt, origin, ideal_length);
				Stroke {
					start: bolt.start,
					end: bolt.end,
					width: bolt.width,
					opacity: bolt.opacity * multiplier,
					start_color,
					end_color,
				}
			},
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::rngs::StdRng;
	use rand::SeedableRng;

	fn lightning(seed: u64) -> Lightning {
		let mut rng = StdRng::seed_from_u64(seed);
		Lightning::new(
			Vec2::new(-20.0, 400.0),
			Vec2::new(20.0, -400.0),
			8,
			100.0,
			&LightningConfig::default(),
			&mut rng,
		)
		.unwrap()
	}

	#[test]
	fn test_new_lightning_is_fading() {
		let lightning = lightning(1);
		assert_eq!(lightning.state(), FadeState::Fading);
		assert_eq!(lightning.opacity_multiplier(), 1.0);
		assert_eq!(lightning.backbone().len(), 256);
	}

	#[test]
	fn test_thin_segments_are_not_stroked() {
		let lightning = lightning(2);
		let strokes: Vec<Stroke> = lightning.strokes().collect();

		assert!(strokes.iter().all(|stroke| stroke.width >= 1.0));
		let thin = lightning.tree().bolts().iter().filter(|bolt| bolt.width < 1.0).count();
		assert_eq!(strokes.len() + thin, lightning.tree().len());
	}

	#[test]
	fn test_strokes_follow_the_fade() {
		let mut lightning = lightning(3);
		assert_eq!(lightning.update(1.0), None);

		for (stroke, bolt) in lightning
			.strokes()
			.zip(lightning.tree().bolts().iter().filter(|bolt| bolt.width >= 1.0))
		{
			assert!((stroke.opacity - bolt.opacity * 0.5).abs() < 1e-6);
		}

		assert!(lightning.update(1.8).is_some());
		assert!(lightning.is_dead());
		assert!(lightning.update(1.9).is_none());
	}

	#[test]
	fn test_invalid_lightning_is_rejected() {
		let mut rng = StdRng::seed_from_u64(0);
		let result =
			Lightning::new(Vec2::ZERO, Vec2::ZERO, 4, 10.0, &LightningConfig::default(), &mut rng);
		assert!(matches!(result, Err(LightningError::InvalidInput(_))));
	}
}
