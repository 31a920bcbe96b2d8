use crate::config::StormConfig;
use anyhow::Context;
use bevy::prelude::*;
use halation::{rasterize, GlowField, HalationImage, Viewport};
use lightning::{Lightning, Stroke};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// A live bolt with the glow built from its backbone.
#[derive(Debug, Clone)]
pub struct Strike {
	pub lightning: Lightning,
	pub glow: GlowField,
	/// Storm time at which the bolt was created.
	pub born_at: f32,
}

impl Strike {
	/// Glow alpha at `point`, faded along with the bolt.
	pub fn glow_alpha(&self, point: Vec2) -> f32 {
		self.glow.alpha(point) * self.lightning.opacity_multiplier()
	}
}

/// Owns the live bolts. Every bolt that dies is replaced by a fresh one.
#[derive(Resource)]
pub struct Storm {
	config: StormConfig,
	rng: StdRng,
	strikes: Vec<Strike>,
	deaths: u64,
	/// Replacements owed for dead bolts, retried every tick until they strike.
	pending: usize,
}

impl Storm {
	pub fn new(config: StormConfig) -> Self {
		let rng = match config.seed {
			Some(seed) => StdRng::seed_from_u64(seed),
			None => StdRng::from_entropy(),
		};
		Self { config, rng, strikes: Vec::new(), deaths: 0, pending: 0 }
	}

	pub fn config(&self) -> &StormConfig {
		&self.config
	}

	/// Applies to every bolt struck from now on. Live bolts keep their shape.
	pub fn set_config(&mut self, config: StormConfig) {
		self.config = config;
	}

	pub fn strikes(&self) -> &[Strike] {
		&self.strikes
	}

	/// Number of bolts that have died so far.
	pub fn deaths(&self) -> u64 {
		self.deaths
	}

	/// Dead bolts still waiting for a replacement.
	pub fn pending(&self) -> usize {
		self.pending
	}

	/// Creates a new bolt born at `now`.
	pub fn strike(&mut self, now: f32) -> anyhow::Result<()> {
		let lightning = Lightning::new(
			Vec2::from_array(self.config.start),
			Vec2::from_array(self.config.end),
			self.config.generations,
			self.config.amplitude,
			&self.config.lightning,
			&mut self.rng,
		)
		.context("Failed to generate lightning")?;

		let glow = GlowField::build(&lightning.backbone(), &self.config.glow);
		self.strikes.push(Strike { lightning, glow, born_at: now });

		log::debug!("Strike at {}s, {} bolts live", now, self.strikes.len());
		Ok(())
	}

	/// Fades every bolt to `now` and replaces the ones that died. Returns how many died.
	///
	/// A replacement that fails to strike stays owed and is retried on the next tick.
	pub fn tick(&mut self, now: f32) -> anyhow::Result<usize> {
		let died = self
			.strikes
			.iter_mut()
			.filter_map(|strike| strike.lightning.update(now - strike.born_at))
			.count();

		if died > 0 {
			self.strikes.retain(|strike| !strike.lightning.is_dead());
			self.deaths += died as u64;
			self.pending += died;
			log::info!("{} bolts died at {}s, striking again", died, now);
		}

		while self.pending > 0 {
			self.strike(now)?;
			self.pending -= 1;
		}

		Ok(died)
	}

	/// Strokes of every live bolt.
	pub fn strokes(&self) -> impl Iterator<Item = Stroke> + '_ {
		self.strikes.iter().flat_map(|strike| strike.lightning.strokes())
	}

	/// Strongest glow of any live bolt at `point`.
	pub fn glow_alpha(&self, point: Vec2) -> f32 {
		self.strikes.iter().map(|strike| strike.glow_alpha(point)).fold(0.0, f32::max)
	}

	/// One faded glow image per live bolt.
	pub fn halation(&self, viewport: Viewport) -> Vec<HalationImage> {
		self.strikes
			.iter()
			.map(|strike| {
				rasterize(&strike.glow, viewport).faded(strike.lightning.opacity_multiplier())
			})
			.collect()
	}
}
