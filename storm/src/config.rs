use anyhow::{ensure, Context};
use halation::GlowFieldConfig;
use lightning::LightningConfig;
use serde::{Deserialize, Serialize};

/// Where bolts strike and how they look.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StormConfig {
	pub start: [f32; 2],
	pub end: [f32; 2],
	pub generations: u32,
	pub amplitude: f32,
	/// Fixed seed for reproducible storms. Seeded from entropy when absent.
	pub seed: Option<u64>,
	pub lightning: LightningConfig,
	pub glow: GlowFieldConfig,
}

impl Default for StormConfig {
	fn default() -> Self {
		Self::for_viewport_height(800.0)
	}
}

impl StormConfig {
	/// Bolts crossing a viewport of the given height from top to bottom, slightly slanted.
	pub fn for_viewport_height(height: f32) -> Self {
		Self {
			start: [-20.0, height / 2.0],
			end: [20.0, -height / 2.0],
			generations: 8,
			amplitude: 100.0,
			seed: None,
			lightning: LightningConfig::default(),
			glow: GlowFieldConfig::default(),
		}
	}

	pub fn with_seed(mut self, seed: u64) -> Self {
		self.seed = Some(seed);
		self
	}

	pub fn with_generations(mut self, generations: u32) -> Self {
		self.generations = generations;
		self
	}

	pub fn from_toml_str(source: &str) -> anyhow::Result<Self> {
		let config: Self = toml::from_str(source).context("Failed to parse storm config")?;
		config.validate()?;
		Ok(config)
	}

	/// Rejects settings that would leave the storm without a usable glow or fade.
	pub fn validate(&self) -> anyhow::Result<()> {
		ensure!(self.glow.capacity > 0, "glow capacity must be at least one segment");
		ensure!(
			self.glow.max_distance > 0.0,
			"glow max distance must be positive, got {}",
			self.glow.max_distance
		);
		ensure!(
			self.lightning.fade_duration > 0.0,
			"fade duration must be positive, got {}",
			self.lightning.fade_duration
		);
		Ok(())
	}
}
