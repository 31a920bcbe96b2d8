use crate::config::LightningConfig;

/// Where a bolt is in its life.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeState {
	/// The tree is still being built.
	Growing,
	/// The tree and its glow are complete.
	Alive,
	/// Opacity decays every tick.
	Fading,
	/// Terminal. The owner should drop the bolt.
	Dead,
}

/// Signal that a bolt died, emitted exactly once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Died {
	/// Seconds since creation at the tick that killed the bolt.
	pub elapsed: f32,
}

/// Time driven opacity decay.
///
/// Every tick multiplies the running opacity by `max(0, 1 - t / duration)` evaluated
/// at that tick, so the realized opacity is the product over all ticks so far and
/// depends on how often the owner ticks.
#[derive(Debug, Clone, PartialEq)]
pub struct Fade {
	state: FadeState,
	multiplier: f32,
	duration: f32,
	death_threshold: f32,
}

impl Fade {
	pub fn new(duration: f32, death_threshold: f32) -> Self {
		Self { state: FadeState::Growing, multiplier: 1.0, duration, death_threshold }
	}

	pub fn from_config(config: &LightningConfig) -> Self {
		Self::new(config.fade_duration, config.death_threshold)
	}

	pub fn state(&self) -> FadeState {
		self.state
	}

	/// The cumulative opacity multiplier applied to every segment.
	pub fn multiplier(&self) -> f32 {
		self.multiplier
	}

	pub fn is_dead(&self) -> bool {
		self.state == FadeState::Dead
	}

	pub fn grown(&mut self) {
		if self.state == FadeState::Growing {
			self.state = FadeState::Alive;
		}
	}

	pub fn start(&mut self) {
		if self.state == FadeState::Alive {
			self.state = FadeState::Fading;
		}
	}

	pub fn identity(&self, elapsed: f32) -> f32 {
		(1.0 - elapsed / self.duration).max(0.0)
	}

	/// Applies one tick at `elapsed` seconds since creation.
	///
	/// Returns the death signal on the tick whose identity first drops to the threshold.
	/// Ticks outside of [`FadeState::Fading`] do nothing.
	pub fn tick(&mut self, elapsed: f32) -> Option<Died> {
		if self.state != FadeState::Fading {
			return None;
		}

		let identity = self.identity(elapsed);
		self.multiplier *= identity;

		if identity <= self.death_threshold {
			self.state = FadeState::Dead;
			return Some(Died { elapsed });
		}

		None
	}
}
