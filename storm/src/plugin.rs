use crate::config::StormConfig;
use crate::storm::Storm;
use bevy::prelude::*;

pub struct StormPlugin {
	pub config: StormConfig,
}

impl Plugin for StormPlugin {
	fn build(&self, app: &mut App) {
		app.insert_resource(Storm::new(self.config.clone()))
			.add_systems(Startup, first_strike)
			.add_systems(Update, tick_storm);
	}
}

/// Starts the storm with a single bolt.
pub fn first_strike(time: Res<Time>, mut storm: ResMut<Storm>) {
	log::info!("Starting storm");
	if let Err(e) = storm.strike(time.elapsed_secs()) {
		log::error!("Failed to strike: {:#}", e);
	}
}

/// Fades the live bolts and replaces the dead ones.
pub fn tick_storm(time: Res<Time>, mut storm: ResMut<Storm>) {
	if let Err(e) = storm.tick(time.elapsed_secs()) {
		log::error!("Failed to tick storm: {:#}", e);
	}
}
