//! A storm of fading lightning bolts, each replaced by a fresh one when it dies.
//!
//! Add [`StormPlugin`], or insert a [`Storm`] resource yourself and schedule
//! [`first_strike`] on `Startup` and [`tick_storm`] on `Update`.
//! Renderers read [`Storm::strokes`] and the glow fields of [`Storm::strikes`] every frame.

pub mod config;
pub mod plugin;
pub mod storm;

pub use config::StormConfig;
pub use plugin::{first_strike, tick_storm, StormPlugin};
pub use storm::{Storm, Strike};

pub use halation;
pub use lightning;
