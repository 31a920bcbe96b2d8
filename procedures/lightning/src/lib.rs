pub mod bolt;
pub mod builder;
pub mod color;
pub mod config;
pub mod error;
pub mod fade;
pub mod lightning;
pub mod tree;

pub use bolt::{Bolt, BoltKind};
pub use builder::{generate, BoltTreeBuilder};
pub use color::ColorGradient;
pub use config::LightningConfig;
pub use error::LightningError;
pub use fade::{Died, Fade, FadeState};
pub use lightning::{Lightning, Stroke};
pub use tree::{Backbone, BoltTree};
