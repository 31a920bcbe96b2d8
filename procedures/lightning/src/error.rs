use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LightningError {
	/// The bolt parameters cannot describe a bolt.
	#[error("invalid lightning input: {0}")]
	InvalidInput(String),
	/// Generation would outgrow the configured caps.
	#[error("{resource} exceeded: requested {requested}, limit is {limit}")]
	ResourceExceeded { resource: &'static str, requested: usize, limit: usize },
}
