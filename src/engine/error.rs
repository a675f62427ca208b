//! Engine error type.

use thiserror::Error;

/// Errors returned by graph editing and run requests.
///
/// Every failing operation leaves the session exactly as it was.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
	/// Rejected user input: bad vertex count, self-loop, duplicate edge,
	/// unusable weight or start vertex.
	#[error("Invalid input: {0}")]
	InvalidInput(String),

	/// The graph cannot change while a timeline is playing.
	#[error("Busy: pause the animation before editing the graph")]
	Busy,
}

impl GraphError {
	pub(crate) fn invalid(message: impl Into<String>) -> Self {
		Self::InvalidInput(message.into())
	}
}

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, GraphError>;
