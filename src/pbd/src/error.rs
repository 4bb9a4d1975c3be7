//! Error types for the simulator and its binaries.
//!
//! The step loop itself never fails; errors come from configuration,
//! file access and (de)serialization.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PbdError {
	/// A configuration value is outside its valid range.
	#[error("Invalid configuration: {0}")]
	InvalidConfig(String),

	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),

	#[error("Serialization error: {0}")]
	Serialization(String),
}

impl From<serde_json::Error> for PbdError {
	fn from(e: serde_json::Error) -> Self {
		Self::Serialization(e.to_string())
	}
}

pub type PbdResult<T> = Result<T, PbdError>;
