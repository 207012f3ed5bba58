//! Error types for repository operations.
//!
//! Repository errors wrap the loader error that caused them. They are not logged
//! here: the loaders have already reported the underlying condition.

use std::error::Error;
use std::fmt;

/// Errors that can occur during repository operations
#[derive(Debug)]
pub enum RepositoryError {
	/// Error that occurs when an in-memory registry is inconsistent
	ValidationError(String),

	/// Error that occurs when loading configurations from files
	LoadError(String),
}

impl RepositoryError {
	/// Format an error message for display
	fn format_message(&self) -> String {
		match self {
			Self::ValidationError(msg) => format!("Validation error: {}", msg),
			Self::LoadError(msg) => format!("Load error: {}", msg),
		}
	}

	pub fn validation_error(msg: impl Into<String>) -> Self {
		Self::ValidationError(msg.into())
	}

	pub fn load_error(msg: impl Into<String>) -> Self {
		Self::LoadError(msg.into())
	}
}

impl fmt::Display for RepositoryError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.format_message())
	}
}

impl Error for RepositoryError {}
