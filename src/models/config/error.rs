//! Configuration error types.
//!
//! This module defines the error types that can occur during configuration
//! loading and validation. Errors do not log themselves: whether a condition
//! is reported, and at which severity, is decided by the loader through
//! [`Diagnostics`].

use std::{error::Error, fmt};

use crate::utils::diagnostics::Diagnostics;

/// Errors that can occur during configuration operations
#[derive(Debug)]
#[allow(clippy::enum_variant_names)]
pub enum ConfigError {
	/// No general configuration file could be found
	NotFound(String),

	/// Failed to parse configuration file
	ParseError(String),

	/// A required field is absent or has the wrong type
	MissingRequiredField(String),

	/// Configuration validation failed
	ValidationError(String),

	/// File system error during configuration loading
	FileError(String),
}

impl ConfigError {
	/// Format the error message for display
	fn format_message(&self) -> String {
		match self {
			Self::NotFound(msg) => format!("Config not found: {}", msg),
			Self::ParseError(msg) => format!("Parse error: {}", msg),
			Self::MissingRequiredField(msg) => format!("Missing required field: {}", msg),
			Self::ValidationError(msg) => format!("Validation error: {}", msg),
			Self::FileError(msg) => format!("File error: {}", msg),
		}
	}

	pub fn not_found(msg: impl Into<String>) -> Self {
		Self::NotFound(msg.into())
	}

	pub fn parse_error(msg: impl Into<String>) -> Self {
		Self::ParseError(msg.into())
	}

	pub fn missing_required_field(msg: impl Into<String>) -> Self {
		Self::MissingRequiredField(msg.into())
	}

	pub fn validation_error(msg: impl Into<String>) -> Self {
		Self::ValidationError(msg.into())
	}

	pub fn file_error(msg: impl Into<String>) -> Self {
		Self::FileError(msg.into())
	}

	/// Report the error as a critical diagnostic and hand it back
	pub fn logged(self, diagnostics: &Diagnostics) -> Self {
		diagnostics.crit(&self);
		self
	}
}

impl fmt::Display for ConfigError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.format_message())
	}
}

impl Error for ConfigError {}
