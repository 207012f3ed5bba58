//! Reading a configuration file into a JSON object.

use std::{fs, path::Path};

use serde_json::{Map, Value};

use crate::{models::config::error::ConfigError, utils::diagnostics::Diagnostics};

/// Top-level object of a configuration file
pub type Document = Map<String, Value>;

/// Read and parse `path` as a JSON object.
///
/// Every failure is reported as a critical diagnostic naming the file and, for
/// syntax errors, the parser message with its line and column.
pub fn read_document(
	path: &Path,
	description: &str,
	diagnostics: &Diagnostics,
) -> Result<Document, ConfigError> {
	if !path.exists() {
		return Err(ConfigError::file_error(format!(
			"{} file {} is missing",
			description,
			path.display()
		))
		.logged(diagnostics));
	}

	let content = fs::read_to_string(path).map_err(|e| {
		ConfigError::file_error(format!(
			"failed to read {} file {}: {}",
			description,
			path.display(),
			e
		))
		.logged(diagnostics)
	})?;

	match serde_json::from_str::<Value>(&content) {
		Ok(Value::Object(document)) => Ok(document),
		Ok(_) => Err(ConfigError::parse_error(format!(
			"{} file {} must contain a JSON object",
			description,
			path.display()
		))
		.logged(diagnostics)),
		Err(e) => Err(ConfigError::parse_error(format!(
			"syntax error in {} file {}: {}",
			description,
			path.display(),
			e
		))
		.logged(diagnostics)),
	}
}
