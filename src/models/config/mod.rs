//! Configuration loading.
//!
//! - `paths`: locating the general configuration file
//! - `document`: reading a file into a JSON object
//! - `field`: typed field extraction with default fallback
//! - `general_config`, `connection_config`, `device_config`: per-entity loaders

use std::{
	collections::HashSet,
	fs,
	path::{Path, PathBuf},
};

use crate::utils::diagnostics::Diagnostics;

mod connection_config;
mod device_config;
mod document;
mod error;
mod field;
mod general_config;
mod paths;

pub use document::{read_document, Document};
pub use error::ConfigError;
pub use field::{
	extract, extract_port, extract_with, match_token, match_token_ignore_case, report_fallback,
	require_field, Extracted, FieldOutcome, FieldValue,
};
pub use paths::{ConfigPaths, GENERAL_CONFIG_FILE, SYSTEM_CONFIG_PATH, USER_CONFIG_DIR};

/// Directory under the config root holding the per-entity directories
pub const CONFIGS_DIR: &str = "configs";

/// Common interface for loading a directory of entity configuration files
pub trait ConfigLoader: Sized {
	/// Entity name used in diagnostics
	const KIND: &'static str;
	/// Directory under `<root>/configs` holding one file per entity
	const DIRECTORY: &'static str;

	/// Registry key of the entity
	fn id(&self) -> &str;

	/// Load a single entity. An error skips the file; it has already been reported.
	fn load_from_path(path: &Path, diagnostics: &Diagnostics) -> Result<Self, ConfigError>;

	fn config_dir(root: &Path) -> PathBuf {
		root.join(CONFIGS_DIR).join(Self::DIRECTORY)
	}

	fn is_json_file(path: &Path) -> bool {
		path.extension()
			.map(|ext| ext.to_string_lossy().to_lowercase() == "json")
			.unwrap_or(false)
	}

	/// Load every `*.json` file of the entity directory under `root`.
	///
	/// Files are read in path order. A file that fails to load, or whose id is
	/// already taken by an earlier file, is skipped with a warning. A missing
	/// directory, a directory without JSON files, or a result with no entity at
	/// all is fatal.
	fn load_all<T>(root: &Path, diagnostics: &Diagnostics) -> Result<T, ConfigError>
	where
		T: FromIterator<(String, Self)>,
	{
		let dir = Self::config_dir(root);
		if !dir.is_dir() {
			return Err(ConfigError::file_error(format!(
				"{} directory {} not found",
				Self::KIND,
				dir.display()
			))
			.logged(diagnostics));
		}

		let entries = fs::read_dir(&dir).map_err(|e| {
			ConfigError::file_error(format!("failed to read {}: {}", dir.display(), e))
				.logged(diagnostics)
		})?;
		let mut files = Vec::new();
		for entry in entries {
			let path = entry
				.map_err(|e| {
					ConfigError::file_error(format!("failed to read {}: {}", dir.display(), e))
						.logged(diagnostics)
				})?
				.path();
			if path.is_file() && Self::is_json_file(&path) {
				files.push(path);
			}
		}
		files.sort();

		if files.is_empty() {
			return Err(ConfigError::file_error(format!(
				"no {} configuration file in {}",
				Self::KIND,
				dir.display()
			))
			.logged(diagnostics));
		}

		let mut seen: HashSet<String> = HashSet::new();
		let mut pairs = Vec::new();
		for path in files {
			match Self::load_from_path(&path, diagnostics) {
				Ok(config) if seen.contains(config.id()) => {
					diagnostics.warn(format_args!(
						"{}: {} id '{}' is already defined by an earlier file",
						path.display(),
						Self::KIND,
						config.id()
					));
				}
				Ok(config) => {
					let id = config.id().to_string();
					seen.insert(id.clone());
					pairs.push((id, config));
					continue;
				}
				Err(_) => {}
			}
			diagnostics.warn(format_args!(
				"could not add {} settings from file {}",
				Self::KIND,
				path.display()
			));
		}

		if pairs.is_empty() {
			return Err(ConfigError::validation_error(format!(
				"no valid {} configuration in {}",
				Self::KIND,
				dir.display()
			))
			.logged(diagnostics));
		}

		diagnostics.info(format_args!(
			"loaded {} {} configuration(s) from {}",
			pairs.len(),
			Self::KIND,
			dir.display()
		));
		Ok(T::from_iter(pairs))
	}
}
