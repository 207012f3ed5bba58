//! Location of the general configuration file.

use std::path::{Path, PathBuf};

use crate::models::config::error::ConfigError;

/// File name of the general configuration document
pub const GENERAL_CONFIG_FILE: &str = "general_config.json";
/// Application directory under `$HOME/.config`
pub const USER_CONFIG_DIR: &str = "telemetry_server";
/// System wide general configuration document
pub const SYSTEM_CONFIG_PATH: &str = "/etc/telemetry_server/general_config.json";

/// Candidate locations of the general configuration, in precedence order:
/// explicit path, then per-user file, then system file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
	pub explicit: Option<PathBuf>,
	pub user: Option<PathBuf>,
	pub system: PathBuf,
}

impl ConfigPaths {
	/// Build the candidates from an optional explicit path and `$HOME`
	pub fn from_env(explicit: Option<&Path>) -> Self {
		let home = std::env::var_os("HOME")
			.filter(|home| !home.is_empty())
			.map(PathBuf::from);
		Self::with_home(explicit, home.as_deref())
	}

	pub fn with_home(explicit: Option<&Path>, home: Option<&Path>) -> Self {
		Self {
			explicit: explicit.map(Path::to_path_buf),
			user: home.map(Self::user_config_path),
			system: PathBuf::from(SYSTEM_CONFIG_PATH),
		}
	}

	/// `<home>/.config/telemetry_server/general_config.json`
	pub fn user_config_path(home: &Path) -> PathBuf {
		home.join(".config")
			.join(USER_CONFIG_DIR)
			.join(GENERAL_CONFIG_FILE)
	}

	/// Candidates in the order they are tried. An empty explicit path is ignored.
	pub fn candidates(&self) -> Vec<&Path> {
		self.explicit
			.as_deref()
			.filter(|path| !path.as_os_str().is_empty())
			.into_iter()
			.chain(self.user.as_deref())
			.chain(std::iter::once(self.system.as_path()))
			.collect()
	}

	/// Return the first candidate that exists as a file
	pub fn resolve(&self) -> Result<PathBuf, ConfigError> {
		let candidates = self.candidates();
		if let Some(path) = candidates.iter().find(|path| path.is_file()) {
			return Ok(path.to_path_buf());
		}

		let tried = candidates
			.iter()
			.map(|path| path.display().to_string())
			.collect::<Vec<_>>()
			.join(", ");
		Err(ConfigError::not_found(format!(
			"no general configuration file found (tried: {})",
			tried
		)))
	}
}
