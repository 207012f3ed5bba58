//! Bootstrap of the server configuration.
//!
//! Loads, in order:
//! 1. the general configuration, located through [`ConfigPaths`], whose logging
//!    toggles are applied to [`Diagnostics`] before anything else is read
//! 2. the connection registry under `<root>/configs/connections`
//! 3. the device registry under `<root>/configs/devices`
//!
//! `<root>` is the `polled-device-config-path` of the general configuration.
//! Any error returned from here is fatal and has already been reported as a
//! critical diagnostic.

use std::path::Path;

use thiserror::Error;

use crate::{
	models::{ConfigError, ConfigPaths, GeneralConfig},
	repositories::{
		ConnectionRepository, ConnectionRepositoryTrait, DeviceRepository, DeviceRepositoryTrait,
		RepositoryError,
	},
	utils::diagnostics::Diagnostics,
};

#[derive(Debug, Error)]
pub enum BootstrapError {
	#[error("Failed to load general configuration: {0}")]
	GeneralConfig(#[from] ConfigError),

	#[error("Failed to load connection registry: {0}")]
	Connections(RepositoryError),

	#[error("Failed to load device registry: {0}")]
	Devices(RepositoryError),
}

/// Everything the server needs to start polling
#[derive(Debug, Clone)]
pub struct LoadedConfiguration {
	pub general: GeneralConfig,
	pub connections: ConnectionRepository,
	pub devices: DeviceRepository,
}

/// Load both registries from the root named by `general`.
///
/// Connections are loaded before devices; the first failure stops the bootstrap.
pub fn initialize_registries<C, D>(
	general: &GeneralConfig,
	diagnostics: &Diagnostics,
) -> Result<(C, D), BootstrapError>
where
	C: ConnectionRepositoryTrait,
	D: DeviceRepositoryTrait,
{
	let root = general.config_root();
	let connections = C::new(root, diagnostics).map_err(BootstrapError::Connections)?;
	let devices = D::new(root, diagnostics).map_err(BootstrapError::Devices)?;
	Ok((connections, devices))
}

/// Load the whole configuration.
///
/// `explicit` is the general configuration path given on the command line, if
/// any. It takes precedence over the per-user and system files.
pub fn load_configuration(
	explicit: Option<&Path>,
	diagnostics: &Diagnostics,
) -> Result<LoadedConfiguration, BootstrapError> {
	load_configuration_from(&ConfigPaths::from_env(explicit), diagnostics)
}

/// Load the whole configuration from an explicit set of candidate paths
pub fn load_configuration_from(
	paths: &ConfigPaths,
	diagnostics: &Diagnostics,
) -> Result<LoadedConfiguration, BootstrapError> {
	let general = GeneralConfig::load(paths, diagnostics)?;
	let (connections, devices) =
		initialize_registries::<ConnectionRepository, DeviceRepository>(&general, diagnostics)?;

	diagnostics.info(format_args!(
		"configuration loaded: {} connection(s), {} device(s)",
		connections.get_all().len(),
		devices.get_all().len()
	));

	Ok(LoadedConfiguration {
		general,
		connections,
		devices,
	})
}
