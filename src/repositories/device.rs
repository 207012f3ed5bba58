//! Device registry, keyed by `device-id`.
//!
//! A device's `connection_id` is kept as given; it is not resolved against the
//! connection registry.

use std::{collections::HashMap, path::Path};

use crate::{
	models::{ConfigLoader, DeviceConfig},
	repositories::error::RepositoryError,
	utils::diagnostics::Diagnostics,
};

/// Repository for storing and retrieving device configurations
///
/// Read-only once built:
///
/// ```compile_fail
/// use telemetry_server::repositories::DeviceRepository;
///
/// let mut repository = DeviceRepository::default();
/// repository.devices.clear();
/// ```
#[derive(Debug, Clone, Default)]
pub struct DeviceRepository {
	/// Map of device ids to their configurations
	devices: HashMap<String, DeviceConfig>,
}

impl DeviceRepository {
	/// Build a repository from an in-memory map keyed by device id
	pub fn new_with_devices(devices: HashMap<String, DeviceConfig>) -> Result<Self, RepositoryError> {
		if let Some((key, device)) = devices.iter().find(|(key, d)| **key != d.id) {
			return Err(RepositoryError::validation_error(format!(
				"device '{}' is registered under key '{}'",
				device.id, key
			)));
		}
		Ok(DeviceRepository { devices })
	}
}

/// Interface for device repository implementations
pub trait DeviceRepositoryTrait {
	fn new(root: &Path, diagnostics: &Diagnostics) -> Result<Self, RepositoryError>
	where
		Self: Sized;

	fn load_all(
		root: &Path,
		diagnostics: &Diagnostics,
	) -> Result<HashMap<String, DeviceConfig>, RepositoryError>;

	fn get(&self, device_id: &str) -> Option<&DeviceConfig>;

	fn get_all(&self) -> &HashMap<String, DeviceConfig>;
}

impl DeviceRepositoryTrait for DeviceRepository {
	fn new(root: &Path, diagnostics: &Diagnostics) -> Result<Self, RepositoryError> {
		let devices = Self::load_all(root, diagnostics)?;
		Ok(DeviceRepository { devices })
	}

	fn load_all(
		root: &Path,
		diagnostics: &Diagnostics,
	) -> Result<HashMap<String, DeviceConfig>, RepositoryError> {
		DeviceConfig::load_all(root, diagnostics)
			.map_err(|e| RepositoryError::load_error(format!("Failed to load devices: {}", e)))
	}

	fn get(&self, device_id: &str) -> Option<&DeviceConfig> {
		self.devices.get(device_id)
	}

	fn get_all(&self) -> &HashMap<String, DeviceConfig> {
		&self.devices
	}
}
