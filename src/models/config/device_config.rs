use std::path::Path;

use crate::{
	models::{
		config::{
			document::{read_document, Document},
			error::ConfigError,
			field::require_field,
			ConfigLoader,
		},
		DeviceConfig,
	},
	utils::diagnostics::{Diagnostics, Severity},
};

const DEVICE_ID: &str = "device-id";
const CONNECTION_ID: &str = "connection-id";
const MODEL_ID: &str = "model-id";

impl ConfigLoader for DeviceConfig {
	const KIND: &'static str = "device";
	const DIRECTORY: &'static str = "devices";

	fn id(&self) -> &str {
		&self.id
	}

	fn load_from_path(path: &Path, diagnostics: &Diagnostics) -> Result<Self, ConfigError> {
		let document = read_document(path, "device configuration", diagnostics)?;
		Self::from_document(&document, &path.display().to_string(), diagnostics)
	}
}

impl DeviceConfig {
	/// Build a device from a parsed document. All three fields are required.
	pub fn from_document(
		document: &Document,
		source: &str,
		diagnostics: &Diagnostics,
	) -> Result<Self, ConfigError> {
		let id: String = require_field(document, DEVICE_ID, source, diagnostics, Severity::Warn)?;
		let context = format!("{} (device '{}')", source, id);

		let connection_id =
			require_field(document, CONNECTION_ID, &context, diagnostics, Severity::Warn)?;
		let model_id = require_field(document, MODEL_ID, &context, diagnostics, Severity::Warn)?;

		Ok(DeviceConfig {
			id,
			connection_id,
			model_id,
		})
	}
}
