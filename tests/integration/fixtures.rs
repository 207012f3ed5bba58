use std::{
	fs,
	path::{Path, PathBuf},
};

use serde_json::Value;
use telemetry_server::models::{ConfigLoader, ConfigPaths, ConnectionConfig, DeviceConfig};
use tempfile::TempDir;

/// Configuration tree rooted in a temporary directory
pub struct ConfigTree {
	pub temp_dir: TempDir,
}

impl ConfigTree {
	pub fn new() -> Self {
		Self {
			temp_dir: TempDir::new().unwrap(),
		}
	}

	pub fn root(&self) -> &Path {
		self.temp_dir.path()
	}

	/// Write the general config pointing at this tree and return its path
	pub fn write_general(&self, mut document: Value) -> PathBuf {
		document
			.as_object_mut()
			.unwrap()
			.entry("polled-device-config-path")
			.or_insert_with(|| Value::from(self.root().display().to_string()));
		let path = self.root().join("general_config.json");
		fs::write(&path, document.to_string()).unwrap();
		path
	}

	pub fn write_connection(&self, file: &str, content: &str) {
		write_into(&ConnectionConfig::config_dir(self.root()), file, content);
	}

	pub fn write_device(&self, file: &str, content: &str) {
		write_into(&DeviceConfig::config_dir(self.root()), file, content);
	}

	/// Candidates where only `explicit` can exist
	pub fn paths(&self, explicit: &Path) -> ConfigPaths {
		ConfigPaths {
			explicit: Some(explicit.to_path_buf()),
			user: None,
			system: self.root().join("etc").join("general_config.json"),
		}
	}
}

fn write_into(dir: &Path, file: &str, content: &str) {
	fs::create_dir_all(dir).unwrap();
	fs::write(dir.join(file), content).unwrap();
}

pub const TCP_MASTER: &str =
	r#"{"connection-id": "plc", "connection-role": "master", "connection-type": "tcp", "address": "10.0.0.5"}"#;

pub const SERIAL_SLAVE: &str = r#"{
	"connection-id": "rs485",
	"connection-role": "slave",
	"connection-type": "uart",
	"port": "/dev/ttyUSB0",
	"baudrate": 9600,
	"parity": "odd",
	"stop-bits": 2,
	"data-bits": "seven"
}"#;

pub fn device(id: &str, connection_id: &str, model_id: &str) -> String {
	format!(
		r#"{{"device-id": "{}", "connection-id": "{}", "model-id": "{}"}}"#,
		id, connection_id, model_id
	)
}
