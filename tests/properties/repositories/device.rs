use std::{collections::HashMap, fs};

use crate::properties::strategies::device_strategy;

use proptest::{prelude::*, test_runner::Config};
use telemetry_server::{
	models::{ConfigLoader, DeviceConfig},
	repositories::{DeviceRepository, DeviceRepositoryTrait},
	utils::diagnostics::Diagnostics,
};
use tempfile::TempDir;

const MIN_TEST_CASES: usize = 1;
const MAX_TEST_CASES: usize = 10;

fn write_devices(devices: &[DeviceConfig]) -> TempDir {
	let temp_dir = TempDir::new().unwrap();
	let dir = DeviceConfig::config_dir(temp_dir.path());
	fs::create_dir_all(&dir).unwrap();
	for (index, device) in devices.iter().enumerate() {
		let document = serde_json::json!({
			"device-id": device.id,
			"connection-id": device.connection_id,
			"model-id": device.model_id,
		});
		fs::write(dir.join(format!("{:03}.json", index)), document.to_string()).unwrap();
	}
	temp_dir
}

proptest! {
	#![proptest_config(Config {
		failure_persistence: None,
		..Config::default()
	})]

	// First file wins for every id, count equals distinct ids
	#[test]
	fn test_first_occurrence_is_kept(
		devices in proptest::collection::vec(device_strategy(), MIN_TEST_CASES..MAX_TEST_CASES),
		duplicate_of in proptest::option::of(0usize..MAX_TEST_CASES),
	) {
		let mut devices = devices;
		if let Some(index) = duplicate_of {
			let original = devices[index % devices.len()].clone();
			devices.push(DeviceConfig {
				model_id: format!("{}-copy", original.model_id),
				..original
			});
		}

		let mut expected = HashMap::new();
		for device in &devices {
			expected.entry(device.id.clone()).or_insert_with(|| device.clone());
		}

		let temp_dir = write_devices(&devices);
		let repository = DeviceRepository::new(temp_dir.path(), &Diagnostics::default()).unwrap();

		prop_assert_eq!(repository.get_all().len(), expected.len());
		prop_assert_eq!(repository.get_all(), &expected);
	}

	// Loading the same directory twice yields the same registry
	#[test]
	fn test_loading_is_idempotent(
		devices in proptest::collection::vec(device_strategy(), MIN_TEST_CASES..MAX_TEST_CASES),
	) {
		let temp_dir = write_devices(&devices);
		let diagnostics = Diagnostics::default();

		let first = DeviceRepository::load_all(temp_dir.path(), &diagnostics).unwrap();
		let second = DeviceRepository::load_all(temp_dir.path(), &diagnostics).unwrap();
		prop_assert_eq!(first, second);
	}

	// Query Operations Tests
	#[test]
	fn test_query_operations(
		devices in proptest::collection::vec(device_strategy(), MIN_TEST_CASES..MAX_TEST_CASES),
	) {
		let devices: HashMap<String, DeviceConfig> = devices
			.into_iter()
			.map(|device| (device.id.clone(), device))
			.collect();
		let repository = DeviceRepository::new_with_devices(devices.clone()).unwrap();

		for (id, device) in &devices {
			prop_assert_eq!(repository.get(id), Some(device));
		}
		prop_assert_eq!(repository.get_all(), &devices);
		prop_assert_eq!(repository.get("NOT-AN-ID"), None);
	}
}
