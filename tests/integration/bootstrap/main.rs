use crate::integration::fixtures::{device, ConfigTree, SERIAL_SLAVE, TCP_MASTER};

use serde_json::json;
use telemetry_server::{
	bootstrap::{initialize_registries, load_configuration_from, BootstrapError},
	models::{
		ConfigError, DataBits, Endpoint, GeneralConfig, LogToggles, Parity, Role, StopBits,
		DEFAULT_BASE_ADDRESS, DEFAULT_BASE_DB_NAME, DEFAULT_BASE_LOGIN, DEFAULT_BASE_PORT,
	},
	repositories::{
		ConnectionRepository, ConnectionRepositoryTrait, DeviceRepository, DeviceRepositoryTrait,
		RepositoryError,
	},
	utils::diagnostics::{Channel, Diagnostics, Severity},
};
use tracing_test::traced_test;

fn populated_tree() -> ConfigTree {
	let tree = ConfigTree::new();
	tree.write_connection("plc.json", TCP_MASTER);
	tree.write_connection("rs485.json", SERIAL_SLAVE);
	tree.write_device("meter.json", &device("meter-1", "plc", "em24"));
	tree.write_device("inverter.json", &device("inv-1", "rs485", "sunspec"));
	tree
}

#[test]
fn test_full_bootstrap() {
	let tree = populated_tree();
	let general = tree.write_general(json!({"sql-base-port": 5433}));

	let configuration =
		load_configuration_from(&tree.paths(&general), &Diagnostics::default()).unwrap();

	assert_eq!(configuration.general.base_port, "5433");
	assert_eq!(configuration.general.config_root(), tree.root());
	assert_eq!(configuration.connections.get_all().len(), 2);
	assert_eq!(configuration.devices.get_all().len(), 2);

	let plc = configuration.connections.get("plc").unwrap();
	assert_eq!(plc.port(), "520");
	assert_eq!(plc.await_time, 30);

	match &configuration.connections.get("rs485").unwrap().endpoint {
		Endpoint::Serial { role, settings } => {
			assert_eq!(*role, Role::Slave);
			assert_eq!(settings.baud_rate, 9600);
			assert_eq!(settings.parity, Parity::Odd);
			assert_eq!(settings.stop_bits, StopBits::Two);
			assert_eq!(settings.data_bits, DataBits::Seven);
		}
		other => panic!("unexpected endpoint {:?}", other),
	}

	assert_eq!(
		configuration.devices.get("inv-1").unwrap().connection_id,
		"rs485"
	);
}

#[test]
fn test_toggles_applied_before_registries_load() {
	let tree = populated_tree();
	let general = tree.write_general(json!({
		"syslog-warn-enable": false,
		"sqllog-info-enable": false
	}));
	let diagnostics = Diagnostics::default();

	load_configuration_from(&tree.paths(&general), &diagnostics).unwrap();

	assert!(!diagnostics.is_enabled(Channel::Syslog, Severity::Warn));
	assert!(!diagnostics.is_enabled(Channel::Sqllog, Severity::Info));
	assert!(diagnostics.is_enabled(Channel::Syslog, Severity::Crit));
}

#[traced_test]
#[test]
fn test_disabled_warnings_silence_skipped_files() {
	let tree = populated_tree();
	tree.write_device("broken.json", r#"{"device-id": "quiet-device"}"#);
	let general = tree.write_general(json!({"syslog-warn-enable": false}));

	let configuration =
		load_configuration_from(&tree.paths(&general), &Diagnostics::default()).unwrap();

	assert_eq!(configuration.devices.get_all().len(), 2);
	assert!(!logs_contain("quiet-device"));
	assert!(!logs_contain("could not add device settings"));
}

#[traced_test]
#[test]
fn test_missing_general_config_is_fatal() {
	let tree = ConfigTree::new();
	let err = load_configuration_from(
		&tree.paths(&tree.root().join("missing.json")),
		&Diagnostics::default(),
	)
	.unwrap_err();

	assert!(matches!(
		err,
		BootstrapError::GeneralConfig(ConfigError::NotFound(_))
	));
	assert!(logs_contain("no general configuration file found"));
}

#[test]
fn test_missing_connections_directory_is_fatal() {
	let tree = ConfigTree::new();
	tree.write_device("meter.json", &device("meter-1", "plc", "em24"));
	let general = tree.write_general(json!({}));

	let err = load_configuration_from(&tree.paths(&general), &Diagnostics::default()).unwrap_err();
	match err {
		BootstrapError::Connections(RepositoryError::LoadError(msg)) => {
			assert!(msg.contains("connection directory"));
		}
		other => panic!("unexpected error {:?}", other),
	}
}

#[test]
fn test_all_devices_invalid_is_fatal() {
	let tree = ConfigTree::new();
	tree.write_connection("plc.json", TCP_MASTER);
	tree.write_device("bad.json", r#"{"device-id": "d1", "model-id": 7}"#);
	let general = tree.write_general(json!({}));

	let err = load_configuration_from(&tree.paths(&general), &Diagnostics::default()).unwrap_err();
	assert!(matches!(err, BootstrapError::Devices(_)));
	assert!(err.to_string().starts_with("Failed to load device registry"));
}

#[test]
fn test_initialize_registries_with_default_repositories() {
	let tree = populated_tree();
	let general = GeneralConfig {
		base_address: DEFAULT_BASE_ADDRESS.to_string(),
		base_port: DEFAULT_BASE_PORT.to_string(),
		base_db_name: DEFAULT_BASE_DB_NAME.to_string(),
		base_login: DEFAULT_BASE_LOGIN.to_string(),
		base_password: String::new(),
		polled_devices_config_path: tree.root().display().to_string(),
		log_toggles: LogToggles::default(),
	};

	let (connections, devices) = initialize_registries::<ConnectionRepository, DeviceRepository>(
		&general,
		&Diagnostics::default(),
	)
	.unwrap();
	assert!(connections.get("plc").is_some());
	assert!(devices.get("meter-1").is_some());
}
