use std::collections::HashMap;

use crate::integration::fixtures::{ConfigTree, SERIAL_SLAVE, TCP_MASTER};

use telemetry_server::{
	models::{ConfigError, ConfigLoader, ConnectionConfig, ConnectionType, Endpoint, Role},
	utils::diagnostics::Diagnostics,
};
use tracing_test::traced_test;

fn load(tree: &ConfigTree) -> Result<HashMap<String, ConnectionConfig>, ConfigError> {
	ConnectionConfig::load_all(tree.root(), &Diagnostics::default())
}

#[traced_test]
#[test]
fn test_slave_without_listen_addresses_is_not_registered() {
	let tree = ConfigTree::new();
	tree.write_connection("master.json", TCP_MASTER);
	tree.write_connection(
		"slave.json",
		r#"{"connection-id": "gateway", "connection-role": "slave", "connection-type": "udp", "port": 1502}"#,
	);

	let connections = load(&tree).unwrap();

	assert_eq!(connections.len(), 1);
	assert!(!connections.contains_key("gateway"));
	assert!(logs_contain("could not add connection settings from file"));
	assert!(logs_contain("slave.json"));
}

#[test]
fn test_invalid_sibling_does_not_abort_loading() {
	let tree = ConfigTree::new();
	tree.write_connection("a.json", TCP_MASTER);
	tree.write_connection(
		"b.json",
		r#"{"connection-id": "no-type", "connection-role": "master"}"#,
	);
	tree.write_connection("c.json", r#"{"connection-id": "broken", "#);
	tree.write_connection("d.json", SERIAL_SLAVE);

	let connections = load(&tree).unwrap();

	let mut ids: Vec<_> = connections.keys().cloned().collect();
	ids.sort();
	assert_eq!(ids, vec!["plc", "rs485"]);
	assert_eq!(connections["rs485"].connection_type(), ConnectionType::Uart);
}

#[test]
fn test_uppercase_extension_is_loaded() {
	let tree = ConfigTree::new();
	tree.write_connection("PLC.JSON", TCP_MASTER);

	let connections = load(&tree).unwrap();
	assert_eq!(connections["plc"].role(), Role::Master);
}

#[test]
fn test_network_slave_is_registered() {
	let tree = ConfigTree::new();
	tree.write_connection(
		"listener.json",
		r#"{
			"connection-id": "listener",
			"connection-role": "slave",
			"connection-type": "tcp",
			"port": "1502",
			"listen-addresses": ["0.0.0.0"]
		}"#,
	);

	let connections = load(&tree).unwrap();
	match &connections["listener"].endpoint {
		Endpoint::NetworkSlave {
			port,
			listen_addresses,
			..
		} => {
			assert_eq!(port, "1502");
			assert_eq!(listen_addresses, &vec!["0.0.0.0".to_string()]);
		}
		other => panic!("unexpected endpoint {:?}", other),
	}
}

#[test]
fn test_loading_twice_gives_same_registry() {
	let tree = ConfigTree::new();
	tree.write_connection("a.json", TCP_MASTER);
	tree.write_connection("b.json", SERIAL_SLAVE);

	assert_eq!(load(&tree).unwrap(), load(&tree).unwrap());
}
