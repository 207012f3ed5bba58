//! Domain models and configuration loading for the telemetry server.
//!
//! - `config`: locating, parsing and extracting configuration documents
//! - `core`: validated entities (general config, connections, devices)

mod config;
mod core;

// Re-export core types
pub use core::{
	ChannelToggles, ConnectionConfig, ConnectionType, DataBits, DeviceConfig, Endpoint,
	FlowControl, GeneralConfig, LogToggles, NetworkTransport, Parity, Role, SerialSettings,
	StopBits, DEFAULT_AWAIT_TIME, DEFAULT_BASE_ADDRESS, DEFAULT_BASE_DB_NAME, DEFAULT_BASE_LOGIN,
	DEFAULT_BASE_PORT, DEFAULT_BAUD_RATE, DEFAULT_NETWORK_ADDRESS, DEFAULT_NETWORK_PORT,
	DEFAULT_SERIAL_PORT,
};

// Re-export config types
pub use config::{
	extract, extract_port, extract_with, match_token, match_token_ignore_case, read_document,
	report_fallback, require_field, ConfigError, ConfigLoader, ConfigPaths, Document, Extracted,
	FieldOutcome, FieldValue, CONFIGS_DIR, GENERAL_CONFIG_FILE, SYSTEM_CONFIG_PATH,
	USER_CONFIG_DIR,
};
