//! Core domain models for the telemetry server configuration.
//!
//! This module contains the validated entities produced by the loaders:
//! - General config: database settings, config root and logging toggles
//! - Connections: tcp/udp sockets and serial ports devices are reached through
//! - Devices: polled units bound to a connection

mod connection;
mod device;
mod general;

pub use connection::{
	ConnectionConfig, ConnectionType, DataBits, Endpoint, FlowControl, NetworkTransport, Parity,
	Role, SerialSettings, StopBits, DEFAULT_AWAIT_TIME, DEFAULT_BAUD_RATE,
	DEFAULT_NETWORK_ADDRESS, DEFAULT_NETWORK_PORT, DEFAULT_SERIAL_PORT,
};
pub use device::DeviceConfig;
pub use general::{
	ChannelToggles, GeneralConfig, LogToggles, DEFAULT_BASE_ADDRESS, DEFAULT_BASE_DB_NAME,
	DEFAULT_BASE_LOGIN, DEFAULT_BASE_PORT,
};
