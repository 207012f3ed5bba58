use serde::{Deserialize, Serialize};

/// Default time, in seconds, to wait for a device answer
pub const DEFAULT_AWAIT_TIME: u64 = 30;
/// Default address of a tcp/udp master connection
pub const DEFAULT_NETWORK_ADDRESS: &str = "127.0.0.1";
/// Default port of a tcp/udp connection
pub const DEFAULT_NETWORK_PORT: &str = "520";
/// Default serial device of a uart connection
pub const DEFAULT_SERIAL_PORT: &str = "/dev/ttyS0";
/// Default uart baud rate
pub const DEFAULT_BAUD_RATE: u64 = 19200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
	Master,
	Slave,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionType {
	Tcp,
	Udp,
	Uart,
}

/// Socket transport of a network connection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkTransport {
	Tcp,
	Udp,
}

impl From<NetworkTransport> for ConnectionType {
	fn from(transport: NetworkTransport) -> Self {
		match transport {
			NetworkTransport::Tcp => ConnectionType::Tcp,
			NetworkTransport::Udp => ConnectionType::Udp,
		}
	}
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowControl {
	#[default]
	None,
	Software,
	Hardware,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Parity {
	#[default]
	None,
	Odd,
	Even,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopBits {
	#[default]
	One,
	OnePointFive,
	Two,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataBits {
	Five,
	Six,
	Seven,
	#[default]
	Eight,
	Nine,
}

/// Line settings of a uart connection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerialSettings {
	pub port: String,
	pub baud_rate: u64,
	pub flow_control: FlowControl,
	pub parity: Parity,
	pub stop_bits: StopBits,
	pub data_bits: DataBits,
}

impl Default for SerialSettings {
	fn default() -> Self {
		Self {
			port: DEFAULT_SERIAL_PORT.to_string(),
			baud_rate: DEFAULT_BAUD_RATE,
			flow_control: FlowControl::default(),
			parity: Parity::default(),
			stop_bits: StopBits::default(),
			data_bits: DataBits::default(),
		}
	}
}

/// Type and role dependent part of a connection.
///
/// Each variant only carries the fields that are meaningful for it, so a
/// master address can never be read from a slave or serial connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Endpoint {
	NetworkMaster {
		transport: NetworkTransport,
		address: String,
		port: String,
	},
	NetworkSlave {
		transport: NetworkTransport,
		port: String,
		listen_addresses: Vec<String>,
	},
	Serial {
		role: Role,
		settings: SerialSettings,
	},
}

/// An addressable endpoint used to reach devices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionConfig {
	pub id: String,
	/// Answer timeout in seconds
	pub await_time: u64,
	pub endpoint: Endpoint,
}

impl ConnectionConfig {
	pub fn role(&self) -> Role {
		match &self.endpoint {
			Endpoint::NetworkMaster { .. } => Role::Master,
			Endpoint::NetworkSlave { .. } => Role::Slave,
			Endpoint::Serial { role, .. } => *role,
		}
	}

	pub fn connection_type(&self) -> ConnectionType {
		match &self.endpoint {
			Endpoint::NetworkMaster { transport, .. } | Endpoint::NetworkSlave { transport, .. } => {
				(*transport).into()
			}
			Endpoint::Serial { .. } => ConnectionType::Uart,
		}
	}

	/// Port of the endpoint, a socket port or a serial device path
	pub fn port(&self) -> &str {
		match &self.endpoint {
			Endpoint::NetworkMaster { port, .. } | Endpoint::NetworkSlave { port, .. } => port,
			Endpoint::Serial { settings, .. } => &settings.port,
		}
	}
}
