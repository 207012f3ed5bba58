use serde::{Deserialize, Serialize};

/// Default address of the SQL database
pub const DEFAULT_BASE_ADDRESS: &str = "127.0.0.1";
/// Default port of the SQL database
pub const DEFAULT_BASE_PORT: &str = "5432";
/// Default database name
pub const DEFAULT_BASE_DB_NAME: &str = "telemetry_server";
/// Default database login
pub const DEFAULT_BASE_LOGIN: &str = "postgres";

/// Severity toggles of a single logging channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelToggles {
	pub crit: bool,
	pub warn: bool,
	pub info: bool,
}

impl Default for ChannelToggles {
	fn default() -> Self {
		Self {
			crit: true,
			warn: true,
			info: true,
		}
	}
}

/// Logging toggles for the application (`syslog`) and persistence (`sqllog`) channels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogToggles {
	pub syslog: ChannelToggles,
	pub sqllog: ChannelToggles,
}

/// Process bootstrap settings read from the general configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralConfig {
	pub base_address: String,
	pub base_port: String,
	pub base_db_name: String,
	pub base_login: String,
	pub base_password: String,
	/// Root directory holding `configs/connections` and `configs/devices`
	pub polled_devices_config_path: String,
	pub log_toggles: LogToggles,
}
