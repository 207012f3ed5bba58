use serde::{Deserialize, Serialize};

/// A polled device bound to a connection by id.
///
/// `connection_id` is a plain reference; it is not checked against the
/// connection registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceConfig {
	pub id: String,
	pub connection_id: String,
	pub model_id: String,
}
