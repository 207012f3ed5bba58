//! Connection registry.
//!
//! Holds every connection loaded from `<root>/configs/connections`, keyed by
//! `connection-id`. The registry is filled once and only read afterwards.

use std::{collections::HashMap, path::Path};

use crate::{
	models::{ConfigLoader, ConnectionConfig},
	repositories::error::RepositoryError,
	utils::diagnostics::Diagnostics,
};

/// Repository for storing and retrieving connection configurations
///
/// The map is only reachable through [`ConnectionRepositoryTrait`], so a loaded
/// registry cannot be altered:
///
/// ```compile_fail
/// use telemetry_server::repositories::ConnectionRepository;
///
/// let mut repository = ConnectionRepository::default();
/// repository.connections.clear();
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConnectionRepository {
	/// Map of connection ids to their configurations
	connections: HashMap<String, ConnectionConfig>,
}

impl ConnectionRepository {
	/// Build a repository from an in-memory map.
	///
	/// Every key has to be the id of the connection it maps to.
	pub fn new_with_connections(
		connections: HashMap<String, ConnectionConfig>,
	) -> Result<Self, RepositoryError> {
		if let Some((key, connection)) = connections.iter().find(|(key, c)| **key != c.id) {
			return Err(RepositoryError::validation_error(format!(
				"connection '{}' is registered under key '{}'",
				connection.id, key
			)));
		}
		Ok(ConnectionRepository { connections })
	}
}

/// Interface for connection repository implementations
pub trait ConnectionRepositoryTrait {
	/// Create a repository from the configuration root
	fn new(root: &Path, diagnostics: &Diagnostics) -> Result<Self, RepositoryError>
	where
		Self: Sized;

	/// Load all connection configurations under the configuration root
	fn load_all(
		root: &Path,
		diagnostics: &Diagnostics,
	) -> Result<HashMap<String, ConnectionConfig>, RepositoryError>;

	/// Get a connection by id
	fn get(&self, connection_id: &str) -> Option<&ConnectionConfig>;

	fn get_all(&self) -> &HashMap<String, ConnectionConfig>;
}

impl ConnectionRepositoryTrait for ConnectionRepository {
	fn new(root: &Path, diagnostics: &Diagnostics) -> Result<Self, RepositoryError> {
		let connections = Self::load_all(root, diagnostics)?;
		Ok(ConnectionRepository { connections })
	}

	fn load_all(
		root: &Path,
		diagnostics: &Diagnostics,
	) -> Result<HashMap<String, ConnectionConfig>, RepositoryError> {
		ConnectionConfig::load_all(root, diagnostics).map_err(|e| {
			RepositoryError::load_error(format!("Failed to load connections: {}", e))
		})
	}

	fn get(&self, connection_id: &str) -> Option<&ConnectionConfig> {
		self.connections.get(connection_id)
	}

	fn get_all(&self) -> &HashMap<String, ConnectionConfig> {
		&self.connections
	}
}
