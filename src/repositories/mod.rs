//! Registries of validated entities.
//!
//! Repositories own the maps produced by the loaders and hand out read-only
//! views to consumers.

mod connection;
mod device;
mod error;

pub use connection::{ConnectionRepository, ConnectionRepositoryTrait};
pub use device::{DeviceRepository, DeviceRepositoryTrait};
pub use error::RepositoryError;
