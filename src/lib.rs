//! Configuration bootstrap of the telemetry server.
//!
//! Locates and loads the general configuration, then the connection and device
//! registries it points to, reporting every problem through a channel and
//! severity gated diagnostics sink.

pub mod bootstrap;
pub mod models;
pub mod repositories;
pub mod utils;
