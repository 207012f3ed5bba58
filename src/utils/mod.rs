//! Utility modules for common functionality.
//!
//! - diagnostics: Severity and channel gated diagnostics sink
//! - logging: Tracing subscriber setup

pub mod diagnostics;
pub mod logging;

pub use diagnostics::{Channel, Diagnostics, Severity};
