//! Logging utilities for the application
//!
//! This module sets up the process-wide `tracing` subscriber that receives the
//! messages forwarded by [`crate::utils::diagnostics::Diagnostics`].
//!
//! The level comes from `LOG_LEVEL`, then `RUST_LOG`, then defaults to `info`.
//! With `LOG_MODE=file` the output goes to a daily rolling file in `LOG_DATA_DIR`
//! (default `logs/`) instead of stdout.
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Default directory for log files
pub const DEFAULT_LOG_DIR: &str = "logs/";
/// File name prefix of the rolling log files
pub const LOG_FILE_PREFIX: &str = "telemetry_server.log";

/// Setup logging for the application
///
/// Reads `LOG_MODE` and `LOG_DATA_DIR` to choose between stdout and a rolling
/// log file.
pub fn setup_logging() -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
	let log_to_file = std::env::var("LOG_MODE")
		.map(|mode| mode.eq_ignore_ascii_case("file"))
		.unwrap_or(false);

	if log_to_file {
		let dir = std::env::var("LOG_DATA_DIR").unwrap_or_else(|_| DEFAULT_LOG_DIR.to_string());
		let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
		setup_logging_with_writer(appender, false)
	} else {
		setup_logging_with_writer(std::io::stdout, true)
	}
}

/// Setup logging for the application with a custom writer
pub fn setup_logging_with_writer<W>(
	writer: W,
	ansi: bool,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>>
where
	W: for<'writer> tracing_subscriber::fmt::MakeWriter<'writer> + Send + Sync + 'static,
{
	subscriber(writer, ansi).try_init()?;
	Ok(())
}

fn subscriber<W>(writer: W, ansi: bool) -> impl tracing::Subscriber + Send + Sync + 'static
where
	W: for<'writer> tracing_subscriber::fmt::MakeWriter<'writer> + Send + Sync + 'static,
{
	tracing_subscriber::registry().with(env_filter()).with(
		fmt::layer()
			.with_writer(writer)
			.with_ansi(ansi)
			.event_format(
				fmt::format()
					.with_level(true)
					.with_target(false)
					.with_thread_ids(false)
					.with_thread_names(false)
					.with_ansi(ansi)
					.compact(),
			)
			.fmt_fields(fmt::format::PrettyFields::new()),
	)
}

fn env_filter() -> EnvFilter {
	match std::env::var("LOG_LEVEL") {
		Ok(level) if !level.trim().is_empty() => EnvFilter::new(level),
		_ => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
	}
}
