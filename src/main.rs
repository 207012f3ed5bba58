//! Telemetry server entry point.
//!
//! Loads the server configuration and exits. The general configuration is taken
//! from the optional `CONFIG` argument, `$HOME/.config/telemetry_server/` or
//! `/etc/telemetry_server/`, in that order.
//!
//! # Flow
//! 1. Loads `.env` and applies logging options to the environment
//! 2. Sets up logging
//! 3. Loads the general configuration and applies its logging toggles
//! 4. Loads the connection and device registries
//! 5. Optionally prints the loaded configuration as JSON

use std::{
	collections::BTreeMap,
	env::{set_var, var},
	path::PathBuf,
	process::ExitCode,
};

use anyhow::Context;
use clap::{Arg, ArgMatches, Command};
use dotenvy::dotenv;
use serde_json::json;

use telemetry_server::{
	bootstrap::{load_configuration, LoadedConfiguration},
	repositories::{ConnectionRepositoryTrait, DeviceRepositoryTrait},
	utils::{diagnostics::Diagnostics, logging::setup_logging},
};

const MASKED_PASSWORD: &str = "********";

fn command() -> Command {
	Command::new("telemetry-server")
		.version(env!("CARGO_PKG_VERSION"))
		.about("Loads and validates the telemetry server configuration.")
		.arg(
			Arg::new("config")
				.help("Path to the general configuration file")
				.value_name("CONFIG")
				.value_parser(clap::value_parser!(PathBuf)),
		)
		.arg(
			Arg::new("log-file")
				.long("log-file")
				.help("Write logs to file instead of stdout")
				.action(clap::ArgAction::SetTrue),
		)
		.arg(
			Arg::new("log-level")
				.long("log-level")
				.help("Set log level (trace, debug, info, warn, error)")
				.value_name("LEVEL"),
		)
		.arg(
			Arg::new("log-path")
				.long("log-path")
				.help("Path to store log files (default: logs/)")
				.value_name("PATH"),
		)
		.arg(
			Arg::new("dump")
				.long("dump")
				.help("Print the loaded configuration as JSON")
				.action(clap::ArgAction::SetTrue),
		)
}

/// Copy logging options into the environment unless already set there
fn apply_log_options(matches: &ArgMatches) {
	if matches.get_flag("log-file") && var("LOG_MODE").is_err() {
		set_var("LOG_MODE", "file");
	}

	if let Some(level) = matches.get_one::<String>("log-level") {
		if var("LOG_LEVEL").is_err() {
			set_var("LOG_LEVEL", level);
		}
	}

	if let Some(path) = matches.get_one::<String>("log-path") {
		if var("LOG_DATA_DIR").is_err() {
			set_var("LOG_DATA_DIR", path);
		}
	}
}

/// JSON view of the configuration with sorted registries and a masked password
fn dump(configuration: &LoadedConfiguration) -> anyhow::Result<String> {
	let mut general = configuration.general.clone();
	if !general.base_password.is_empty() {
		general.base_password = MASKED_PASSWORD.to_string();
	}
	let connections: BTreeMap<_, _> = configuration.connections.get_all().iter().collect();
	let devices: BTreeMap<_, _> = configuration.devices.get_all().iter().collect();

	serde_json::to_string_pretty(&json!({
		"general": general,
		"connections": connections,
		"devices": devices,
	}))
	.context("Failed to serialize configuration")
}

fn run(matches: &ArgMatches, diagnostics: &Diagnostics) -> anyhow::Result<()> {
	let explicit = matches.get_one::<PathBuf>("config");
	let configuration = load_configuration(explicit.map(PathBuf::as_path), diagnostics)?;

	if matches.get_flag("dump") {
		println!("{}", dump(&configuration)?);
	}
	Ok(())
}

fn main() -> ExitCode {
	let matches = command().get_matches();

	// Load environment variables from .env file
	dotenv().ok();
	apply_log_options(&matches);

	if let Err(e) = setup_logging() {
		eprintln!("Failed to setup logging: {}", e);
	}

	let diagnostics = Diagnostics::default();
	match run(&matches, &diagnostics) {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			diagnostics.crit(format_args!("startup aborted: {:#}", e));
			ExitCode::FAILURE
		}
	}
}
