//! General configuration loading.
//!
//! The general document is resolved through [`ConfigPaths`], parsed, and its
//! fields extracted one by one. Only `polled-device-config-path` is required;
//! every other field falls back to its default with a warning. Each logging
//! toggle is applied to [`Diagnostics`] as soon as it is read, so it already
//! gates the diagnostics of the toggles that follow it.

use std::path::Path;

use crate::{
	models::{
		config::{
			document::{read_document, Document},
			error::ConfigError,
			field::{extract, extract_port, require_field, FieldOutcome},
			paths::ConfigPaths,
		},
		GeneralConfig, LogToggles, DEFAULT_BASE_ADDRESS, DEFAULT_BASE_DB_NAME,
		DEFAULT_BASE_LOGIN, DEFAULT_BASE_PORT,
	},
	utils::diagnostics::{Channel, Diagnostics, Severity},
};

const SQL_BASE_ADDRESS: &str = "sql-base-address";
const SQL_BASE_PORT: &str = "sql-base-port";
const SQL_BASE_DB_NAME: &str = "sql-base-db-name";
const SQL_BASE_LOGIN: &str = "sql-base-login";
const SQL_BASE_PASSWORD: &str = "sql-base-password";
const POLLED_DEVICE_CONFIG_PATH: &str = "polled-device-config-path";

const LOG_TOGGLE_FIELDS: [(&str, Channel, Severity); 6] = [
	("syslog-crit-enable", Channel::Syslog, Severity::Crit),
	("syslog-warn-enable", Channel::Syslog, Severity::Warn),
	("syslog-info-enable", Channel::Syslog, Severity::Info),
	("sqllog-crit-enable", Channel::Sqllog, Severity::Crit),
	("sqllog-warn-enable", Channel::Sqllog, Severity::Warn),
	("sqllog-info-enable", Channel::Sqllog, Severity::Info),
];

impl GeneralConfig {
	/// Resolve, parse and extract the general configuration.
	///
	/// Every error returned here is fatal for the process and has already been
	/// reported as a critical diagnostic.
	pub fn load(paths: &ConfigPaths, diagnostics: &Diagnostics) -> Result<Self, ConfigError> {
		let path = paths.resolve().map_err(|e| e.logged(diagnostics))?;
		diagnostics.info(format_args!(
			"using general configuration file {}",
			path.display()
		));

		let document = read_document(&path, "general configuration", diagnostics)?;
		Self::from_document(&document, &path, diagnostics)
	}

	/// Extract the general configuration from an already parsed document
	pub fn from_document(
		document: &Document,
		source: &Path,
		diagnostics: &Diagnostics,
	) -> Result<Self, ConfigError> {
		let source = source.display().to_string();

		let base_address = extract(document, SQL_BASE_ADDRESS, DEFAULT_BASE_ADDRESS.to_string())
			.report(diagnostics, &source, SQL_BASE_ADDRESS, Severity::Warn);
		let base_port = extract_port(document, SQL_BASE_PORT, DEFAULT_BASE_PORT).report(
			diagnostics,
			&source,
			SQL_BASE_PORT,
			Severity::Warn,
		);
		let base_db_name = extract(document, SQL_BASE_DB_NAME, DEFAULT_BASE_DB_NAME.to_string())
			.report(diagnostics, &source, SQL_BASE_DB_NAME, Severity::Warn);
		let base_login = extract(document, SQL_BASE_LOGIN, DEFAULT_BASE_LOGIN.to_string())
			.report(diagnostics, &source, SQL_BASE_LOGIN, Severity::Warn);

		let base_password = extract(document, SQL_BASE_PASSWORD, String::new()).report(
			diagnostics,
			&source,
			SQL_BASE_PASSWORD,
			Severity::Warn,
		);

		let polled_devices_config_path = require_field::<String>(
			document,
			POLLED_DEVICE_CONFIG_PATH,
			&source,
			diagnostics,
			Severity::Crit,
		)?;

		// Each toggle takes effect before the next field is read
		let mut log_toggles = LogToggles::default();
		for (field, channel, severity) in LOG_TOGGLE_FIELDS {
			let extracted = extract(document, field, true);
			let explicit = extracted.outcome == FieldOutcome::Present;
			let enabled = extracted.report(diagnostics, &source, field, Severity::Warn);
			set_toggle(&mut log_toggles, channel, severity, enabled);
			diagnostics.apply(log_toggles);

			if explicit {
				diagnostics.info(format_args!(
					"{} logging of {} messages on the {} channel",
					if enabled { "enabled" } else { "disabled" },
					severity.as_str(),
					channel
				));
			}
		}

		Ok(GeneralConfig {
			base_address,
			base_port,
			base_db_name,
			base_login,
			base_password,
			polled_devices_config_path,
			log_toggles,
		})
	}

	/// Directory root used by the connection and device loaders
	pub fn config_root(&self) -> &Path {
		Path::new(&self.polled_devices_config_path)
	}
}

fn set_toggle(toggles: &mut LogToggles, channel: Channel, severity: Severity, enabled: bool) {
	let channel = match channel {
		Channel::Syslog => &mut toggles.syslog,
		Channel::Sqllog => &mut toggles.sqllog,
	};
	match severity {
		Severity::Crit => channel.crit = enabled,
		Severity::Warn => channel.warn = enabled,
		Severity::Info => channel.info = enabled,
	}
}
