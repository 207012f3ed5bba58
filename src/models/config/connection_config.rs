//! Connection configuration loading.
//!
//! A connection file is decoded in two steps. The three discriminating fields
//! (`connection-id`, `connection-role`, `connection-type`) are required and pick
//! the [`Endpoint`] variant; the remaining fields are read only for the variant
//! they belong to. Optional fields fall back to their defaults, but a tcp/udp
//! slave without listen addresses is rejected.

use std::{fmt, path::Path};

use serde_json::Value;

use crate::{
	models::{
		config::{
			document::{read_document, Document},
			error::ConfigError,
			field::{
				extract, extract_port, extract_with, match_token, match_token_ignore_case,
				report_fallback, require_field, FieldOutcome,
			},
			ConfigLoader,
		},
		ConnectionConfig, ConnectionType, DataBits, Endpoint, FlowControl, NetworkTransport,
		Parity, Role, SerialSettings, StopBits, DEFAULT_AWAIT_TIME, DEFAULT_BAUD_RATE,
		DEFAULT_NETWORK_ADDRESS, DEFAULT_NETWORK_PORT, DEFAULT_SERIAL_PORT,
	},
	utils::diagnostics::{Diagnostics, Severity},
};

const CONNECTION_ID: &str = "connection-id";
const CONNECTION_ROLE: &str = "connection-role";
const CONNECTION_TYPE: &str = "connection-type";
const AWAIT_TIME: &str = "await-time";
const ADDRESS: &str = "address";
const PORT: &str = "port";
const LISTEN_ADDRESSES: &str = "listen-addresses";
const BAUDRATE: &str = "baudrate";
const FLOW_CONTROL: &str = "flow-control";
const PARITY: &str = "parity";
const STOP_BITS: &str = "stop-bits";
const DATA_BITS: &str = "data-bits";

const ROLE_TOKENS: [(&str, Role); 2] = [("master", Role::Master), ("slave", Role::Slave)];

const TYPE_TOKENS: [(&str, ConnectionType); 3] = [
	("tcp", ConnectionType::Tcp),
	("udp", ConnectionType::Udp),
	("uart", ConnectionType::Uart),
];

const FLOW_CONTROL_TOKENS: [(&str, FlowControl); 3] = [
	("none", FlowControl::None),
	("hardware", FlowControl::Hardware),
	("software", FlowControl::Software),
];

const PARITY_TOKENS: [(&str, Parity); 3] = [
	("none", Parity::None),
	("even", Parity::Even),
	("odd", Parity::Odd),
];

// "one-point-five" contains "one" and has to be tried first.
const STOP_BITS_TOKENS: [(&str, StopBits); 3] = [
	("one-point-five", StopBits::OnePointFive),
	("one", StopBits::One),
	("two", StopBits::Two),
];

const DATA_BITS_TOKENS: [(&str, DataBits); 5] = [
	("five", DataBits::Five),
	("six", DataBits::Six),
	("seven", DataBits::Seven),
	("eight", DataBits::Eight),
	("nine", DataBits::Nine),
];

impl ConfigLoader for ConnectionConfig {
	const KIND: &'static str = "connection";
	const DIRECTORY: &'static str = "connections";

	fn id(&self) -> &str {
		&self.id
	}

	fn load_from_path(path: &Path, diagnostics: &Diagnostics) -> Result<Self, ConfigError> {
		let document = read_document(path, "connection configuration", diagnostics)?;
		Self::from_document(&document, &path.display().to_string(), diagnostics)
	}
}

impl ConnectionConfig {
	/// Build a connection from a parsed document.
	///
	/// `source` names the document in diagnostics. Any error means the
	/// connection is skipped; it has already been reported as a warning.
	pub fn from_document(
		document: &Document,
		source: &str,
		diagnostics: &Diagnostics,
	) -> Result<Self, ConfigError> {
		let id: String = require_field(document, CONNECTION_ID, source, diagnostics, Severity::Warn)?;
		let context = format!("{} (connection '{}')", source, id);

		let raw_role: String =
			require_field(document, CONNECTION_ROLE, &context, diagnostics, Severity::Warn)?;
		let raw_type: String =
			require_field(document, CONNECTION_TYPE, &context, diagnostics, Severity::Warn)?;

		let role = match_token_ignore_case(&raw_role, &ROLE_TOKENS).ok_or_else(|| {
			invalid_value(diagnostics, &context, CONNECTION_ROLE, &raw_role, "master or slave")
		})?;
		let connection_type = match_token(&raw_type, &TYPE_TOKENS).ok_or_else(|| {
			invalid_value(diagnostics, &context, CONNECTION_TYPE, &raw_type, "tcp, udp or uart")
		})?;

		let await_time = extract(document, AWAIT_TIME, DEFAULT_AWAIT_TIME).report(
			diagnostics,
			&context,
			AWAIT_TIME,
			Severity::Info,
		);

		let endpoint = match connection_type {
			ConnectionType::Tcp => network_endpoint(
				document,
				NetworkTransport::Tcp,
				role,
				&context,
				diagnostics,
			)?,
			ConnectionType::Udp => network_endpoint(
				document,
				NetworkTransport::Udp,
				role,
				&context,
				diagnostics,
			)?,
			ConnectionType::Uart => Endpoint::Serial {
				role,
				settings: serial_settings(document, &context, diagnostics),
			},
		};

		Ok(ConnectionConfig {
			id,
			await_time,
			endpoint,
		})
	}
}

fn invalid_value(
	diagnostics: &Diagnostics,
	context: &str,
	field: &str,
	raw: &str,
	expected: &str,
) -> ConfigError {
	let error = ConfigError::validation_error(format!(
		"{}: field '{}' must contain {}, got {:?}",
		context, field, expected, raw
	));
	diagnostics.warn(&error);
	error
}

fn network_endpoint(
	document: &Document,
	transport: NetworkTransport,
	role: Role,
	context: &str,
	diagnostics: &Diagnostics,
) -> Result<Endpoint, ConfigError> {
	let port = extract_port(document, PORT, DEFAULT_NETWORK_PORT).report(
		diagnostics,
		context,
		PORT,
		Severity::Info,
	);

	match role {
		Role::Master => {
			let address = extract(document, ADDRESS, DEFAULT_NETWORK_ADDRESS.to_string())
				.report(diagnostics, context, ADDRESS, Severity::Info);
			Ok(Endpoint::NetworkMaster {
				transport,
				address,
				port,
			})
		}
		Role::Slave => {
			let listen_addresses: Vec<String> =
				require_field(document, LISTEN_ADDRESSES, context, diagnostics, Severity::Warn)?;
			if listen_addresses.is_empty() {
				let error = ConfigError::validation_error(format!(
					"{}: field '{}' holds no address to listen on",
					context, LISTEN_ADDRESSES
				));
				diagnostics.warn(&error);
				return Err(error);
			}
			Ok(Endpoint::NetworkSlave {
				transport,
				port,
				listen_addresses,
			})
		}
	}
}

fn serial_settings(document: &Document, context: &str, diagnostics: &Diagnostics) -> SerialSettings {
	SerialSettings {
		port: extract_port(document, PORT, DEFAULT_SERIAL_PORT).report(
			diagnostics,
			context,
			PORT,
			Severity::Info,
		),
		baud_rate: extract(document, BAUDRATE, DEFAULT_BAUD_RATE).report(
			diagnostics,
			context,
			BAUDRATE,
			Severity::Info,
		),
		flow_control: decoded_field(document, FLOW_CONTROL, context, diagnostics, |value| {
			value.as_str().map(|raw| match_token(raw, &FLOW_CONTROL_TOKENS))
		}),
		parity: decoded_field(document, PARITY, context, diagnostics, |value| {
			value.as_str().map(|raw| match_token(raw, &PARITY_TOKENS))
		}),
		stop_bits: decoded_field(document, STOP_BITS, context, diagnostics, decode_stop_bits),
		data_bits: decoded_field(document, DATA_BITS, context, diagnostics, decode_data_bits),
	}
}

/// Read an enumerated field.
///
/// `decode` returns `None` for a JSON type it cannot read and `Some(None)` for
/// a readable value that names no known variant. Both fall back to the default
/// with a warning.
fn decoded_field<T>(
	document: &Document,
	field: &str,
	context: &str,
	diagnostics: &Diagnostics,
	decode: impl FnOnce(&Value) -> Option<Option<T>>,
) -> T
where
	T: Default + fmt::Debug,
{
	let extracted = extract_with(document, field, None, decode);
	match (extracted.outcome, extracted.value) {
		(FieldOutcome::Present, Some(value)) => value,
		(FieldOutcome::Present, None) => {
			let default = T::default();
			diagnostics.warn(format_args!(
				"{}: field '{}' has an unknown value, using default {:?}",
				context, field, default
			));
			default
		}
		(outcome, _) => {
			let default = T::default();
			report_fallback(diagnostics, context, field, outcome, &default, Severity::Info);
			default
		}
	}
}

fn decode_stop_bits(value: &Value) -> Option<Option<StopBits>> {
	match value {
		Value::String(raw) => Some(match_token(raw, &STOP_BITS_TOKENS)),
		Value::Number(number) => Some(number.as_f64().and_then(|bits| {
			// Compared in tenths so 1.5 is matched exactly.
			match (bits * 10.0).round() as i64 {
				10 => Some(StopBits::One),
				15 => Some(StopBits::OnePointFive),
				20 => Some(StopBits::Two),
				_ => None,
			}
		})),
		_ => None,
	}
}

fn decode_data_bits(value: &Value) -> Option<Option<DataBits>> {
	match value {
		Value::String(raw) => Some(match_token(raw, &DATA_BITS_TOKENS)),
		Value::Number(number) => Some(number.as_u64().and_then(|bits| match bits {
			5 => Some(DataBits::Five),
			6 => Some(DataBits::Six),
			7 => Some(DataBits::Seven),
			8 => Some(DataBits::Eight),
			9 => Some(DataBits::Nine),
			_ => None,
		})),
		_ => None,
	}
}
