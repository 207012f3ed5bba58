//! Typed field extraction with default fallback.
//!
//! [`extract`] never fails: a missing field or a field of the wrong JSON type
//! yields the supplied default together with a [`FieldOutcome`] saying why.
//! The caller decides whether that outcome is fatal, a skip, or only worth a
//! diagnostic. Port-like fields go through [`extract_port`], which also accepts
//! an unsigned integer and normalizes it to a string.

use std::fmt;

use serde_json::Value;

use crate::{
	models::config::{document::Document, error::ConfigError},
	utils::diagnostics::{Channel, Diagnostics, Severity},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldOutcome {
	Present,
	Absent,
	WrongType,
}

/// Value of a field and how it was obtained
#[derive(Debug, Clone, PartialEq)]
pub struct Extracted<T> {
	pub value: T,
	pub outcome: FieldOutcome,
}

/// JSON types a field can be read as
pub trait FieldValue: Sized {
	/// Name of the expected JSON type, used in diagnostics
	const EXPECTED: &'static str;

	fn from_value(value: &Value) -> Option<Self>;
}

impl FieldValue for String {
	const EXPECTED: &'static str = "string";

	fn from_value(value: &Value) -> Option<Self> {
		value.as_str().map(str::to_string)
	}
}

impl FieldValue for bool {
	const EXPECTED: &'static str = "boolean";

	fn from_value(value: &Value) -> Option<Self> {
		value.as_bool()
	}
}

impl FieldValue for u64 {
	const EXPECTED: &'static str = "unsigned integer";

	fn from_value(value: &Value) -> Option<Self> {
		value.as_u64()
	}
}

/// Arrays keep their string elements; other elements are dropped.
impl FieldValue for Vec<String> {
	const EXPECTED: &'static str = "array of strings";

	fn from_value(value: &Value) -> Option<Self> {
		value.as_array().map(|items| {
			items
				.iter()
				.filter_map(Value::as_str)
				.map(str::to_string)
				.collect()
		})
	}
}

pub fn extract<T: FieldValue>(document: &Document, field: &str, default: T) -> Extracted<T> {
	extract_with(document, field, default, T::from_value)
}

/// Read a port-like field: a JSON string, or an unsigned integer rendered as a string
pub fn extract_port(
	document: &Document,
	field: &str,
	default: impl Into<String>,
) -> Extracted<String> {
	extract_with(document, field, default.into(), port_from_value)
}

pub fn extract_with<T>(
	document: &Document,
	field: &str,
	default: T,
	convert: impl FnOnce(&Value) -> Option<T>,
) -> Extracted<T> {
	match document.get(field) {
		None => Extracted {
			value: default,
			outcome: FieldOutcome::Absent,
		},
		Some(value) => match convert(value) {
			Some(value) => Extracted {
				value,
				outcome: FieldOutcome::Present,
			},
			None => Extracted {
				value: default,
				outcome: FieldOutcome::WrongType,
			},
		},
	}
}

fn port_from_value(value: &Value) -> Option<String> {
	match value {
		Value::String(port) => Some(port.clone()),
		Value::Number(number) => number.as_u64().map(|port| port.to_string()),
		_ => None,
	}
}

impl<T: fmt::Debug> Extracted<T> {
	/// Emit the fallback diagnostic, if any, and return the value.
	///
	/// A wrong type is always a warning; `absent` is the severity used when the
	/// field is missing.
	pub fn report(
		self,
		diagnostics: &Diagnostics,
		source: &str,
		field: &str,
		absent: Severity,
	) -> T {
		report_fallback(diagnostics, source, field, self.outcome, &self.value, absent);
		self.value
	}
}

/// Diagnostic for a field that fell back to `default`
pub fn report_fallback(
	diagnostics: &Diagnostics,
	source: &str,
	field: &str,
	outcome: FieldOutcome,
	default: &impl fmt::Debug,
	absent: Severity,
) {
	match outcome {
		FieldOutcome::Present => {}
		FieldOutcome::Absent => diagnostics.emit(
			Channel::Syslog,
			absent,
			format_args!(
				"{}: field '{}' is missing, using default {:?}",
				source, field, default
			),
		),
		FieldOutcome::WrongType => diagnostics.warn(format_args!(
			"{}: field '{}' has the wrong type, using default {:?}",
			source, field, default
		)),
	}
}

/// Read a field whose absence or wrong type prevents building the entity.
///
/// The failure is reported at `severity` and returned as
/// [`ConfigError::MissingRequiredField`].
pub fn require_field<T: FieldValue>(
	document: &Document,
	field: &str,
	source: &str,
	diagnostics: &Diagnostics,
	severity: Severity,
) -> Result<T, ConfigError> {
	let extracted = extract_with(document, field, None, |value| T::from_value(value).map(Some));
	match (extracted.outcome, extracted.value) {
		(FieldOutcome::Present, Some(value)) => Ok(value),
		(outcome, _) => {
			let reason = match outcome {
				FieldOutcome::WrongType => format!("has the wrong type, expected {}", T::EXPECTED),
				_ => "is missing".to_string(),
			};
			let error = ConfigError::missing_required_field(format!(
				"{}: required field '{}' {}",
				source, field, reason
			));
			diagnostics.emit(Channel::Syslog, severity, &error);
			Err(error)
		}
	}
}

/// Value paired with the first token contained in `raw`.
///
/// Tokens are tried in slice order, so a longer token that contains a shorter
/// one has to come first. The comparison is case-sensitive.
pub fn match_token<T: Copy>(raw: &str, tokens: &[(&str, T)]) -> Option<T> {
	tokens
		.iter()
		.find(|(token, _)| raw.contains(token))
		.map(|(_, value)| *value)
}

/// Like [`match_token`], ignoring ASCII case. Tokens must be lowercase.
pub fn match_token_ignore_case<T: Copy>(raw: &str, tokens: &[(&str, T)]) -> Option<T> {
	match_token(&raw.to_ascii_lowercase(), tokens)
}
