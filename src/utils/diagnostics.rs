//! Diagnostics sink shared by every loader.
//!
//! Holds the six logging toggles (crit/warn/info for the `syslog` application
//! channel and the `sqllog` persistence channel) and forwards enabled messages
//! to `tracing`. A single `Diagnostics` value is created all-enabled at startup,
//! updated once by the general config loader through [`Diagnostics::apply`] and
//! only read afterwards. Loaders receive it by reference.

use std::{
	fmt,
	sync::atomic::{AtomicBool, Ordering},
};

use crate::models::{ChannelToggles, LogToggles};

/// Logging channel a diagnostic is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
	/// Application log
	Syslog,
	/// Persistence log
	Sqllog,
}

impl Channel {
	pub fn as_str(&self) -> &'static str {
		match self {
			Channel::Syslog => "syslog",
			Channel::Sqllog => "sqllog",
		}
	}
}

impl fmt::Display for Channel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
	Crit,
	Warn,
	Info,
}

impl Severity {
	pub fn as_str(&self) -> &'static str {
		match self {
			Severity::Crit => "critical",
			Severity::Warn => "warning",
			Severity::Info => "informational",
		}
	}
}

#[derive(Debug)]
struct ChannelFlags {
	crit: AtomicBool,
	warn: AtomicBool,
	info: AtomicBool,
}

impl ChannelFlags {
	fn new(toggles: ChannelToggles) -> Self {
		Self {
			crit: AtomicBool::new(toggles.crit),
			warn: AtomicBool::new(toggles.warn),
			info: AtomicBool::new(toggles.info),
		}
	}

	fn store(&self, toggles: ChannelToggles) {
		self.crit.store(toggles.crit, Ordering::Release);
		self.warn.store(toggles.warn, Ordering::Release);
		self.info.store(toggles.info, Ordering::Release);
	}

	fn load(&self) -> ChannelToggles {
		ChannelToggles {
			crit: self.crit.load(Ordering::Acquire),
			warn: self.warn.load(Ordering::Acquire),
			info: self.info.load(Ordering::Acquire),
		}
	}

	fn flag(&self, severity: Severity) -> &AtomicBool {
		match severity {
			Severity::Crit => &self.crit,
			Severity::Warn => &self.warn,
			Severity::Info => &self.info,
		}
	}
}

/// Severity and channel gated front end to the process log
#[derive(Debug)]
pub struct Diagnostics {
	syslog: ChannelFlags,
	sqllog: ChannelFlags,
}

impl Default for Diagnostics {
	fn default() -> Self {
		Self::new(LogToggles::default())
	}
}

impl Diagnostics {
	pub fn new(toggles: LogToggles) -> Self {
		Self {
			syslog: ChannelFlags::new(toggles.syslog),
			sqllog: ChannelFlags::new(toggles.sqllog),
		}
	}

	/// Current state of all six toggles
	pub fn toggles(&self) -> LogToggles {
		LogToggles {
			syslog: self.syslog.load(),
			sqllog: self.sqllog.load(),
		}
	}

	/// Replace all toggles at once. Takes effect for the next emitted message.
	pub fn apply(&self, toggles: LogToggles) {
		self.syslog.store(toggles.syslog);
		self.sqllog.store(toggles.sqllog);
	}

	pub fn is_enabled(&self, channel: Channel, severity: Severity) -> bool {
		self.channel(channel)
			.flag(severity)
			.load(Ordering::Acquire)
	}

	/// Emit a message if its channel and severity are enabled
	pub fn emit(&self, channel: Channel, severity: Severity, message: impl fmt::Display) {
		if !self.is_enabled(channel, severity) {
			return;
		}
		let channel = channel.as_str();
		match severity {
			Severity::Crit => tracing::error!(channel, "{}", message),
			Severity::Warn => tracing::warn!(channel, "{}", message),
			Severity::Info => tracing::info!(channel, "{}", message),
		}
	}

	pub fn crit(&self, message: impl fmt::Display) {
		self.emit(Channel::Syslog, Severity::Crit, message);
	}

	pub fn warn(&self, message: impl fmt::Display) {
		self.emit(Channel::Syslog, Severity::Warn, message);
	}

	pub fn info(&self, message: impl fmt::Display) {
		self.emit(Channel::Syslog, Severity::Info, message);
	}

	fn channel(&self, channel: Channel) -> &ChannelFlags {
		match channel {
			Channel::Syslog => &self.syslog,
			Channel::Sqllog => &self.sqllog,
		}
	}
}
