use crate::error::{Error, Result};

use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

/// External endpoint the subject forwards to. Only the syntax is checked,
/// the host may be either an IP literal or a hostname.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
	pub host: String,
	pub port: u16,
}

impl Destination {
	pub fn is_ip(&self) -> bool {
		self.host.parse::<IpAddr>().is_ok()
	}
}

impl FromStr for Destination {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self> {
		let parts: Vec<&str> = s.split(':').collect();

		let (host, port) = match parts.as_slice() {
			[host, port] if !host.is_empty() && !port.is_empty() => (*host, *port),
			_ => return Err(Error::MalformedDestination(s.to_string())),
		};

		let port = port
			.parse::<u16>()
			.ok()
			.filter(|&p| p != 0)
			.ok_or_else(|| Error::InvalidPort(port.to_string()))?;

		Ok(Self {
			host: host.to_string(),
			port,
		})
	}
}

impl fmt::Display for Destination {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}:{}", self.host, self.port)
	}
}
