use crate::error::{Error, Result};

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

pub const LINK_LABEL: &str = "link";
pub const ROOT_PREFIX: &str = "rootdomain-";

const SUBDOMAIN_MAX_LENGTH: usize = 253;
const LABEL_MAX_LENGTH: usize = 63;

static SUBDOMAIN: Lazy<Regex> = Lazy::new(|| {
	Regex::new(r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?(\.[a-z0-9]([-a-z0-9]*[a-z0-9])?)*$").unwrap()
});

static RFC1035_LABEL: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"^[a-z]([-a-z0-9]*[a-z0-9])?$").unwrap());

/// Fully qualified domain name that's going to be routed. A single trailing
/// dot is accepted and dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject(String);

impl Subject {
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl TryFrom<&str> for Subject {
	type Error = Error;

	fn try_from(value: &str) -> Result<Self> {
		let invalid = |reason: String| Error::InvalidSubject {
			subject: value.to_string(),
			reason,
		};

		let domain = value.strip_suffix('.').unwrap_or(value);

		if domain.is_empty() {
			return Err(invalid("it must not be empty".to_string()));
		}

		if domain.len() > SUBDOMAIN_MAX_LENGTH {
			return Err(invalid(format!(
				"it must be no more than {SUBDOMAIN_MAX_LENGTH} characters"
			)));
		}

		if !SUBDOMAIN.is_match(domain) {
			return Err(invalid(
				"it must consist of lower case alphanumeric characters, '-' or '.', and each label must start and end with an alphanumeric character".to_string(),
			));
		}

		let labels: Vec<&str> = domain.split('.').collect();
		if labels.len() < 2 {
			return Err(invalid(
				"it should have at least two segments separated by dots".to_string(),
			));
		}

		if let Some(label) = labels.iter().find(|l| l.len() > LABEL_MAX_LENGTH) {
			return Err(invalid(format!(
				"the label {label} must be no more than {LABEL_MAX_LENGTH} characters"
			)));
		}

		Ok(Self(domain.to_string()))
	}
}

impl FromStr for Subject {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self> {
		Self::try_from(s)
	}
}

impl fmt::Display for Subject {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// Name shared by every object in the graph, restricted to RFC 1035 labels.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectName(String);

impl ObjectName {
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl TryFrom<&str> for ObjectName {
	type Error = Error;

	fn try_from(value: &str) -> Result<Self> {
		if value.len() <= LABEL_MAX_LENGTH && RFC1035_LABEL.is_match(value) {
			Ok(Self(value.to_string()))
		} else {
			Err(Error::InvalidName(value.to_string()))
		}
	}
}

impl fmt::Display for ObjectName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<ObjectName> for String {
	fn from(val: ObjectName) -> Self {
		val.0
	}
}

/// Derives the object name from the subject. Dots become hyphens and names
/// that can't start with a letter get the root prefix.
pub fn sanitize(subject: &Subject) -> Result<ObjectName> {
	let hostname = subject.as_str().replace('.', "-");

	if let Ok(name) = ObjectName::try_from(hostname.as_str()) {
		return Ok(name);
	}

	let prefixed = format!("{ROOT_PREFIX}{hostname}");
	debug!(subject = %subject, name = %prefixed, "prefixing object name");

	ObjectName::try_from(prefixed.as_str()).map_err(|_| Error::InvalidSubject {
		subject: subject.to_string(),
		reason: format!("the derived name {prefixed} is longer than {LABEL_MAX_LENGTH} characters"),
	})
}
