use std::fmt;

use thiserror::Error;

pub type Source = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
	Service,
	Endpoints,
	Ingress,
}

impl fmt::Display for Kind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let kind = match self {
			Self::Service => "Service",
			Self::Endpoints => "Endpoints",
			Self::Ingress => "Ingress",
		};

		f.write_str(kind)
	}
}

#[derive(Error, Debug)]
pub enum Error {
	#[error("Unable to load the cluster configuration")]
	Config(#[source] Source),
	#[error("The cluster rejected {kind} {name}: {message}")]
	Conflict {
		kind: Kind,
		name: String,
		message: String,
	},
	#[error("Unable to apply {kind} {name}")]
	Apply {
		kind: Kind,
		name: String,
		#[source]
		source: Source,
	},
	#[error("Unable to list {resource}, check that you're using cert-manager v1 and above")]
	Lookup {
		resource: &'static str,
		#[source]
		source: Source,
	},
}

impl Error {
	pub fn kube(kind: Kind, name: &str, err: kube::Error) -> Self {
		match err {
			kube::Error::Api(response) => Self::Conflict {
				kind,
				name: name.to_string(),
				message: response.message,
			},
			err => Self::Apply {
				kind,
				name: name.to_string(),
				source: Box::new(err),
			},
		}
	}
}

pub type Result<T> = std::result::Result<T, Error>;
