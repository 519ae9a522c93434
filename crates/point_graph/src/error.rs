use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
	#[error("The subject({subject}) is not a valid domain name: {reason}")]
	InvalidSubject { subject: String, reason: String },
	#[error("The name({0}) doesn't follow RFC 1035")]
	InvalidName(String),
	#[error("Expecting destination in the format <ip/host>:<port> but got {0:?}")]
	MalformedDestination(String),
	#[error("The port({0}) has to be a number between 1 and 65535")]
	InvalidPort(String),
	#[error("Unable to find any cluster-issuers or issuers for automatic TLS")]
	NoIssuerAvailable,
	#[error("There's no issuer named {0}")]
	IssuerNotFound(String),
	#[error("Issuer selection was aborted: {0}")]
	SelectionAborted(String),
}

pub type Result<T> = std::result::Result<T, Error>;
