use crate::error::{Error, Result};

use std::fmt;

use tracing::info;

const CLUSTER_ISSUER_ANNOTATION: &str = "cert-manager.io/cluster-issuer";
const ISSUER_ANNOTATION: &str = "cert-manager.io/issuer";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
	Cluster,
	Namespaced(String),
}

/// Authority able to issue certificates for the ingress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issuer {
	pub name: String,
	pub scope: Scope,
}

impl Issuer {
	pub fn cluster(name: &str) -> Self {
		Self {
			name: name.to_string(),
			scope: Scope::Cluster,
		}
	}

	pub fn namespaced(name: &str, namespace: &str) -> Self {
		Self {
			name: name.to_string(),
			scope: Scope::Namespaced(namespace.to_string()),
		}
	}

	pub fn annotation(&self) -> &'static str {
		match self.scope {
			Scope::Cluster => CLUSTER_ISSUER_ANNOTATION,
			Scope::Namespaced(_) => ISSUER_ANNOTATION,
		}
	}
}

impl fmt::Display for Issuer {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match &self.scope {
			Scope::Cluster => write!(f, "{} (ClusterIssuer)", self.name),
			Scope::Namespaced(ns) => write!(f, "{} (Issuer in {ns})", self.name),
		}
	}
}

/// Policy used to settle on a single issuer out of the candidates.
pub trait Chooser {
	fn choose(&self, options: &[Issuer]) -> Result<Issuer>;
}

/// Picks whatever comes first, for environments without a human around.
pub struct First;

impl Chooser for First {
	fn choose(&self, options: &[Issuer]) -> Result<Issuer> {
		options
			.first()
			.cloned()
			.ok_or(Error::NoIssuerAvailable)
	}
}

pub struct Named(pub String);

impl Chooser for Named {
	fn choose(&self, options: &[Issuer]) -> Result<Issuer> {
		options
			.iter()
			.find(|issuer| issuer.name == self.0)
			.cloned()
			.ok_or_else(|| Error::IssuerNotFound(self.0.clone()))
	}
}

pub fn select(candidates: &[Issuer], chooser: &dyn Chooser) -> Result<Issuer> {
	if candidates.is_empty() {
		return Err(Error::NoIssuerAvailable);
	}

	let chosen = chooser.choose(candidates)?;
	if !candidates.contains(&chosen) {
		return Err(Error::SelectionAborted(format!(
			"{chosen} isn't one of the available issuers"
		)));
	}

	info!(issuer = %chosen, "issuer selected");

	Ok(chosen)
}
