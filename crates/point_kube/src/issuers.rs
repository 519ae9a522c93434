use crate::error::Result;

use async_trait::async_trait;
use point_graph::Issuer;
use tracing::{debug, warn};

#[async_trait]
pub trait IssuerSource {
	async fn cluster_issuers(&self) -> Result<Vec<Issuer>>;

	/// Namespace scoped issuers, regardless of which namespace they're in.
	async fn issuers(&self) -> Result<Vec<Issuer>>;
}

/// Cluster issuers followed by namespaced ones, duplicates included. Only
/// failing to list cluster issuers is fatal.
pub async fn candidates<S>(source: &S) -> Result<Vec<Issuer>>
where
	S: IssuerSource + ?Sized,
{
	let mut candidates = source.cluster_issuers().await?;

	match source.issuers().await {
		Ok(issuers) => candidates.extend(issuers),
		Err(err) => warn!(error = %err, "skipping namespaced issuers"),
	}

	debug!(count = candidates.len(), "issuer candidates found");

	Ok(candidates)
}
