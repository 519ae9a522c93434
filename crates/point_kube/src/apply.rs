use crate::error::Result;

use async_trait::async_trait;
use k8s_openapi::api::core::v1::{Endpoints, Service};
use k8s_openapi::api::networking::v1::Ingress;
use point_graph::ResourceGraph;
use tracing::info;

/// Create-or-update primitive for each object in the graph.
#[async_trait]
pub trait Applier {
	async fn apply_service(&self, service: &Service) -> Result<()>;

	async fn apply_endpoints(&self, endpoints: &Endpoints) -> Result<()>;

	async fn apply_ingress(&self, ingress: &Ingress) -> Result<()>;
}

/// Applies the graph in order and stops at the first failure. Whatever
/// was applied before the failure is left in place.
pub async fn apply<A>(graph: &ResourceGraph, applier: &A) -> Result<()>
where
	A: Applier + ?Sized,
{
	applier.apply_service(&graph.service).await?;
	info!("Service successfully applied");

	applier.apply_endpoints(&graph.endpoints).await?;
	info!("Endpoints successfully applied");

	applier.apply_ingress(&graph.ingress).await?;
	info!("Ingress successfully applied");

	Ok(())
}
