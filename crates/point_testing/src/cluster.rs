use crate::applier::Recorder;
use crate::issuers::StaticIssuers;

use async_trait::async_trait;
use k8s_openapi::api::core::v1::{Endpoints, Service};
use k8s_openapi::api::networking::v1::Ingress;
use point_graph::Issuer;
use point_kube::{Applier, IssuerSource, Result};

/// Both sides of the cluster boundary in one place.
#[derive(Default)]
pub struct Cluster {
	pub recorder: Recorder,
	pub issuers: StaticIssuers,
}

impl Cluster {
	pub fn with_issuers(issuers: StaticIssuers) -> Self {
		Self {
			issuers,
			..Self::default()
		}
	}
}

#[async_trait]
impl Applier for Cluster {
	async fn apply_service(&self, service: &Service) -> Result<()> {
		self.recorder.apply_service(service).await
	}

	async fn apply_endpoints(&self, endpoints: &Endpoints) -> Result<()> {
		self.recorder.apply_endpoints(endpoints).await
	}

	async fn apply_ingress(&self, ingress: &Ingress) -> Result<()> {
		self.recorder.apply_ingress(ingress).await
	}
}

#[async_trait]
impl IssuerSource for Cluster {
	async fn cluster_issuers(&self) -> Result<Vec<Issuer>> {
		self.issuers.cluster_issuers().await
	}

	async fn issuers(&self) -> Result<Vec<Issuer>> {
		self.issuers.issuers().await
	}
}
