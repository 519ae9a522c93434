use async_trait::async_trait;
use point_graph::Issuer;
use point_kube::{Error, IssuerSource, Result};

#[derive(Default)]
pub struct StaticIssuers {
	pub cluster: Vec<Issuer>,
	pub namespaced: Vec<Issuer>,
	pub broken_cluster: bool,
	pub broken_namespaced: bool,
}

impl StaticIssuers {
	pub fn new(cluster: Vec<Issuer>, namespaced: Vec<Issuer>) -> Self {
		Self {
			cluster,
			namespaced,
			..Self::default()
		}
	}
}

fn unreachable(resource: &'static str) -> Error {
	Error::Lookup {
		resource,
		source: "the server could not find the requested resource".into(),
	}
}

#[async_trait]
impl IssuerSource for StaticIssuers {
	async fn cluster_issuers(&self) -> Result<Vec<Issuer>> {
		if self.broken_cluster {
			Err(unreachable("clusterissuers"))
		} else {
			Ok(self.cluster.clone())
		}
	}

	async fn issuers(&self) -> Result<Vec<Issuer>> {
		if self.broken_namespaced {
			Err(unreachable("issuers"))
		} else {
			Ok(self.namespaced.clone())
		}
	}
}
