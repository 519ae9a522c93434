use std::sync::Mutex;

use async_trait::async_trait;
use k8s_openapi::api::core::v1::{Endpoints, Service};
use k8s_openapi::api::networking::v1::Ingress;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use point_kube::{Applier, Error, Kind, Result};

/// Keeps track of what reached it, optionally breaking at a given kind.
#[derive(Default)]
pub struct Recorder {
	applied: Mutex<Vec<(Kind, String)>>,
	reject: Option<Kind>,
	fail: Option<Kind>,
}

impl Recorder {
	pub fn rejecting(kind: Kind) -> Self {
		Self {
			reject: Some(kind),
			..Self::default()
		}
	}

	pub fn failing(kind: Kind) -> Self {
		Self {
			fail: Some(kind),
			..Self::default()
		}
	}

	pub fn applied(&self) -> Vec<(Kind, String)> {
		self.applied.lock().unwrap().clone()
	}

	pub fn kinds(&self) -> Vec<Kind> {
		self.applied().into_iter().map(|(kind, _)| kind).collect()
	}

	fn record(&self, kind: Kind, metadata: &ObjectMeta) -> Result<()> {
		let name = metadata.name.clone().unwrap_or_default();

		if self.reject == Some(kind) {
			let message = format!("{kind} \"{name}\" is invalid");

			return Err(Error::Conflict {
				kind,
				name,
				message,
			});
		}

		if self.fail == Some(kind) {
			return Err(Error::Apply {
				kind,
				name,
				source: "connection refused".into(),
			});
		}

		self.applied.lock().unwrap().push((kind, name));

		Ok(())
	}
}

#[async_trait]
impl Applier for Recorder {
	async fn apply_service(&self, service: &Service) -> Result<()> {
		self.record(Kind::Service, &service.metadata)
	}

	async fn apply_endpoints(&self, endpoints: &Endpoints) -> Result<()> {
		self.record(Kind::Endpoints, &endpoints.metadata)
	}

	async fn apply_ingress(&self, ingress: &Ingress) -> Result<()> {
		self.record(Kind::Ingress, &ingress.metadata)
	}
}
