use crate::apply::Applier;
use crate::error::{Error, Kind, Result};
use crate::issuers::IssuerSource;

use std::fmt::Debug;

use async_trait::async_trait;
use k8s_openapi::api::core::v1::{Endpoints, Service};
use k8s_openapi::api::networking::v1::Ingress;
use k8s_openapi::NamespaceResourceScope;
use kube::api::{Api, DynamicObject as Dynamic, ListParams, Patch, PatchParams};
use kube::core::{ApiResource, GroupVersionKind};
use kube::{Client as K8, Config, Resource, ResourceExt};
use point_graph::Issuer;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

pub const FIELD_MANAGER: &str = "point";

const CERT_MANAGER_GROUP: &str = "cert-manager.io";
const CERT_MANAGER_VERSION: &str = "v1";

pub struct Client {
	client: K8,
	namespace: String,
	params: PatchParams,
}

impl Client {
	pub async fn try_new(force: bool) -> Result<Self> {
		let config = Config::infer()
			.await
			.map_err(|err| Error::Config(Box::new(err)))?;
		let namespace = config.default_namespace.clone();
		let client = K8::try_from(config).map_err(|err| Error::Config(Box::new(err)))?;

		let params = if force {
			PatchParams::apply(FIELD_MANAGER).force()
		} else {
			PatchParams::apply(FIELD_MANAGER)
		};

		Ok(Self {
			client,
			namespace,
			params,
		})
	}

	/// Namespace of the current kubeconfig context.
	pub fn namespace(&self) -> &str {
		&self.namespace
	}

	async fn patch<K>(&self, kind: Kind, obj: &K) -> Result<()>
	where
		K: Resource<Scope = NamespaceResourceScope> + Clone + Debug + DeserializeOwned + Serialize,
		<K as Resource>::DynamicType: Default,
	{
		let name = obj.name_any();
		let namespace = obj.namespace().unwrap_or_else(|| self.namespace.clone());
		debug!(%kind, %name, %namespace, "applying");

		let api: Api<K> = Api::namespaced(self.client.clone(), &namespace);
		api.patch(&name, &self.params, &Patch::Apply(obj))
			.await
			.map_err(|err| Error::kube(kind, &name, err))?;

		Ok(())
	}

	async fn list_issuers(&self, kind: &str, plural: &'static str) -> Result<Vec<Dynamic>> {
		let gvk = GroupVersionKind::gvk(CERT_MANAGER_GROUP, CERT_MANAGER_VERSION, kind);
		let ar = ApiResource::from_gvk_with_plural(&gvk, plural);
		let api: Api<Dynamic> = Api::all_with(self.client.clone(), &ar);

		let list = api
			.list(&ListParams::default())
			.await
			.map_err(|err| Error::Lookup {
				resource: plural,
				source: Box::new(err),
			})?;

		Ok(list.items)
	}
}

#[async_trait]
impl Applier for Client {
	async fn apply_service(&self, service: &Service) -> Result<()> {
		self.patch(Kind::Service, service).await
	}

	async fn apply_endpoints(&self, endpoints: &Endpoints) -> Result<()> {
		self.patch(Kind::Endpoints, endpoints).await
	}

	async fn apply_ingress(&self, ingress: &Ingress) -> Result<()> {
		self.patch(Kind::Ingress, ingress).await
	}
}

#[async_trait]
impl IssuerSource for Client {
	async fn cluster_issuers(&self) -> Result<Vec<Issuer>> {
		let items = self.list_issuers("ClusterIssuer", "clusterissuers").await?;

		Ok(items
			.iter()
			.map(|obj| Issuer::cluster(&obj.name_any()))
			.collect())
	}

	async fn issuers(&self) -> Result<Vec<Issuer>> {
		let items = self.list_issuers("Issuer", "issuers").await?;

		Ok(items
			.iter()
			.map(|obj| Issuer::namespaced(&obj.name_any(), &obj.namespace().unwrap_or_default()))
			.collect())
	}
}
