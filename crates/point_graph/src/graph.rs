use crate::destination::Destination;
use crate::error::Result;
use crate::issuer::Issuer;
use crate::name::{self, ObjectName, Subject, LINK_LABEL};

use std::collections::BTreeMap;

use k8s_openapi::api::core::v1::{
	EndpointAddress, EndpointPort, EndpointSubset, Endpoints, Service, ServicePort, ServiceSpec,
};
use k8s_openapi::api::networking::v1::{
	HTTPIngressPath, HTTPIngressRuleValue, Ingress, IngressBackend, IngressRule,
	IngressServiceBackend, IngressSpec, IngressTLS, ServiceBackendPort,
};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use serde_json::Value;

const PROTOCOL: &str = "TCP";
const DEFAULT_PATH: &str = "/";
const PATH_TYPE: &str = "Prefix";

/// Everything needed to describe one routing, already validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Intent {
	subject: Subject,
	name: ObjectName,
	destination: Destination,
	namespace: String,
	tls: Option<Issuer>,
}

impl Intent {
	pub fn new(subject: Subject, destination: Destination, namespace: &str) -> Result<Self> {
		let name = name::sanitize(&subject)?;

		Ok(Self {
			subject,
			name,
			destination,
			namespace: namespace.to_string(),
			tls: None,
		})
	}

	/// TLS is only kept when it was requested and an issuer got resolved.
	pub fn with_tls(mut self, requested: bool, issuer: Option<Issuer>) -> Self {
		self.tls = if requested { issuer } else { None };

		self
	}

	pub fn subject(&self) -> &Subject {
		&self.subject
	}

	pub fn name(&self) -> &ObjectName {
		&self.name
	}

	pub fn destination(&self) -> &Destination {
		&self.destination
	}

	pub fn namespace(&self) -> &str {
		&self.namespace
	}

	pub fn tls(&self) -> Option<&Issuer> {
		self.tls.as_ref()
	}

	pub fn secret_name(&self) -> String {
		format!("{}-tls", self.subject)
	}

	fn metadata(&self) -> ObjectMeta {
		let labels = BTreeMap::from([(LINK_LABEL.to_string(), self.name.to_string())]);

		ObjectMeta {
			name: Some(self.name.to_string()),
			namespace: Some(self.namespace.clone()),
			labels: Some(labels),
			..ObjectMeta::default()
		}
	}

	fn port_name(&self) -> String {
		self.destination.port.to_string()
	}

	fn port(&self) -> i32 {
		i32::from(self.destination.port)
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResourceGraph {
	pub service: Service,
	pub endpoints: Endpoints,
	pub ingress: Ingress,
}

impl ResourceGraph {
	/// Objects in the order they should reach the cluster.
	pub fn manifests(&self) -> serde_json::Result<Vec<Value>> {
		Ok(vec![
			serde_json::to_value(&self.service)?,
			serde_json::to_value(&self.endpoints)?,
			serde_json::to_value(&self.ingress)?,
		])
	}
}

impl From<&Intent> for ResourceGraph {
	fn from(intent: &Intent) -> Self {
		Self {
			service: service(intent),
			endpoints: endpoints(intent),
			ingress: ingress(intent),
		}
	}
}

pub fn build(intent: &Intent) -> ResourceGraph {
	ResourceGraph::from(intent)
}

fn service(intent: &Intent) -> Service {
	let port = ServicePort {
		name: Some(intent.port_name()),
		protocol: Some(PROTOCOL.to_string()),
		port: intent.port(),
		..ServicePort::default()
	};

	Service {
		metadata: intent.metadata(),
		spec: Some(ServiceSpec {
			ports: Some(vec![port]),
			..ServiceSpec::default()
		}),
		..Service::default()
	}
}

fn endpoints(intent: &Intent) -> Endpoints {
	let address = EndpointAddress {
		ip: intent.destination.host.clone(),
		..EndpointAddress::default()
	};

	let port = EndpointPort {
		name: Some(intent.port_name()),
		protocol: Some(PROTOCOL.to_string()),
		port: intent.port(),
		..EndpointPort::default()
	};

	Endpoints {
		metadata: intent.metadata(),
		subsets: Some(vec![EndpointSubset {
			addresses: Some(vec![address]),
			ports: Some(vec![port]),
			..EndpointSubset::default()
		}]),
	}
}

fn ingress(intent: &Intent) -> Ingress {
	let backend = IngressBackend {
		service: Some(IngressServiceBackend {
			name: intent.name.to_string(),
			port: Some(ServiceBackendPort {
				number: Some(intent.port()),
				..ServiceBackendPort::default()
			}),
		}),
		..IngressBackend::default()
	};

	let rule = IngressRule {
		host: Some(intent.subject.to_string()),
		http: Some(HTTPIngressRuleValue {
			paths: vec![HTTPIngressPath {
				backend,
				path: Some(DEFAULT_PATH.to_string()),
				path_type: PATH_TYPE.to_string(),
			}],
		}),
	};

	let mut metadata = intent.metadata();
	let mut spec = IngressSpec {
		rules: Some(vec![rule]),
		..IngressSpec::default()
	};

	if let Some(issuer) = &intent.tls {
		let secret = intent.secret_name();

		metadata.annotations = Some(BTreeMap::from([(
			issuer.annotation().to_string(),
			issuer.name.clone(),
		)]));

		spec.tls = Some(vec![IngressTLS {
			hosts: Some(vec![secret.clone()]),
			secret_name: Some(secret),
		}]);
	}

	Ingress {
		metadata,
		spec: Some(spec),
		..Ingress::default()
	}
}
