mod applier;
mod chooser;
mod cluster;
mod issuers;

pub use self::applier::Recorder;
pub use self::chooser::{Answer, Scripted};
pub use self::cluster::Cluster;
pub use self::issuers::StaticIssuers;

use point_graph::{Destination, Intent, Issuer, Subject};

pub const NAMESPACE: &str = "default";

pub fn subject(domain: &str) -> Subject {
	Subject::try_from(domain).unwrap_or_else(|err| panic!("{domain} should be valid: {err}"))
}

pub fn destination(to: &str) -> Destination {
	to.parse()
		.unwrap_or_else(|err| panic!("{to} should be valid: {err}"))
}

pub fn intent(domain: &str, to: &str) -> Intent {
	Intent::new(subject(domain), destination(to), NAMESPACE).unwrap()
}

pub fn issuers() -> Vec<Issuer> {
	vec![
		Issuer::cluster("letsencrypt-prod"),
		Issuer::cluster("letsencrypt-staging"),
		Issuer::namespaced("selfsigned", "apps"),
	]
}
