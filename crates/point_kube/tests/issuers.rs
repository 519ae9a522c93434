use assert_matches::assert_matches;
use point_graph::Issuer;
use point_kube::{candidates, Error};
use point_testing::StaticIssuers;

#[tokio::test]
async fn concatenates_cluster_then_namespaced() {
	let source = StaticIssuers::new(
		vec![Issuer::cluster("letsencrypt-prod")],
		vec![
			Issuer::namespaced("letsencrypt-prod", "apps"),
			Issuer::namespaced("selfsigned", "web"),
		],
	);

	let found = candidates(&source).await.unwrap();

	assert_eq!(
		found,
		vec![
			Issuer::cluster("letsencrypt-prod"),
			Issuer::namespaced("letsencrypt-prod", "apps"),
			Issuer::namespaced("selfsigned", "web"),
		]
	);
}

#[tokio::test]
async fn empty_when_nothing_is_installed() {
	let source = StaticIssuers::default();

	assert!(candidates(&source).await.unwrap().is_empty());
}

#[tokio::test]
async fn fails_when_cluster_issuers_are_unreachable() {
	let source = StaticIssuers {
		broken_cluster: true,
		..StaticIssuers::default()
	};

	assert_matches!(
		candidates(&source).await,
		Err(Error::Lookup {
			resource: "clusterissuers",
			..
		})
	);
}

#[tokio::test]
async fn tolerates_unreachable_namespaced_issuers() {
	let source = StaticIssuers {
		cluster: vec![Issuer::cluster("letsencrypt-prod")],
		broken_namespaced: true,
		..StaticIssuers::default()
	};

	let found = candidates(&source).await.unwrap();

	assert_eq!(found, vec![Issuer::cluster("letsencrypt-prod")]);
}
