use crate::prompt::Prompt;

use anyhow::Result;
use clap::{ArgAction, Parser};
use point_graph::{
	build, select, Chooser, Destination, Intent, Issuer, Named, ResourceGraph, Subject,
};
use point_kube::{apply, candidates, Applier, Client, IssuerSource};
use tokio::sync::OnceCell;
use tracing::{info, warn};

#[derive(Parser)]
pub struct Args {
	#[arg(help = "fully qualified domain name to route")]
	pub(crate) subject: Subject,
	#[arg(help = "address to point to in a host:port format (eg. 10.0.100.10:8080)", long)]
	pub(crate) to: Destination,
	#[arg(
		help = "namespace where you want the objects to be created, defaults to the current context's namespace",
		long
	)]
	pub(crate) namespace: Option<String>,
	#[arg(
		help = "use cert-manager to automatically assign a tls certificate",
		long,
		default_value_t = true,
		action = ArgAction::Set
	)]
	pub(crate) tls_auto: bool,
	#[arg(help = "issuer to use instead of choosing one interactively", long)]
	pub(crate) issuer: Option<String>,
	#[arg(help = "take ownership of fields managed by someone else", long)]
	pub(crate) force: bool,
	#[arg(help = "print the objects instead of applying them", long)]
	pub(crate) dry_run: bool,
}

pub async fn run(args: Args) -> Result<String> {
	let cluster = OnceCell::new();

	let namespace = match args.namespace {
		Some(namespace) => namespace,
		None => {
			info!("No namespace flag inserted, defaulting to kubeconfig's context namespace");
			connect(&cluster, args.force).await?.namespace().to_string()
		}
	};

	if !args.to.is_ip() {
		warn!(host = %args.to.host, "Endpoints expect an IP address, the cluster may reject this host");
	}

	let intent = Intent::new(args.subject, args.to, &namespace)?;
	let subject = intent.subject().clone();

	let chooser: Box<dyn Chooser> = match args.issuer {
		Some(name) => Box::new(Named(name)),
		None => Box::new(Prompt),
	};

	if args.dry_run {
		let graph = if args.tls_auto {
			let source = connect(&cluster, args.force).await?;

			plan(intent, true, source, chooser.as_ref()).await?
		} else {
			build(&intent)
		};

		return render(&graph);
	}

	info!(%namespace, "Deploying assets");
	info!(%subject, destination = %intent.destination(), "Pointing");

	let client = connect(&cluster, args.force).await?;
	deploy(intent, args.tls_auto, client, chooser.as_ref()).await?;

	Ok(format!(
		"Ingress successfully applied, you can now access it from http://{subject}"
	))
}

/// The client is only built once something needs the cluster.
async fn connect(cluster: &OnceCell<Client>, force: bool) -> Result<&Client> {
	let client = cluster.get_or_try_init(|| Client::try_new(force)).await?;

	Ok(client)
}

/// Builds the graph, resolving the issuer first when TLS is wanted.
async fn plan<S>(
	intent: Intent,
	tls: bool,
	source: &S,
	chooser: &dyn Chooser,
) -> Result<ResourceGraph>
where
	S: IssuerSource + ?Sized,
{
	let issuer = if tls {
		Some(resolve_issuer(source, chooser).await?)
	} else {
		None
	};

	Ok(build(&intent.with_tls(tls, issuer)))
}

/// Nothing reaches the cluster unless the whole graph could be planned.
async fn deploy<C>(
	intent: Intent,
	tls: bool,
	cluster: &C,
	chooser: &dyn Chooser,
) -> Result<ResourceGraph>
where
	C: Applier + IssuerSource + ?Sized,
{
	let graph = plan(intent, tls, cluster, chooser).await?;
	apply(&graph, cluster).await?;

	Ok(graph)
}

async fn resolve_issuer<S>(source: &S, chooser: &dyn Chooser) -> Result<Issuer>
where
	S: IssuerSource + ?Sized,
{
	let candidates = candidates(source).await?;
	let issuer = select(&candidates, chooser)?;

	Ok(issuer)
}

fn render(graph: &ResourceGraph) -> Result<String> {
	let documents = graph
		.manifests()?
		.iter()
		.map(serde_yaml::to_string)
		.collect::<Result<Vec<String>, _>>()?;

	Ok(documents.join("---\n"))
}

#[cfg(test)]
mod tests {
	use super::*;

	use point_graph::Error;
	use point_kube::{Error as KubeError, Kind};
	use point_testing::{intent, issuers, Answer, Cluster, Recorder, Scripted, StaticIssuers};

	fn args(flags: &[&str]) -> Args {
		Args::try_parse_from(std::iter::once("point").chain(flags.iter().copied())).unwrap()
	}

	#[test]
	fn renders_a_yaml_stream() {
		let graph = build(&intent("valid.launch.us", "10.0.0.5:3000"));

		let rendered = render(&graph).unwrap();
		let kinds: Vec<&str> = rendered
			.lines()
			.filter(|line| line.starts_with("kind:"))
			.collect();

		assert_eq!(rendered.matches("---\n").count(), 2);
		assert_eq!(kinds, vec!["kind: Service", "kind: Endpoints", "kind: Ingress"]);
		assert!(rendered.contains("host: valid.launch.us"));
	}

	#[tokio::test]
	async fn renders_offline_without_tls() {
		let args = args(&[
			"launch.us",
			"--to=10.0.0.5:3000",
			"--namespace=apps",
			"--tls-auto=false",
			"--dry-run",
		]);

		let rendered = run(args).await.unwrap();

		assert!(rendered.contains("namespace: apps"));
		assert!(rendered.contains("name: launch-us"));
		assert!(!rendered.contains("tls:"));
	}

	#[tokio::test]
	async fn resolves_issuer_from_candidates() {
		let source = StaticIssuers::new(issuers()[..2].to_vec(), issuers()[2..].to_vec());
		let chooser = Scripted::new(Answer::Pick(1));

		let issuer = resolve_issuer(&source, &chooser).await.unwrap();

		assert_eq!(chooser.seen(), issuers());
		assert_eq!(issuer, Issuer::cluster("letsencrypt-staging"));
	}

	#[tokio::test]
	async fn refuses_tls_without_issuers() {
		let source = StaticIssuers::default();
		let chooser = Scripted::new(Answer::Pick(0));

		let err = resolve_issuer(&source, &chooser).await.unwrap_err();

		assert_eq!(err.downcast_ref::<Error>(), Some(&Error::NoIssuerAvailable));
		assert!(chooser.seen().is_empty());
	}

	mod pipeline {
		use super::*;

		#[tokio::test]
		async fn applies_nothing_without_issuers() {
			let cluster = Cluster::default();
			let chooser = Scripted::new(Answer::Pick(0));

			let err = deploy(intent("launch.us", "10.0.0.5:3000"), true, &cluster, &chooser)
				.await
				.unwrap_err();

			assert_eq!(err.downcast_ref::<Error>(), Some(&Error::NoIssuerAvailable));
			assert!(cluster.recorder.applied().is_empty());
		}

		#[tokio::test]
		async fn applies_nothing_when_selection_is_aborted() {
			let cluster = Cluster::with_issuers(StaticIssuers::new(issuers(), vec![]));
			let chooser = Scripted::new(Answer::Cancel);

			let err = deploy(intent("launch.us", "10.0.0.5:3000"), true, &cluster, &chooser)
				.await
				.unwrap_err();

			assert!(matches!(err.downcast_ref::<Error>(), Some(Error::SelectionAborted(_))));
			assert!(cluster.recorder.applied().is_empty());
		}

		#[tokio::test]
		async fn applies_with_selected_issuer() {
			let cluster = Cluster::with_issuers(StaticIssuers::new(issuers(), vec![]));
			let chooser = Scripted::new(Answer::Pick(0));

			let graph = deploy(intent("launch.us", "10.0.0.5:3000"), true, &cluster, &chooser)
				.await
				.unwrap();

			let annotations = graph.ingress.metadata.annotations.unwrap();
			assert_eq!(
				annotations.get("cert-manager.io/cluster-issuer").map(String::as_str),
				Some("letsencrypt-prod")
			);
			assert_eq!(
				cluster.recorder.kinds(),
				vec![Kind::Service, Kind::Endpoints, Kind::Ingress]
			);
		}

		#[tokio::test]
		async fn skips_issuers_without_tls() {
			let cluster = Cluster {
				issuers: StaticIssuers {
					broken_cluster: true,
					..StaticIssuers::default()
				},
				..Cluster::default()
			};
			let chooser = Scripted::new(Answer::Cancel);

			let graph = deploy(intent("launch.us", "10.0.0.5:3000"), false, &cluster, &chooser)
				.await
				.unwrap();

			assert_eq!(graph.ingress.spec.unwrap().tls, None);
			assert!(chooser.seen().is_empty());
			assert_eq!(cluster.recorder.applied().len(), 3);
		}

		#[tokio::test]
		async fn surfaces_rejections() {
			let cluster = Cluster {
				recorder: Recorder::rejecting(Kind::Ingress),
				..Cluster::default()
			};
			let chooser = Scripted::new(Answer::Cancel);

			let err = deploy(intent("launch.us", "10.0.0.5:3000"), false, &cluster, &chooser)
				.await
				.unwrap_err();

			assert!(matches!(
				err.downcast_ref::<KubeError>(),
				Some(KubeError::Conflict { kind: Kind::Ingress, .. })
			));
			assert_eq!(cluster.recorder.kinds(), vec![Kind::Service, Kind::Endpoints]);
		}
	}
}
