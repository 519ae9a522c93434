use assert_matches::assert_matches;
use point_graph::{Destination, Error};

fn parse(to: &str) -> Result<Destination, Error> {
	to.parse()
}

#[test]
fn parses_host_and_port() {
	let destination = parse("10.0.0.5:3000").unwrap();

	assert_eq!(destination.host, "10.0.0.5");
	assert_eq!(destination.port, 3000);
	assert!(destination.is_ip());
	assert_eq!(destination.to_string(), "10.0.0.5:3000");
}

#[test]
fn accepts_hostnames() {
	let destination = parse("newdomain.com:443").unwrap();

	assert_eq!(destination.host, "newdomain.com");
	assert_eq!(destination.port, 443);
	assert!(!destination.is_ip());
}

#[test]
fn needs_exactly_one_separator() {
	for to in ["10.0.0.5", "10.0.0.5:80:90", ":3000", "10.0.0.5:", ":", ""] {
		assert_eq!(parse(to), Err(Error::MalformedDestination(to.to_string())));
	}
}

#[test]
fn validates_port() {
	for (to, port) in [
		("10.0.0.5:http", "http"),
		("10.0.0.5:0", "0"),
		("10.0.0.5:65536", "65536"),
		("10.0.0.5:-1", "-1"),
	] {
		assert_matches!(parse(to), Err(Error::InvalidPort(p)) if p == port);
	}

	assert_eq!(parse("10.0.0.5:65535").unwrap().port, 65535);
	assert_eq!(parse("10.0.0.5:1").unwrap().port, 1);
}
