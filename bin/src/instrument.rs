use tracing::error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::{layer::SubscriberExt, Registry};

pub struct Guard {
	_appender: WorkerGuard,
}

fn level(verbose: u8) -> LevelFilter {
	match verbose {
		0 => LevelFilter::WARN,
		1 => LevelFilter::INFO,
		2 => LevelFilter::DEBUG,
		_ => LevelFilter::TRACE,
	}
}

#[must_use]
pub fn init(verbose: u8) -> Guard {
	let (writer, guard) = tracing_appender::non_blocking(std::io::stderr());

	let traced = verbose > 2;
	let logs = fmt::layer()
		.without_time()
		.with_target(traced)
		.with_file(traced)
		.with_line_number(traced)
		.with_level(true)
		.with_ansi(true)
		.with_writer(writer);

	let subscriber = Registry::default().with(level(verbose)).with(logs);

	if tracing::subscriber::set_global_default(subscriber).is_err() {
		eprintln!("Unable to register tracing subscriber, logs are disabled");
	}

	std::panic::set_hook(Box::new(|info| {
		let message = match info.payload().downcast_ref::<&str>() {
			Some(msg) => msg.to_string(),
			None => String::from("point crashed"),
		};

		let (file, line) = match info.location() {
			Some(location) => (Some(location.file()), Some(location.line())),
			None => (None, None),
		};

		error!(message, panic = true, panic.file = file, panic.line = line)
	}));

	Guard { _appender: guard }
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn verbosity_raises_level() {
		assert_eq!(level(0), LevelFilter::WARN);
		assert_eq!(level(1), LevelFilter::INFO);
		assert_eq!(level(2), LevelFilter::DEBUG);
		assert_eq!(level(3), LevelFilter::TRACE);
		assert_eq!(level(u8::MAX), LevelFilter::TRACE);
	}
}
