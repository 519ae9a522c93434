mod instrument;
mod point;
mod prompt;

use anyhow::Result;
use clap::{ArgAction, Parser};

#[derive(Parser)]
#[command(
	version,
	name = "point",
	about = "Headless Point",
	long_about = "Creates an ingress that, when accessed, forwards the connection to an external resource transparently.\n\nExample:\n\n\tpoint example.org --to=172.169.1.4:3000"
)]
#[command(help_expected = true, arg_required_else_help = true)]
pub struct App {
	#[arg(help = "increase logging levels", long, short, global = true, action = ArgAction::Count)]
	verbose: u8,
	#[command(flatten)]
	point: point::Args,
}

#[tokio::main]
async fn main() -> Result<()> {
	let app = App::parse();

	let _guard = instrument::init(app.verbose);

	let message = point::run(app.point).await?;
	println!("{message}");

	Ok(())
}
