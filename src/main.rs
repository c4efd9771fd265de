#![allow(missing_docs)]

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "formbind", about = "Schema-driven form data binding tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	Schema(cmd::schema::Args),
	Bind(cmd::bind::Args),
}

fn main() {
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> formbind::form::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Schema(args) => cmd::schema::run(args),
		Commands::Bind(args) => cmd::bind::run(args),
	}
}
