#![allow(missing_docs)]

use clap::{Parser, Subcommand};

mod cmd;
mod logging;

#[derive(Parser)]
#[command(name = "udtchunk", about = "Decode host-owned UDT chunks")]
struct Cli {
	/// Emit debug-level logs on stderr.
	#[arg(long, global = true)]
	verbose: bool,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	Decode(cmd::decode::Args),
	Resolve(cmd::resolve::Args),
}

fn main() {
	let cli = Cli::parse();
	logging::init(cli.verbose);

	if let Err(err) = run(cli.command) {
		eprintln!("error: {err} (sqlstate {})", err.sqlstate());
		std::process::exit(1);
	}
}

fn run(command: Commands) -> udtchunk::input::Result<()> {
	match command {
		Commands::Decode(args) => cmd::decode::run(args),
		Commands::Resolve(args) => cmd::resolve::run(args),
	}
}
