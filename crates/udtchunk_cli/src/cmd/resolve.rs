use std::io;

use serde::Serialize;
use udtchunk::input::{ByteOrderMode, Result};

use crate::cmd::util::{OrderArgs, write_json};

#[derive(clap::Args)]
pub struct Args {
	#[command(flatten)]
	pub orders: OrderArgs,
	/// Print one JSON object instead of text.
	#[arg(long)]
	pub json: bool,
}

#[derive(Serialize)]
struct ModeReport {
	mode: &'static str,
	key: &'static str,
	byte_order: Option<&'static str>,
	error: Option<String>,
}

/// Resolve and print the byte order of both modes.
///
/// Every mode is reported; the first failure becomes the exit status.
pub fn run(args: Args) -> Result<()> {
	let Args { orders, json } = args;
	let resolver = orders.resolver();

	let mut first_err = None;
	let mut reports = Vec::new();
	for mode in ByteOrderMode::ALL {
		let resolved = resolver.resolve(mode);
		reports.push(ModeReport {
			mode: mode.as_str(),
			key: mode.setting_key(),
			byte_order: resolved.as_ref().ok().map(|order| order.as_str()),
			error: resolved.as_ref().err().map(ToString::to_string),
		});
		if let Err(err) = resolved {
			first_err.get_or_insert(err);
		}
	}

	if json {
		write_json(io::stdout().lock(), &reports)?;
	} else {
		for report in &reports {
			match (&report.byte_order, &report.error) {
				(Some(order), _) => println!("{}: {order} ({})", report.mode, report.key),
				(None, Some(err)) => println!("{}: unresolved ({err})", report.mode),
				(None, None) => println!("{}: unresolved", report.mode),
			}
		}
	}

	first_err.map_or(Ok(()), Err)
}
